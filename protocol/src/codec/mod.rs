//! # Binary Codec
//!
//! The ledger's canonical binary format, restricted to the handful of field
//! types a native Payment needs.
//!
//! ```text
//! field.rs  — the field catalog: (type code, field code) per named field
//! writer.rs — bounded append-only writer over caller-owned storage
//! encode.rs — tag, length prefix and typed field encoders
//! error.rs  — CodecError
//! ```
//!
//! ## Wire layout
//!
//! - Tag: `type << 4 | key` when `key <= 15`, else `type << 4, key`.
//! - Length prefix: one byte below 192, two bytes up to 12480, three bytes
//!   below 918744.
//! - Integers: big-endian.
//! - Native amount: 8 bytes, top bit clear, next bit set, then drops.

pub mod encode;
pub mod error;
pub mod field;
pub mod writer;

pub use encode::{
    encode_native_amount, length_prefix, serialize_account, serialize_account_id,
    serialize_amount, serialize_bytes, serialize_int16, serialize_int32, serialize_length,
    serialize_tag, serialize_vl,
};
pub use error::CodecError;
pub use field::{FieldMapping, FieldType};
pub use writer::BoundedWriter;
