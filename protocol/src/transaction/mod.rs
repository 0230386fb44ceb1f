//! # Transaction Module
//!
//! Building, serializing, signing and verifying native Payments.
//!
//! ## Architecture
//!
//! ```text
//! types.rs        — TransactionType and Drops
//! builder.rs      — PaymentRequest and its fluent PaymentBuilder
//! serializer.rs   — canonical field-ordered serialization
//! signing.rs      — the two-pass hash-and-sign pipeline
//! verification.rs — checking a SignedTransaction against its request
//! ```
//!
//! ## Lifecycle
//!
//! 1. **Build** a [`PaymentRequest`] with [`PaymentBuilder`].
//! 2. **Sign** it with [`sign_payment`], which yields a [`SignedTransaction`].
//! 3. **Submit** `SignedTransaction::tx_blob_hex()` to a ledger node.
//!
//! ## Design Decisions
//!
//! - Only Payment is supported. There is no generic field map to smuggle
//!   other fields through.
//! - Amounts are integer drops. No floating point anywhere near money.
//! - A signing attempt either returns a complete `SignedTransaction` or an
//!   error. There is no partially-filled result to misread.

pub mod builder;
pub mod serializer;
pub mod signing;
pub mod types;
pub mod verification;

pub use builder::{PaymentBuilder, PaymentRequest};
pub use serializer::{serialize_payment, serialize_to_vec, SigningFields};
pub use signing::{sign_payment, signing_hash, SignedTransaction, SigningError};
pub use types::{format_drops, Drops, TransactionType};
pub use verification::{verify_signed_payment, TransactionError};
