//! Error type shared by every encoder in the codec.

use thiserror::Error;

use super::field::FieldType;
use crate::address::AddressError;

/// Errors that can occur while serializing a transaction.
///
/// Every variant is recoverable. The caller discards whatever was written
/// to the buffer and decides whether to try again with different input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// A write would run past the end of the output buffer.
    #[error("buffer overflow: need {needed} bytes, {remaining} remaining")]
    BufferOverflow {
        /// Bytes the failed write needed.
        needed: usize,
        /// Bytes left in the buffer at the time.
        remaining: usize,
    },

    /// Native amount outside `0..=MAX_DROPS`.
    #[error("invalid amount: {0} drops exceeds the native amount limit")]
    InvalidAmount(u64),

    /// Byte string too long for the three-tier length prefix.
    #[error("length {0} cannot be encoded (maximum is 918743)")]
    LengthTooLarge(usize),

    /// An encoder was handed a field mapping of a different type.
    #[error("field type mismatch: expected {expected:?}, got {got:?}")]
    WrongFieldType {
        /// Type the encoder writes.
        expected: FieldType,
        /// Type of the mapping it was given.
        got: FieldType,
    },

    /// An account field's address string did not decode to a 20-byte ID.
    #[error("address decode failed: {0}")]
    AddressDecode(#[from] AddressError),
}
