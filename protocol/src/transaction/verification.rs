//! Checking a signed payment against the request it claims to encode.
//!
//! Cheapest checks first: address derivation, then re-serialization and
//! hashing, then the ECDSA verification.

use thiserror::Error;

use super::builder::PaymentRequest;
use super::serializer::{serialize_to_vec, SigningFields};
use super::signing::{signing_hash, SignedTransaction};
use crate::address::derive_address;
use crate::codec::CodecError;
use crate::crypto::signatures::{verify_digest, SignatureError};

/// Ways a signed payment can fail verification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransactionError {
    /// The source address is not the one owned by the embedded public key.
    #[error("source address {claimed} does not belong to the signing key (expected {derived})")]
    SourceMismatch { claimed: String, derived: String },

    /// The request no longer serializes.
    #[error("request does not serialize: {0}")]
    Codec(#[from] CodecError),

    /// The recorded signing hash doesn't match the request.
    #[error("signing hash mismatch")]
    HashMismatch,

    /// The signature doesn't verify over the signing hash.
    #[error("invalid signature: {0}")]
    InvalidSignature(#[from] SignatureError),

    /// The final blob isn't the request plus the signature.
    #[error("serialized transaction does not match the request")]
    BlobMismatch,
}

/// Verify that `signed` is a valid signature over `request`.
///
/// `request` must be in its post-signing state (canonical flag set), which
/// is what [`super::sign_payment`] leaves behind.
pub fn verify_signed_payment(
    request: &PaymentRequest,
    signed: &SignedTransaction,
) -> Result<(), TransactionError> {
    let derived = derive_address(&signed.public_key);
    if derived != signed.source_address {
        return Err(TransactionError::SourceMismatch {
            claimed: signed.source_address.clone(),
            derived,
        });
    }

    let hash = signing_hash(request, &signed.source_address, &signed.public_key)?;
    if hash != signed.signing_hash {
        return Err(TransactionError::HashMismatch);
    }

    verify_digest(&signed.public_key, &hash, &signed.signature)?;

    let blob = serialize_to_vec(
        request,
        &SigningFields {
            source: Some(signed.source_address.as_str()),
            public_key: Some(&signed.public_key),
            signature: Some(signed.signature.as_slice()),
        },
    )?;
    if blob != signed.serialized_tx {
        return Err(TransactionError::BlobMismatch);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
