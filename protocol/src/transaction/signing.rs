//! Payment signing.
//!
//! Two serialization passes around one ECDSA operation:
//!
//! 1. Force `tfFullyCanonicalSig` into the flags.
//! 2. Derive the source address from the signer's public key.
//! 3. Serialize with `SigningPubKey` but no signature, behind the `STX\0`
//!    hash prefix.
//! 4. Signing hash = SHA-512-half of that buffer.
//! 5. Sign the hash, DER-encode.
//! 6. Serialize again, without the prefix, with `TxnSignature` attached.
//!
//! Each pass writes into its own freshly zeroed buffer so nothing from the
//! first pass can bleed into the second. Any failure ends the attempt; there
//! are no retries in here.

use thiserror::Error;
use tracing::{debug, warn};

use super::builder::PaymentRequest;
use super::serializer::{serialize_payment, SigningFields};
use crate::address::AccountId;
use crate::codec::{BoundedWriter, CodecError};
use crate::config::{
    FLAG_FULLY_CANONICAL_SIG, HASH_PREFIX_TX_SIGN, MAX_SERIALIZED_TX_SIZE, SIGNING_HASH_LENGTH,
};
use crate::crypto::hash::sha512_half;
use crate::crypto::keys::{PublicKey, SecpKeypair};
use crate::crypto::signatures::{sign_digest, SignatureError};

/// Errors that abort a signing attempt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SigningError {
    /// A serialization pass failed (bad amount, bad address, overflow...).
    #[error("serialization failed: {0}")]
    Codec(#[from] CodecError),

    /// The ECDSA backend failed. The transaction is not signed.
    #[error("signing failed: {0}")]
    Signature(#[from] SignatureError),
}

/// A fully signed payment, ready to submit.
///
/// Only ever constructed when every step succeeded, so there is no
/// "half-signed" state to check for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    /// Final wire blob, including `TxnSignature`.
    pub serialized_tx: Vec<u8>,
    /// DER-encoded signature embedded in the blob.
    pub signature: Vec<u8>,
    /// The 32-byte hash that was signed.
    pub signing_hash: [u8; SIGNING_HASH_LENGTH],
    /// Classic address of the sending account.
    pub source_address: String,
    /// The key that signed.
    pub public_key: PublicKey,
}

impl SignedTransaction {
    /// Upper-case hex of the final blob, the form `submit` expects.
    pub fn tx_blob_hex(&self) -> String {
        hex::encode_upper(&self.serialized_tx)
    }
}

/// Compute the signing hash for `request` as sent from `source` with
/// `public_key`.
///
/// The request is used as-is; callers that want the canonical-signature
/// flag must set it first (as [`sign_payment`] does).
pub fn signing_hash(
    request: &PaymentRequest,
    source: &str,
    public_key: &PublicKey,
) -> Result<[u8; SIGNING_HASH_LENGTH], CodecError> {
    let mut storage = [0u8; MAX_SERIALIZED_TX_SIZE];
    let mut w = BoundedWriter::new(&mut storage);
    w.append_slice(&HASH_PREFIX_TX_SIGN)?;
    let signing = SigningFields {
        source: Some(source),
        public_key: Some(public_key),
        signature: None,
    };
    serialize_payment(&mut w, request, &signing)?;
    debug!(len = w.position(), "hashing prefixed signing blob");
    Ok(sha512_half(w.written()))
}

/// Sign a payment with `keypair`.
///
/// `request.flags` gains `tfFullyCanonicalSig` as a side effect, so the
/// request afterwards describes exactly what was signed.
///
/// # Example
///
/// ```
/// use ripple_signer::crypto::keys::SecpKeypair;
/// use ripple_signer::transaction::{sign_payment, Drops, PaymentBuilder};
///
/// let keypair = SecpKeypair::from_bytes(&[0x11; 32]).unwrap();
/// let mut payment = PaymentBuilder::new()
///     .sequence(1)
///     .amount(Drops(100))
///     .fee(Drops(10))
///     .destination("rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh")
///     .build();
///
/// let signed = sign_payment(&mut payment, &keypair).unwrap();
/// assert_eq!(payment.flags, Some(0x8000_0000));
/// assert!(!signed.serialized_tx.is_empty());
/// ```
pub fn sign_payment(
    request: &mut PaymentRequest,
    keypair: &SecpKeypair,
) -> Result<SignedTransaction, SigningError> {
    request.set_flag(FLAG_FULLY_CANONICAL_SIG);

    let public_key = keypair.public_key();
    let source_address = AccountId::from_public_key(&public_key).to_address();
    debug!(source = %source_address, "derived source address");

    let hash = signing_hash(request, &source_address, &public_key).map_err(|e| {
        warn!(error = %e, "signing pass failed");
        e
    })?;

    let signature = sign_digest(keypair, &hash).map_err(|e| {
        warn!(error = %e, "ECDSA signing failed");
        e
    })?;
    debug!(der_len = signature.der().len(), "transaction hash signed");

    let mut storage = [0u8; MAX_SERIALIZED_TX_SIZE];
    let mut w = BoundedWriter::new(&mut storage);
    let signing = SigningFields {
        source: Some(source_address.as_str()),
        public_key: Some(&public_key),
        signature: Some(signature.der()),
    };
    serialize_payment(&mut w, request, &signing).map_err(|e| {
        warn!(error = %e, "final pass failed");
        e
    })?;
    let serialized_tx = w.written().to_vec();
    debug!(len = serialized_tx.len(), "signed transaction serialized");

    Ok(SignedTransaction {
        serialized_tx,
        signature: signature.der().to_vec(),
        signing_hash: hash,
        source_address,
        public_key,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::AddressError;
    use crate::crypto::signatures::verify_digest;
    use crate::transaction::builder::PaymentBuilder;
    use crate::transaction::types::Drops;

    const SECRET_HEX: &str = "4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";
    const DEST: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";

    fn keypair() -> SecpKeypair {
        SecpKeypair::from_hex(SECRET_HEX).unwrap()
    }

    fn payment() -> PaymentRequest {
        PaymentBuilder::new()
            .sequence(1)
            .amount(Drops(100))
            .fee(Drops(10))
            .destination(DEST)
            .build()
    }

    #[test]
    fn sign_sets_canonical_flag() {
        let mut p = payment();
        assert!(p.flags.is_none());
        sign_payment(&mut p, &keypair()).unwrap();
        assert_eq!(p.flags, Some(FLAG_FULLY_CANONICAL_SIG));
    }

    #[test]
    fn sign_preserves_caller_flags() {
        let mut p = payment();
        p.flags = Some(0x0002_0000);
        sign_payment(&mut p, &keypair()).unwrap();
        assert_eq!(p.flags, Some(0x8002_0000));
    }

    #[test]
    fn source_address_is_derived_from_key() {
        let signed = sign_payment(&mut payment(), &keypair()).unwrap();
        assert_eq!(signed.source_address, "rEBsWSAtNxGLQ7m4FhwQEaatwAwQFa5gWs");
    }

    #[test]
    fn signing_hash_matches_reference() {
        let signed = sign_payment(&mut payment(), &keypair()).unwrap();
        assert_eq!(
            hex::encode(signed.signing_hash),
            "f317cc1627c8ef06d7fe6e8d3316bae15fc410a0271ed7b1854a3c3a70e487f7"
        );
    }

    #[test]
    fn signature_verifies() {
        let kp = keypair();
        let signed = sign_payment(&mut payment(), &kp).unwrap();
        assert!(verify_digest(&kp.public_key(), &signed.signing_hash, &signed.signature).is_ok());
    }

    #[test]
    fn final_blob_embeds_signature_and_omits_prefix() {
        let signed = sign_payment(&mut payment(), &keypair()).unwrap();
        assert_eq!(&signed.serialized_tx[..3], &[0x12, 0x00, 0x00]);
        let needle: Vec<u8> = [0x74, signed.signature.len() as u8]
            .iter()
            .chain(signed.signature.iter())
            .copied()
            .collect();
        assert!(signed
            .serialized_tx
            .windows(needle.len())
            .any(|w| w == needle.as_slice()));
        assert!(!signed.serialized_tx.starts_with(b"STX"));
    }

    #[test]
    fn signing_is_deterministic() {
        let a = sign_payment(&mut payment(), &keypair()).unwrap();
        let b = sign_payment(&mut payment(), &keypair()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn resigning_an_already_flagged_request_is_stable() {
        let mut p = payment();
        let first = sign_payment(&mut p, &keypair()).unwrap();
        let second = sign_payment(&mut p, &keypair()).unwrap();
        assert_eq!(first.serialized_tx, second.serialized_tx);
    }

    #[test]
    fn bad_destination_aborts_signing() {
        let mut p = payment();
        p.destination = Some("rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTr".to_string());
        let err = sign_payment(&mut p, &keypair()).unwrap_err();
        assert!(matches!(
            err,
            SigningError::Codec(CodecError::AddressDecode(AddressError::Decode(_)))
        ));
    }

    #[test]
    fn invalid_amount_aborts_signing() {
        let mut p = payment();
        p.amount = Some(Drops(100_000_000_001));
        assert_eq!(
            sign_payment(&mut p, &keypair()).unwrap_err(),
            SigningError::Codec(CodecError::InvalidAmount(100_000_000_001))
        );
    }

    #[test]
    fn backend_failure_surfaces_as_signature_error() {
        let err: SigningError = SignatureError::SigningFailed("nonce exhausted".into()).into();
        assert!(matches!(
            err,
            SigningError::Signature(SignatureError::SigningFailed(_))
        ));
        assert_eq!(
            err.to_string(),
            "signing failed: ECDSA signing failed: nonce exhausted"
        );
    }

    #[test]
    fn tx_blob_hex_is_uppercase() {
        let signed = sign_payment(&mut payment(), &keypair()).unwrap();
        let hex = signed.tx_blob_hex();
        assert!(hex.starts_with("120000228000000024"));
        assert_eq!(hex, hex.to_uppercase());
    }
}
