//! # Digital Signatures
//!
//! secp256k1 ECDSA over a precomputed 32-byte digest.
//!
//! The ledger never signs a message directly. It signs `SHA-512-half` of
//! the prefixed transaction, which the caller has already computed, so
//! everything here works on prehashes.
//!
//! ## Canonical form
//!
//! The network only accepts signatures with a low S value when the
//! transaction sets `tfFullyCanonicalSig`, and the signer always sets it.
//! k256 already normalizes S; we normalize again on the way out so the
//! guarantee doesn't rest on an upstream implementation detail.
//! Nonces follow RFC 6979, so the same key and digest always produce the
//! same signature.

use k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use k256::ecdsa::Signature;
use thiserror::Error;

use super::keys::{PublicKey, SecpKeypair};
use crate::config::SIGNING_HASH_LENGTH;

/// Errors during signature operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// The ECDSA backend refused to sign. Never swallowed.
    #[error("ECDSA signing failed: {0}")]
    SigningFailed(String),

    #[error("signature verification failed")]
    VerificationFailed,

    #[error("invalid DER signature encoding")]
    InvalidDer,

    #[error("invalid public key")]
    InvalidPublicKey,
}

/// A canonical secp256k1 signature in both encodings the signer needs.
#[derive(Clone, PartialEq, Eq)]
pub struct EcdsaSignature {
    raw: [u8; 64],
    der: Vec<u8>,
}

impl EcdsaSignature {
    fn from_k256(signature: &Signature) -> Self {
        let mut raw = [0u8; 64];
        raw.copy_from_slice(&signature.to_bytes());
        Self {
            raw,
            der: signature.to_der().as_bytes().to_vec(),
        }
    }

    /// Fixed-width `r || s`, 64 bytes.
    pub fn raw(&self) -> &[u8; 64] {
        &self.raw
    }

    /// DER encoding, as embedded in `TxnSignature`. 70–72 bytes in practice.
    pub fn der(&self) -> &[u8] {
        &self.der
    }

    /// Upper-case hex of the DER encoding.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(&self.der)
    }
}

impl std::fmt::Debug for EcdsaSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EcdsaSignature({})", self.to_hex())
    }
}

/// Sign a 32-byte digest with the keypair's secret scalar.
///
/// The result is deterministic (RFC 6979) and low-S.
pub fn sign_digest(
    keypair: &SecpKeypair,
    digest: &[u8; SIGNING_HASH_LENGTH],
) -> Result<EcdsaSignature, SignatureError> {
    let signature: Signature = keypair
        .signing_key()
        .sign_prehash(digest)
        .map_err(|e| SignatureError::SigningFailed(e.to_string()))?;
    let signature = signature.normalize_s().unwrap_or(signature);
    Ok(EcdsaSignature::from_k256(&signature))
}

/// Verify a DER-encoded signature over a 32-byte digest.
///
/// Rejects high-S signatures, matching what the network enforces for
/// fully-canonical transactions.
pub fn verify_digest(
    public_key: &PublicKey,
    digest: &[u8; SIGNING_HASH_LENGTH],
    der_signature: &[u8],
) -> Result<(), SignatureError> {
    let verifying_key = public_key
        .to_verifying_key()
        .map_err(|_| SignatureError::InvalidPublicKey)?;
    let signature = Signature::from_der(der_signature).map_err(|_| SignatureError::InvalidDer)?;
    if signature.normalize_s().is_some() {
        return Err(SignatureError::VerificationFailed);
    }
    verifying_key
        .verify_prehash(digest, &signature)
        .map_err(|_| SignatureError::VerificationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::hash::sha512_half;

    fn keypair(byte: u8) -> SecpKeypair {
        SecpKeypair::from_bytes(&[byte; 32]).unwrap()
    }

    #[test]
    fn test_sign_and_verify() {
        let kp = keypair(0x11);
        let digest = sha512_half(b"pay rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh");
        let sig = sign_digest(&kp, &digest).unwrap();
        assert!(verify_digest(&kp.public_key(), &digest, sig.der()).is_ok());
    }

    #[test]
    fn test_wrong_digest_fails() {
        let kp = keypair(0x11);
        let sig = sign_digest(&kp, &sha512_half(b"right")).unwrap();
        assert_eq!(
            verify_digest(&kp.public_key(), &sha512_half(b"wrong"), sig.der()),
            Err(SignatureError::VerificationFailed)
        );
    }

    #[test]
    fn test_wrong_key_fails() {
        let digest = sha512_half(b"same digest");
        let sig = sign_digest(&keypair(0x11), &digest).unwrap();
        assert!(verify_digest(&keypair(0x22).public_key(), &digest, sig.der()).is_err());
    }

    #[test]
    fn test_signatures_are_deterministic() {
        let kp = keypair(0x33);
        let digest = sha512_half(b"rfc6979");
        let a = sign_digest(&kp, &digest).unwrap();
        let b = sign_digest(&kp, &digest).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_signatures_are_low_s() {
        let kp = keypair(0x44);
        for i in 0u8..16 {
            let digest = sha512_half(&[i]);
            let sig = sign_digest(&kp, &digest).unwrap();
            let parsed = Signature::from_der(sig.der()).unwrap();
            assert!(parsed.normalize_s().is_none(), "high-S signature for input {i}");
        }
    }

    #[test]
    fn test_der_matches_raw() {
        let kp = keypair(0x55);
        let sig = sign_digest(&kp, &sha512_half(b"der")).unwrap();
        let from_der = Signature::from_der(sig.der()).unwrap();
        assert_eq!(&from_der.to_bytes()[..], &sig.raw()[..]);
        assert_eq!(sig.der()[0], 0x30);
        assert!(sig.der().len() <= crate::config::MAX_DER_SIGNATURE_LENGTH);
    }

    #[test]
    fn test_garbage_der_rejected() {
        let kp = keypair(0x11);
        let digest = sha512_half(b"x");
        assert_eq!(
            verify_digest(&kp.public_key(), &digest, &[0x30, 0x01, 0x00]),
            Err(SignatureError::InvalidDer)
        );
    }
}
