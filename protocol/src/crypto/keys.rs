//! # Key Management
//!
//! secp256k1 keypairs for the ledger's classic accounts.
//!
//! Deriving keys from a seed or an HD path is somebody else's job. This
//! module starts from 32 bytes of secret scalar and gives back the two
//! things the signer needs: a signing key and the 33-byte compressed public
//! key that goes into `SigningPubKey` and the account ID.
//!
//! ## Security considerations
//!
//! - Secret scalars are zeroized on drop (k256's `SigningKey` does this).
//! - Key bytes are never logged. `Debug` prints the public key only.

use k256::ecdsa::{SigningKey, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::config::{PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH};

/// Errors that can occur during key operations.
///
/// Deliberately light on detail. Error messages are not a good place to
/// describe what was wrong with somebody's secret key.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("invalid secret key: wrong length or not a valid secp256k1 scalar")]
    InvalidSecretKey,

    #[error("invalid public key: not a compressed secp256k1 point")]
    InvalidPublicKey,
}

/// A secp256k1 keypair.
///
/// Intentionally does not implement `Serialize`. Exporting a secret key
/// should be a conscious call to [`SecpKeypair::secret_key_bytes`], not a
/// side effect of dumping a struct to JSON.
///
/// # Examples
///
/// ```
/// use ripple_signer::crypto::keys::SecpKeypair;
///
/// let kp = SecpKeypair::from_bytes(&[0x11; 32]).unwrap();
/// assert_eq!(kp.public_key().as_bytes().len(), 33);
/// ```
pub struct SecpKeypair {
    signing_key: SigningKey,
}

/// A compressed SEC1 secp256k1 public key: 0x02/0x03 followed by the
/// 32-byte x coordinate.
///
/// Serializes as a bare upper-case hex string. Deserializing checks the
/// point is on the curve, same as [`PublicKey::from_slice`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey {
    bytes: [u8; PUBLIC_KEY_LENGTH],
}

impl SecpKeypair {
    /// Build a keypair from a raw 32-byte secret scalar.
    ///
    /// Fails for zero and for values at or above the curve order.
    pub fn from_bytes(secret: &[u8; SECRET_KEY_LENGTH]) -> Result<Self, KeyError> {
        let signing_key =
            SigningKey::from_slice(secret).map_err(|_| KeyError::InvalidSecretKey)?;
        Ok(Self { signing_key })
    }

    /// Build a keypair from a hex-encoded secret scalar.
    ///
    /// Convenience for the CLI and tests. Real signers should not be
    /// passing secret keys around as strings.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(hex_str.trim()).map_err(|_| KeyError::InvalidSecretKey)?;
        let secret: [u8; SECRET_KEY_LENGTH] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| KeyError::InvalidSecretKey)?;
        Self::from_bytes(&secret)
    }

    /// The compressed public key for this keypair.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_verifying_key(self.signing_key.verifying_key())
    }

    /// Exports the raw secret scalar. Handle with care.
    pub fn secret_key_bytes(&self) -> [u8; SECRET_KEY_LENGTH] {
        let mut out = [0u8; SECRET_KEY_LENGTH];
        out.copy_from_slice(&self.signing_key.to_bytes());
        out
    }

    /// Underlying k256 signing key, for the signature module.
    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }
}

impl Clone for SecpKeypair {
    fn clone(&self) -> Self {
        Self {
            signing_key: self.signing_key.clone(),
        }
    }
}

impl fmt::Debug for SecpKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecpKeypair(pub={})", self.public_key().to_hex())
    }
}

// ---------------------------------------------------------------------------
// PublicKey
// ---------------------------------------------------------------------------

impl PublicKey {
    fn from_verifying_key(key: &VerifyingKey) -> Self {
        let point = key.as_affine().to_encoded_point(true);
        let mut bytes = [0u8; PUBLIC_KEY_LENGTH];
        bytes.copy_from_slice(point.as_bytes());
        Self { bytes }
    }

    /// Parse a compressed public key, checking that it is a point on the curve.
    pub fn from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        if slice.len() != PUBLIC_KEY_LENGTH {
            return Err(KeyError::InvalidPublicKey);
        }
        let key = VerifyingKey::from_sec1_bytes(slice).map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(Self::from_verifying_key(&key))
    }

    /// Parse a hex-encoded compressed public key.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(hex_str.trim()).map_err(|_| KeyError::InvalidPublicKey)?;
        Self::from_slice(&bytes)
    }

    /// Raw compressed bytes, as they appear in `SigningPubKey`.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.bytes
    }

    /// Convert back into a k256 verifying key.
    pub fn to_verifying_key(&self) -> Result<VerifyingKey, KeyError> {
        VerifyingKey::from_sec1_bytes(&self.bytes).map_err(|_| KeyError::InvalidPublicKey)
    }

    /// Upper-case hex, the way the ledger's tooling prints public keys.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.bytes)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for PublicKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        PublicKey::from_slice(&bytes).map_err(serde::de::Error::custom)
    }
}
