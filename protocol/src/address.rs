//! # Classic Addresses
//!
//! An account on the ledger is a 20-byte ID: `RIPEMD-160(SHA-256(pubkey))`.
//! Humans see it as a base58check string: version byte `0x00`, the 20-byte
//! ID, and a 4-byte double-SHA-256 checksum, rendered with the ledger's own
//! alphabet (which is why every address starts with `r`).
//!
//! Decoding is strict. A bad checksum, a bad character, a foreign version
//! byte or a payload that isn't exactly 20 bytes is an error. There is no
//! "best effort" path that hands back zeroes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::config::{ACCOUNT_ID_LENGTH, ACCOUNT_ID_VERSION, RIPPLE_ALPHABET};
use crate::crypto::hash::account_hash;
use crate::crypto::keys::PublicKey;

const ALPHABET: &bs58::Alphabet = &bs58::Alphabet::new_unwrap(RIPPLE_ALPHABET);

/// Errors from address encoding and decoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    /// Bad alphabet character or checksum mismatch.
    #[error("base58check decode failed: {0}")]
    Decode(String),

    #[error("decoded account ID has {got} bytes, expected {expected}")]
    WrongLength { expected: usize, got: usize },

    #[error("unexpected address version byte 0x{0:02x}")]
    WrongVersion(u8),

    #[error("output buffer too small for encoded address")]
    BufferTooSmall,
}

/// A 20-byte account ID.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId([u8; ACCOUNT_ID_LENGTH]);

impl AccountId {
    /// Wrap raw account ID bytes.
    pub fn from_bytes(bytes: [u8; ACCOUNT_ID_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Derive the account ID owned by a public key.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        Self(account_hash(public_key.as_bytes()))
    }

    pub fn as_bytes(&self) -> &[u8; ACCOUNT_ID_LENGTH] {
        &self.0
    }

    fn versioned(&self) -> [u8; ACCOUNT_ID_LENGTH + 1] {
        let mut payload = [0u8; ACCOUNT_ID_LENGTH + 1];
        payload[0] = ACCOUNT_ID_VERSION;
        payload[1..].copy_from_slice(&self.0);
        payload
    }

    /// Render as a classic `r...` address.
    pub fn to_address(&self) -> String {
        bs58::encode(self.versioned())
            .with_alphabet(ALPHABET)
            .with_check()
            .into_string()
    }

    /// Render into a caller-supplied buffer, returning the number of bytes
    /// written. Fails rather than truncating when the buffer is too small.
    pub fn write_address(&self, out: &mut [u8]) -> Result<usize, AddressError> {
        bs58::encode(self.versioned())
            .with_alphabet(ALPHABET)
            .with_check()
            .onto(out)
            .map_err(|_| AddressError::BufferTooSmall)
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", self.to_address())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_address())
    }
}

impl FromStr for AccountId {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_address(s)
    }
}

impl Serialize for AccountId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_address())
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        decode_address(&s).map_err(serde::de::Error::custom)
    }
}

/// Derive the classic address for a public key.
///
/// # Example
///
/// ```
/// use ripple_signer::address::derive_address;
/// use ripple_signer::crypto::PublicKey;
///
/// let pk = PublicKey::from_hex(
///     "0330E7FC9D56BB25D6893BA3F317AE5BCF33B3291BD63DB32654A313222F7FD020",
/// ).unwrap();
/// assert_eq!(derive_address(&pk), "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh");
/// ```
pub fn derive_address(public_key: &PublicKey) -> String {
    AccountId::from_public_key(public_key).to_address()
}

/// Decode a classic address back into its 20-byte account ID.
pub fn decode_address(address: &str) -> Result<AccountId, AddressError> {
    let decoded = bs58::decode(address)
        .with_alphabet(ALPHABET)
        .with_check(None)
        .into_vec()
        .map_err(|e| AddressError::Decode(e.to_string()))?;

    let (version, payload) = decoded
        .split_first()
        .ok_or(AddressError::WrongLength {
            expected: ACCOUNT_ID_LENGTH,
            got: 0,
        })?;
    if *version != ACCOUNT_ID_VERSION {
        return Err(AddressError::WrongVersion(*version));
    }
    let bytes: [u8; ACCOUNT_ID_LENGTH] =
        payload.try_into().map_err(|_| AddressError::WrongLength {
            expected: ACCOUNT_ID_LENGTH,
            got: payload.len(),
        })?;
    Ok(AccountId(bytes))
}
