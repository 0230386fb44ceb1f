//! # Hashing Utilities
//!
//! The digests the ledger cares about, wrapped so that callers never
//! have to remember which construction goes where:
//!
//! - **SHA-256 → RIPEMD-160** — turns a compressed public key into a 20-byte
//!   account ID. Same construction Bitcoin uses for P2PKH, same reason.
//! - **SHA-512 half** — the signing hash. The ledger takes the first 32 bytes
//!   of a SHA-512 digest rather than using SHA-256, because SHA-512 is faster
//!   on 64-bit hardware and truncation kills length extension.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256, Sha512};

use crate::config::{ACCOUNT_ID_LENGTH, SIGNING_HASH_LENGTH};

/// Compute the SHA-256 hash of the input data as a fixed-size array.
///
/// # Example
///
/// ```
/// use ripple_signer::crypto::sha256;
///
/// let hash = sha256(b"rippled");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Compute `RIPEMD-160(SHA-256(data))`, the account ID construction.
///
/// The input is expected to be a 33-byte compressed public key, but any
/// byte string works; the function does not validate curve points.
pub fn account_hash(data: &[u8]) -> [u8; ACCOUNT_ID_LENGTH] {
    let mut hasher = Ripemd160::new();
    hasher.update(sha256(data));
    let result = hasher.finalize();
    let mut output = [0u8; ACCOUNT_ID_LENGTH];
    output.copy_from_slice(&result);
    output
}

/// First half of `SHA-512(data)`. This is the hash that actually gets signed.
pub fn sha512_half(data: &[u8]) -> [u8; SIGNING_HASH_LENGTH] {
    sha512_half_multi(&[data])
}

/// [`sha512_half`] over several slices fed in order, without concatenating.
///
/// Handy for hashing the `STX\0` prefix and a serialized body that live in
/// separate buffers.
pub fn sha512_half_multi(parts: &[&[u8]]) -> [u8; SIGNING_HASH_LENGTH] {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }
    let digest = hasher.finalize();
    let mut output = [0u8; SIGNING_HASH_LENGTH];
    output.copy_from_slice(&digest[..SIGNING_HASH_LENGTH]);
    output
}
