//! # Cryptographic Primitives
//!
//! Thin, typed wrappers over audited crates. Nothing in here is novel:
//!
//! - **secp256k1 ECDSA** (`k256`) for signing, with RFC 6979 nonces.
//! - **SHA-256 / SHA-512** (`sha2`) for account IDs and the signing hash.
//! - **RIPEMD-160** (`ripemd`) for account IDs.
//!
//! If you find yourself wanting to optimize something in here, don't.

pub mod hash;
pub mod keys;
pub mod signatures;

pub use hash::{account_hash, sha256, sha512_half, sha512_half_multi};
pub use keys::{KeyError, PublicKey, SecpKeypair};
pub use signatures::{sign_digest, verify_digest, EcdsaSignature, SignatureError};
