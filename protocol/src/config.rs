//! # Protocol Constants
//!
//! Every magic number the encoder and signer depend on lives here. These are
//! not tunables: they are fixed by the XRP Ledger wire format, and changing
//! any of them produces transactions the network rejects (or worse, a hash
//! that no longer matches what the user approved).

// ---------------------------------------------------------------------------
// Currency
// ---------------------------------------------------------------------------

/// Drops per XRP. One drop is the smallest indivisible unit of the native
/// currency.
pub const DROPS_PER_XRP: u64 = 1_000_000;

/// Number of decimal places used when rendering drops as XRP.
pub const XRP_DECIMALS: usize = 6;

/// Ticker appended to formatted amounts.
pub const XRP_TICKER: &str = "XRP";

/// Largest native amount the signer accepts, in drops (100,000 XRP).
/// Anything above it is rejected rather than clamped.
pub const MAX_DROPS: u64 = 100_000_000_000;

// ---------------------------------------------------------------------------
// Transaction Flags
// ---------------------------------------------------------------------------

/// `tfFullyCanonicalSig`. The signer always emits low-S signatures, so every
/// transaction it produces must declare it.
pub const FLAG_FULLY_CANONICAL_SIG: u32 = 0x8000_0000;

/// Transaction type code for a Payment.
pub const PAYMENT_TYPE_CODE: i16 = 0;

// ---------------------------------------------------------------------------
// Serialization Limits
// ---------------------------------------------------------------------------

/// Capacity of the serialized transaction buffer. A Payment with every
/// optional field set and a maximum-length DER signature needs ~240 bytes,
/// so this leaves plenty of headroom without being unbounded.
pub const MAX_SERIALIZED_TX_SIZE: usize = 1024;

/// Largest length the three-tier length prefix can express (exclusive).
pub const MAX_VL_LENGTH: usize = 918_744;

/// Upper bound of the one-byte length tier (exclusive).
pub const VL_ONE_BYTE_LIMIT: usize = 192;

/// Upper bound of the two-byte length tier (inclusive).
pub const VL_TWO_BYTE_LIMIT: usize = 12_480;

/// Prefix hashed in front of the transaction when computing the signing
/// hash. `"STX\0"` — never part of the emitted blob.
pub const HASH_PREFIX_TX_SIGN: [u8; 4] = *b"STX\0";

// ---------------------------------------------------------------------------
// Key & Address Parameters
// ---------------------------------------------------------------------------

/// secp256k1 secret key length in bytes.
pub const SECRET_KEY_LENGTH: usize = 32;

/// Compressed SEC1 public key length in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 33;

/// Account ID length: RIPEMD-160 output.
pub const ACCOUNT_ID_LENGTH: usize = 20;

/// Version byte prepended to an account ID before base58check encoding.
/// Zero is what makes every classic address start with `r`.
pub const ACCOUNT_ID_VERSION: u8 = 0x00;

/// Maximum length of a rendered classic address, in characters.
pub const MAX_ADDRESS_LENGTH: usize = 35;

/// Signing hash length: the first half of a SHA-512 digest.
pub const SIGNING_HASH_LENGTH: usize = 32;

/// Upper bound on a DER-encoded secp256k1 ECDSA signature.
pub const MAX_DER_SIGNATURE_LENGTH: usize = 72;

/// Base58 alphabet used by the ledger. Note the order: this is *not* the
/// Bitcoin alphabet and must be reproduced character for character.
pub const RIPPLE_ALPHABET: &[u8; 58] = b"rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz";
