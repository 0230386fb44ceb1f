// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # ripple-signer — Core Library
//!
//! A canonical binary encoder and secp256k1 signer for XRP Ledger payments,
//! built for signers that must sign exactly what the user was shown.
//!
//! Bit-exactness is the whole job. Get one tag byte, one length prefix or
//! one amount bit wrong and either the network rejects the transaction or,
//! worse, the hash that gets signed is not the hash of what was displayed.
//!
//! ## Architecture
//!
//! Leaves first:
//!
//! - **config** — Wire-format constants. Not tunables.
//! - **crypto** — SHA-256/512, RIPEMD-160 and secp256k1 ECDSA wrappers.
//! - **address** — Account IDs and the ledger's base58check addresses.
//! - **codec** — Field catalog, bounded writer, length prefix, typed encoders.
//! - **transaction** — Payment requests, canonical serialization, signing.
//!
//! ## Design Philosophy
//!
//! 1. Every write is bounded and every failure is a returned error. A
//!    hardware signer does not get to panic on bad input.
//! 2. A malformed address is an error, never twenty zero bytes.
//! 3. Nothing here allocates on the serialization path except the final
//!    output `Vec`.
//!
//! ```
//! use ripple_signer::crypto::keys::SecpKeypair;
//! use ripple_signer::transaction::{sign_payment, verify_signed_payment, Drops, PaymentBuilder};
//!
//! let keypair = SecpKeypair::from_bytes(&[0x11; 32]).unwrap();
//! let mut payment = PaymentBuilder::new()
//!     .sequence(1)
//!     .amount(Drops(100))
//!     .fee(Drops(10))
//!     .destination("rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh")
//!     .build();
//!
//! let signed = sign_payment(&mut payment, &keypair).unwrap();
//! assert!(verify_signed_payment(&payment, &signed).is_ok());
//! ```

pub mod address;
pub mod codec;
pub mod config;
pub mod crypto;
pub mod transaction;
