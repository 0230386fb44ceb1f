//! End-to-end integration tests for ripple-signer.
//!
//! These tests drive the public API the way a wallet would: load a key,
//! build a payment, sign it, and check the wire bytes against vectors
//! computed independently of this crate.
//!
//! Each test builds its own request. No shared state, no ordering
//! dependencies.

use ripple_signer::address::{decode_address, derive_address, AddressError};
use ripple_signer::codec::CodecError;
use ripple_signer::config::{FLAG_FULLY_CANONICAL_SIG, HASH_PREFIX_TX_SIGN};
use ripple_signer::crypto::hash::sha512_half_multi;
use ripple_signer::crypto::keys::SecpKeypair;
use ripple_signer::crypto::signatures::verify_digest;
use ripple_signer::transaction::{
    serialize_to_vec, sign_payment, verify_signed_payment, Drops, PaymentBuilder, PaymentRequest,
    SigningError, SigningFields,
};

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

const SECRET_HEX: &str = "4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";
const SOURCE: &str = "rEBsWSAtNxGLQ7m4FhwQEaatwAwQFa5gWs";
const GENESIS: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";

/// The signing-pass body (no `STX\0` prefix, no signature) for
/// `reference_payment()` signed by `SECRET_HEX`.
const UNSIGNED_BLOB: &str = "12000022800000002400000001614000000000000064\
68400000000000000a7321024e3b81af9c2234cad09d679ce6035ed1392347ce64ce405f5dcd\
36228a25de6e81149b78039087bd663f20ace711f15be0eaf7d070058314b5f762798a53d543\
a014caf8b297cff8f2f937e8";

const SIGNING_HASH: &str = "f317cc1627c8ef06d7fe6e8d3316bae15fc410a0271ed7b1854a3c3a70e487f7";

/// Bytes of `UNSIGNED_BLOB` up to and including `SigningPubKey`.
const BEFORE_SIGNATURE: usize = 3 + 5 + 5 + 9 + 9 + 2 + 33;

fn keypair() -> SecpKeypair {
    SecpKeypair::from_hex(SECRET_HEX).expect("valid test key")
}

fn reference_payment() -> PaymentRequest {
    PaymentBuilder::new()
        .sequence(1)
        .amount(Drops(100))
        .fee(Drops(10))
        .destination(GENESIS)
        .build()
}

// ---------------------------------------------------------------------------
// 1. Key to Address
// ---------------------------------------------------------------------------

#[test]
fn key_to_address() {
    let kp = keypair();
    let pk = kp.public_key();
    assert_eq!(
        pk.to_hex(),
        "024E3B81AF9C2234CAD09D679CE6035ED1392347CE64CE405F5DCD36228A25DE6E"
    );
    assert_eq!(derive_address(&pk), SOURCE);
    assert_eq!(
        hex::encode(decode_address(SOURCE).unwrap().as_bytes()),
        "9b78039087bd663f20ace711f15be0eaf7d07005"
    );
}

// ---------------------------------------------------------------------------
// 2. Full Signing Lifecycle
// ---------------------------------------------------------------------------

#[test]
fn full_signing_lifecycle() {
    let kp = keypair();
    let mut payment = reference_payment();

    let signed = sign_payment(&mut payment, &kp).unwrap();

    // The request now carries the flag that was signed.
    assert_eq!(payment.flags, Some(FLAG_FULLY_CANONICAL_SIG));
    assert_eq!(signed.source_address, SOURCE);
    assert_eq!(hex::encode(signed.signing_hash), SIGNING_HASH);

    // Signing hash is SHA-512-half over the prefixed signing pass.
    let unsigned = hex::decode(UNSIGNED_BLOB).unwrap();
    assert_eq!(
        sha512_half_multi(&[&HASH_PREFIX_TX_SIGN[..], &unsigned[..]]),
        signed.signing_hash
    );

    // Signature verifies under the source key.
    assert!(verify_digest(&kp.public_key(), &signed.signing_hash, &signed.signature).is_ok());

    // Final blob is the signing pass with TxnSignature spliced in after
    // SigningPubKey.
    let mut expected = unsigned[..BEFORE_SIGNATURE].to_vec();
    expected.push(0x74);
    expected.push(signed.signature.len() as u8);
    expected.extend_from_slice(&signed.signature);
    expected.extend_from_slice(&unsigned[BEFORE_SIGNATURE..]);
    assert_eq!(signed.serialized_tx, expected);

    assert_eq!(verify_signed_payment(&payment, &signed), Ok(()));
}

#[test]
fn signing_pass_matches_reference_blob() {
    let kp = keypair();
    let pk = kp.public_key();
    let mut payment = reference_payment();
    payment.set_flag(FLAG_FULLY_CANONICAL_SIG);

    let blob = serialize_to_vec(
        &payment,
        &SigningFields {
            source: Some(SOURCE),
            public_key: Some(&pk),
            signature: None,
        },
    )
    .unwrap();
    assert_eq!(hex::encode(blob), UNSIGNED_BLOB);
}

// ---------------------------------------------------------------------------
// 3. Determinism
// ---------------------------------------------------------------------------

#[test]
fn same_input_same_output() {
    let a = sign_payment(&mut reference_payment(), &keypair()).unwrap();
    let b = sign_payment(&mut reference_payment(), &keypair()).unwrap();
    assert_eq!(a.serialized_tx, b.serialized_tx);
    assert_eq!(a.signature, b.signature);
}

#[test]
fn different_keys_different_sources() {
    let other = SecpKeypair::from_bytes(&[0x42; 32]).unwrap();
    let a = sign_payment(&mut reference_payment(), &keypair()).unwrap();
    let b = sign_payment(&mut reference_payment(), &other).unwrap();
    assert_ne!(a.source_address, b.source_address);
    assert_ne!(a.signing_hash, b.signing_hash);
}

// ---------------------------------------------------------------------------
// 4. Optional Fields
// ---------------------------------------------------------------------------

#[test]
fn optional_fields_land_in_canonical_order() {
    let mut payment = PaymentBuilder::new()
        .destination(GENESIS)
        .fee(Drops(12))
        .amount(Drops::from_xrp(25).unwrap())
        .last_ledger_sequence(80_000_000)
        .destination_tag(7)
        .sequence(42)
        .build();
    let signed = sign_payment(&mut payment, &keypair()).unwrap();
    let hex = hex::encode(&signed.serialized_tx);

    let order = [
        "120000",
        "2280000000",
        "240000002a",
        "2e00000007",
        "201b04c4b400",
        "6140000000017d7840",
        "68400000000000000c",
        "7321",
        "74",
        "8114",
        "8314",
    ];
    let mut cursor = 0;
    for needle in order {
        let at = hex[cursor..]
            .find(needle)
            .unwrap_or_else(|| panic!("{needle} missing after offset {cursor}"));
        cursor += at + needle.len();
    }
    assert_eq!(verify_signed_payment(&payment, &signed), Ok(()));
}

#[test]
fn request_loaded_from_json_signs_identically() {
    let json = format!(r#"{{"sequence":1,"amount":100,"fee":10,"destination":"{GENESIS}"}}"#);
    let mut from_json: PaymentRequest = serde_json::from_str(&json).unwrap();
    let a = sign_payment(&mut from_json, &keypair()).unwrap();
    let b = sign_payment(&mut reference_payment(), &keypair()).unwrap();
    assert_eq!(a, b);
}

// ---------------------------------------------------------------------------
// 5. Rejections
// ---------------------------------------------------------------------------

#[test]
fn corrupted_destination_is_an_error_not_zeroes() {
    let mut payment = reference_payment();
    payment.destination = Some("rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTr".to_string());
    let err = sign_payment(&mut payment, &keypair()).unwrap_err();
    assert!(matches!(
        err,
        SigningError::Codec(CodecError::AddressDecode(AddressError::Decode(_)))
    ));
}

#[test]
fn amount_over_limit_is_rejected() {
    let mut payment = reference_payment();
    payment.amount = Some(Drops(100_000_000_001));
    assert_eq!(
        sign_payment(&mut payment, &keypair()).unwrap_err(),
        SigningError::Codec(CodecError::InvalidAmount(100_000_000_001))
    );
}

#[test]
fn fee_over_limit_is_rejected() {
    let mut payment = reference_payment();
    payment.fee = Some(Drops(u64::MAX));
    assert!(matches!(
        sign_payment(&mut payment, &keypair()),
        Err(SigningError::Codec(CodecError::InvalidAmount(_)))
    ));
}

#[test]
fn tampered_request_fails_verification() {
    let mut payment = reference_payment();
    let signed = sign_payment(&mut payment, &keypair()).unwrap();
    payment.destination_tag = Some(1);
    assert!(verify_signed_payment(&payment, &signed).is_err());
}
