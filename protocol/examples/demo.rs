//! Walk-through of signing a single payment, step by step.
//!
//! Derives an address from a fixed test key, builds a payment to the
//! genesis account, signs it, and prints every intermediate value so the
//! wire layout can be followed by eye.
//!
//! Run with:
//!   cargo run --example demo

use ripple_signer::address::derive_address;
use ripple_signer::crypto::keys::SecpKeypair;
use ripple_signer::transaction::{sign_payment, verify_signed_payment, Drops, PaymentBuilder};

// ---------------------------------------------------------------------------
// ANSI color constants
// ---------------------------------------------------------------------------

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";

fn step(n: u32, title: &str) {
    println!("\n{BOLD}{CYAN}[{n}]{RESET} {BOLD}{title}{RESET}");
}

fn kv(key: &str, value: impl std::fmt::Display) {
    println!("    {DIM}{key:<16}{RESET} {value}");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Test key only. Never fund it.
    let keypair =
        SecpKeypair::from_hex("4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318")?;

    step(1, "Key and address");
    let public_key = keypair.public_key();
    kv("public key", public_key.to_hex());
    kv("address", derive_address(&public_key));

    step(2, "Payment request");
    let mut payment = PaymentBuilder::new()
        .sequence(1)
        .amount(Drops::from_xrp(25).ok_or("amount overflow")?)
        .fee(Drops(12))
        .destination_tag(7)
        .destination("rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh")
        .build();
    println!("    {}", serde_json::to_string(&payment)?);

    step(3, "Sign");
    let signed = sign_payment(&mut payment, &keypair)?;
    kv("flags", format!("0x{:08X}", payment.flags.unwrap_or(0)));
    kv("signing hash", hex::encode_upper(signed.signing_hash));
    kv("signature", hex::encode_upper(&signed.signature));

    step(4, "Verify");
    verify_signed_payment(&payment, &signed)?;
    kv("status", format!("{GREEN}ok{RESET}"));

    step(5, "Submit this");
    println!("    {}", signed.tx_blob_hex());
    Ok(())
}
