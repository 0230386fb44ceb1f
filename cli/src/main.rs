// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # ripple-signer CLI
//!
//! Entry point for the `ripple-signer` binary. Parses CLI arguments,
//! initializes logging, and dispatches to one of four subcommands:
//!
//! - `address`       — print the address and public key owned by a secret key
//! - `sign`          — serialize and sign a Payment, print the tx blob
//! - `format-amount` — render a drop count as XRP
//! - `version`       — print build version information
//!
//! Results go to stdout as JSON. Logs go to stderr.

mod cli;
mod logging;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::Path;

use ripple_signer::address::derive_address;
use ripple_signer::crypto::keys::SecpKeypair;
use ripple_signer::transaction::{
    format_drops, sign_payment, verify_signed_payment, Drops, PaymentRequest,
};

use cli::{Commands, KeyArgs, SignArgs, SignerCli};

fn main() -> Result<()> {
    let cli = SignerCli::parse();
    logging::init_logging(&cli.log_level, cli.log_format);

    match cli.command {
        Commands::Address(args) => show_address(&args),
        Commands::Sign(args) => sign(args),
        Commands::FormatAmount(args) => {
            println!("{}", format_drops(args.drops));
            Ok(())
        }
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// Output shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct AddressOutput {
    address: String,
    public_key: String,
}

#[derive(Debug, Serialize)]
struct SignOutput {
    tx_blob: String,
    signing_hash: String,
    signature: String,
    source_address: String,
    public_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fee: Option<String>,
    request: PaymentRequest,
}

// ---------------------------------------------------------------------------
// Subcommands
// ---------------------------------------------------------------------------

fn show_address(args: &KeyArgs) -> Result<()> {
    let keypair = load_keypair(args)?;
    let public_key = keypair.public_key();
    let out = AddressOutput {
        address: derive_address(&public_key),
        public_key: public_key.to_hex(),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn sign(args: SignArgs) -> Result<()> {
    let keypair = load_keypair(&args.key)?;
    let mut request = build_request(&args)?;

    tracing::info!(
        destination = request.destination.as_deref().unwrap_or("-"),
        amount = request.amount.map(Drops::value),
        fee = request.fee.map(Drops::value),
        sequence = request.sequence,
        "signing payment"
    );

    let signed = sign_payment(&mut request, &keypair).context("failed to sign payment")?;

    // Re-derive everything from the request before anything leaves the
    // process. A blob that doesn't check out is never printed.
    verify_signed_payment(&request, &signed)
        .context("signed transaction failed self-verification")?;
    tracing::info!(
        source = %signed.source_address,
        len = signed.serialized_tx.len(),
        "payment signed and verified"
    );

    let out = SignOutput {
        tx_blob: signed.tx_blob_hex(),
        signing_hash: hex::encode_upper(signed.signing_hash),
        signature: hex::encode_upper(&signed.signature),
        source_address: signed.source_address.clone(),
        public_key: signed.public_key.to_hex(),
        amount: request.amount.map(Drops::display_xrp),
        fee: request.fee.map(Drops::display_xrp),
        request,
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn print_version() {
    println!("ripple-signer {}", env!("CARGO_PKG_VERSION"));
    println!("rustc         {}", rustc_version());
}

/// Returns the Rust compiler version used to build this binary.
fn rustc_version() -> &'static str {
    option_env!("RUSTC_VERSION").unwrap_or("unknown")
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_keypair(args: &KeyArgs) -> Result<SecpKeypair> {
    let hex_key = match (&args.key_file, &args.key) {
        (Some(path), _) => read_key_file(path)?,
        (None, Some(key)) => key.clone(),
        (None, None) => bail!("no secret key given: use --key-file or RIPPLE_SIGNER_KEY"),
    };
    SecpKeypair::from_hex(&hex_key).context("invalid secret key")
}

fn read_key_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read key file: {}", path.display()))
}

/// Start from the JSON request file (if any), then apply flag overrides.
fn build_request(args: &SignArgs) -> Result<PaymentRequest> {
    let mut request = match &args.request {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read request file: {}", path.display()))?;
            serde_json::from_str::<PaymentRequest>(&raw)
                .with_context(|| format!("invalid payment request in {}", path.display()))?
        }
        None => PaymentRequest::default(),
    };

    if let Some(destination) = &args.destination {
        request.destination = Some(destination.clone());
    }
    if let Some(amount) = args.amount {
        request.amount = Some(Drops(amount));
    }
    if let Some(fee) = args.fee {
        request.fee = Some(Drops(fee));
    }
    if let Some(sequence) = args.sequence {
        request.sequence = Some(sequence);
    }
    if let Some(tag) = args.destination_tag {
        request.destination_tag = Some(tag);
    }
    if let Some(ledger) = args.last_ledger_sequence {
        request.last_ledger_sequence = Some(ledger);
    }
    if let Some(flags) = args.flags {
        request.flags = Some(flags);
    }
    Ok(request)
}
