//! # CLI Interface
//!
//! Defines the command-line argument structure for `ripple-signer` using
//! `clap` derive. Subcommands: `address`, `sign`, `format-amount`, and
//! `version`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::logging::LogFormat;

/// Canonical XRP Ledger payment encoder and signer.
///
/// Builds the exact binary form of a native Payment, signs it with a
/// secp256k1 key and prints the result as JSON on stdout.
#[derive(Parser, Debug)]
#[command(
    name = "ripple-signer",
    about = "Canonical XRP Ledger payment encoder and signer",
    version,
    propagate_version = true
)]
pub struct SignerCli {
    /// Default log filter when `RUST_LOG` is not set.
    #[arg(long, global = true, env = "RIPPLE_SIGNER_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log output format (logs always go to stderr).
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the classic address and public key for a secret key.
    Address(KeyArgs),
    /// Serialize and sign a Payment.
    Sign(SignArgs),
    /// Render a drop count as XRP.
    FormatAmount(FormatAmountArgs),
    /// Print version information and exit.
    Version,
}

/// Where the secret key comes from.
#[derive(Args, Debug)]
pub struct KeyArgs {
    /// Hex-encoded 32-byte secp256k1 secret key.
    ///
    /// **Avoid passing this on the command line.** Prefer `--key-file` or
    /// the environment variable.
    #[arg(long, env = "RIPPLE_SIGNER_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// File containing the hex-encoded secret key. Takes precedence over
    /// `--key` and `RIPPLE_SIGNER_KEY`.
    #[arg(long)]
    pub key_file: Option<PathBuf>,
}

/// Arguments for the `sign` subcommand.
#[derive(Args, Debug)]
pub struct SignArgs {
    #[command(flatten)]
    pub key: KeyArgs,

    /// JSON file with the payment request. Individual flags below override
    /// the fields it contains.
    #[arg(long, short = 'r')]
    pub request: Option<PathBuf>,

    /// Destination classic address.
    #[arg(long)]
    pub destination: Option<String>,

    /// Amount to deliver, in drops.
    #[arg(long)]
    pub amount: Option<u64>,

    /// Fee, in drops.
    #[arg(long)]
    pub fee: Option<u64>,

    /// Account sequence number.
    #[arg(long)]
    pub sequence: Option<u32>,

    /// Destination tag.
    #[arg(long)]
    pub destination_tag: Option<u32>,

    /// Last ledger index the transaction may be included in.
    #[arg(long)]
    pub last_ledger_sequence: Option<u32>,

    /// Extra transaction flags. `tfFullyCanonicalSig` is always added.
    #[arg(long)]
    pub flags: Option<u32>,
}

/// Arguments for the `format-amount` subcommand.
#[derive(Args, Debug)]
pub struct FormatAmountArgs {
    /// Amount in drops.
    pub drops: u64,
}
