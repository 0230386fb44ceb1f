//! Core value types for payments.
//!
//! Small and `Copy` on purpose: these travel through every serialization
//! pass and there's no reason for any of them to touch the heap.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{DROPS_PER_XRP, PAYMENT_TYPE_CODE, XRP_DECIMALS, XRP_TICKER};

// ---------------------------------------------------------------------------
// TransactionType
// ---------------------------------------------------------------------------

/// The transaction types this signer knows how to encode.
///
/// Only one, and that's the point: a signer that can only produce payments
/// can't be tricked into producing anything else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    #[default]
    Payment,
}

impl TransactionType {
    /// The `TransactionType` field value on the wire.
    pub fn code(self) -> i16 {
        match self {
            Self::Payment => PAYMENT_TYPE_CODE,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Payment => write!(f, "Payment"),
        }
    }
}

// ---------------------------------------------------------------------------
// Drops
// ---------------------------------------------------------------------------

/// An amount of the native currency, in drops.
///
/// Integer only. 1 XRP = 1,000,000 drops and nobody gets to use a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Drops(pub u64);

impl Drops {
    pub fn new(drops: u64) -> Self {
        Self(drops)
    }

    /// Whole XRP, for when a human is typing the number.
    pub fn from_xrp(xrp: u64) -> Option<Self> {
        xrp.checked_mul(DROPS_PER_XRP).map(Self)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// Human-readable XRP with trailing zeros trimmed.
    ///
    /// `Drops(1_500_000)` becomes `"1.5 XRP"`, `Drops(1)` becomes
    /// `"0.000001 XRP"`.
    pub fn display_xrp(self) -> String {
        format_drops(self.0)
    }
}

impl fmt::Display for Drops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} drops", self.0)
    }
}

impl From<u64> for Drops {
    fn from(drops: u64) -> Self {
        Self(drops)
    }
}

/// Render a drop count as a decimal XRP string, e.g. `"12.34 XRP"`.
pub fn format_drops(drops: u64) -> String {
    let whole = drops / DROPS_PER_XRP;
    let frac = drops % DROPS_PER_XRP;
    if frac == 0 {
        return format!("{} {}", whole, XRP_TICKER);
    }
    let frac = format!("{:0>width$}", frac, width = XRP_DECIMALS);
    format!("{}.{} {}", whole, frac.trim_end_matches('0'), XRP_TICKER)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
