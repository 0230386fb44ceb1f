//! Payment requests and the builder that assembles them.
//!
//! A [`PaymentRequest`] is the unsigned description of what the user
//! approved. Every optional field is an `Option`: `None` means the field is
//! left out of the serialized transaction entirely, which is not the same
//! thing as zero.

use serde::{Deserialize, Serialize};

use super::types::{Drops, TransactionType};

// ---------------------------------------------------------------------------
// PaymentRequest
// ---------------------------------------------------------------------------

/// An unsigned native-currency payment.
///
/// The destination is kept as the address string the user saw. It's
/// decoded (and checksum-verified) during serialization, so a mistyped
/// address fails the signing attempt rather than being silently mangled.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Always `Payment`.
    #[serde(default)]
    pub tx_type: TransactionType,

    /// Transaction flags. The signer ORs in `tfFullyCanonicalSig`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<u32>,

    /// Account sequence number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u32>,

    /// Destination tag, used by exchanges to identify the receiving customer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_tag: Option<u32>,

    /// Ledger index after which the transaction can no longer be included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_ledger_sequence: Option<u32>,

    /// Amount delivered to the destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Drops>,

    /// Fee burned by the network.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<Drops>,

    /// Classic `r...` address of the receiver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

impl PaymentRequest {
    /// Shorthand for `PaymentBuilder::new()`.
    pub fn builder() -> PaymentBuilder {
        PaymentBuilder::new()
    }

    /// Set the given flag bits, creating the flags field if it was absent.
    pub fn set_flag(&mut self, flag: u32) {
        self.flags = Some(self.flags.unwrap_or(0) | flag);
    }
}

// ---------------------------------------------------------------------------
// PaymentBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`PaymentRequest`].
///
/// # Usage
///
/// ```
/// use ripple_signer::transaction::{PaymentBuilder, Drops};
///
/// let payment = PaymentBuilder::new()
///     .destination("rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh")
///     .amount(Drops(1_000_000))
///     .fee(Drops(12))
///     .sequence(7)
///     .build();
///
/// assert_eq!(payment.sequence, Some(7));
/// assert_eq!(payment.flags, None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PaymentBuilder {
    request: PaymentRequest,
}

impl PaymentBuilder {
    /// A builder with nothing set. Only `TransactionType` will be emitted
    /// until fields are added.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flags(mut self, flags: u32) -> Self {
        self.request.flags = Some(flags);
        self
    }

    pub fn sequence(mut self, sequence: u32) -> Self {
        self.request.sequence = Some(sequence);
        self
    }

    pub fn destination_tag(mut self, tag: u32) -> Self {
        self.request.destination_tag = Some(tag);
        self
    }

    pub fn last_ledger_sequence(mut self, ledger: u32) -> Self {
        self.request.last_ledger_sequence = Some(ledger);
        self
    }

    /// Sets the payment amount. Range checking happens at serialization.
    pub fn amount(mut self, amount: impl Into<Drops>) -> Self {
        self.request.amount = Some(amount.into());
        self
    }

    pub fn fee(mut self, fee: impl Into<Drops>) -> Self {
        self.request.fee = Some(fee.into());
        self
    }

    /// Sets the receiver's classic address. Validated at serialization.
    pub fn destination(mut self, address: &str) -> Self {
        self.request.destination = Some(address.to_string());
        self
    }

    pub fn build(self) -> PaymentRequest {
        self.request
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_has_no_optional_fields() {
        let p = PaymentBuilder::new().build();
        assert_eq!(p.tx_type, TransactionType::Payment);
        assert_eq!(p, PaymentRequest::default());
        assert!(p.flags.is_none());
        assert!(p.destination.is_none());
    }

    #[test]
    fn builder_sets_every_field() {
        let p = PaymentRequest::builder()
            .flags(0x0002_0000)
            .sequence(5)
            .destination_tag(99)
            .last_ledger_sequence(1_000)
            .amount(250u64)
            .fee(Drops(12))
            .destination("rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh")
            .build();

        assert_eq!(p.flags, Some(0x0002_0000));
        assert_eq!(p.sequence, Some(5));
        assert_eq!(p.destination_tag, Some(99));
        assert_eq!(p.last_ledger_sequence, Some(1_000));
        assert_eq!(p.amount, Some(Drops(250)));
        assert_eq!(p.fee, Some(Drops(12)));
        assert_eq!(
            p.destination.as_deref(),
            Some("rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh")
        );
    }

    #[test]
    fn zero_is_present_not_absent() {
        let p = PaymentBuilder::new().destination_tag(0).build();
        assert_eq!(p.destination_tag, Some(0));
    }

    #[test]
    fn set_flag_creates_missing_flags() {
        let mut p = PaymentRequest::default();
        p.set_flag(0x8000_0000);
        assert_eq!(p.flags, Some(0x8000_0000));
    }

    #[test]
    fn set_flag_preserves_existing_bits() {
        let mut p = PaymentBuilder::new().flags(0x0002_0000).build();
        p.set_flag(0x8000_0000);
        p.set_flag(0x8000_0000);
        assert_eq!(p.flags, Some(0x8002_0000));
    }

    #[test]
    fn json_omits_absent_fields() {
        let p = PaymentBuilder::new().sequence(1).amount(100u64).build();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"tx_type":"Payment","sequence":1,"amount":100}"#);
    }

    #[test]
    fn json_roundtrip_and_defaults() {
        let p: PaymentRequest =
            serde_json::from_str(r#"{"fee":10,"destination":"rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh"}"#)
                .unwrap();
        assert_eq!(p.tx_type, TransactionType::Payment);
        assert_eq!(p.fee, Some(Drops(10)));
        assert!(p.amount.is_none());

        let json = serde_json::to_string(&p).unwrap();
        let back: PaymentRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
