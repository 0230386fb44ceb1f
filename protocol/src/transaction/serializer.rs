//! Canonical serialization of a Payment.
//!
//! Fields are written in the ledger's canonical order, which is fixed by
//! the field catalog and has nothing to do with the order the caller set
//! them in. Only present fields are written. The first failing field stops
//! the pass; whatever is in the buffer at that point is garbage.

use super::builder::PaymentRequest;
use crate::codec::field;
use crate::codec::{
    serialize_account, serialize_amount, serialize_int16, serialize_int32, serialize_vl,
    BoundedWriter, CodecError,
};
use crate::config::MAX_SERIALIZED_TX_SIZE;
use crate::crypto::keys::PublicKey;

/// The signer-supplied parts of a transaction: who is sending, with which
/// key, and (on the final pass) the signature.
#[derive(Debug, Clone, Copy, Default)]
pub struct SigningFields<'a> {
    /// Classic address of the sending account.
    pub source: Option<&'a str>,
    /// Compressed public key for `SigningPubKey`.
    pub public_key: Option<&'a PublicKey>,
    /// DER signature for `TxnSignature`.
    pub signature: Option<&'a [u8]>,
}

/// Write `request` plus the signing fields into `w`.
///
/// Order: TransactionType, Flags, Sequence, DestinationTag,
/// LastLedgerSequence, Amount, Fee, SigningPubKey, TxnSignature, Account,
/// Destination.
pub fn serialize_payment(
    w: &mut BoundedWriter<'_>,
    request: &PaymentRequest,
    signing: &SigningFields<'_>,
) -> Result<(), CodecError> {
    serialize_int16(w, &field::TRANSACTION_TYPE, request.tx_type.code())?;
    if let Some(flags) = request.flags {
        serialize_int32(w, &field::FLAGS, flags)?;
    }
    if let Some(sequence) = request.sequence {
        serialize_int32(w, &field::SEQUENCE, sequence)?;
    }
    if let Some(tag) = request.destination_tag {
        serialize_int32(w, &field::DESTINATION_TAG, tag)?;
    }
    if let Some(ledger) = request.last_ledger_sequence {
        serialize_int32(w, &field::LAST_LEDGER_SEQUENCE, ledger)?;
    }
    if let Some(amount) = request.amount {
        serialize_amount(w, &field::AMOUNT, amount.value())?;
    }
    if let Some(fee) = request.fee {
        serialize_amount(w, &field::FEE, fee.value())?;
    }
    if let Some(public_key) = signing.public_key {
        serialize_vl(w, &field::SIGNING_PUB_KEY, public_key.as_bytes())?;
    }
    if let Some(signature) = signing.signature {
        serialize_vl(w, &field::TXN_SIGNATURE, signature)?;
    }
    if let Some(source) = signing.source {
        serialize_account(w, &field::ACCOUNT, source)?;
    }
    if let Some(destination) = request.destination.as_deref() {
        serialize_account(w, &field::DESTINATION, destination)?;
    }
    Ok(())
}

/// Serialize into a fresh, zeroed buffer of the standard capacity and
/// return the written bytes.
pub fn serialize_to_vec(
    request: &PaymentRequest,
    signing: &SigningFields<'_>,
) -> Result<Vec<u8>, CodecError> {
    let mut storage = [0u8; MAX_SERIALIZED_TX_SIZE];
    let mut w = BoundedWriter::new(&mut storage);
    serialize_payment(&mut w, request, signing)?;
    Ok(w.written().to_vec())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
