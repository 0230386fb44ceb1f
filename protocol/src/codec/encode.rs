//! Tag, length-prefix and typed field encoders.
//!
//! Each `serialize_*` function writes one complete field (tag + value)
//! into a [`BoundedWriter`]. Validation and the capacity check for the
//! whole field happen before the first byte is written: a rejected amount,
//! a mismatched field type, an undecodable address or a field that doesn't
//! fit leaves the writer exactly where it was.

use super::error::CodecError;
use super::field::{FieldMapping, FieldType};
use super::writer::BoundedWriter;
use crate::address::{decode_address, AccountId};
use crate::config::{MAX_DROPS, MAX_VL_LENGTH, VL_ONE_BYTE_LIMIT, VL_TWO_BYTE_LIMIT};

fn expect_type(field: &FieldMapping, expected: FieldType) -> Result<(), CodecError> {
    if field.field_type != expected {
        return Err(CodecError::WrongFieldType {
            expected,
            got: field.field_type,
        });
    }
    Ok(())
}

/// Bytes the tag for `field` occupies on the wire.
fn tag_len(field: &FieldMapping) -> usize {
    if field.key <= 0x0f {
        1
    } else {
        2
    }
}

fn ensure_room(w: &BoundedWriter<'_>, needed: usize) -> Result<(), CodecError> {
    if needed > w.remaining() {
        return Err(CodecError::BufferOverflow {
            needed,
            remaining: w.remaining(),
        });
    }
    Ok(())
}

/// Write a field's tag: one byte `type << 4 | key` for keys up to 15,
/// otherwise `type << 4` followed by the key.
pub fn serialize_tag(w: &mut BoundedWriter<'_>, field: &FieldMapping) -> Result<(), CodecError> {
    let type_nibble = field.field_type.code() << 4;
    if field.key <= 0x0f {
        w.append_byte(type_nibble | field.key)
    } else {
        w.append_slice(&[type_nibble, field.key])
    }
}

/// Compute the length prefix for `n` without writing it.
///
/// Returns the prefix bytes and how many of them are meaningful.
pub fn length_prefix(n: usize) -> Result<([u8; 3], usize), CodecError> {
    if n < VL_ONE_BYTE_LIMIT {
        return Ok(([n as u8, 0, 0], 1));
    }
    if n <= VL_TWO_BYTE_LIMIT {
        let v = n.saturating_sub(193);
        return Ok(([193 + (v >> 8) as u8, (v & 0xff) as u8, 0], 2));
    }
    if n < MAX_VL_LENGTH {
        let v = n - (VL_TWO_BYTE_LIMIT + 1);
        return Ok((
            [241 + (v >> 16) as u8, ((v >> 8) & 0xff) as u8, (v & 0xff) as u8],
            3,
        ));
    }
    Err(CodecError::LengthTooLarge(n))
}

/// Write the three-tier length prefix for a byte string of length `n`.
pub fn serialize_length(w: &mut BoundedWriter<'_>, n: usize) -> Result<(), CodecError> {
    let (prefix, len) = length_prefix(n)?;
    w.append_slice(&prefix[..len])
}

/// Write a length-prefixed byte string (no tag). Prefix and payload are
/// checked against the remaining capacity together.
pub fn serialize_bytes(w: &mut BoundedWriter<'_>, bytes: &[u8]) -> Result<(), CodecError> {
    let (prefix, len) = length_prefix(bytes.len())?;
    ensure_room(w, len + bytes.len())?;
    w.append_slice(&prefix[..len])?;
    w.append_slice(bytes)
}

/// Int16 field: tag + 2 bytes big-endian.
pub fn serialize_int16(
    w: &mut BoundedWriter<'_>,
    field: &FieldMapping,
    value: i16,
) -> Result<(), CodecError> {
    expect_type(field, FieldType::Int16)?;
    ensure_room(w, tag_len(field) + 2)?;
    serialize_tag(w, field)?;
    w.append_slice(&value.to_be_bytes())
}

/// Int32 field: tag + 4 bytes big-endian.
pub fn serialize_int32(
    w: &mut BoundedWriter<'_>,
    field: &FieldMapping,
    value: u32,
) -> Result<(), CodecError> {
    expect_type(field, FieldType::Int32)?;
    ensure_room(w, tag_len(field) + 4)?;
    serialize_tag(w, field)?;
    w.append_slice(&value.to_be_bytes())
}

/// Encode a native amount into its 8-byte wire form.
///
/// Bit 63 clear marks a native (XRP) amount, bit 62 set marks it positive,
/// and the rest is the drop count.
pub fn encode_native_amount(drops: u64) -> Result<[u8; 8], CodecError> {
    if drops > MAX_DROPS {
        return Err(CodecError::InvalidAmount(drops));
    }
    let mut bytes = drops.to_be_bytes();
    bytes[0] &= 0x7f;
    bytes[0] |= 0x40;
    Ok(bytes)
}

/// Amount field (native currency only): tag + 8 bytes.
pub fn serialize_amount(
    w: &mut BoundedWriter<'_>,
    field: &FieldMapping,
    drops: u64,
) -> Result<(), CodecError> {
    expect_type(field, FieldType::Amount)?;
    let encoded = encode_native_amount(drops)?;
    ensure_room(w, tag_len(field) + encoded.len())?;
    serialize_tag(w, field)?;
    w.append_slice(&encoded)
}

/// Variable-length blob field: tag + length prefix + bytes.
pub fn serialize_vl(
    w: &mut BoundedWriter<'_>,
    field: &FieldMapping,
    bytes: &[u8],
) -> Result<(), CodecError> {
    expect_type(field, FieldType::VariableLength)?;
    let (_, prefix_len) = length_prefix(bytes.len())?;
    ensure_room(w, tag_len(field) + prefix_len + bytes.len())?;
    serialize_tag(w, field)?;
    serialize_bytes(w, bytes)
}

/// Account field from an already-decoded account ID.
pub fn serialize_account_id(
    w: &mut BoundedWriter<'_>,
    field: &FieldMapping,
    account: &AccountId,
) -> Result<(), CodecError> {
    expect_type(field, FieldType::Account)?;
    ensure_room(w, tag_len(field) + 1 + account.as_bytes().len())?;
    serialize_tag(w, field)?;
    serialize_bytes(w, account.as_bytes())
}

/// Account field from a classic address string.
///
/// The address is decoded (checksum and all) before anything is written.
/// If it doesn't decode to exactly 20 bytes the whole field fails.
pub fn serialize_account(
    w: &mut BoundedWriter<'_>,
    field: &FieldMapping,
    address: &str,
) -> Result<(), CodecError> {
    expect_type(field, FieldType::Account)?;
    let account = decode_address(address)?;
    serialize_account_id(w, field, &account)
}
