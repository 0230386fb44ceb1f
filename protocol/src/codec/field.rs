//! The field catalog: every field a Payment can carry, with its wire type
//! and field code.
//!
//! The ledger sorts fields by `(type code, field code)`, so the constants
//! below are listed in exactly the order they appear on the wire.

use std::fmt;

/// Wire type codes for the field kinds this encoder supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum FieldType {
    Int16 = 1,
    Int32 = 2,
    Amount = 6,
    VariableLength = 7,
    Account = 8,
}

impl FieldType {
    /// Numeric type code, as it appears in the high nibble of a tag.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// A field's identity on the wire: its type and its key within that type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldMapping {
    pub field_type: FieldType,
    pub key: u8,
}

impl FieldMapping {
    pub const fn new(field_type: FieldType, key: u8) -> Self {
        Self { field_type, key }
    }

    /// Number of bytes the tag for this field occupies.
    pub const fn tag_len(&self) -> usize {
        if self.key <= 0x0f {
            1
        } else {
            2
        }
    }
}

impl fmt::Display for FieldMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.field_type, self.key)
    }
}

pub const TRANSACTION_TYPE: FieldMapping = FieldMapping::new(FieldType::Int16, 2);
pub const FLAGS: FieldMapping = FieldMapping::new(FieldType::Int32, 2);
pub const SEQUENCE: FieldMapping = FieldMapping::new(FieldType::Int32, 4);
pub const DESTINATION_TAG: FieldMapping = FieldMapping::new(FieldType::Int32, 14);
pub const LAST_LEDGER_SEQUENCE: FieldMapping = FieldMapping::new(FieldType::Int32, 27);
pub const AMOUNT: FieldMapping = FieldMapping::new(FieldType::Amount, 1);
pub const FEE: FieldMapping = FieldMapping::new(FieldType::Amount, 8);
pub const SIGNING_PUB_KEY: FieldMapping = FieldMapping::new(FieldType::VariableLength, 3);
pub const TXN_SIGNATURE: FieldMapping = FieldMapping::new(FieldType::VariableLength, 4);
pub const ACCOUNT: FieldMapping = FieldMapping::new(FieldType::Account, 1);
pub const DESTINATION: FieldMapping = FieldMapping::new(FieldType::Account, 3);

/// Every field in canonical order.
pub const CANONICAL_ORDER: [FieldMapping; 11] = [
    TRANSACTION_TYPE,
    FLAGS,
    SEQUENCE,
    DESTINATION_TAG,
    LAST_LEDGER_SEQUENCE,
    AMOUNT,
    FEE,
    SIGNING_PUB_KEY,
    TXN_SIGNATURE,
    ACCOUNT,
    DESTINATION,
];
