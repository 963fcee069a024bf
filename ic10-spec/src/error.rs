//! # Error Types for IC10

use crate::opcode::Opcode;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Ic10Error {
    // Operand errors
    #[error("Operand is not finite: {0}")]
    NotFinite(f64),

    #[error("Operand {value} does not fit in {bits} bits")]
    OutOfRange { value: f64, bits: u32 },

    #[error("Invalid bit field: start {start}, length {len} (field must lie within 53 bits)")]
    InvalidField { start: i32, len: i32 },

    // Constant encoding errors
    #[error("Cannot pack an empty string")]
    EmptyString,

    #[error("String too long to pack: {len} characters (max 6)")]
    StringTooLong { len: usize },

    #[error("Character {ch:?} is not 7-bit ASCII")]
    NonAscii { ch: char },

    // Instruction errors
    #[error("Unknown mnemonic: {0}")]
    UnknownMnemonic(String),

    #[error("Instruction {opcode} takes {expected} operands, found {found}")]
    OperandCount {
        opcode: Opcode,
        expected: usize,
        found: usize,
    },
}

impl Ic10Error {
    /// Check if this error is an operand fault raised while executing an
    /// instruction (the host turns these into silent no-ops)
    pub fn is_operand_fault(&self) -> bool {
        matches!(
            self,
            Ic10Error::NotFinite(_)
                | Ic10Error::OutOfRange { .. }
                | Ic10Error::InvalidField { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Ic10Error>;
