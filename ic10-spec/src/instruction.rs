//! IC10 instruction with resolved operand values
//!
//! Operands are register values already read by the host, in the in-game
//! operand order. The destination register is not part of the instruction.

use crate::error::{Ic10Error, Result};
use crate::opcode::Opcode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest operand count of any opcode (`ins`)
pub const MAX_OPERANDS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    opcode: Opcode,
    operands: [f64; MAX_OPERANDS],
}

impl Instruction {
    /// Build an instruction, checking the operand count against the opcode
    pub fn new(opcode: Opcode, operands: &[f64]) -> Result<Self> {
        let expected = opcode.arity();
        if operands.len() != expected {
            return Err(Ic10Error::OperandCount {
                opcode,
                expected,
                found: operands.len(),
            });
        }

        let mut slots = [0.0; MAX_OPERANDS];
        slots[..expected].copy_from_slice(operands);
        Ok(Self {
            opcode,
            operands: slots,
        })
    }

    #[inline]
    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// Operand values, exactly `opcode().arity()` of them
    #[inline]
    pub fn operands(&self) -> &[f64] {
        &self.operands[..self.opcode.arity()]
    }

    /// Operand `index`, or 0.0 past the arity
    #[inline]
    pub fn operand(&self, index: usize) -> f64 {
        self.operands().get(index).copied().unwrap_or(0.0)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.opcode)?;
        for value in self.operands() {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}
