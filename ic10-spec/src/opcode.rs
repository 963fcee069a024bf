//! # IC10 Opcode Definitions
//!
//! One opcode per in-game mnemonic. Names and operand order are a
//! compatibility contract with the game's instruction decoder.
//!
//! ## Instruction Families
//!
//! - Bitwise: SLL, SLA, SRL, SRA, AND, OR, XOR, NOR, NOT, EXT, INS
//! - Math: ABS, ADD, SUB, MUL, DIV, MOD, POW, SQRT, LOG, EXP, MIN, MAX, LERP, MOVE
//! - Trigonometry: SIN, COS, TAN, ASIN, ACOS, ATAN, ATAN2
//! - Rounding: CEIL, FLOOR, ROUND, TRUNC
//! - Comparison: SEQ … SNANZ, SELECT
//! - Random: RAND

use crate::error::Ic10Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Instruction opcode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    // ========== Bitwise ==========
    /// SLL: a << (b mod 64)
    Sll,
    /// SLA: alias of SLL
    Sla,
    /// SRL: unsigned(a) >> (b mod 64)
    Srl,
    /// SRA: signed(a) >> (b mod 64)
    Sra,
    /// AND: a & b
    And,
    /// OR: a | b
    Or,
    /// XOR: a ^ b
    Xor,
    /// NOR: !(a | b)
    Nor,
    /// NOT: !a
    Not,
    /// EXT: a[start..start+len]
    Ext,
    /// INS: x with x[start..start+len] = value
    Ins,

    // ========== Math ==========
    /// ABS: |a|
    Abs,
    /// ADD: a + b
    Add,
    /// SUB: a - b
    Sub,
    /// MUL: a * b
    Mul,
    /// DIV: a / b
    Div,
    /// MOD: a mod b, shifted into [0, b)
    Mod,
    /// POW: a ^ b
    Pow,
    /// SQRT: sqrt(a)
    Sqrt,
    /// LOG: ln(a)
    Log,
    /// EXP: e ^ a
    Exp,
    /// MIN: min(a, b)
    Min,
    /// MAX: max(a, b)
    Max,
    /// LERP: a + (b - a) * clamp(t, 0, 1)
    Lerp,
    /// MOVE: a
    Move,

    // ========== Trigonometry ==========
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    /// ATAN2: angle of (x = b, y = a)
    Atan2,

    // ========== Rounding ==========
    Ceil,
    Floor,
    /// ROUND: nearest integer, ties to even
    Round,
    Trunc,

    // ========== Comparison ==========
    /// SEQ: a == b
    Seq,
    /// SNE: a != b
    Sne,
    /// SLT: a < b
    Slt,
    /// SLE: a <= b
    Sle,
    /// SGT: a > b
    Sgt,
    /// SGE: a >= b
    Sge,
    /// SEQZ: a == 0
    Seqz,
    /// SNEZ: a != 0
    Snez,
    /// SLTZ: a < 0
    Sltz,
    /// SLEZ: a <= 0
    Slez,
    /// SGTZ: a > 0
    Sgtz,
    /// SGEZ: a >= 0
    Sgez,
    /// SAP: a approximately equals b (relative tolerance c)
    Sap,
    /// SAPZ: a approximately zero
    Sapz,
    /// SNA: a not approximately equal to b
    Sna,
    /// SNAZ: a not approximately zero
    Snaz,
    /// SNAN: a is NaN
    Snan,
    /// SNANZ: a is not NaN
    Snanz,
    /// SELECT: a != 0 ? b : c
    Select,

    // ========== Random ==========
    /// RAND: fraction in [0, 1)
    Rand,
}

/// Instruction family
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstructionFamily {
    Bitwise,
    Math,
    Trigonometry,
    Rounding,
    Comparison,
    Random,
}

impl Opcode {
    /// Every opcode, grouped by family
    pub const ALL: [Opcode; 56] = [
        Opcode::Sll,
        Opcode::Sla,
        Opcode::Srl,
        Opcode::Sra,
        Opcode::And,
        Opcode::Or,
        Opcode::Xor,
        Opcode::Nor,
        Opcode::Not,
        Opcode::Ext,
        Opcode::Ins,
        Opcode::Abs,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::Div,
        Opcode::Mod,
        Opcode::Pow,
        Opcode::Sqrt,
        Opcode::Log,
        Opcode::Exp,
        Opcode::Min,
        Opcode::Max,
        Opcode::Lerp,
        Opcode::Move,
        Opcode::Sin,
        Opcode::Cos,
        Opcode::Tan,
        Opcode::Asin,
        Opcode::Acos,
        Opcode::Atan,
        Opcode::Atan2,
        Opcode::Ceil,
        Opcode::Floor,
        Opcode::Round,
        Opcode::Trunc,
        Opcode::Seq,
        Opcode::Sne,
        Opcode::Slt,
        Opcode::Sle,
        Opcode::Sgt,
        Opcode::Sge,
        Opcode::Seqz,
        Opcode::Snez,
        Opcode::Sltz,
        Opcode::Slez,
        Opcode::Sgtz,
        Opcode::Sgez,
        Opcode::Sap,
        Opcode::Sapz,
        Opcode::Sna,
        Opcode::Snaz,
        Opcode::Snan,
        Opcode::Snanz,
        Opcode::Select,
        Opcode::Rand,
    ];

    /// In-game mnemonic
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Sll => "sll",
            Opcode::Sla => "sla",
            Opcode::Srl => "srl",
            Opcode::Sra => "sra",
            Opcode::And => "and",
            Opcode::Or => "or",
            Opcode::Xor => "xor",
            Opcode::Nor => "nor",
            Opcode::Not => "not",
            Opcode::Ext => "ext",
            Opcode::Ins => "ins",
            Opcode::Abs => "abs",
            Opcode::Add => "add",
            Opcode::Sub => "sub",
            Opcode::Mul => "mul",
            Opcode::Div => "div",
            Opcode::Mod => "mod",
            Opcode::Pow => "pow",
            Opcode::Sqrt => "sqrt",
            Opcode::Log => "log",
            Opcode::Exp => "exp",
            Opcode::Min => "min",
            Opcode::Max => "max",
            Opcode::Lerp => "lerp",
            Opcode::Move => "move",
            Opcode::Sin => "sin",
            Opcode::Cos => "cos",
            Opcode::Tan => "tan",
            Opcode::Asin => "asin",
            Opcode::Acos => "acos",
            Opcode::Atan => "atan",
            Opcode::Atan2 => "atan2",
            Opcode::Ceil => "ceil",
            Opcode::Floor => "floor",
            Opcode::Round => "round",
            Opcode::Trunc => "trunc",
            Opcode::Seq => "seq",
            Opcode::Sne => "sne",
            Opcode::Slt => "slt",
            Opcode::Sle => "sle",
            Opcode::Sgt => "sgt",
            Opcode::Sge => "sge",
            Opcode::Seqz => "seqz",
            Opcode::Snez => "snez",
            Opcode::Sltz => "sltz",
            Opcode::Slez => "slez",
            Opcode::Sgtz => "sgtz",
            Opcode::Sgez => "sgez",
            Opcode::Sap => "sap",
            Opcode::Sapz => "sapz",
            Opcode::Sna => "sna",
            Opcode::Snaz => "snaz",
            Opcode::Snan => "snan",
            Opcode::Snanz => "snanz",
            Opcode::Select => "select",
            Opcode::Rand => "rand",
        }
    }

    /// Number of value operands (the destination register is not counted)
    pub const fn arity(self) -> usize {
        match self {
            Opcode::Rand => 0,

            Opcode::Not
            | Opcode::Abs
            | Opcode::Sqrt
            | Opcode::Log
            | Opcode::Exp
            | Opcode::Move
            | Opcode::Sin
            | Opcode::Cos
            | Opcode::Tan
            | Opcode::Asin
            | Opcode::Acos
            | Opcode::Atan
            | Opcode::Ceil
            | Opcode::Floor
            | Opcode::Round
            | Opcode::Trunc
            | Opcode::Seqz
            | Opcode::Snez
            | Opcode::Sltz
            | Opcode::Slez
            | Opcode::Sgtz
            | Opcode::Sgez
            | Opcode::Snan
            | Opcode::Snanz => 1,

            Opcode::Ext | Opcode::Lerp | Opcode::Sap | Opcode::Sna | Opcode::Select => 3,

            Opcode::Ins => 4,

            _ => 2,
        }
    }

    /// Check if this opcode goes through the long codec
    #[inline]
    pub const fn is_bitwise(self) -> bool {
        matches!(self.family(), InstructionFamily::Bitwise)
    }

    /// Get the instruction family
    #[inline]
    pub const fn family(self) -> InstructionFamily {
        match self {
            Opcode::Sll
            | Opcode::Sla
            | Opcode::Srl
            | Opcode::Sra
            | Opcode::And
            | Opcode::Or
            | Opcode::Xor
            | Opcode::Nor
            | Opcode::Not
            | Opcode::Ext
            | Opcode::Ins => InstructionFamily::Bitwise,

            Opcode::Abs
            | Opcode::Add
            | Opcode::Sub
            | Opcode::Mul
            | Opcode::Div
            | Opcode::Mod
            | Opcode::Pow
            | Opcode::Sqrt
            | Opcode::Log
            | Opcode::Exp
            | Opcode::Min
            | Opcode::Max
            | Opcode::Lerp
            | Opcode::Move => InstructionFamily::Math,

            Opcode::Sin
            | Opcode::Cos
            | Opcode::Tan
            | Opcode::Asin
            | Opcode::Acos
            | Opcode::Atan
            | Opcode::Atan2 => InstructionFamily::Trigonometry,

            Opcode::Ceil | Opcode::Floor | Opcode::Round | Opcode::Trunc => {
                InstructionFamily::Rounding
            }

            Opcode::Rand => InstructionFamily::Random,

            _ => InstructionFamily::Comparison,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for Opcode {
    type Err = Ic10Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(s))
            .ok_or_else(|| Ic10Error::UnknownMnemonic(s.to_string()))
    }
}
