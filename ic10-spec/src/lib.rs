//! # IC10 Register Model
//!
//! Registers hold `f64` values, but the bitwise part of the instruction set
//! treats them as fixed-width integers ("longs"). Only integers below 2^53 in
//! magnitude survive a double round-trip, so every bit operation funnels its
//! result back through [`decode`].
//!
//! ## Key Features
//! - Long codec: `f64` operand -> `i64` long (signed or unsigned-folded) and back
//! - 32-bit operand parsing for shift amounts and bit-field descriptors
//! - 53-bit bit-field descriptors for `ext`/`ins`
//! - Opcode table mirroring the in-game mnemonics
//! - Constant encodings: `STR("…")` (ASCII pack) and `HASH("…")` (CRC32)

pub mod error;
pub mod value;
pub mod field;
pub mod opcode;
pub mod instruction;
pub mod ascii;
pub mod crc;

pub use error::{Ic10Error, Result};
pub use value::{
    decode, encode, encode_signed, encode_unsigned, parse_int32, parse_long, Long,
};
pub use field::BitField;
pub use opcode::{InstructionFamily, Opcode};
pub use instruction::{Instruction, MAX_OPERANDS};
pub use ascii::{pack_ascii6, unpack_ascii6};
pub use crc::hash_string;

/// Magnitude at which a long stops being exactly representable (2^53)
pub const LONG_BOUNDARY: i64 = 1 << 53;

/// Modulus of the unsigned companion space (2^54)
pub const LONG_WRAP: i64 = 1 << 54;

/// Low 53 bits set
pub const MASK_53: i64 = LONG_BOUNDARY - 1;

/// Low 54 bits set
pub const MASK_54: i64 = LONG_WRAP - 1;

/// Width of the addressable bit-field space for `ext`/`ins`
pub const FIELD_BITS: u32 = 53;

/// float.epsilon as used by the approximate comparisons
///
/// Almost every use in the game multiplies it by 8.
pub const FLOAT_EPSILON: f64 = 1e-45;
