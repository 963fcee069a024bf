//! ASCII packing for `STR("…")` constants
//!
//! Up to six 7-bit characters packed big-endian, one byte each, into a
//! register value.

use crate::error::{Ic10Error, Result};
use crate::value::encode;

/// Maximum number of characters a register value can carry
pub const MAX_PACKED_CHARS: usize = 6;

/// Pack a string of up to six ASCII characters, first character highest.
pub fn pack_ascii6(input: &str) -> Result<f64> {
    if input.is_empty() {
        return Err(Ic10Error::EmptyString);
    }
    let len = input.chars().count();
    if len > MAX_PACKED_CHARS {
        return Err(Ic10Error::StringTooLong { len });
    }

    let mut packed: i64 = 0;
    for ch in input.chars() {
        if !ch.is_ascii() {
            return Err(Ic10Error::NonAscii { ch });
        }
        packed = (packed << 8) | ch as i64;
    }
    Ok(packed as f64)
}

/// Unpack a value produced by [`pack_ascii6`].
///
/// The value is truncated and reinterpreted through the long codec first.
/// Characters are taken from the non-zero high end down to byte 0 (at most
/// eight); values that read as zero or negative unpack to an empty string.
pub fn unpack_ascii6(input: f64, signed: bool) -> String {
    let packed = encode(input as i64, signed);

    let mut byte_count = 0u32;
    let mut rest = packed;
    while rest > 0 && byte_count < 8 {
        byte_count += 1;
        rest >>= 8;
    }

    (0..byte_count)
        .rev()
        .map(|i| char::from(((packed >> (i * 8)) & 0xFF) as u8))
        .collect()
}
