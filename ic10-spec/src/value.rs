//! # Long Codec
//!
//! Converts register operands (`f64`) into the long domain the bitwise
//! instructions operate on, and decodes longs back into register values.
//!
//! A long is an `i64`. The same bit pattern has two readings:
//!
//! - **signed**: the value as-is
//! - **unsigned**: negative values folded into `[0, 2^54)` by adding 2^54
//!
//! In both readings a magnitude of exactly 2^53 is the boundary-wrap case and
//! becomes `0`.
//!
//! Every bitwise instruction leaves through [`decode`], which keeps the low
//! 54 bits and maps the upper half of that space onto negative values, so the
//! result is always exactly representable in a register.

use crate::error::{Ic10Error, Result};
use crate::{LONG_BOUNDARY, LONG_WRAP, MASK_54};

/// Internal fixed-width integer domain of the bitwise instructions
pub type Long = i64;

/// 2^63, the magnitude limit of a parsed long
const LONG_LIMIT: f64 = 9_223_372_036_854_775_808.0;

const INT_MIN: f64 = i32::MIN as f64;
const INT_MAX: f64 = i32::MAX as f64;

/// Parse a register operand as a long.
///
/// - `NaN` parses as `0`
/// - `±inf` is rejected
/// - otherwise the value is truncated toward zero; magnitudes above 2^63 are
///   rejected, a magnitude of exactly 2^63 wraps to `0`
///
/// With `signed == false` the result is folded with [`encode_unsigned`].
pub fn parse_long(value: f64, signed: bool) -> Result<Long> {
    if value.is_nan() {
        return Ok(0);
    }
    if value.is_infinite() {
        return Err(Ic10Error::NotFinite(value));
    }

    let truncated = value.trunc();
    let magnitude = truncated.abs();
    if magnitude > LONG_LIMIT {
        return Err(Ic10Error::OutOfRange { value, bits: 64 });
    }
    if magnitude == LONG_LIMIT {
        // -2^63 negates back to itself in two's complement
        return Ok(0);
    }

    Ok(encode(truncated as i64, signed))
}

/// Parse a register operand as a 32-bit integer (shift amounts, field
/// descriptors). `NaN` parses as `0`; the valid range is exactly
/// `[-2^31, 2^31 - 1]` after truncation toward zero.
pub fn parse_int32(value: f64) -> Result<i32> {
    if value.is_nan() {
        return Ok(0);
    }
    if value.is_infinite() {
        return Err(Ic10Error::NotFinite(value));
    }

    let truncated = value.trunc();
    if !(INT_MIN..=INT_MAX).contains(&truncated) {
        return Err(Ic10Error::OutOfRange { value, bits: 32 });
    }
    Ok(truncated as i32)
}

/// Signed reading: unchanged except at the ±2^53 boundary, which wraps to 0.
#[inline]
pub fn encode_signed(value: Long) -> Long {
    if value.unsigned_abs() == LONG_BOUNDARY as u64 {
        0
    } else {
        value
    }
}

/// Unsigned reading: negative values fold into `[0, 2^54)`; -2^53 wraps to 0.
#[inline]
pub fn encode_unsigned(value: Long) -> Long {
    if value == -LONG_BOUNDARY {
        0
    } else if value < 0 {
        value + LONG_WRAP
    } else {
        value
    }
}

/// Reinterpret a long as signed or unsigned
#[inline]
pub fn encode(value: Long, signed: bool) -> Long {
    if signed {
        encode_signed(value)
    } else {
        encode_unsigned(value)
    }
}

/// Decode a long into a register value.
///
/// Keeps the low 54 bits; values at or above 2^53 come back negative.
#[inline]
pub fn decode(long: Long) -> f64 {
    let masked = long & MASK_54;
    if masked < LONG_BOUNDARY {
        masked as f64
    } else {
        (masked - LONG_WRAP) as f64
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_signed_round_trip(n in 0i64..LONG_BOUNDARY) {
            prop_assert_eq!(decode(encode(n, true)), n as f64);
            prop_assert_eq!(decode(encode(-n, true)), -(n as f64));
        }

        #[test]
        fn test_unsigned_round_trip(n in 0i64..LONG_BOUNDARY) {
            prop_assert_eq!(decode(encode(n, false)), n as f64);
            prop_assert_eq!(decode(encode(-n, false)), -(n as f64));
        }

        #[test]
        fn test_unsigned_fold_is_non_negative(n in -LONG_BOUNDARY..LONG_BOUNDARY) {
            let folded = encode_unsigned(n);
            prop_assert!((0..LONG_WRAP).contains(&folded));
        }

        #[test]
        fn test_parse_long_matches_decode(n in -(LONG_BOUNDARY - 1)..LONG_BOUNDARY) {
            let value = n as f64;
            prop_assert_eq!(parse_long(value, true).map(decode), Ok(value));
            prop_assert_eq!(parse_long(value, false).map(decode), Ok(value));
        }
    }
}
