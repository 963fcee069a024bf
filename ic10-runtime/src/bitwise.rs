//! Bitwise instructions
//!
//! Every operand goes through the long codec before any bit manipulation and
//! every result leaves through [`decode`]. A rejected operand fails the whole
//! instruction.

use ic10_spec::{
    decode, parse_int32, parse_long, BitField, Long, Result, LONG_BOUNDARY, LONG_WRAP, MASK_54,
};

/// Shift amount reduced modulo 64 toward zero, so it keeps the sign of `b`.
/// A negative amount shifts the other way.
#[inline]
fn shift_amount(value: f64) -> Result<i32> {
    Ok(parse_int32(value)? % 64)
}

#[inline]
fn shift_left(value: Long, amount: i32) -> Long {
    if amount >= 0 {
        value.wrapping_shl(amount as u32)
    } else {
        value >> amount.unsigned_abs()
    }
}

#[inline]
fn shift_right(value: Long, amount: i32) -> Long {
    if amount >= 0 {
        value >> amount as u32
    } else {
        value.wrapping_shl(amount.unsigned_abs())
    }
}

/// Exact integer part of a raw register value reduced modulo 2^54.
///
/// NaN and the infinities have no integer part and read as 0.
fn register_bits(value: f64) -> Long {
    if !value.is_finite() {
        return 0;
    }

    let truncated = value.trunc();
    let magnitude = if truncated.abs() < LONG_BOUNDARY as f64 {
        truncated.abs() as Long
    } else {
        // At or above 2^53 every double is mantissa * 2^exponent, exponent >= 1
        let bits = truncated.to_bits();
        let exponent = ((bits >> 52) & 0x7FF) as u32 - 1075;
        let mantissa = ((bits & ((1 << 52) - 1)) | (1 << 52)) as Long;
        if exponent >= 54 {
            0
        } else {
            mantissa.wrapping_shl(exponent) & MASK_54
        }
    };

    if truncated < 0.0 {
        (LONG_WRAP - magnitude) & MASK_54
    } else {
        magnitude
    }
}

#[inline]
fn binary(a: f64, b: f64, op: impl FnOnce(Long, Long) -> Long) -> Result<f64> {
    let lhs = parse_long(a, true)?;
    let rhs = parse_long(b, true)?;
    Ok(decode(op(lhs, rhs)))
}

/// `sll r? a b`: logical left shift
pub fn sll(a: f64, b: f64) -> Result<f64> {
    let value = parse_long(a, true)?;
    let shift = shift_amount(b)?;
    Ok(decode(shift_left(value, shift)))
}

/// `sla r? a b`: same as `sll`
pub fn sla(a: f64, b: f64) -> Result<f64> {
    sll(a, b)
}

/// `srl r? a b`: right shift of the unsigned reading of `a`
pub fn srl(a: f64, b: f64) -> Result<f64> {
    let value = parse_long(a, false)?;
    let shift = shift_amount(b)?;
    Ok(decode(shift_right(value, shift)))
}

/// `sra r? a b`: arithmetic right shift, sign preserved
pub fn sra(a: f64, b: f64) -> Result<f64> {
    let value = parse_long(a, true)?;
    let shift = shift_amount(b)?;
    Ok(decode(shift_right(value, shift)))
}

/// `and r? a b`
pub fn and(a: f64, b: f64) -> Result<f64> {
    binary(a, b, |x, y| x & y)
}

/// `or r? a b`
pub fn or(a: f64, b: f64) -> Result<f64> {
    binary(a, b, |x, y| x | y)
}

/// `xor r? a b`
pub fn xor(a: f64, b: f64) -> Result<f64> {
    binary(a, b, |x, y| x ^ y)
}

/// `nor r? a b`: complement of `a | b`
pub fn nor(a: f64, b: f64) -> Result<f64> {
    binary(a, b, |x, y| !(x | y))
}

/// `not r? a`: bitwise complement
pub fn not(a: f64) -> Result<f64> {
    Ok(decode(!parse_long(a, true)?))
}

/// `ext r? a start len`: extract `len` bits of `a` starting at bit `start`.
///
/// The field must lie inside the 53-bit payload.
pub fn ext(a: f64, start: f64, len: f64) -> Result<f64> {
    let field = BitField::parse(start, len)?;
    let value = parse_long(a, false)?;
    Ok(decode(field.extract(value)))
}

/// `ins r? start len value`: insert the low `len` bits of `value` into `x`
/// at bit `start` and return the new register value.
///
/// `x` is the destination register's current content and is taken as-is:
/// only the low bits of its integer part are kept, without operand
/// validation.
pub fn ins(x: f64, start: f64, len: f64, value: f64) -> Result<f64> {
    let field = BitField::parse(start, len)?;
    let inserted = parse_long(value, false)?;
    let base = register_bits(x);
    Ok(decode(field.insert(base, inserted)))
}
