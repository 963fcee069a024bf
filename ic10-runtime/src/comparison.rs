//! Set-on-condition instructions
//!
//! Results are register booleans: `1.0` when the condition holds, else `0.0`.

use ic10_spec::FLOAT_EPSILON;

#[inline]
fn flag(condition: bool) -> f64 {
    if condition {
        1.0
    } else {
        0.0
    }
}

/// Tolerance of the approximate comparisons
#[inline]
fn tolerance(a: f64, b: f64, c: f64) -> f64 {
    (c * a.abs().max(b.abs())).max(FLOAT_EPSILON * 8.0)
}

pub fn seq(a: f64, b: f64) -> f64 {
    flag(a == b)
}

pub fn sne(a: f64, b: f64) -> f64 {
    flag(a != b)
}

pub fn slt(a: f64, b: f64) -> f64 {
    flag(a < b)
}

pub fn sle(a: f64, b: f64) -> f64 {
    flag(a <= b)
}

pub fn sgt(a: f64, b: f64) -> f64 {
    flag(a > b)
}

pub fn sge(a: f64, b: f64) -> f64 {
    flag(a >= b)
}

pub fn seqz(a: f64) -> f64 {
    seq(a, 0.0)
}

pub fn snez(a: f64) -> f64 {
    sne(a, 0.0)
}

pub fn sltz(a: f64) -> f64 {
    slt(a, 0.0)
}

pub fn slez(a: f64) -> f64 {
    sle(a, 0.0)
}

pub fn sgtz(a: f64) -> f64 {
    sgt(a, 0.0)
}

pub fn sgez(a: f64) -> f64 {
    sge(a, 0.0)
}

/// `sap r? a b c`: `|a - b| <= max(c * max(|a|, |b|), float.epsilon * 8)`
pub fn sap(a: f64, b: f64, c: f64) -> f64 {
    flag((a - b).abs() <= tolerance(a, b, c))
}

/// `sapz r? a b`: `a` approximately zero with relative tolerance `b`
pub fn sapz(a: f64, b: f64) -> f64 {
    sap(a, 0.0, b)
}

/// `sna r? a b c`: `|a - b| > max(c * max(|a|, |b|), float.epsilon * 8)`
pub fn sna(a: f64, b: f64, c: f64) -> f64 {
    flag((a - b).abs() > tolerance(a, b, c))
}

/// `snaz r? a b`
pub fn snaz(a: f64, b: f64) -> f64 {
    sna(a, 0.0, b)
}

pub fn snan(a: f64) -> f64 {
    flag(a.is_nan())
}

pub fn snanz(a: f64) -> f64 {
    flag(!a.is_nan())
}

/// `select r? a b c`: `b` if `a` is non-zero, else `c`
pub fn select(a: f64, b: f64, c: f64) -> f64 {
    if a != 0.0 {
        b
    } else {
        c
    }
}
