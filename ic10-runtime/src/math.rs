//! Arithmetic, trigonometric and rounding instructions
//!
//! Plain `f64` operations; none of these go through the long codec.

/// `abs r? a`
#[inline]
pub fn abs(a: f64) -> f64 {
    a.abs()
}

/// `add r? a b`
#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// `sub r? a b`
#[inline]
pub fn sub(a: f64, b: f64) -> f64 {
    a - b
}

/// `mul r? a b`
#[inline]
pub fn mul(a: f64, b: f64) -> f64 {
    a * b
}

/// `div r? a b`
#[inline]
pub fn div(a: f64, b: f64) -> f64 {
    a / b
}

/// `mod r? a b`: remainder shifted into `[0, b)` for positive `b`
#[inline]
pub fn r#mod(a: f64, b: f64) -> f64 {
    let x = a % b;
    if x < 0.0 {
        x + b
    } else {
        x
    }
}

/// `pow r? a b`
#[inline]
pub fn pow(a: f64, b: f64) -> f64 {
    a.powf(b)
}

/// `sqrt r? a`
#[inline]
pub fn sqrt(a: f64) -> f64 {
    a.sqrt()
}

/// `log r? a`: natural logarithm
#[inline]
pub fn log(a: f64) -> f64 {
    a.ln()
}

/// `exp r? a`
#[inline]
pub fn exp(a: f64) -> f64 {
    a.exp()
}

/// `min r? a b`: NaN if either operand is NaN
#[inline]
pub fn min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// `max r? a b`: NaN if either operand is NaN
#[inline]
pub fn max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

/// `lerp r? a b t`: `t` is clamped to `[0, 1]`
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * min(max(t, 0.0), 1.0)
}

/// `move r? a`
#[inline]
pub fn r#move(a: f64) -> f64 {
    a
}

// ========== Trigonometry ==========

#[inline]
pub fn sin(a: f64) -> f64 {
    a.sin()
}

#[inline]
pub fn cos(a: f64) -> f64 {
    a.cos()
}

#[inline]
pub fn tan(a: f64) -> f64 {
    a.tan()
}

#[inline]
pub fn asin(a: f64) -> f64 {
    a.asin()
}

#[inline]
pub fn acos(a: f64) -> f64 {
    a.acos()
}

#[inline]
pub fn atan(a: f64) -> f64 {
    a.atan()
}

/// `atan2 r? a b`: angle of the point `(x = b, y = a)`
#[inline]
pub fn atan2(a: f64, b: f64) -> f64 {
    a.atan2(b)
}

// ========== Rounding ==========

#[inline]
pub fn ceil(a: f64) -> f64 {
    a.ceil()
}

#[inline]
pub fn floor(a: f64) -> f64 {
    a.floor()
}

/// `round r? a`: nearest integer, ties go to the even neighbour
#[inline]
pub fn round(a: f64) -> f64 {
    a.round_ties_even()
}

#[inline]
pub fn trunc(a: f64) -> f64 {
    a.trunc()
}
