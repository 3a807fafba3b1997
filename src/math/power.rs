//! Real powers of decimal values.
//!
//! The trading curve needs `b^e` for positive bases and arbitrary decimal
//! exponents.  Integer exponents go through
//! [`MathematicalOps::checked_powu`] on whichever of `b` and `1 / b` is at
//! least one, which is exact up to rounding of the final digit.  Fractional
//! exponents use `exp(e · ln b)` with range
//! reduction on both sides:
//!
//! - `ln b`: `b = m · 2^n` with `m ∈ [1, 2)`, then
//!   `ln m = 2 · atanh((m − 1) / (m + 1))`, whose series argument is at most
//!   `1/3`.
//! - `exp t`: `t = n · ln 2 + r` with `|r| ≤ ln 2 / 2`, a Taylor series for
//!   `e^r`, then an exact scaling by `2^n`.
//!
//! Both series run until the next term no longer changes the sum at the
//! 28-digit decimal resolution, so reserves in the billions keep full
//! precision.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};

use super::CheckedArithmetic;
use crate::error::AmmError;

/// Upper bound on series terms; convergence is reached far earlier for the
/// reduced arguments.
const MAX_SERIES_TERMS: u32 = 96;

/// Binary exponents beyond which `2^n` leaves the decimal range.
const MAX_BINARY_EXPONENT: i64 = 95;
const MIN_BINARY_EXPONENT: i64 = -95;

/// Largest integer exponent evaluated by repeated squaring.
const MAX_INTEGER_EXPONENT: i64 = 1_024;

/// `2 · atanh(z) = 2 · Σ z^(2i+1) / (2i+1)` for `|z| ≤ 1/3`.
fn two_atanh(z: Decimal) -> Result<Decimal, AmmError> {
    let z2 = z.safe_mul(&z)?;
    let mut power = z;
    let mut sum = z;
    let mut denom = Decimal::ONE;
    for _ in 0..MAX_SERIES_TERMS {
        power = power.safe_mul(&z2)?;
        denom = denom.safe_add(&Decimal::TWO)?;
        let next = sum.safe_add(&power.safe_div(&denom)?)?;
        if next == sum {
            break;
        }
        sum = next;
    }
    sum.safe_mul(&Decimal::TWO)
}

/// `ln 2` rounded to the 28-digit decimal resolution.
const LN_2: Decimal =
    Decimal::from_parts(2_860_148_159, 2_180_329_217, 375_755_839, false, 28);

/// Natural logarithm of a positive decimal.
///
/// # Errors
///
/// Returns [`AmmError::Domain`] if `value` is zero or negative.
pub fn ln(value: Decimal) -> Result<Decimal, AmmError> {
    if value <= Decimal::ZERO {
        return Err(AmmError::Domain("logarithm of a non-positive value"));
    }
    if value == Decimal::ONE {
        return Ok(Decimal::ZERO);
    }

    let mut mantissa = value;
    let mut binary_exponent: i64 = 0;
    while mantissa >= Decimal::TWO {
        mantissa = mantissa.safe_div(&Decimal::TWO)?;
        binary_exponent += 1;
    }
    while mantissa < Decimal::ONE {
        mantissa = mantissa.safe_mul(&Decimal::TWO)?;
        binary_exponent -= 1;
    }

    let z = mantissa
        .safe_sub(&Decimal::ONE)?
        .safe_div(&mantissa.safe_add(&Decimal::ONE)?)?;
    let ln_mantissa = two_atanh(z)?;

    Decimal::from(binary_exponent)
        .safe_mul(&LN_2)?
        .safe_add(&ln_mantissa)
}

/// Exponential function `e^value`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] if the result exceeds the decimal range
/// and [`AmmError::Underflow`] if it is smaller than the decimal resolution.
pub fn exp(value: Decimal) -> Result<Decimal, AmmError> {
    if value.is_zero() {
        return Ok(Decimal::ONE);
    }

    let n = value.safe_div(&LN_2)?.round();
    let binary_exponent = n
        .to_i64()
        .ok_or(AmmError::Overflow("exponent outside the decimal range"))?;
    if binary_exponent > MAX_BINARY_EXPONENT {
        return Err(AmmError::Overflow("exponential exceeds the decimal range"));
    }
    if binary_exponent < MIN_BINARY_EXPONENT {
        return Err(AmmError::Underflow(
            "exponential below the decimal resolution",
        ));
    }

    let remainder = value.safe_sub(&n.safe_mul(&LN_2)?)?;
    let mut term = Decimal::ONE;
    let mut sum = Decimal::ONE;
    for i in 1..=MAX_SERIES_TERMS {
        term = term.safe_mul(&remainder)?.safe_div(&Decimal::from(i))?;
        if term.is_zero() {
            break;
        }
        let next = sum.safe_add(&term)?;
        if next == sum {
            break;
        }
        sum = next;
    }

    let scale = Decimal::TWO
        .checked_powu(binary_exponent.unsigned_abs())
        .ok_or(AmmError::Overflow("binary scale exceeds the decimal range"))?;
    let result = if binary_exponent >= 0 {
        sum.safe_mul(&scale)?
    } else {
        sum.safe_div(&scale)?
    };
    if result.is_zero() {
        return Err(AmmError::Underflow(
            "exponential below the decimal resolution",
        ));
    }
    Ok(result)
}

/// Real power `base^exponent` for a non-negative base.
///
/// # Errors
///
/// - [`AmmError::Domain`] if `base` is negative.
/// - [`AmmError::DivisionByZero`] for a zero base with a negative exponent.
/// - [`AmmError::Overflow`] / [`AmmError::Underflow`] if the result leaves
///   the decimal range.
///
/// # Examples
///
/// ```
/// use adaptive_amm::math::pow;
/// use rust_decimal::Decimal;
///
/// assert_eq!(pow(Decimal::from(4), Decimal::from(-2)), Ok(Decimal::new(625, 4)));
///
/// let root = pow(Decimal::from(100), Decimal::new(5, 1)).expect("in range");
/// assert!((root - Decimal::from(10)).abs() < Decimal::new(1, 20));
/// ```
pub fn pow(base: Decimal, exponent: Decimal) -> Result<Decimal, AmmError> {
    if exponent.is_zero() {
        return Ok(Decimal::ONE);
    }
    if base.is_zero() {
        return if exponent.is_sign_positive() {
            Ok(Decimal::ZERO)
        } else {
            Err(AmmError::DivisionByZero)
        };
    }
    if base.is_sign_negative() {
        return Err(AmmError::Domain("real power of a negative base"));
    }
    if base == Decimal::ONE || exponent == Decimal::ONE {
        return Ok(base);
    }

    if exponent.fract().is_zero() {
        if let Some(n) = exponent
            .to_i64()
            .filter(|n| n.abs() <= MAX_INTEGER_EXPONENT)
        {
            return integer_pow(base, n);
        }
    }

    let log = ln(base)?;
    exp(exponent.safe_mul(&log)?)
}

fn integer_pow(base: Decimal, n: i64) -> Result<Decimal, AmmError> {
    if n >= 0 {
        let result = base
            .checked_powu(n.unsigned_abs())
            .ok_or(AmmError::Overflow("integer power exceeds the decimal range"))?;
        if result.is_zero() {
            return Err(AmmError::Underflow(
                "integer power below the decimal resolution",
            ));
        }
        return Ok(result);
    }

    // Negative exponents: raise whichever of `base` and `1 / base` is at
    // least one, so the repeated products keep their significant digits.
    if base < Decimal::ONE {
        let inverse = Decimal::ONE
            .checked_div(base)
            .ok_or(AmmError::Overflow("integer power exceeds the decimal range"))?;
        return inverse
            .checked_powu(n.unsigned_abs())
            .ok_or(AmmError::Overflow("integer power exceeds the decimal range"));
    }
    let magnitude = base
        .checked_powu(n.unsigned_abs())
        .ok_or(AmmError::Underflow("integer power below the decimal resolution"))?;
    let result = Decimal::ONE
        .checked_div(magnitude)
        .ok_or(AmmError::Underflow("integer power below the decimal resolution"))?;
    if result.is_zero() {
        return Err(AmmError::Underflow(
            "integer power below the decimal resolution",
        ));
    }
    Ok(result)
}
