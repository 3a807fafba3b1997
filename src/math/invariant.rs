//! Power-mean invariant and the trading curve it defines.
//!
//! For a curvature `q ≠ 0` the pool keeps
//!
//! ```text
//! x^q + y^q = k^q
//! ```
//!
//! and for `q → 0` the limit `x · y = k` is used instead of the general
//! formula.  All functions here are pure; the pool composes them.
//!
//! Raw reserves are never raised to `q`: at `|q| ≥ 2` and reserves near
//! `1e9` the powers fall below the 28-digit decimal resolution.  Both
//! directions factor out a reserve and only raise ratios bounded by one:
//!
//! ```text
//! k = a · (1 + (b / a)^q)^(1/q)      a chosen so that (b / a)^q ≤ 1
//! y = k · (1 − (x / k)^q)^(1/q)
//! ```

use core::iter::FusedIterator;

use rust_decimal::Decimal;

use super::{pow, CheckedArithmetic};
use crate::domain::{Curvature, CurvePoint, Invariant, ReservePair};
use crate::error::{AmmError, Result};

/// Computes the invariant `k` for reserves `(x, y)` under curvature `q`.
///
/// Inside the zero-curvature band this is the product `x · y`; otherwise it
/// is the power mean `(x^q + y^q)^(1/q)`.
///
/// # Errors
///
/// - [`AmmError::InvalidReserve`] if `x` or `y` is not strictly positive.
/// - [`AmmError::Overflow`] / [`AmmError::Underflow`] if an intermediate
///   power leaves the decimal range.
/// - [`AmmError::DegenerateParameter`] if `1 / q` is not representable.
///
/// # Examples
///
/// ```
/// use adaptive_amm::domain::Curvature;
/// use adaptive_amm::math::compute_invariant;
/// use rust_decimal::Decimal;
///
/// let k = compute_invariant(Curvature::CONSTANT_PRODUCT, Decimal::from(100), Decimal::from(100))
///     .expect("positive reserves");
/// assert_eq!(k.get(), Decimal::from(10_000));
///
/// let k = compute_invariant(Curvature::CONSTANT_SUM, Decimal::from(100), Decimal::from(100))
///     .expect("positive reserves");
/// assert_eq!(k.get(), Decimal::from(200));
/// ```
pub fn compute_invariant(curvature: Curvature, x: Decimal, y: Decimal) -> Result<Invariant> {
    if x <= Decimal::ZERO {
        return Err(AmmError::InvalidReserve("reserve x must be positive"));
    }
    if y <= Decimal::ZERO {
        return Err(AmmError::InvalidReserve("reserve y must be positive"));
    }

    if curvature.is_constant_product() {
        return Invariant::new(x.safe_mul(&y)?);
    }

    let q = curvature.get();
    // For q > 0 the larger reserve dominates `x^q + y^q`; for q < 0 the
    // smaller one does.
    let (dominant, other) = if (x >= y) == q.is_sign_positive() {
        (x, y)
    } else {
        (y, x)
    };
    let share = ratio_power(other.safe_div(&dominant)?, q)?;
    let scale = pow(Decimal::ONE.safe_add(&share)?, curvature.reciprocal()?)?;
    Invariant::new(dominant.safe_mul(&scale)?)
}

/// `ratio^q` for a ratio whose power is at most one.  A power below the
/// decimal resolution is negligible next to one and becomes zero.
fn ratio_power(ratio: Decimal, q: Decimal) -> Result<Decimal> {
    match pow(ratio, q) {
        Err(AmmError::Underflow(_)) => Ok(Decimal::ZERO),
        other => other,
    }
}

/// Solves the invariant for the partner reserve of `known`.
///
/// Returns `Ok(None)` when no non-negative partner exists on the curve:
/// `known` is not positive, `known^q` exceeds `k^q`, or (for `q < 0`) the
/// two are equal so the partner would be unbounded.  For `q > 0` an exact
/// tie yields `Some(0)`.  The comparison is made on `known / k`, so it is
/// exact even where `known^q` itself is not representable.
///
/// # Errors
///
/// Arithmetic failures ([`AmmError::Overflow`], [`AmmError::Underflow`],
/// [`AmmError::DegenerateParameter`]) are reported as errors, distinct from
/// infeasibility.
///
/// # Examples
///
/// ```
/// use adaptive_amm::domain::{Curvature, Invariant};
/// use adaptive_amm::math::solve_other_reserve;
/// use rust_decimal::Decimal;
///
/// let k = Invariant::new(Decimal::from(200)).expect("positive");
/// let y = solve_other_reserve(Decimal::from(50), Curvature::CONSTANT_SUM, k);
/// assert_eq!(y, Ok(Some(Decimal::from(150))));
///
/// let beyond = solve_other_reserve(Decimal::from(250), Curvature::CONSTANT_SUM, k);
/// assert_eq!(beyond, Ok(None));
/// ```
pub fn solve_other_reserve(
    known: Decimal,
    curvature: Curvature,
    invariant: Invariant,
) -> Result<Option<Decimal>> {
    if known <= Decimal::ZERO {
        return Ok(None);
    }
    let k = invariant.get();

    if curvature.is_constant_product() {
        return k.safe_div(&known).map(Some);
    }

    // known^q ≥ k^q  ⇔  (known / k)^q ≥ 1, decided on the ratio itself.
    let q = curvature.get();
    let ratio = known.safe_div(&k)?;
    if ratio != Decimal::ONE && (ratio > Decimal::ONE) == q.is_sign_positive() {
        return Ok(None);
    }
    let remainder = Decimal::ONE.safe_sub(&ratio_power(ratio, q)?)?;
    if remainder <= Decimal::ZERO {
        // Tie: the partner is zero for q > 0 and unbounded for q < 0.
        return Ok(if q.is_sign_negative() {
            None
        } else {
            Some(Decimal::ZERO)
        });
    }

    let scale = pow(remainder, curvature.reciprocal()?)?;
    k.safe_mul(&scale).map(Some)
}

/// Lazy per-point evaluation of the trading curve.
///
/// Created by [`solve_other_reserves`] and [`trading_curve`].  Yields exactly
/// one [`CurvePoint`] per input coordinate, in input order.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct CurvePoints<I> {
    knowns: I,
    curvature: Curvature,
    invariant: Invariant,
}

impl<I> CurvePoints<I> {
    /// Curvature the points are evaluated with.
    pub const fn curvature(&self) -> Curvature {
        self.curvature
    }

    /// Invariant the points are evaluated against.
    pub const fn invariant(&self) -> Invariant {
        self.invariant
    }
}

impl<I: Iterator<Item = Decimal>> Iterator for CurvePoints<I> {
    type Item = CurvePoint;

    fn next(&mut self) -> Option<Self::Item> {
        let known = self.knowns.next()?;
        Some(solve_other_reserve(known, self.curvature, self.invariant).into())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.knowns.size_hint()
    }
}

impl<I: ExactSizeIterator<Item = Decimal>> ExactSizeIterator for CurvePoints<I> {}

impl<I: FusedIterator<Item = Decimal>> FusedIterator for CurvePoints<I> {}

/// Vectorized [`solve_other_reserve`].
///
/// Never aborts: infeasible coordinates become [`CurvePoint::Infeasible`] and
/// arithmetic failures become [`CurvePoint::Failed`].
///
/// # Examples
///
/// ```
/// use adaptive_amm::domain::{Curvature, CurvePoint, Invariant};
/// use adaptive_amm::math::solve_other_reserves;
/// use rust_decimal::Decimal;
///
/// let k = Invariant::new(Decimal::from(200)).expect("positive");
/// let xs = [Decimal::from(50), Decimal::from(250)];
/// let ys: Vec<CurvePoint> = solve_other_reserves(xs, Curvature::CONSTANT_SUM, k).collect();
/// assert_eq!(ys, vec![CurvePoint::Value(Decimal::from(150)), CurvePoint::Infeasible]);
/// ```
pub fn solve_other_reserves<I>(
    knowns: I,
    curvature: Curvature,
    invariant: Invariant,
) -> CurvePoints<I::IntoIter>
where
    I: IntoIterator<Item = Decimal>,
{
    CurvePoints {
        knowns: knowns.into_iter(),
        curvature,
        invariant,
    }
}

/// The trading curve of curvature `q` through a reference reserve pair,
/// evaluated at `xs`.
///
/// # Errors
///
/// Fails only if the invariant of the reference pair cannot be computed;
/// per-point problems are reported inside the returned iterator.
pub fn trading_curve<I>(
    curvature: Curvature,
    reference: ReservePair,
    xs: I,
) -> Result<CurvePoints<I::IntoIter>>
where
    I: IntoIterator<Item = Decimal>,
{
    let invariant = compute_invariant(curvature, reference.x(), reference.y())?;
    Ok(solve_other_reserves(xs, curvature, invariant))
}

/// Marginal price of `x` in units of `y`: `(x / y)^(q − 1)`.
///
/// In the zero-curvature band this is `y / x`; on the constant-sum line it
/// is `1`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] / [`AmmError::Underflow`] if the price
/// leaves the decimal range.
pub fn spot_price(curvature: Curvature, reserves: ReservePair) -> Result<Decimal> {
    let ratio = reserves.x().safe_div(&reserves.y())?;
    let exponent = curvature.effective().safe_sub(&Decimal::ONE)?;
    pow(ratio, exponent)
}
