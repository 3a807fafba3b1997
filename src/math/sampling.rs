//! Sampling helpers for drawing families of trading curves.

use rust_decimal::Decimal;

use super::{trading_curve, CheckedArithmetic};
use crate::domain::{Curvature, CurvePoint, ReservePair};
use crate::error::Result;

/// `n` evenly spaced values from `start` to `end`, both included.
///
/// `n == 0` yields an empty vector and `n == 1` yields `[start]`.  The last
/// element is exactly `end`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`](crate::error::AmmError::Overflow) if the
/// span or a sample leaves the decimal range.
///
/// # Examples
///
/// ```
/// use adaptive_amm::math::linspace;
/// use rust_decimal::Decimal;
///
/// let xs = linspace(Decimal::ZERO, Decimal::from(10), 5).expect("in range");
/// assert_eq!(xs, vec![
///     Decimal::ZERO,
///     Decimal::new(25, 1),
///     Decimal::from(5),
///     Decimal::new(75, 1),
///     Decimal::from(10),
/// ]);
/// ```
pub fn linspace(start: Decimal, end: Decimal, n: usize) -> Result<Vec<Decimal>> {
    match n {
        0 => return Ok(Vec::new()),
        1 => return Ok(vec![start]),
        _ => {}
    }

    let intervals = Decimal::from(n - 1);
    let step = end.safe_sub(&start)?.safe_div(&intervals)?;
    let mut samples = Vec::with_capacity(n);
    for i in 0..n - 1 {
        samples.push(start.safe_add(&step.safe_mul(&Decimal::from(i))?)?);
    }
    samples.push(end);
    Ok(samples)
}

/// Evaluates the trading curve of every curvature in `curvatures` through
/// `reference`, sampled at `xs`.
///
/// Each entry pairs the curvature with one [`CurvePoint`] per element of
/// `xs`, so every curve can be plotted against the same x-axis.
///
/// # Errors
///
/// Fails if the invariant of `reference` cannot be computed for one of the
/// curvatures.
pub fn curve_family<Q>(
    curvatures: Q,
    reference: ReservePair,
    xs: &[Decimal],
) -> Result<Vec<(Curvature, Vec<CurvePoint>)>>
where
    Q: IntoIterator<Item = Curvature>,
{
    curvatures
        .into_iter()
        .map(|q| {
            let points = trading_curve(q, reference, xs.iter().copied())?.collect();
            Ok((q, points))
        })
        .collect()
}
