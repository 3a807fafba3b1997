//! Per-point outcome of evaluating a trading curve.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::AmmError;

/// One evaluated point of a trading curve.
///
/// Vectorized curve evaluation never aborts: each input coordinate yields
/// exactly one `CurvePoint`, so the output stays aligned with the input.
/// Domain infeasibility and arithmetic failure are kept apart.
///
/// # Examples
///
/// ```
/// use adaptive_amm::domain::CurvePoint;
/// use rust_decimal::Decimal;
///
/// let p = CurvePoint::Value(Decimal::from(50));
/// assert_eq!(p.value(), Some(Decimal::from(50)));
/// assert!(CurvePoint::Infeasible.to_f64_or_nan().is_nan());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurvePoint {
    /// The partner coordinate on the curve.
    Value(Decimal),
    /// No non-negative partner coordinate exists: the curve does not reach
    /// this far.
    Infeasible,
    /// The coordinate could not be computed within the decimal range.
    Failed(AmmError),
}

impl CurvePoint {
    /// Returns the coordinate if the point is on the curve.
    #[must_use]
    pub const fn value(&self) -> Option<Decimal> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Infeasible | Self::Failed(_) => None,
        }
    }

    /// Returns `true` for [`CurvePoint::Value`].
    #[must_use]
    pub const fn is_feasible(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Converts to `f64` for plotting, mapping every non-value to NaN so the
    /// plotting layer leaves a gap.
    #[must_use]
    pub fn to_f64_or_nan(&self) -> f64 {
        self.value()
            .and_then(|v| v.to_f64())
            .unwrap_or(f64::NAN)
    }
}

impl From<Result<Option<Decimal>, AmmError>> for CurvePoint {
    fn from(result: Result<Option<Decimal>, AmmError>) -> Self {
        match result {
            Ok(Some(v)) => Self::Value(v),
            Ok(None) => Self::Infeasible,
            Err(err) => Self::Failed(err),
        }
    }
}
