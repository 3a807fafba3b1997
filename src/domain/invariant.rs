//! The invariant `k` of a trading curve.

use core::fmt;

use rust_decimal::Decimal;

use crate::error::AmmError;

/// Strictly positive invariant `k` of the curve `x^q + y^q = k^q` (or
/// `x · y = k` in the constant-product limit).
///
/// A pool never sets `k` directly; it is always derived from the current
/// curvature and reserves by [`compute_invariant`](crate::math::compute_invariant).
///
/// # Examples
///
/// ```
/// use adaptive_amm::domain::Invariant;
/// use rust_decimal::Decimal;
///
/// let k = Invariant::new(Decimal::from(10_000)).expect("positive");
/// assert_eq!(k.get(), Decimal::from(10_000));
/// assert!(Invariant::new(Decimal::ZERO).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Decimal", into = "Decimal"))]
pub struct Invariant(Decimal);

impl Invariant {
    /// Creates a new invariant.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidInvariant`] if `value` is not strictly
    /// positive.
    pub fn new(value: Decimal) -> Result<Self, AmmError> {
        if value <= Decimal::ZERO {
            return Err(AmmError::InvalidInvariant("invariant must be positive"));
        }
        Ok(Self(value))
    }

    /// Returns the underlying value.
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Invariant {
    type Error = AmmError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Invariant> for Decimal {
    fn from(value: Invariant) -> Self {
        value.0
    }
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
