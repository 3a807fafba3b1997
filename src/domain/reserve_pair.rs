//! A snapshot of the two pool reserves.

use core::fmt;

use rust_decimal::Decimal;

use crate::error::AmmError;

/// Strictly positive reserves `(x, y)` of the two pool tokens.
///
/// # Examples
///
/// ```
/// use adaptive_amm::domain::ReservePair;
/// use rust_decimal::Decimal;
///
/// let pair = ReservePair::new(Decimal::from(100), Decimal::from(250)).expect("positive");
/// assert_eq!(pair.x(), Decimal::from(100));
/// assert_eq!(pair.y(), Decimal::from(250));
/// assert!(ReservePair::new(Decimal::ZERO, Decimal::ONE).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "(Decimal, Decimal)", into = "(Decimal, Decimal)")
)]
pub struct ReservePair {
    x: Decimal,
    y: Decimal,
}

impl ReservePair {
    /// Creates a reserve pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidReserve`] if either reserve is zero or
    /// negative.
    pub fn new(x: Decimal, y: Decimal) -> Result<Self, AmmError> {
        if x <= Decimal::ZERO {
            return Err(AmmError::InvalidReserve("reserve x must be positive"));
        }
        if y <= Decimal::ZERO {
            return Err(AmmError::InvalidReserve("reserve y must be positive"));
        }
        Ok(Self { x, y })
    }

    /// Reserve of token X.
    #[must_use]
    pub const fn x(&self) -> Decimal {
        self.x
    }

    /// Reserve of token Y.
    #[must_use]
    pub const fn y(&self) -> Decimal {
        self.y
    }

    /// Returns the pair as an `(x, y)` tuple.
    #[must_use]
    pub const fn as_tuple(&self) -> (Decimal, Decimal) {
        (self.x, self.y)
    }
}

impl TryFrom<(Decimal, Decimal)> for ReservePair {
    type Error = AmmError;

    fn try_from((x, y): (Decimal, Decimal)) -> Result<Self, Self::Error> {
        Self::new(x, y)
    }
}

impl From<ReservePair> for (Decimal, Decimal) {
    fn from(pair: ReservePair) -> Self {
        pair.as_tuple()
    }
}

impl fmt::Display for ReservePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
