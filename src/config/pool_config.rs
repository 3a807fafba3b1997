//! Configuration for adaptive power-mean pools.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::domain::{Curvature, ReservePair};
use crate::error::{AmmError, Result};

/// Configuration for an adaptive pool (`x^q + y^q = k^q`).
///
/// Defines the initial reserves and the initial curvature exponent.
///
/// # Derived Values
///
/// - Initial invariant: `k = (x^q + y^q)^(1/q)`, or `x · y` for `q ≈ 0`
/// - Initial history: `[(x, y)]`
///
/// # Validation
///
/// - Both reserves must be strictly positive.
///
/// # Examples
///
/// ```
/// use adaptive_amm::config::PoolConfig;
///
/// let config = PoolConfig::from_f64(1e9, 1e9, -0.5).expect("valid");
/// assert_eq!(config.reserves().x(), rust_decimal::Decimal::from(1_000_000_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    reserves: ReservePair,
    curvature: Curvature,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidReserve`] if either reserve is zero or
    /// negative.
    pub fn new(reserve_x: Decimal, reserve_y: Decimal, curvature: Curvature) -> Result<Self> {
        let config = Self {
            reserves: ReservePair::new(reserve_x, reserve_y)?,
            curvature,
        };
        config.validate()?;
        Ok(config)
    }

    /// Creates a `PoolConfig` from floating-point inputs.
    ///
    /// This is the only place where floats enter the crate; everything
    /// downstream is decimal.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if a reserve is NaN, infinite,
    ///   or outside the decimal range.
    /// - [`AmmError::DegenerateParameter`] if the curvature is not a finite
    ///   decimal.
    /// - [`AmmError::InvalidReserve`] if a reserve is zero or negative.
    pub fn from_f64(reserve_x: f64, reserve_y: f64, curvature: f64) -> Result<Self> {
        let x = decimal_reserve(reserve_x)?;
        let y = decimal_reserve(reserve_y)?;
        Self::new(x, y, Curvature::from_f64(curvature)?)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidReserve`] if either reserve is zero or
    /// negative.
    pub fn validate(&self) -> Result<()> {
        ReservePair::new(self.reserves.x(), self.reserves.y()).map(|_| ())
    }

    /// Returns the initial reserves.
    #[must_use]
    pub const fn reserves(&self) -> ReservePair {
        self.reserves
    }

    /// Returns the initial curvature.
    #[must_use]
    pub const fn curvature(&self) -> Curvature {
        self.curvature
    }
}

fn decimal_reserve(value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(AmmError::InvalidConfiguration("reserve must be a finite number"));
    }
    Decimal::from_f64(value).ok_or(AmmError::InvalidConfiguration(
        "reserve is outside the decimal range",
    ))
}
