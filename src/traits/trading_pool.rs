//! Core trait for pools whose reserves move along an invariant curve.
//!
//! [`TradingPool`] covers the full life of an adaptive pool:
//!
//! 1. **Trade**: [`TradingPool::trade_x_for_y`] and
//!    [`TradingPool::trade_y_for_x`] move the reserves along the current
//!    curve, keeping the invariant fixed.
//! 2. **Reparameterize**: [`TradingPool::update_curvature`] swaps in a new
//!    curve through the current reserve point.
//! 3. **Inspect**: [`TradingPool::curvature`], [`TradingPool::reserves`],
//!    [`TradingPool::invariant`] and [`TradingPool::spot_price`].
//!
//! # Atomicity
//!
//! A method that returns `Err` leaves the pool exactly as it was.  There are
//! no partial updates.

use rust_decimal::Decimal;

use crate::domain::{Curvature, Invariant, ReservePair};
use crate::error::Result;

/// A two-reserve pool trading along an invariant curve.
///
/// All methods are required; there are no default implementations.
///
/// # Errors
///
/// Fallible methods return [`AmmError`](crate::error::AmmError):
///
/// - [`AmmError::InfeasibleTrade`](crate::error::AmmError::InfeasibleTrade):
///   the delta leaves the feasible region of the curve.
/// - [`AmmError::InvalidQuantity`](crate::error::AmmError::InvalidQuantity):
///   a zero delta.
/// - [`AmmError::Overflow`](crate::error::AmmError::Overflow) /
///   [`AmmError::Underflow`](crate::error::AmmError::Underflow): a power
///   left the decimal range.
pub trait TradingPool {
    /// Applies `dx` to reserve `x` and solves the curve for the new `y`.
    ///
    /// Returns `dy`, the decrease of reserve `y` (negative when `dx < 0`,
    /// i.e. the caller pays `y` to withdraw `x`).
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidQuantity`](crate::error::AmmError::InvalidQuantity)
    ///   if `dx` is zero.
    /// - [`AmmError::InfeasibleTrade`](crate::error::AmmError::InfeasibleTrade)
    ///   if no strictly positive `y` exists for `x + dx`.
    fn trade_x_for_y(&mut self, dx: Decimal) -> Result<Decimal>;

    /// Applies `dy` to reserve `y` and solves the curve for the new `x`.
    ///
    /// Returns `dx`, the decrease of reserve `x`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`TradingPool::trade_x_for_y`] with the roles of
    /// the reserves swapped.
    fn trade_y_for_x(&mut self, dy: Decimal) -> Result<Decimal>;

    /// Replaces the curvature and recomputes the invariant so the new curve
    /// passes through the current reserves.  Reserves are not touched.
    ///
    /// # Errors
    ///
    /// Returns the invariant computation error; the pool is unchanged.
    fn update_curvature(&mut self, curvature: Curvature) -> Result<()>;

    /// Marginal price of `x` in units of `y` at the current reserves.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`](crate::error::AmmError::Overflow) or
    /// [`AmmError::Underflow`](crate::error::AmmError::Underflow) if the
    /// price leaves the decimal range.
    fn spot_price(&self) -> Result<Decimal>;

    /// Current curvature exponent.
    fn curvature(&self) -> Curvature;

    /// Current reserves.
    fn reserves(&self) -> ReservePair;

    /// Current invariant.
    fn invariant(&self) -> Invariant;
}
