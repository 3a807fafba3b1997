//! Adaptive pool on the power-mean curve `x^q + y^q = k^q`.
//!
//! The curvature `q` is a live parameter: [`TradingPool::update_curvature`]
//! re-fits the invariant through the current reserves, after which trades
//! move along the new curve.
//!
//! # Trade Algorithm (x → y)
//!
//! 1. `new_x = x + dx`
//! 2. `new_y = solve_other_reserve(new_x, q, k)`; no strictly positive
//!    solution means the trade is infeasible
//! 3. `dy = y − new_y`
//! 4. `(x, y) = (new_x, new_y)`, append to history
//!
//! `k` is left untouched by trades.  Every trade is priced by a quote first
//! and committed only if the quote succeeded, so a failed trade leaves the
//! pool exactly as it was.

use core::fmt;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::PoolConfig;
use crate::domain::{
    Curvature, Invariant, ReserveHistory, ReservePair, TradeDirection, TradeQuote,
};
use crate::error::{AmmError, Result};
use crate::math::{compute_invariant, solve_other_reserve, spot_price, CheckedArithmetic};
use crate::traits::{FromConfig, TradingPool};

/// A two-reserve pool with a tunable curvature exponent.
///
/// Created with [`AdaptivePool::new`] or from a [`PoolConfig`] via
/// [`FromConfig`].
///
/// # State
///
/// - `curvature`: current exponent `q`
/// - `reserves`: current `(x, y)`, always strictly positive
/// - `invariant`: `k`, consistent with `(q, x, y)`
/// - `history`: every reserve state since construction, oldest first
///
/// # Example
///
/// ```rust
/// use adaptive_amm::domain::Curvature;
/// use adaptive_amm::pools::AdaptivePool;
/// use adaptive_amm::traits::TradingPool;
/// use rust_decimal::Decimal;
///
/// let mut pool = AdaptivePool::new(Decimal::from(100), Decimal::from(100), Curvature::CONSTANT_PRODUCT)
///     .expect("valid pool");
/// assert_eq!(pool.invariant().get(), Decimal::from(10_000));
///
/// let dy = pool.trade_x_for_y(Decimal::from(100)).expect("feasible");
/// assert_eq!(dy, Decimal::from(50));
/// assert_eq!(pool.reserves().y(), Decimal::from(50));
/// assert_eq!(pool.history().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdaptivePool {
    curvature: Curvature,
    reserves: ReservePair,
    invariant: Invariant,
    history: ReserveHistory,
}

impl AdaptivePool {
    /// Creates a pool at reserves `(x, y)` with curvature `q`.
    ///
    /// The invariant is computed from the initial state and the history is
    /// seeded with `(x, y)`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidReserve`] if either reserve is not positive.
    /// - [`AmmError::Overflow`] / [`AmmError::Underflow`] if the invariant
    ///   leaves the decimal range.
    pub fn new(reserve_x: Decimal, reserve_y: Decimal, curvature: Curvature) -> Result<Self> {
        let reserves = ReservePair::new(reserve_x, reserve_y)?;
        let invariant = compute_invariant(curvature, reserves.x(), reserves.y())?;
        debug!(
            q = %curvature,
            x = %reserves.x(),
            y = %reserves.y(),
            k = %invariant,
            "adaptive pool created"
        );
        Ok(Self {
            curvature,
            reserves,
            invariant,
            history: ReserveHistory::seeded(reserves),
        })
    }

    /// Every reserve state since construction, oldest first.
    #[must_use]
    pub const fn history(&self) -> &ReserveHistory {
        &self.history
    }

    /// Prices applying `dx` to reserve `x` without changing the pool.
    ///
    /// # Errors
    ///
    /// Same conditions as [`TradingPool::trade_x_for_y`].
    pub fn quote_x_for_y(&self, dx: Decimal) -> Result<TradeQuote> {
        self.quote(TradeDirection::XForY, dx)
    }

    /// Prices applying `dy` to reserve `y` without changing the pool.
    ///
    /// # Errors
    ///
    /// Same conditions as [`TradingPool::trade_y_for_x`].
    pub fn quote_y_for_x(&self, dy: Decimal) -> Result<TradeQuote> {
        self.quote(TradeDirection::YForX, dy)
    }

    fn quote(&self, direction: TradeDirection, delta: Decimal) -> Result<TradeQuote> {
        if delta.is_zero() {
            return Err(AmmError::InvalidQuantity("trade delta must be non-zero"));
        }

        let (reserve_in, reserve_out) = match direction {
            TradeDirection::XForY => (self.reserves.x(), self.reserves.y()),
            TradeDirection::YForX => (self.reserves.y(), self.reserves.x()),
        };

        let new_in = reserve_in.safe_add(&delta)?;
        let new_out = match solve_other_reserve(new_in, self.curvature, self.invariant)? {
            Some(v) if v > Decimal::ZERO => v,
            _ => return Err(AmmError::InfeasibleTrade),
        };
        let amount_out = reserve_out.safe_sub(&new_out)?;

        let reserves_after = match direction {
            TradeDirection::XForY => ReservePair::new(new_in, new_out)?,
            TradeDirection::YForX => ReservePair::new(new_out, new_in)?,
        };
        Ok(TradeQuote::new(direction, delta, amount_out, reserves_after))
    }

    fn trade(&mut self, direction: TradeDirection, delta: Decimal) -> Result<Decimal> {
        let quote = match self.quote(direction, delta) {
            Ok(quote) => quote,
            Err(err) => {
                warn!(
                    %direction,
                    %delta,
                    x = %self.reserves.x(),
                    y = %self.reserves.y(),
                    q = %self.curvature,
                    error = %err,
                    "trade rejected"
                );
                return Err(err);
            }
        };

        self.reserves = quote.reserves_after();
        self.history.record(self.reserves);
        debug!(
            %direction,
            %delta,
            amount_out = %quote.amount_out(),
            x = %self.reserves.x(),
            y = %self.reserves.y(),
            "trade executed"
        );
        Ok(quote.amount_out())
    }
}

impl FromConfig<PoolConfig> for AdaptivePool {
    /// Creates a pool from the given configuration.
    ///
    /// # Errors
    ///
    /// - Propagates any error from [`PoolConfig::validate`].
    /// - Returns [`AmmError::Overflow`] / [`AmmError::Underflow`] if the
    ///   initial invariant leaves the decimal range.
    fn from_config(config: &PoolConfig) -> Result<Self> {
        config.validate()?;
        let reserves = config.reserves();
        Self::new(reserves.x(), reserves.y(), config.curvature())
    }
}

impl TradingPool for AdaptivePool {
    fn trade_x_for_y(&mut self, dx: Decimal) -> Result<Decimal> {
        self.trade(TradeDirection::XForY, dx)
    }

    fn trade_y_for_x(&mut self, dy: Decimal) -> Result<Decimal> {
        self.trade(TradeDirection::YForX, dy)
    }

    fn update_curvature(&mut self, curvature: Curvature) -> Result<()> {
        let invariant = match compute_invariant(curvature, self.reserves.x(), self.reserves.y()) {
            Ok(invariant) => invariant,
            Err(err) => {
                warn!(q = %curvature, error = %err, "curvature update rejected");
                return Err(err);
            }
        };
        debug!(
            from = %self.curvature,
            to = %curvature,
            k = %invariant,
            "curvature updated"
        );
        self.curvature = curvature;
        self.invariant = invariant;
        Ok(())
    }

    fn spot_price(&self) -> Result<Decimal> {
        spot_price(self.curvature, self.reserves)
    }

    fn curvature(&self) -> Curvature {
        self.curvature
    }

    fn reserves(&self) -> ReservePair {
        self.reserves
    }

    fn invariant(&self) -> Invariant {
        self.invariant
    }
}

impl fmt::Display for AdaptivePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "q = {}", self.curvature)?;
        writeln!(f, "x = {}", self.reserves.x())?;
        writeln!(f, "y = {}", self.reserves.y())?;
        write!(f, "k = {}", self.invariant)
    }
}
