//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use adaptive_amm::prelude::*;
//! ```

pub use crate::config::PoolConfig;
pub use crate::domain::{
    Curvature, CurvePoint, Invariant, ReserveHistory, ReservePair, TradeDirection, TradeQuote,
};
pub use crate::error::{AmmError, Result};
pub use crate::math::{compute_invariant, solve_other_reserve, solve_other_reserves, trading_curve};
pub use crate::pools::AdaptivePool;
pub use crate::traits::{FromConfig, TradingPool};
