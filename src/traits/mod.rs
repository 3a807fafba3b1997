//! Trait abstractions for pool operations.
//!
//! [`TradingPool`] is the behaviour every curve-following pool provides;
//! [`FromConfig`] is configuration-driven construction.

mod from_config;
mod trading_pool;

pub use from_config::FromConfig;
pub use trading_pool::TradingPool;
