//! # Adaptive AMM
//!
//! A constant-function market maker whose trading curve is a tunable
//! power mean:
//!
//! ```text
//! x^q + y^q = k^q        (q ≠ 0)
//! x · y     = k          (q → 0)
//! ```
//!
//! The curvature exponent `q` morphs the curve continuously: `q = 1` is the
//! constant-sum line, `q → 0` the constant-product hyperbola, and `q < 0`
//! curves asymptotic to `x = k` and `y = k`.  A pool keeps `(q, x, y, k)`
//! and an append-only history of its reserves; trades move along the current
//! curve and curvature updates re-fit `k` through the current reserves.
//!
//! All values are [`rust_decimal::Decimal`].  Floats enter only at the
//! boundary ([`Curvature::from_f64`](domain::Curvature::from_f64),
//! [`PoolConfig::from_f64`](config::PoolConfig::from_f64)).
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for configuration and value types |
//!
//! # Quick Start
//!
//! ```rust
//! use adaptive_amm::prelude::*;
//! use rust_decimal::Decimal;
//!
//! // 1. Describe the pool
//! let config = PoolConfig::from_f64(1e9, 1e9, -0.5).expect("valid config");
//!
//! // 2. Build it
//! let mut pool = AdaptivePool::from_config(&config).expect("pool created");
//!
//! // 3. Deposit x, receive y along the curve
//! let dy = pool.trade_x_for_y(Decimal::from(10_000_000)).expect("feasible");
//! assert!(dy > Decimal::ZERO && dy < Decimal::from(10_000_000));
//!
//! // 4. Flatten the curve to constant product; reserves stay put
//! pool.update_curvature(Curvature::CONSTANT_PRODUCT).expect("in range");
//! assert_eq!(
//!     pool.invariant().get(),
//!     pool.reserves().x() * pool.reserves().y(),
//! );
//! assert_eq!(pool.history().len(), 2);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Consumer   │  PoolConfig / AdaptivePool::new
//! └──────┬──────┘
//!        │ trade_x_for_y, trade_y_for_x, update_curvature
//!        ▼
//! ┌─────────────┐
//! │    Pools     │  AdaptivePool: (q, x, y, k) + ReserveHistory
//! └──────┬──────┘
//!        │ compute_invariant, solve_other_reserve
//!        ▼
//! ┌─────────────┐
//! │    Math      │  power-mean invariant, decimal pow/ln/exp
//! └──────┬──────┘
//!        ▼
//! ┌─────────────┐
//! │   Domain     │  Curvature, ReservePair, Invariant, CurvePoint, …
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Curvature`](domain::Curvature), [`ReservePair`](domain::ReservePair), [`Invariant`](domain::Invariant), [`CurvePoint`](domain::CurvePoint), etc. |
//! | [`traits`] | Core abstractions: [`TradingPool`](traits::TradingPool), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | Declarative pool blueprint: [`PoolConfig`](config::PoolConfig) |
//! | [`pools`]  | [`AdaptivePool`](pools::AdaptivePool) |
//! | [`math`]   | Checked arithmetic, decimal powers, invariant math, curve sampling |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Logging
//!
//! Trades and curvature updates emit [`tracing`] events (`debug` on
//! success, `warn` on rejection).  The crate never installs a subscriber.

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;
