//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint for an adaptive pool: the
//! initial reserves and curvature, validated at construction.  Pools are
//! built from it through [`FromConfig`](crate::traits::FromConfig).

mod pool_config;

pub use pool_config::PoolConfig;
