//! Construction of pools from declarative configuration.
//!
//! A configuration is validated twice: once when it is built, and again by
//! the pool when it is turned into state.  A successfully constructed pool
//! is guaranteed to be in a valid initial state.
//!
//! There is no blanket `impl<T> FromConfig<T>`; every pool-config pairing is
//! implemented explicitly.

use crate::error::Result;

/// Builds a value from a configuration of type `C`.
///
/// # Implementors
///
/// - `impl FromConfig<PoolConfig> for AdaptivePool`
pub trait FromConfig<C> {
    /// Creates a new instance from `config`.
    ///
    /// The configuration is taken by reference so it can be reused, e.g. to
    /// spin up several identical pools.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`](crate::error::AmmError::InvalidConfiguration)
    ///   if the configuration fails validation.
    /// - Any error raised while deriving the initial state, such as
    ///   [`AmmError::Overflow`](crate::error::AmmError::Overflow) while
    ///   computing the invariant.
    fn from_config(config: &C) -> Result<Self>
    where
        Self: Sized;
}
