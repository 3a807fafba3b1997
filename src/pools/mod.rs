//! Stateful pool implementations.
//!
//! | Pool | Invariant |
//! |------|-----------|
//! | [`AdaptivePool`] | `x^q + y^q = k^q`, with `x · y = k` at `q = 0` |

pub mod adaptive;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use adaptive::AdaptivePool;
