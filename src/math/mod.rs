//! Arithmetic and curve mathematics for the adaptive AMM.
//!
//! | Module | Contents |
//! |--------|----------|
//! | `checked` | [`CheckedArithmetic`] for overflow-safe decimal operations |
//! | `power` | [`pow`], [`ln`] and [`exp`] over `Decimal` |
//! | `invariant` | [`compute_invariant`], [`solve_other_reserve`], the vectorized [`solve_other_reserves`] and [`spot_price`] |
//! | `sampling` | [`linspace`] and [`curve_family`] for plotting collaborators |
//!
//! Everything here is a pure function of its inputs; state lives in
//! [`crate::pools`].

mod checked;
mod invariant;
mod power;
mod sampling;

pub use checked::CheckedArithmetic;
pub use invariant::{
    compute_invariant, solve_other_reserve, solve_other_reserves, spot_price, trading_curve,
    CurvePoints,
};
pub use power::{exp, ln, pow};
pub use sampling::{curve_family, linspace};
