//! Value types used throughout the adaptive AMM.
//!
//! This module contains the types that model the pool's state and the
//! outcomes of its operations: the curvature exponent, the invariant, reserve
//! snapshots and their history, per-point curve results, and trade quotes.
//! Types with invariants use validated constructors.

mod curvature;
mod curve_point;
mod invariant;
mod reserve_history;
mod reserve_pair;
mod trade_quote;

pub use curvature::{Curvature, ZERO_CURVATURE_TOLERANCE};
pub use curve_point::CurvePoint;
pub use invariant::Invariant;
pub use reserve_history::ReserveHistory;
pub use reserve_pair::ReservePair;
pub use trade_quote::{TradeDirection, TradeQuote};
