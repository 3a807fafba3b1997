//! Direction and outcome of a trade against the pool.

use core::fmt;

use rust_decimal::Decimal;

use super::ReservePair;

/// Which reserve the caller moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradeDirection {
    /// The caller applies a delta to `x`; the pool solves for `y`.
    XForY,
    /// The caller applies a delta to `y`; the pool solves for `x`.
    YForX,
}

impl TradeDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reverse(&self) -> Self {
        match self {
            Self::XForY => Self::YForX,
            Self::YForX => Self::XForY,
        }
    }
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::XForY => f.write_str("x->y"),
            Self::YForX => f.write_str("y->x"),
        }
    }
}

/// Result of pricing a trade along the current curve.
///
/// `delta_in` is the signed change the caller applies to the input reserve
/// (positive deposits, negative withdraws).  `amount_out` is how much the
/// other reserve decreases: positive when the pool pays out, negative when
/// the caller must pay in.
///
/// Produced by the pool's `quote_*` methods without touching state and
/// committed as-is by the matching `trade_*` method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeQuote {
    direction: TradeDirection,
    delta_in: Decimal,
    amount_out: Decimal,
    reserves_after: ReservePair,
}

impl TradeQuote {
    pub(crate) const fn new(
        direction: TradeDirection,
        delta_in: Decimal,
        amount_out: Decimal,
        reserves_after: ReservePair,
    ) -> Self {
        Self {
            direction,
            delta_in,
            amount_out,
            reserves_after,
        }
    }

    /// Trade direction.
    #[must_use]
    pub const fn direction(&self) -> TradeDirection {
        self.direction
    }

    /// Signed delta applied to the input reserve.
    #[must_use]
    pub const fn delta_in(&self) -> Decimal {
        self.delta_in
    }

    /// Decrease of the output reserve.
    #[must_use]
    pub const fn amount_out(&self) -> Decimal {
        self.amount_out
    }

    /// Pool reserves once the trade is committed.
    #[must_use]
    pub const fn reserves_after(&self) -> ReservePair {
        self.reserves_after
    }
}
