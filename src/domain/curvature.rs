//! Curvature exponent of the power-mean trading curve.

use core::fmt;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// Magnitude below which a curvature is treated as exactly zero.
///
/// The test is performed on the decimal value itself, so the threshold is
/// independent of any float conversion.  `1e-9` sits well above the decimal
/// resolution (`1e-28`) and well below any curvature a caller would choose on
/// purpose.
pub const ZERO_CURVATURE_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 9);

/// The curvature exponent `q` of the invariant `x^q + y^q = k^q`.
///
/// | `q` | Curve |
/// |-----|-------|
/// | `1` | constant sum `x + y = k` |
/// | `→ 0` | constant product `x · y = k` (handled as a limiting case) |
/// | `< 0` | hyperbola-like, asymptotic to `x = k` and `y = k` |
///
/// No sign or magnitude restriction is enforced; very large magnitudes
/// overflow the power computations and are reported as errors there.
///
/// # Examples
///
/// ```
/// use adaptive_amm::domain::Curvature;
/// use rust_decimal::Decimal;
///
/// let q = Curvature::from_f64(-0.5).expect("finite");
/// assert_eq!(q.get(), Decimal::new(-5, 1));
/// assert!(!q.is_constant_product());
/// assert!(Curvature::CONSTANT_PRODUCT.is_constant_product());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Curvature(Decimal);

impl Curvature {
    /// `q = 0`, the constant-product limit.
    pub const CONSTANT_PRODUCT: Self = Self(Decimal::ZERO);

    /// `q = 1`, the constant-sum line.
    pub const CONSTANT_SUM: Self = Self(Decimal::ONE);

    /// Creates a curvature from a decimal exponent.
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Converts a float exponent at the crate boundary.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DegenerateParameter`] if `value` is NaN, infinite,
    /// or outside the decimal range.
    pub fn from_f64(value: f64) -> Result<Self, AmmError> {
        if !value.is_finite() {
            return Err(AmmError::DegenerateParameter(
                "curvature must be a finite number",
            ));
        }
        Decimal::from_f64(value)
            .map(Self)
            .ok_or(AmmError::DegenerateParameter(
                "curvature is outside the decimal range",
            ))
    }

    /// Returns the underlying exponent.
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }

    /// Returns `true` when `|q|` is below [`ZERO_CURVATURE_TOLERANCE`], i.e.
    /// the invariant must use the constant-product form.
    #[must_use]
    pub fn is_constant_product(&self) -> bool {
        self.0.abs() < ZERO_CURVATURE_TOLERANCE
    }

    /// Returns `1 / q`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DegenerateParameter`] for a constant-product
    /// curvature, where the general formula does not apply.
    pub fn reciprocal(&self) -> Result<Decimal, AmmError> {
        if self.is_constant_product() {
            return Err(AmmError::DegenerateParameter(
                "reciprocal of a zero curvature",
            ));
        }
        Decimal::ONE
            .safe_div(&self.0)
            .map_err(|_| AmmError::DegenerateParameter("reciprocal of curvature not representable"))
    }

    /// Returns the exponent the curve actually uses: zero inside the
    /// tolerance band, `q` otherwise.
    #[must_use]
    pub fn effective(&self) -> Decimal {
        if self.is_constant_product() {
            Decimal::ZERO
        } else {
            self.0
        }
    }
}

impl From<Decimal> for Curvature {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl fmt::Display for Curvature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
