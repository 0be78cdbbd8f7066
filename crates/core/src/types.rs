//! Value types passed between the engine components.
//!
//! Everything here is `Copy` and owns no shared state.

use serde::Serialize;

use crate::error::PriceError;
use crate::units::Unit;

/// An amount of something, e.g. 500 g.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
}

impl Quantity {
    #[must_use]
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Build a quantity from a unit token, rejecting unknown units and
    /// negative or non-finite values.
    pub fn parse(value: f64, unit: &str) -> Result<Self, PriceError> {
        if !value.is_finite() {
            return Err(PriceError::InvalidQuantity(value));
        }
        if value < 0.0 {
            return Err(PriceError::NegativeQuantity(value));
        }
        Ok(Self::new(value, Unit::parse(unit)?))
    }

    /// Express the same amount in another unit of the same category.
    pub fn to_unit(self, unit: Unit) -> Result<Self, PriceError> {
        let value = crate::convert::convert_value(self.value, self.unit, unit)?;
        Ok(Self::new(value, unit))
    }
}

/// Currency per one unit of measure, e.g. $28.95 per kg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePerUnit {
    pub price: f64,
    pub unit: Unit,
}

impl PricePerUnit {
    #[must_use]
    pub const fn new(price: f64, unit: Unit) -> Self {
        Self { price, unit }
    }

    /// Re-express the price per one `unit` instead of per one `self.unit`.
    pub fn to_unit(self, unit: Unit) -> Result<Self, PriceError> {
        let price = crate::convert::convert_price_value(self.price, self.unit, unit)?;
        Ok(Self::new(price, unit))
    }
}

/// Which way a comparison went, after applying the equivalence tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Cheaper,
    Same,
    MoreExpensive,
}

/// Outcome of comparing a user's price with a reference price that is
/// already expressed in the same unit.
///
/// Derived on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub user_price: f64,
    pub reference_price: f64,
    /// `|user - reference|`, always non-negative.
    pub absolute_difference: f64,
    /// Signed, relative to the reference. Zero when the reference is zero.
    pub percentage_difference: f64,
    /// Sign of the difference only; not gated by the tolerance.
    pub is_cheaper: bool,
    pub is_equivalent: bool,
}

impl ComparisonResult {
    /// Collapse the flags into a single verdict. Equivalence wins over sign.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        if self.is_equivalent {
            Verdict::Same
        } else if self.is_cheaper {
            Verdict::Cheaper
        } else {
            Verdict::MoreExpensive
        }
    }
}
