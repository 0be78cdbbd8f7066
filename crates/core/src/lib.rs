//! Pricecheck Core
//!
//! Compare what you paid for a grocery item against a reference per-unit
//! price, even when the two are in different units of weight or volume.
//!
//! # Quick Start
//!
//! ```
//! use pricecheck_core::{PriceCheck, Verdict};
//!
//! let pc = PriceCheck::new();
//!
//! // Reference is $28.95/kg, you paid $12.99 for a pound
//! let reference_per_lb = pc.convert_price_per_unit(28.95, "kg", "lb").unwrap();
//! let result = pc.compare(12.99, reference_per_lb);
//!
//! assert_eq!(result.verdict(), Verdict::Cheaper);
//! assert_eq!(pc.format_price(reference_per_lb), "13.13");
//! ```
//!
//! # Free Functions
//!
//! Every operation is also available as a plain function using the
//! default tolerances:
//!
//! ```
//! use pricecheck_core::{compare, convert_quantity, format_price, FormatOptions};
//!
//! assert_eq!(convert_quantity(1.0, "l", "ml").unwrap(), 1000.0);
//! assert!(compare(0.00799, 0.00799).is_equivalent);
//! assert_eq!(format_price(0.123, FormatOptions::default()), "0.123");
//! ```

pub mod compare;
pub mod convert;
pub mod error;
pub mod format;
pub mod types;
pub mod units;

pub use compare::{
    compare, compare_prices, compare_with, nearly_equal, nearly_equal_default, ComparisonConfig,
    DEFAULT_EPSILON_FLOOR, DEFAULT_NEARLY_EQUAL_TOLERANCE, DEFAULT_RELATIVE_TOLERANCE,
};
pub use convert::{
    convert_price_per_unit, convert_price_value, convert_quantity, convert_value,
    divide_by_quantity, price_per_unit,
};
pub use error::PriceError;
pub use format::{
    decimals_for, describe, format_percentage, format_price, format_price_with_symbol,
    FormatOptions,
};
pub use types::*;
pub use units::{are_compatible, factor_of, Category, Unit};

/// A configured engine instance.
///
/// Holds only immutable settings, so one instance can be shared freely
/// between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceCheck {
    comparison: ComparisonConfig,
    format: FormatOptions,
}

impl PriceCheck {
    /// Create an engine with the default tolerances and plain formatting.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom comparison tolerances.
    #[must_use]
    pub fn with_config(comparison: ComparisonConfig) -> Self {
        Self {
            comparison,
            format: FormatOptions::default(),
        }
    }

    /// Set the formatting options.
    #[must_use]
    pub fn set_format_options(mut self, format: FormatOptions) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn config(&self) -> &ComparisonConfig {
        &self.comparison
    }

    #[must_use]
    pub fn format_options(&self) -> FormatOptions {
        self.format
    }

    /// See [`convert::convert_quantity`].
    pub fn convert_quantity(&self, value: f64, from: &str, to: &str) -> Result<f64, PriceError> {
        convert::convert_quantity(value, from, to)
    }

    /// See [`convert::convert_price_per_unit`].
    pub fn convert_price_per_unit(
        &self,
        price: f64,
        from: &str,
        to: &str,
    ) -> Result<f64, PriceError> {
        convert::convert_price_per_unit(price, from, to)
    }

    /// Compare two unit-aligned prices with this engine's tolerances.
    #[must_use]
    pub fn compare(&self, user_price: f64, reference_price: f64) -> ComparisonResult {
        compare::compare_with(user_price, reference_price, &self.comparison)
    }

    /// Compare two per-unit prices, aligning the reference to the user's unit.
    pub fn compare_prices(
        &self,
        user: &PricePerUnit,
        reference: &PricePerUnit,
    ) -> Result<ComparisonResult, PriceError> {
        compare::compare_prices(user, reference, &self.comparison)
    }

    /// Render a price with this engine's format options.
    #[must_use]
    pub fn format_price(&self, price: f64) -> String {
        format::format_price(price, self.format)
    }

    /// One-line summary of a comparison.
    #[must_use]
    pub fn describe(&self, result: &ComparisonResult, symbol: &str) -> String {
        format::describe(result, symbol, self.format)
    }
}
