//! Error type shared by every fallible engine operation.

use thiserror::Error;

/// Errors produced by unit lookup, conversion and normalization.
///
/// All of these are input errors: the engine performs no I/O, so nothing
/// here is transient and nothing needs to be retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PriceError {
    /// The unit token is not in the registry.
    #[error("unknown unit: '{0}'")]
    UnknownUnit(String),

    /// Both units are known but measure different things (weight vs volume).
    #[error("incompatible units: cannot convert {from} ({from_category}) to {to} ({to_category})")]
    IncompatibleUnits {
        from: String,
        from_category: &'static str,
        to: String,
        to_category: &'static str,
    },

    /// A purchase quantity of zero cannot be turned into a per-unit price.
    #[error("quantity must be greater than zero")]
    ZeroQuantity,

    /// Quantities are magnitudes and cannot be negative.
    #[error("quantity cannot be negative: {0}")]
    NegativeQuantity(f64),

    /// NaN or infinite quantity.
    #[error("quantity must be a finite number: {0}")]
    InvalidQuantity(f64),
}

impl PriceError {
    /// Short machine-readable kind, used for JSON error output.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownUnit(_) => "unknown_unit",
            Self::IncompatibleUnits { .. } => "incompatible_units",
            Self::ZeroQuantity => "zero_quantity",
            Self::NegativeQuantity(_) => "negative_quantity",
            Self::InvalidQuantity(_) => "invalid_quantity",
        }
    }
}
