//! Unit registry.
//!
//! A fixed table of the weight and volume units the engine understands,
//! each with its category and its factor to the category base unit
//! (kilogram for weight, liter for volume). The table is plain `const`
//! data, so lookups are safe from any number of threads without locking.
//!
//! Tokens are matched case-insensitively, ignoring surrounding whitespace
//! and dots (`"Fl. Oz."` is the same as `"fl oz"`).

pub mod volume;
pub mod weight;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::PriceError;

/// Physical dimension of a unit. Conversions never cross categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Weight,
    Volume,
}

impl Category {
    /// Look up the category of a unit token. `None` means the unit is unknown.
    #[must_use]
    pub fn of(token: &str) -> Option<Self> {
        Unit::lookup(token).map(Unit::category)
    }

    /// The pivot unit all conversions in this category go through.
    #[must_use]
    pub fn base_unit(self) -> Unit {
        match self {
            Self::Weight => Unit::Kilogram,
            Self::Volume => Unit::Liter,
        }
    }

    /// Registered units in this category.
    #[must_use]
    pub fn units(self) -> &'static [Unit] {
        match self {
            Self::Weight => weight::UNITS,
            Self::Volume => volume::UNITS,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Volume => "volume",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A registered unit of measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Kilogram,
    Gram,
    Pound,
    Liter,
    Milliliter,
    Gallon,
    /// Also what any plain "ounce" token means.
    FluidOunce,
}

impl Unit {
    /// Resolve a token against the registry.
    #[must_use]
    pub fn lookup(token: &str) -> Option<Self> {
        let key = normalize_token(token);
        if key.is_empty() {
            return None;
        }

        weight::ALIASES
            .iter()
            .chain(volume::ALIASES)
            .find(|(alias, _)| *alias == key)
            .map(|(_, unit)| *unit)
    }

    /// Resolve a token, failing with [`PriceError::UnknownUnit`].
    pub fn parse(token: &str) -> Result<Self, PriceError> {
        Self::lookup(token).ok_or_else(|| PriceError::UnknownUnit(token.trim().to_string()))
    }

    #[must_use]
    pub fn category(self) -> Category {
        match self {
            Self::Kilogram | Self::Gram | Self::Pound => Category::Weight,
            Self::Liter | Self::Milliliter | Self::Gallon | Self::FluidOunce => Category::Volume,
        }
    }

    /// How many base units (kg or L) one of this unit equals.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::Kilogram | Self::Liter => 1.0,
            Self::Gram => weight::KILOGRAMS_PER_GRAM,
            Self::Pound => weight::KILOGRAMS_PER_POUND,
            Self::Milliliter => volume::LITERS_PER_MILLILITER,
            Self::Gallon => volume::LITERS_PER_GALLON,
            Self::FluidOunce => volume::LITERS_PER_FLUID_OUNCE,
        }
    }

    /// Canonical short token.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Kilogram => "kg",
            Self::Gram => "g",
            Self::Pound => "lb",
            Self::Liter => "L",
            Self::Milliliter => "ml",
            Self::Gallon => "gal",
            Self::FluidOunce => "fl oz",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Kilogram => "kilogram",
            Self::Gram => "gram",
            Self::Pound => "pound",
            Self::Liter => "liter",
            Self::Milliliter => "milliliter",
            Self::Gallon => "gallon",
            Self::FluidOunce => "fluid ounce",
        }
    }

    #[must_use]
    pub fn is_compatible_with(self, other: Self) -> bool {
        self.category() == other.category()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Conversion factor of a unit token to its base unit.
pub fn factor_of(token: &str) -> Result<f64, PriceError> {
    Unit::parse(token).map(Unit::factor)
}

/// Whether two unit tokens are both known and in the same category.
#[must_use]
pub fn are_compatible(a: &str, b: &str) -> bool {
    match (Unit::lookup(a), Unit::lookup(b)) {
        (Some(a), Some(b)) => a.is_compatible_with(b),
        _ => false,
    }
}

/// Every registered unit, weight first.
pub fn all_units() -> impl Iterator<Item = Unit> {
    weight::UNITS.iter().chain(volume::UNITS).copied()
}

/// Lowercase, drop dots and collapse inner whitespace.
fn normalize_token(token: &str) -> String {
    token
        .to_lowercase()
        .replace('.', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a user-typed amount with decimal separator heuristics.
///
/// - Default: `.` is decimal
/// - `,` is decimal if followed by 1-2 digits (not 3)
/// - When both present, the last separator is decimal
/// - "nan", "inf" and overflowing literals are rejected
pub fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let value: f64 = match (s.rfind('.'), s.rfind(',')) {
        (Some(dot_pos), Some(comma_pos)) if comma_pos > dot_pos => {
            // "1.000,5" -> "1000.5"
            s.replace('.', "").replace(',', ".").parse().ok()
        }
        (Some(_), Some(_)) => s.replace(',', "").parse().ok(),
        (None, Some(_)) => {
            let parts: Vec<&str> = s.split(',').collect();
            if parts.len() == 2 && parts[1].len() <= 2 {
                s.replace(',', ".").parse().ok()
            } else {
                // Thousands separators
                s.replace(',', "").parse().ok()
            }
        }
        _ => s.parse().ok(),
    }?;
    value.is_finite().then_some(value)
}
