//! Volume units.
//!
//! Base unit is the liter. Every ounce spelling, including a bare `oz`,
//! lands on [`Unit::FluidOunce`].

use super::Unit;

/// Liters in one US liquid gallon.
pub const LITERS_PER_GALLON: f64 = 3.78541;

/// Liters in one US fluid ounce.
pub const LITERS_PER_FLUID_OUNCE: f64 = 0.0295735;

/// Liters in one milliliter.
pub const LITERS_PER_MILLILITER: f64 = 0.001;

/// Registered volume units, largest first.
pub const UNITS: &[Unit] = &[
    Unit::Gallon,
    Unit::Liter,
    Unit::FluidOunce,
    Unit::Milliliter,
];

/// Accepted spellings, already lowercased and with dots removed.
pub(super) const ALIASES: &[(&str, Unit)] = &[
    // Metric - full names
    ("milliliters", Unit::Milliliter),
    ("milliliter", Unit::Milliliter),
    ("millilitres", Unit::Milliliter),
    ("millilitre", Unit::Milliliter),
    ("liters", Unit::Liter),
    ("liter", Unit::Liter),
    ("litres", Unit::Liter),
    ("litre", Unit::Liter),
    // Metric - abbreviations
    ("ml", Unit::Milliliter),
    ("l", Unit::Liter),
    // US customary
    ("gallons", Unit::Gallon),
    ("gallon", Unit::Gallon),
    ("gal", Unit::Gallon),
    ("fluid ounces", Unit::FluidOunce),
    ("fluid ounce", Unit::FluidOunce),
    ("fl oz", Unit::FluidOunce),
    ("floz", Unit::FluidOunce),
    ("ounces", Unit::FluidOunce),
    ("ounce", Unit::FluidOunce),
    ("oz", Unit::FluidOunce),
];
