//! Weight units.
//!
//! Base unit is the kilogram. Ounce tokens are deliberately absent here:
//! they resolve to the fluid ounce in [`super::volume`].

use super::Unit;

/// Kilograms in one international avoirdupois pound (exact by definition).
pub const KILOGRAMS_PER_POUND: f64 = 0.45359237;

/// Kilograms in one gram.
pub const KILOGRAMS_PER_GRAM: f64 = 0.001;

/// Registered weight units, largest first.
pub const UNITS: &[Unit] = &[Unit::Kilogram, Unit::Pound, Unit::Gram];

/// Accepted spellings, already lowercased.
pub(super) const ALIASES: &[(&str, Unit)] = &[
    // Metric - full names
    ("kilograms", Unit::Kilogram),
    ("kilogram", Unit::Kilogram),
    ("kilogrammes", Unit::Kilogram),
    ("kilogramme", Unit::Kilogram),
    ("kilos", Unit::Kilogram),
    ("kilo", Unit::Kilogram),
    ("grams", Unit::Gram),
    ("gram", Unit::Gram),
    ("grammes", Unit::Gram),
    ("gramme", Unit::Gram),
    // Metric - abbreviations
    ("kgs", Unit::Kilogram),
    ("kg", Unit::Kilogram),
    ("g", Unit::Gram),
    // Imperial
    ("pounds", Unit::Pound),
    ("pound", Unit::Pound),
    ("lbs", Unit::Pound),
    ("lb", Unit::Pound),
];
