//! Conversion between compatible units.
//!
//! Quantities scale with the size of the unit, prices per unit scale
//! inversely: 1 kg is 2.2 lb, but $1/kg is $0.45/lb.
//!
//! Converting between a unit and itself never touches the value, so
//! identity conversions are exact. Round trips through another unit are
//! only approximately exact, since the factors are not reciprocal in binary.

use crate::error::PriceError;
use crate::types::{PricePerUnit, Quantity};
use crate::units::Unit;

/// Convert a magnitude between two unit tokens.
///
/// Fails with [`PriceError::UnknownUnit`] if either token is not
/// registered, or [`PriceError::IncompatibleUnits`] if they measure
/// different things.
///
/// # Examples
///
/// ```
/// use pricecheck_core::convert_quantity;
///
/// assert_eq!(convert_quantity(1000.0, "g", "kg").unwrap(), 1.0);
/// assert!(convert_quantity(1.0, "kg", "l").is_err());
/// ```
pub fn convert_quantity(value: f64, from: &str, to: &str) -> Result<f64, PriceError> {
    convert_value(value, Unit::parse(from)?, Unit::parse(to)?)
}

/// Convert a price per one `from` into a price per one `to`.
///
/// # Examples
///
/// ```
/// use pricecheck_core::convert_price_per_unit;
///
/// let per_lb = convert_price_per_unit(28.95, "kg", "lb").unwrap();
/// assert!((per_lb - 13.1315).abs() < 1e-4);
/// ```
pub fn convert_price_per_unit(price: f64, from: &str, to: &str) -> Result<f64, PriceError> {
    convert_price_value(price, Unit::parse(from)?, Unit::parse(to)?)
}

/// Typed form of [`convert_quantity`].
pub fn convert_value(value: f64, from: Unit, to: Unit) -> Result<f64, PriceError> {
    if from == to {
        return Ok(value);
    }
    ensure_compatible(from, to)?;

    let converted = value * from.factor() / to.factor();
    tracing::trace!("{} {} = {} {}", value, from, converted, to);
    Ok(converted)
}

/// Typed form of [`convert_price_per_unit`].
pub fn convert_price_value(price: f64, from: Unit, to: Unit) -> Result<f64, PriceError> {
    if from == to {
        return Ok(price);
    }

    // One `to` holds this many `from`s, and costs that many times as much.
    let from_per_to = convert_value(1.0, to, from)?;
    let converted = price * from_per_to;
    tracing::trace!("{}/{} = {}/{}", price, from, converted, to);
    Ok(converted)
}

/// Normalize a purchase (price paid for a quantity) into a price per one
/// unit of the quantity's unit.
///
/// # Examples
///
/// ```
/// use pricecheck_core::{price_per_unit, Quantity, Unit};
///
/// let per_kg = price_per_unit(4.50, Quantity::new(0.5, Unit::Kilogram)).unwrap();
/// assert_eq!(per_kg.price, 9.0);
/// ```
pub fn price_per_unit(price: f64, quantity: Quantity) -> Result<PricePerUnit, PriceError> {
    let per_one = divide_by_quantity(price, quantity.value)?;
    Ok(PricePerUnit::new(per_one, quantity.unit))
}

/// Price of one item out of `quantity`, with no unit attached.
///
/// The quantity must be finite and greater than zero.
///
/// ```
/// use pricecheck_core::{divide_by_quantity, PriceError};
///
/// assert_eq!(divide_by_quantity(5.40, 12.0).unwrap(), 0.45);
/// assert_eq!(divide_by_quantity(1.0, 0.0), Err(PriceError::ZeroQuantity));
/// ```
pub fn divide_by_quantity(price: f64, quantity: f64) -> Result<f64, PriceError> {
    check_quantity(quantity)?;
    Ok(price / quantity)
}

/// NaN fails every ordering test, so finiteness is checked first.
fn check_quantity(value: f64) -> Result<(), PriceError> {
    if !value.is_finite() {
        Err(PriceError::InvalidQuantity(value))
    } else if value < 0.0 {
        Err(PriceError::NegativeQuantity(value))
    } else if value == 0.0 {
        Err(PriceError::ZeroQuantity)
    } else {
        Ok(())
    }
}

fn ensure_compatible(from: Unit, to: Unit) -> Result<(), PriceError> {
    if from.is_compatible_with(to) {
        Ok(())
    } else {
        Err(PriceError::IncompatibleUnits {
            from: from.symbol().to_string(),
            from_category: from.category().name(),
            to: to.symbol().to_string(),
            to_category: to.category().name(),
        })
    }
}
