//! Price comparison with a relative equivalence tolerance.
//!
//! Grocery sub-unit prices can be fractions of a cent ($0.002 per ml), so
//! "paying the same" is decided relative to the reference price, with a
//! tiny absolute floor that only absorbs floating-point noise. A fixed
//! "within one cent" rule would call $0.0054 and $0.00799 the same price.

use serde::{Deserialize, Serialize};

use crate::error::PriceError;
use crate::types::{ComparisonResult, PricePerUnit};

/// Prices within 1% of the reference are considered the same.
pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 0.01;

/// Smallest absolute difference ever reported as a real difference.
pub const DEFAULT_EPSILON_FLOOR: f64 = 1e-6;

/// Default absolute tolerance for [`nearly_equal_default`].
pub const DEFAULT_NEARLY_EQUAL_TOLERANCE: f64 = 1e-9;

/// Tunables for the equivalence verdict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Fraction of the reference price (0.01 = 1%).
    pub relative_tolerance: f64,
    /// Absolute lower bound of the equivalence threshold.
    pub epsilon_floor: f64,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            relative_tolerance: DEFAULT_RELATIVE_TOLERANCE,
            epsilon_floor: DEFAULT_EPSILON_FLOOR,
        }
    }
}

impl ComparisonConfig {
    /// Differences strictly below this are "the same price".
    #[must_use]
    pub fn threshold_for(&self, reference_price: f64) -> f64 {
        self.epsilon_floor
            .max(reference_price.abs() * self.relative_tolerance)
    }
}

/// Compare two unit-aligned prices using the default tolerances.
///
/// # Examples
///
/// ```
/// use pricecheck_core::compare;
///
/// let result = compare(0.00799, 0.0054);
/// assert!(!result.is_equivalent);
/// assert!(!result.is_cheaper);
/// assert!((result.percentage_difference - 47.96).abs() < 0.01);
/// ```
#[must_use]
pub fn compare(user_price: f64, reference_price: f64) -> ComparisonResult {
    compare_with(user_price, reference_price, &ComparisonConfig::default())
}

/// Compare two unit-aligned prices with explicit tolerances.
#[must_use]
pub fn compare_with(
    user_price: f64,
    reference_price: f64,
    config: &ComparisonConfig,
) -> ComparisonResult {
    let difference = user_price - reference_price;
    let absolute_difference = difference.abs();

    // A zero reference has no meaningful relative difference.
    let percentage_difference = if reference_price == 0.0 {
        0.0
    } else {
        difference / reference_price * 100.0
    };

    let is_equivalent = absolute_difference < config.threshold_for(reference_price);

    tracing::debug!(
        "compare {} vs {}: diff {} ({:.2}%), equivalent = {}",
        user_price,
        reference_price,
        absolute_difference,
        percentage_difference,
        is_equivalent
    );

    ComparisonResult {
        user_price,
        reference_price,
        absolute_difference,
        percentage_difference,
        is_cheaper: user_price < reference_price,
        is_equivalent,
    }
}

/// Compare two per-unit prices that may be in different units.
///
/// The reference is re-expressed per one of the user's unit, so the
/// result's prices are both "per user unit".
pub fn compare_prices(
    user: &PricePerUnit,
    reference: &PricePerUnit,
    config: &ComparisonConfig,
) -> Result<ComparisonResult, PriceError> {
    let aligned = reference.to_unit(user.unit)?;
    Ok(compare_with(user.price, aligned.price, config))
}

/// Plain absolute-tolerance float equality.
///
/// For general numeric checks; the pricing verdict uses [`compare`].
#[must_use]
pub fn nearly_equal(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

/// [`nearly_equal`] with [`DEFAULT_NEARLY_EQUAL_TOLERANCE`].
#[must_use]
pub fn nearly_equal_default(a: f64, b: f64) -> bool {
    nearly_equal(a, b, DEFAULT_NEARLY_EQUAL_TOLERANCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Verdict;
    use crate::units::Unit;

    #[test]
    fn test_small_magnitudes_are_distinguished() {
        let result = compare(0.00799, 0.0054);
        assert!(!result.is_equivalent);
        assert!(!result.is_cheaper);
        assert!((result.percentage_difference - 47.96).abs() < 0.005);
        assert_eq!(result.verdict(), Verdict::MoreExpensive);
    }

    #[test]
    fn test_equal_prices_are_equivalent() {
        let result = compare(0.00799, 0.00799);
        assert!(result.is_equivalent);
        assert!(!result.is_cheaper);
        assert_eq!(result.absolute_difference, 0.0);
        assert_eq!(result.percentage_difference, 0.0);
        assert_eq!(result.verdict(), Verdict::Same);
    }

    #[test]
    fn test_zero_reference() {
        let result = compare(10.0, 0.0);
        assert_eq!(result.percentage_difference, 0.0);
        assert_eq!(result.absolute_difference, 10.0);
        assert!(!result.is_equivalent);
        assert!(!result.is_cheaper);

        assert!(compare(0.0, 0.0).is_equivalent);
    }

    #[test]
    fn test_within_one_percent_is_same() {
        // 0.5% above the reference
        let result = compare(10.05, 10.0);
        assert!(result.is_equivalent);
        assert!(!result.is_cheaper);

        // Just under: sign still reported even though the verdict is "same"
        let result = compare(9.95, 10.0);
        assert!(result.is_equivalent);
        assert!(result.is_cheaper);
        assert_eq!(result.verdict(), Verdict::Same);
    }

    #[test]
    fn test_outside_one_percent_differs() {
        let result = compare(10.2, 10.0);
        assert!(!result.is_equivalent);
        assert!((result.percentage_difference - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_not_a_cent_threshold() {
        // Half a cent apart at sub-cent scale is a large relative gap
        assert!(!compare(0.002, 0.007).is_equivalent);
        // A cent apart at $50 is well inside 1%
        assert!(compare(50.01, 50.0).is_equivalent);
    }

    #[test]
    fn test_epsilon_floor_absorbs_noise() {
        let config = ComparisonConfig {
            relative_tolerance: 0.0,
            ..Default::default()
        };
        assert!(compare_with(0.1 + 0.2, 0.3, &config).is_equivalent);
        assert!(!compare_with(0.30001, 0.3, &config).is_equivalent);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let config = ComparisonConfig {
            relative_tolerance: 0.5,
            ..Default::default()
        };
        // Difference exactly at the threshold is a real difference
        assert!(!compare_with(1.5, 1.0, &config).is_equivalent);
        assert!(!compare_with(0.5, 1.0, &config).is_equivalent);
        assert!(compare_with(1.25, 1.0, &config).is_equivalent);

        let floor_only = ComparisonConfig {
            relative_tolerance: 0.0,
            epsilon_floor: 0.25,
        };
        assert!(!compare_with(1.25, 1.0, &floor_only).is_equivalent);
        assert!(compare_with(1.125, 1.0, &floor_only).is_equivalent);
    }

    #[test]
    fn test_negative_reference_uses_magnitude() {
        let config = ComparisonConfig {
            relative_tolerance: 0.5,
            ..Default::default()
        };
        assert_eq!(config.threshold_for(-2.0), 1.0);
        assert_eq!(config.threshold_for(2.0), 1.0);

        assert!(compare_with(-1.25, -1.0, &config).is_equivalent);
        assert!(!compare_with(-1.5, -1.0, &config).is_equivalent);

        let result = compare_with(-1.5, -1.0, &config);
        assert!(result.is_cheaper);
        assert_eq!(result.percentage_difference, 50.0);
    }

    #[test]
    fn test_custom_tolerance() {
        let config = ComparisonConfig {
            relative_tolerance: 0.05,
            ..Default::default()
        };
        assert!(compare_with(10.4, 10.0, &config).is_equivalent);
        assert!(!compare(10.4, 10.0).is_equivalent);
    }

    #[test]
    fn test_compare_prices_across_units() {
        let reference = PricePerUnit::new(28.95, Unit::Kilogram);
        let user = PricePerUnit::new(12.99, Unit::Pound);
        let result = compare_prices(&user, &reference, &ComparisonConfig::default()).unwrap();

        assert!((result.reference_price - 13.1315).abs() < 1e-3);
        assert!(result.is_cheaper);
        assert!(!result.is_equivalent);
        assert!((result.percentage_difference - -1.08).abs() < 0.01);
    }

    #[test]
    fn test_compare_prices_incompatible() {
        let reference = PricePerUnit::new(2.0, Unit::Liter);
        let user = PricePerUnit::new(1.0, Unit::Kilogram);
        assert!(matches!(
            compare_prices(&user, &reference, &ComparisonConfig::default()),
            Err(PriceError::IncompatibleUnits { .. })
        ));
    }

    #[test]
    fn test_nearly_equal() {
        assert!(nearly_equal_default(0.1 + 0.2, 0.3));
        assert!(!nearly_equal_default(0.3001, 0.3));
        assert!(nearly_equal(1.0, 1.05, 0.1));
        assert!(!nearly_equal(1.0, 1.2, 0.1));
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: ComparisonConfig =
            serde_json::from_str(r#"{"relative_tolerance": 0.02}"#).unwrap();
        assert_eq!(config.relative_tolerance, 0.02);
        assert_eq!(config.epsilon_floor, DEFAULT_EPSILON_FLOOR);
    }
}
