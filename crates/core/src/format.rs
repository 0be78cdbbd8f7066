//! Magnitude-aware price rendering.
//!
//! The number of decimals follows the size of the price so that two prices
//! the comparison considers different never render as the same text:
//!
//! | price            | decimals                   |
//! |------------------|----------------------------|
//! | 0                | 2                          |
//! | (0, 0.01)        | 4, or 5 for official data  |
//! | [0.01, 1)        | 3                          |
//! | 1 and above      | 2                          |

use crate::types::{ComparisonResult, Verdict};

/// Rendering switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// The price comes from an authoritative reference source. Keeps one
    /// more digit on sub-cent prices so a converted reference price does
    /// not visibly round away.
    pub official: bool,
}

impl FormatOptions {
    #[must_use]
    pub const fn official() -> Self {
        Self { official: true }
    }
}

/// Decimal places used for `value`. Negative values use their magnitude.
#[must_use]
pub fn decimals_for(value: f64, options: FormatOptions) -> usize {
    let magnitude = value.abs();
    if magnitude == 0.0 {
        2
    } else if magnitude < 0.01 {
        if options.official {
            5
        } else {
            4
        }
    } else if magnitude < 1.0 {
        3
    } else {
        2
    }
}

/// Render a price without a currency symbol.
///
/// # Examples
///
/// ```
/// use pricecheck_core::{format_price, FormatOptions};
///
/// assert_eq!(format_price(0.0024, FormatOptions::default()), "0.0024");
/// assert_eq!(format_price(0.0024, FormatOptions::official()), "0.00240");
/// assert_eq!(format_price(1.5, FormatOptions::default()), "1.50");
/// ```
#[must_use]
pub fn format_price(value: f64, options: FormatOptions) -> String {
    // Also folds -0.0, which would otherwise print as "-0.00"
    if value == 0.0 {
        return "0.00".to_string();
    }
    format!("{:.prec$}", value, prec = decimals_for(value, options))
}

/// Render a price with a leading currency symbol, e.g. `$13.13` or `-$0.142`.
#[must_use]
pub fn format_price_with_symbol(value: f64, symbol: &str, options: FormatOptions) -> String {
    if value < 0.0 {
        format!("-{}{}", symbol, format_price(-value, options))
    } else {
        format!("{}{}", symbol, format_price(value, options))
    }
}

/// Render a signed percentage with two decimals: `+47.96%`, `-1.08%`.
#[must_use]
pub fn format_percentage(percentage: f64) -> String {
    if percentage.abs() < 0.005 {
        return "0.00%".to_string();
    }
    format!("{:+.2}%", percentage)
}

/// One-line summary of a comparison.
///
/// The difference is shown with the same precision policy as the prices.
#[must_use]
pub fn describe(result: &ComparisonResult, symbol: &str, options: FormatOptions) -> String {
    let difference = format_price_with_symbol(result.absolute_difference, symbol, options);
    let percentage = format_percentage(result.percentage_difference);

    match result.verdict() {
        Verdict::Same => format!(
            "You paid about the same as the reference price ({})",
            format_price_with_symbol(result.reference_price, symbol, options)
        ),
        Verdict::Cheaper => format!(
            "You paid {} less ({}) than the reference price",
            difference, percentage
        ),
        Verdict::MoreExpensive => format!(
            "You paid {} more ({}) than the reference price",
            difference, percentage
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::compare;

    const PLAIN: FormatOptions = FormatOptions { official: false };
    const OFFICIAL: FormatOptions = FormatOptions { official: true };

    #[test]
    fn test_zero() {
        assert_eq!(format_price(0.0, PLAIN), "0.00");
        assert_eq!(format_price(0.0, OFFICIAL), "0.00");
        assert_eq!(format_price(-0.0, PLAIN), "0.00");
    }

    #[test]
    fn test_sub_cent() {
        assert_eq!(format_price(0.0024, PLAIN), "0.0024");
        assert_eq!(format_price(0.0024, OFFICIAL), "0.00240");
        assert_eq!(format_price(0.00799, PLAIN), "0.0080");
        assert_eq!(format_price(0.00799, OFFICIAL), "0.00799");
        assert_eq!(format_price(0.0054, PLAIN), "0.0054");
    }

    #[test]
    fn test_below_one() {
        assert_eq!(format_price(0.01, PLAIN), "0.010");
        assert_eq!(format_price(0.123, PLAIN), "0.123");
        assert_eq!(format_price(0.123, OFFICIAL), "0.123");
        assert_eq!(format_price(0.5, PLAIN), "0.500");
    }

    #[test]
    fn test_one_and_above() {
        assert_eq!(format_price(1.0, PLAIN), "1.00");
        assert_eq!(format_price(1.5, PLAIN), "1.50");
        assert_eq!(format_price(28.95, OFFICIAL), "28.95");
        assert_eq!(format_price(1234.5, PLAIN), "1234.50");
    }

    #[test]
    fn test_decimals_for_negative_uses_magnitude() {
        assert_eq!(decimals_for(-0.005, PLAIN), 4);
        assert_eq!(decimals_for(-0.5, PLAIN), 3);
        assert_eq!(format_price(-0.142, PLAIN), "-0.142");
    }

    #[test]
    fn test_with_symbol() {
        assert_eq!(format_price_with_symbol(13.1315, "$", PLAIN), "$13.13");
        assert_eq!(format_price_with_symbol(0.0024, "€", OFFICIAL), "€0.00240");
        assert_eq!(format_price_with_symbol(-0.142, "$", PLAIN), "-$0.142");
        assert_eq!(format_price_with_symbol(0.0, "$", PLAIN), "$0.00");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(47.962962), "+47.96%");
        assert_eq!(format_percentage(-1.0776), "-1.08%");
        assert_eq!(format_percentage(0.0), "0.00%");
        assert_eq!(format_percentage(-0.001), "0.00%");
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            describe(&compare(12.99, 13.13), "$", PLAIN),
            "You paid $0.140 less (-1.07%) than the reference price"
        );
        assert_eq!(
            describe(&compare(0.00799, 0.0054), "$", PLAIN),
            "You paid $0.0026 more (+47.96%) than the reference price"
        );
        assert_eq!(
            describe(&compare(2.0, 2.01), "$", PLAIN),
            "You paid about the same as the reference price ($2.01)"
        );
    }
}
