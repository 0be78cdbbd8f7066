//! Terminal rendering for comparison reports and unit listings.
//!
//! Colors:
//! - Cheaper: green
//! - Same: yellow
//! - More expensive: red
//! - Labels: dimmed

use colored::{Color, Colorize};
use pricecheck_core::{
    format_percentage, format_price_with_symbol, units, Category, ComparisonResult,
    FormatOptions, Verdict,
};
use serde::Serialize;

/// Rendering settings resolved from CLI, env and config.
#[derive(Debug, Clone)]
pub struct Style {
    pub symbol: String,
    pub format: FormatOptions,
}

/// A comparison together with the units it was evaluated in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareReport {
    /// Unit both prices are expressed per.
    pub unit: String,
    /// Reference price as given, before alignment.
    pub original_reference_price: f64,
    pub original_reference_unit: String,
    pub result: ComparisonResult,
    pub verdict: Verdict,
    pub summary: String,
}

fn verdict_color(verdict: Verdict) -> Color {
    match verdict {
        Verdict::Cheaper => Color::Green,
        Verdict::Same => Color::Yellow,
        Verdict::MoreExpensive => Color::Red,
    }
}

fn label(text: &str) -> String {
    format!("{:<12}", text).dimmed().to_string()
}

/// Multi-line human report.
pub fn render_report(report: &CompareReport, style: &Style) -> String {
    let price = |p: f64| format_price_with_symbol(p, &style.symbol, style.format);
    let result = &report.result;
    let mut lines = Vec::new();

    let mut reference_line = format!(
        "{}{} / {}",
        label("Reference"),
        price(result.reference_price),
        report.unit
    );
    if !report.original_reference_unit.eq_ignore_ascii_case(&report.unit) {
        reference_line.push_str(
            &format!(
                "  (from {} / {})",
                price(report.original_reference_price),
                report.original_reference_unit
            )
            .dimmed()
            .to_string(),
        );
    }
    lines.push(reference_line);

    lines.push(format!(
        "{}{} / {}",
        label("You paid"),
        price(result.user_price),
        report.unit
    ));

    let signed_difference = result.user_price - result.reference_price;
    lines.push(format!(
        "{}{} ({})",
        label("Difference"),
        price(signed_difference),
        format_percentage(result.percentage_difference)
    ));

    lines.push(
        format!("▶ {}", report.summary)
            .color(verdict_color(report.verdict))
            .bold()
            .to_string(),
    );

    lines.join("\n")
}

/// Render a quantity with up to six decimals, trailing zeros removed.
pub fn format_quantity(value: f64) -> String {
    let formatted = format!("{:.6}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Registry entry for `units --json`.
#[derive(Debug, Serialize)]
pub struct UnitEntry {
    pub symbol: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub factor: f64,
    pub base: &'static str,
}

pub fn unit_entries() -> Vec<UnitEntry> {
    units::all_units()
        .map(|u| UnitEntry {
            symbol: u.symbol(),
            name: u.name(),
            category: u.category(),
            factor: u.factor(),
            base: u.category().base_unit().symbol(),
        })
        .collect()
}

/// Registry listing grouped by category.
pub fn render_units() -> String {
    let mut lines = Vec::new();
    for category in [Category::Weight, Category::Volume] {
        let base = category.base_unit();
        lines.push(
            format!("{} (base: {})", category.name().to_uppercase(), base.symbol())
                .bold()
                .to_string(),
        );
        for unit in category.units() {
            lines.push(format!(
                "  {:<6} {:<12} {}",
                unit.symbol().cyan(),
                unit.name(),
                format!("= {} {}", unit.factor(), base.symbol()).dimmed()
            ));
        }
    }
    lines.push(String::new());
    lines.push("Ounces are always fluid ounces (volume).".dimmed().to_string());
    lines.join("\n")
}
