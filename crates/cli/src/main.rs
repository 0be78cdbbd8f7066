mod config;
mod pretty;

use config::Config;

use clap::{Args, Parser, Subcommand};
use colored::{control::set_override, Colorize};
use pricecheck_core::{
    compare_with, describe, divide_by_quantity, format_price_with_symbol, price_per_unit, units,
    ComparisonConfig, FormatOptions, PriceCheck, PriceError, PricePerUnit, Quantity, Unit,
};
use serde::Serialize;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use crate::pretty::{CompareReport, Style};

const LONG_ABOUT: &str = r##"
Pricecheck compares what you paid for a grocery item against a reference
per-unit price, converting between units of weight and volume as needed.

UNITS:
  Weight:   kg, g, lb            (base: kg)
  Volume:   L, ml, gal, fl oz    (base: L)
  Ounces (oz, ounce) are always fluid ounces. Weight <-> volume
  conversions are rejected.

EXAMPLES:
  pricecheck convert 1 kg lb                  Convert a quantity
  pricecheck convert-price 28.95 kg lb        Price per kg -> price per lb
  pricecheck compare --paid 12.99 --unit lb --reference 28.95 --reference-unit kg
  pricecheck compare --paid 4.49 --quantity 750 --unit ml --reference 5 --reference-unit l
  pricecheck units                            List known units

COMPARISON:
  Prices within 1% of the reference (configurable) count as "the same".
  Sub-cent prices are shown with 4 decimals (5 with --official).

CONFIGURATION:
  Settings can be configured via CLI flags, environment variables, or config file.
  Precedence: CLI args > Environment vars > Config file > Defaults

  Setting            | CLI flag          | Env var                       | Default
  -------------------|-------------------|-------------------------------|--------
  currency_symbol    | --currency-symbol | PRICECHECK_CURRENCY_SYMBOL    | $
  relative_tolerance | --tolerance       | PRICECHECK_RELATIVE_TOLERANCE | 0.01
  epsilon_floor      |                   | PRICECHECK_EPSILON_FLOOR      | 0.000001
  official           | --official        | PRICECHECK_OFFICIAL           | false
  no_color           | -C, --no-color    | PRICECHECK_NO_COLOR           | false

  Config file location: pricecheck --config-path
  Generate default config: pricecheck --config-init

  Boolean env vars accept true/false, 1/0, yes/no or on/off.
  Note: NO_COLOR env var is also respected (https://no-color.org/)"##;

#[derive(Parser)]
#[command(name = "pricecheck")]
#[command(version)]
#[command(about = "Compare grocery prices across units of weight and volume")]
#[command(long_about = LONG_ABOUT)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Output results as JSON (for scripting/piping)
    #[arg(long, short = 'j', global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, short = 'C', global = true)]
    no_color: bool,

    /// Currency symbol printed in front of prices
    #[arg(long, global = true, value_name = "SYMBOL")]
    currency_symbol: Option<String>,

    /// Relative tolerance for "same price" (0.01 = 1%)
    #[arg(long, global = true, value_name = "FRACTION")]
    tolerance: Option<f64>,

    /// Treat prices as official reference data (extra sub-cent digit)
    #[arg(long, global = true)]
    official: bool,

    /// Enable verbose logging (use multiple times for more detail)
    ///
    /// -v shows debug messages, -vv shows trace messages.
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Show config file path
    #[arg(long)]
    config_path: bool,

    /// Generate default config file (see --config-path for location)
    #[arg(long)]
    config_init: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a quantity between units of the same category
    Convert {
        /// Amount to convert (accepts "1,5" as 1.5)
        #[arg(value_parser = parse_amount, allow_negative_numbers = true)]
        value: f64,
        /// Unit the amount is in
        from: String,
        /// Unit to convert to
        to: String,
    },

    /// Convert a price per one unit into a price per another unit
    ConvertPrice {
        /// Price per one FROM
        #[arg(value_parser = parse_amount)]
        price: f64,
        /// Unit the price is per
        from: String,
        /// Unit to express the price per
        to: String,
    },

    /// Compare what you paid against a reference per-unit price
    Compare(CompareArgs),

    /// List known units
    Units,
}

#[derive(Args)]
struct CompareArgs {
    /// Total price you paid
    #[arg(long, value_parser = parse_amount)]
    paid: f64,

    /// Quantity you bought, in --unit
    #[arg(long, short = 'q', value_parser = parse_amount, default_value = "1")]
    quantity: f64,

    /// Unit of the quantity you bought
    #[arg(long, short = 'u')]
    unit: String,

    /// Reference price per one --reference-unit (e.g. an average)
    #[arg(long, short = 'r', value_parser = parse_amount)]
    reference: f64,

    /// Unit the reference price is per
    #[arg(long)]
    reference_unit: String,
}

/// Parse an amount with decimal separator heuristics.
fn parse_amount(s: &str) -> Result<f64, String> {
    units::parse_number(s).ok_or_else(|| format!("invalid amount: '{}'", s))
}

/// Resolved settings for this run.
struct Settings {
    comparison: ComparisonConfig,
    style: Style,
}

fn resolve_settings(cli: &Cli, file_config: &Config) -> Settings {
    let mut comparison = file_config.comparison();
    if let Some(t) = cli.tolerance {
        tracing::debug!("relative_tolerance = {} (from CLI)", t);
        comparison.relative_tolerance = t;
    } else {
        tracing::debug!("relative_tolerance = {}", comparison.relative_tolerance);
    }
    tracing::debug!("epsilon_floor = {}", comparison.epsilon_floor);

    let symbol = cli
        .currency_symbol
        .clone()
        .unwrap_or_else(|| file_config.currency_symbol());
    tracing::debug!("currency_symbol = {}", symbol);

    let official = cli.official || file_config.official();
    tracing::debug!("official = {}", official);

    Settings {
        comparison,
        style: Style {
            symbol,
            format: FormatOptions { official },
        },
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => fail(&e.to_string()),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}: {}", "error".red().bold(), message);
    std::process::exit(1);
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConversionOutput<'a> {
    value: f64,
    from: &'a str,
    to: &'a str,
    result: f64,
}

fn handle_convert(value: f64, from: &str, to: &str, json: bool) -> Result<(), PriceError> {
    let from_unit = Unit::parse(from)?;
    let to_unit = Unit::parse(to)?;
    let result = pricecheck_core::convert_value(value, from_unit, to_unit)?;

    if json {
        print_json(&ConversionOutput {
            value,
            from: from_unit.symbol(),
            to: to_unit.symbol(),
            result,
        });
    } else {
        println!(
            "{} {} = {} {}",
            pretty::format_quantity(value),
            from_unit,
            pretty::format_quantity(result).bold(),
            to_unit
        );
    }
    Ok(())
}

fn handle_convert_price(
    price: f64,
    from: &str,
    to: &str,
    json: bool,
    settings: &Settings,
) -> Result<(), PriceError> {
    let original = PricePerUnit::new(price, Unit::parse(from)?);
    let converted = original.to_unit(Unit::parse(to)?)?;

    if json {
        print_json(&ConversionOutput {
            value: price,
            from: original.unit.symbol(),
            to: converted.unit.symbol(),
            result: converted.price,
        });
    } else {
        let style = &settings.style;
        println!(
            "{} / {} = {} / {}",
            format_price_with_symbol(original.price, &style.symbol, style.format),
            original.unit,
            format_price_with_symbol(converted.price, &style.symbol, style.format).bold(),
            converted.unit
        );
    }
    Ok(())
}

/// Build the comparison, expressed per the user's unit.
fn build_report(args: &CompareArgs, settings: &Settings) -> Result<CompareReport, PriceError> {
    let user_token = args.unit.trim();
    let reference_token = args.reference_unit.trim();

    let (unit, result) = if user_token.eq_ignore_ascii_case(reference_token) {
        // Same token on both sides needs no registry lookup, so per-item
        // prices ("unit", "each") compare directly.
        tracing::debug!("units match ({}), skipping conversion", user_token);
        let paid = divide_by_quantity(args.paid, args.quantity)?;
        let result = compare_with(paid, args.reference, &settings.comparison);
        (user_token.to_string(), result)
    } else {
        let quantity = Quantity::parse(args.quantity, user_token)?;
        let paid = price_per_unit(args.paid, quantity)?;
        let reference = PricePerUnit::new(args.reference, Unit::parse(reference_token)?);
        let engine = PriceCheck::with_config(settings.comparison);
        let result = engine.compare_prices(&paid, &reference)?;
        (paid.unit.symbol().to_string(), result)
    };

    Ok(CompareReport {
        unit,
        original_reference_price: args.reference,
        original_reference_unit: reference_token.to_string(),
        verdict: result.verdict(),
        summary: describe(&result, &settings.style.symbol, settings.style.format),
        result,
    })
}

fn handle_compare(args: &CompareArgs, json: bool, settings: &Settings) -> Result<(), PriceError> {
    let report = build_report(args, settings)?;
    if json {
        print_json(&report);
    } else {
        println!("{}", pretty::render_report(&report, &settings.style));
    }
    Ok(())
}

fn handle_units(json: bool) {
    if json {
        print_json(&pretty::unit_entries());
    } else {
        println!("{}", pretty::render_units());
    }
}

fn main() {
    let cli = Cli::parse();

    // Handle --config-path
    if cli.config_path {
        match Config::path() {
            Some(path) => println!("{}", path.display()),
            None => fail("Cannot determine config directory"),
        }
        return;
    }

    // Handle --config-init
    if cli.config_init {
        match config::init_config() {
            Ok(path) => println!("Created config file: {}", path.display()),
            Err(e) => fail(&e),
        }
        return;
    }

    // Initialize tracing based on verbosity level (before config loading for logging)
    let level = match cli.verbose {
        0 => LevelFilter::OFF,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    if level != LevelFilter::OFF {
        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    // Precedence: CLI args > Environment vars > Config file > Defaults
    let file_config = Config::load();
    if let Some(path) = Config::path() {
        if path.exists() {
            tracing::debug!("Loaded config from: {}", path.display());
        } else {
            tracing::trace!("No config file at: {}", path.display());
        }
    }

    if cli.no_color || file_config.no_color() {
        tracing::debug!("no_color = true");
        set_override(false);
    }

    let settings = resolve_settings(&cli, &file_config);

    let Some(command) = &cli.command else {
        handle_units(cli.json);
        return;
    };

    let outcome = match command {
        Command::Convert { value, from, to } => handle_convert(*value, from, to, cli.json),
        Command::ConvertPrice { price, from, to } => {
            handle_convert_price(*price, from, to, cli.json, &settings)
        }
        Command::Compare(args) => handle_compare(args, cli.json, &settings),
        Command::Units => {
            handle_units(cli.json);
            Ok(())
        }
    };

    if let Err(e) = outcome {
        tracing::debug!("failed with {}", e.kind());
        fail(&e.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings {
            comparison: ComparisonConfig::default(),
            style: Style {
                symbol: "$".to_string(),
                format: FormatOptions::default(),
            },
        }
    }

    fn args(
        paid: f64,
        quantity: f64,
        unit: &str,
        reference: f64,
        reference_unit: &str,
    ) -> CompareArgs {
        CompareArgs {
            paid,
            quantity,
            unit: unit.to_string(),
            reference,
            reference_unit: reference_unit.to_string(),
        }
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12,99"), Ok(12.99));
        assert!(parse_amount("twelve").is_err());
        assert_eq!(parse_amount("nan"), Err("invalid amount: 'nan'".to_string()));
        assert!(parse_amount("inf").is_err());
    }

    #[test]
    fn test_report_pound_vs_kilogram() {
        let report = build_report(&args(12.99, 1.0, "lb", 28.95, "kg"), &settings()).unwrap();
        assert_eq!(report.unit, "lb");
        assert!((report.result.reference_price - 13.1315).abs() < 1e-3);
        assert!(report.result.is_cheaper);
        assert!(!report.result.is_equivalent);
    }

    #[test]
    fn test_report_per_item() {
        let report = build_report(&args(6.0, 12.0, "unit", 0.5, "Unit"), &settings()).unwrap();
        assert_eq!(report.unit, "unit");
        assert!(report.result.is_equivalent);
    }

    #[test]
    fn test_report_errors() {
        assert_eq!(
            build_report(&args(1.0, 0.0, "kg", 1.0, "kg"), &settings()).unwrap_err(),
            PriceError::ZeroQuantity
        );
        assert!(matches!(
            build_report(&args(1.0, 1.0, "kg", 1.0, "l"), &settings()),
            Err(PriceError::IncompatibleUnits { .. })
        ));
        assert_eq!(
            build_report(&args(1.0, 1.0, "kg", 1.0, "bushel"), &settings()).unwrap_err(),
            PriceError::UnknownUnit("bushel".to_string())
        );
    }

    #[test]
    fn test_report_rejects_non_finite_quantity() {
        // Converted path and same-unit path go through the same check
        assert!(matches!(
            build_report(&args(12.99, f64::NAN, "lb", 28.95, "kg"), &settings()),
            Err(PriceError::InvalidQuantity(_))
        ));
        assert_eq!(
            build_report(&args(12.99, f64::INFINITY, "lb", 28.95, "kg"), &settings()).unwrap_err(),
            PriceError::InvalidQuantity(f64::INFINITY)
        );
        assert!(matches!(
            build_report(&args(5.40, f64::NAN, "unit", 0.45, "unit"), &settings()),
            Err(PriceError::InvalidQuantity(_))
        ));
        assert_eq!(
            build_report(&args(5.40, -2.0, "each", 0.45, "each"), &settings()).unwrap_err(),
            PriceError::NegativeQuantity(-2.0)
        );
    }
}
