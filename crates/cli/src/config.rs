//! Configuration file loading and environment variable handling.
//!
//! Precedence: CLI args > Environment vars > Config file > Defaults

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use pricecheck_core::{ComparisonConfig, DEFAULT_EPSILON_FLOOR, DEFAULT_RELATIVE_TOLERANCE};

/// Default config file content for `--config-init`.
pub const DEFAULT_CONFIG: &str = r#"# Pricecheck configuration
# See: pricecheck --help for all options

# Symbol printed in front of prices
currency_symbol = "$"

# Prices within this fraction of the reference count as "the same" (0.01 = 1%)
relative_tolerance = 0.01

# Absolute differences below this are always treated as rounding noise
epsilon_floor = 0.000001

# Treat reference prices as official data (one more digit on sub-cent prices)
official = false

# Disable colored output
no_color = false
"#;

/// Configuration loaded from file and environment.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: Option<String>,
    pub relative_tolerance: Option<f64>,
    pub epsilon_floor: Option<f64>,
    pub official: Option<bool>,
    pub no_color: Option<bool>,
}

impl Config {
    /// Get the config file path.
    ///
    /// - Linux/macOS: `~/.config/pricecheck/config.toml`
    /// - Windows: `%APPDATA%\pricecheck\config.toml`
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pricecheck").join("config.toml"))
    }

    /// Load config from the standard location. Returns default if missing.
    pub fn load() -> Self {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load config from a specific file. Returns default if unreadable.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };

        toml::from_str(&contents).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Read value from environment variable.
    fn env_var<T: std::str::FromStr>(name: &str) -> Option<T> {
        std::env::var(name).ok()?.parse().ok()
    }

    /// Get currency_symbol with precedence: env > config > default.
    pub fn currency_symbol(&self) -> String {
        std::env::var("PRICECHECK_CURRENCY_SYMBOL")
            .ok()
            .or_else(|| self.currency_symbol.clone())
            .unwrap_or_else(|| "$".to_string())
    }

    /// Get relative_tolerance with precedence: env > config > default.
    pub fn relative_tolerance(&self) -> f64 {
        Self::env_var("PRICECHECK_RELATIVE_TOLERANCE")
            .or(self.relative_tolerance)
            .unwrap_or(DEFAULT_RELATIVE_TOLERANCE)
    }

    /// Get epsilon_floor with precedence: env > config > default.
    pub fn epsilon_floor(&self) -> f64 {
        Self::env_var("PRICECHECK_EPSILON_FLOOR")
            .or(self.epsilon_floor)
            .unwrap_or(DEFAULT_EPSILON_FLOOR)
    }

    /// Read a boolean switch from the environment.
    ///
    /// Unrecognised values are ignored with a warning.
    fn env_flag(name: &str) -> Option<bool> {
        let value = std::env::var(name).ok()?;
        let flag = parse_flag(&value);
        if flag.is_none() {
            eprintln!(
                "Warning: Ignoring {}={:?} (expected true/false, 1/0, yes/no, on/off)",
                name, value
            );
        }
        flag
    }

    /// Get official with precedence: env > config > default.
    pub fn official(&self) -> bool {
        Self::env_flag("PRICECHECK_OFFICIAL")
            .or(self.official)
            .unwrap_or(false)
    }

    /// Get no_color with precedence: env > config > default.
    ///
    /// Respects the `NO_COLOR` standard (https://no-color.org/).
    pub fn no_color(&self) -> bool {
        // NO_COLOR: any non-empty value disables color
        if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            return true;
        }
        Self::env_flag("PRICECHECK_NO_COLOR")
            .or(self.no_color)
            .unwrap_or(false)
    }

    /// Comparison tolerances for the engine.
    pub fn comparison(&self) -> ComparisonConfig {
        ComparisonConfig {
            relative_tolerance: self.relative_tolerance(),
            epsilon_floor: self.epsilon_floor(),
        }
    }
}

/// Parse a boolean switch leniently (case-insensitive).
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Create a default config file at the standard location.
pub fn init_config() -> Result<PathBuf, String> {
    let path = Config::path().ok_or("Cannot determine config directory")?;
    write_default_config(&path)?;
    Ok(path)
}

fn write_default_config(path: &Path) -> Result<(), String> {
    if path.exists() {
        return Err(format!("Config file already exists: {}", path.display()));
    }

    // Create parent directory
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("Failed to create directory: {}", e))?;
    }

    fs::write(path, DEFAULT_CONFIG).map_err(|e| format!("Failed to write config: {}", e))
}
