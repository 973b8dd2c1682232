//! Analysis configuration — symbol and start date, loadable from TOML.
//!
//! ```toml
//! symbol = "TUPRS.IS"
//! start_date = "2010-01-01"
//! ```
//!
//! Both keys are optional; missing keys keep their defaults. The end date is
//! not configurable: analyses always run through today.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SYMBOL: &str = "TUPRS.IS";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("symbol must not be empty")]
    EmptySymbol,
}

/// Which symbol to analyze and from when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub symbol: String,
    pub start_date: NaiveDate,
}

/// On-disk shape; dates stay strings so TOML date literals and quoted
/// dates are both accepted.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    symbol: Option<String>,
    start_date: Option<toml::Value>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_SYMBOL.to_string(),
            start_date: NaiveDate::from_ymd_opt(2010, 1, 1).unwrap_or_default(),
        }
    }
}

impl AnalysisConfig {
    pub fn new(symbol: impl Into<String>, start_date: NaiveDate) -> Result<Self, ConfigError> {
        let symbol = symbol.into().trim().to_string();
        if symbol.is_empty() {
            return Err(ConfigError::EmptySymbol);
        }
        Ok(Self { symbol, start_date })
    }

    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        let defaults = Self::default();

        let start_date = match file.start_date {
            None => defaults.start_date,
            Some(toml::Value::String(s)) => parse_date(&s)?,
            Some(toml::Value::Datetime(dt)) => parse_date(&dt.to_string())?,
            Some(other) => {
                return Err(ConfigError::InvalidDate {
                    value: other.to_string(),
                })
            }
        };

        Self::new(file.symbol.unwrap_or(defaults.symbol), start_date)
    }

    /// Override fields from command-line values.
    pub fn with_overrides(
        mut self,
        symbol: Option<&str>,
        start: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if let Some(sym) = symbol {
            self = Self::new(sym, self.start_date)?;
        }
        if let Some(s) = start {
            self.start_date = parse_date(s)?;
        }
        Ok(self)
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| ConfigError::InvalidDate {
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn defaults() {
        let cfg = AnalysisConfig::default();
        assert_eq!(cfg.symbol, "TUPRS.IS");
        assert_eq!(cfg.start_date, d(2010, 1, 1));
    }

    #[test]
    fn quoted_date() {
        let cfg =
            AnalysisConfig::from_toml("symbol = \"SPY\"\nstart_date = \"2015-06-01\"\n").unwrap();
        assert_eq!(cfg.symbol, "SPY");
        assert_eq!(cfg.start_date, d(2015, 6, 1));
    }

    #[test]
    fn bare_toml_date() {
        let cfg = AnalysisConfig::from_toml("start_date = 2015-06-01\n").unwrap();
        assert_eq!(cfg.symbol, "TUPRS.IS");
        assert_eq!(cfg.start_date, d(2015, 6, 1));
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(AnalysisConfig::from_toml("").unwrap(), AnalysisConfig::default());
    }

    #[test]
    fn bad_date_fails() {
        let err = AnalysisConfig::from_toml("start_date = \"June 2015\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDate { .. }));
        let err = AnalysisConfig::from_toml("start_date = 5").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDate { .. }));
    }

    #[test]
    fn empty_symbol_fails() {
        let err = AnalysisConfig::from_toml("symbol = \"  \"").unwrap_err();
        assert!(matches!(err, ConfigError::EmptySymbol));
    }

    #[test]
    fn overrides_win() {
        let cfg = AnalysisConfig::default()
            .with_overrides(Some("AAPL"), Some("2020-01-02"))
            .unwrap();
        assert_eq!(cfg.symbol, "AAPL");
        assert_eq!(cfg.start_date, d(2020, 1, 2));
    }

    #[test]
    fn reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("monthlab.toml");
        std::fs::write(&path, "symbol = \"MSFT\"\n").unwrap();
        let cfg = AnalysisConfig::from_file(&path).unwrap();
        assert_eq!(cfg.symbol, "MSFT");
    }

    #[test]
    fn missing_file_fails() {
        let err = AnalysisConfig::from_file(Path::new("/no/such/monthlab.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
