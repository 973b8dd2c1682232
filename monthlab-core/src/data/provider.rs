//! Data provider trait and structured error types.
//!
//! The DataProvider trait abstracts over price sources (Yahoo Finance, CSV
//! export, synthetic walk) so the analysis pipeline can be run offline and
//! mocked in tests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::domain::DailyObservation;

/// Raw daily bar from a data provider (before reduction to adjusted close).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    pub adj_close: f64,
}

impl RawBar {
    /// Price used for performance: adjusted close, else close.
    pub fn analysis_price(&self) -> Option<f64> {
        if self.adj_close.is_finite() {
            Some(self.adj_close)
        } else if self.close.is_finite() {
            Some(self.close)
        } else {
            None
        }
    }
}

/// Structured error types for data operations.
///
/// These are displayable in both CLI and TUI contexts.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("rate limited by provider (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("authentication required: {0}")]
    AuthenticationRequired(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("hard stop: data provider has blocked requests (circuit breaker tripped)")]
    CircuitBreakerTripped,

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("data error: {0}")]
    Other(String),
}

/// Result of a successful data fetch for a single symbol.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub symbol: String,
    pub bars: Vec<RawBar>,
    pub source: DataSource,
}

impl FetchResult {
    /// Reduce bars to adjusted-close observations. Bars without any usable
    /// price are skipped.
    pub fn observations(&self) -> Vec<DailyObservation> {
        observations_from_bars(&self.bars)
    }
}

/// Where the data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    YahooFinance,
    CsvImport,
    Synthetic,
}

impl DataSource {
    pub fn label(self) -> &'static str {
        match self {
            DataSource::YahooFinance => "Yahoo Finance",
            DataSource::CsvImport => "CSV import",
            DataSource::Synthetic => "synthetic",
        }
    }
}

/// Trait for price providers (Yahoo Finance, CSV import, synthetic).
///
/// Implementations handle the specifics of fetching data from one source.
pub trait DataProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch daily bars for a symbol over an inclusive date range.
    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<FetchResult, DataError>;

    /// Check if the provider is currently available (not rate-limited, not blocked).
    fn is_available(&self) -> bool;
}

/// Reduce raw bars to observations, skipping bars with no usable price.
pub fn observations_from_bars(bars: &[RawBar]) -> Vec<DailyObservation> {
    let mut skipped = 0usize;
    let observations: Vec<DailyObservation> = bars
        .iter()
        .filter_map(|bar| match bar.analysis_price() {
            Some(price) => Some(DailyObservation::new(bar.date, price)),
            None => {
                skipped += 1;
                None
            }
        })
        .collect();
    if skipped > 0 {
        warn!(skipped, "skipped bars without a usable close price");
    }
    observations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(day: u32, close: f64, adj_close: f64) -> RawBar {
        RawBar {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            open: close,
            high: close,
            low: close,
            close,
            volume: 1_000,
            adj_close,
        }
    }

    #[test]
    fn prefers_adjusted_close() {
        assert_eq!(bar(2, 100.0, 98.5).analysis_price(), Some(98.5));
    }

    #[test]
    fn falls_back_to_close() {
        assert_eq!(bar(2, 100.0, f64::NAN).analysis_price(), Some(100.0));
    }

    #[test]
    fn skips_bars_without_price() {
        let bars = vec![bar(2, 100.0, 99.0), bar(3, f64::NAN, f64::NAN), bar(4, 101.0, 100.0)];
        let obs = observations_from_bars(&bars);
        assert_eq!(obs.len(), 2);
        assert_eq!(obs[0].price, 99.0);
        assert_eq!(obs[1].price, 100.0);
    }

    #[test]
    fn error_messages_are_readable() {
        let err = DataError::SymbolNotFound {
            symbol: "NOPE".into(),
        };
        assert_eq!(err.to_string(), "symbol not found: NOPE");
    }
}
