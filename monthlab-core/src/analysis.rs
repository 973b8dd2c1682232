//! Fetch → transform → report pipeline.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

use crate::config::AnalysisConfig;
use crate::data::{DataError, DataProvider, DataSource};
use crate::performance::{PerformanceMatrix, TransformError};
use crate::report::PerformanceReport;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("fetch failed for {symbol} via {provider}: {source}")]
    Fetch {
        symbol: String,
        provider: String,
        source: DataError,
    },

    #[error("provider {provider} is unavailable")]
    Unavailable { provider: String },

    #[error("no usable prices for {symbol}: {source}")]
    Transform {
        symbol: String,
        source: TransformError,
    },
}

/// A finished analysis and where its prices came from.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub report: PerformanceReport,
    pub source: DataSource,
    pub observation_count: usize,
}

/// Fetch prices for `config.symbol` from `config.start_date` through `end`
/// and build the performance report.
pub fn analyze(
    provider: &dyn DataProvider,
    config: &AnalysisConfig,
    end: NaiveDate,
) -> Result<Analysis, AnalysisError> {
    if !provider.is_available() {
        return Err(AnalysisError::Unavailable {
            provider: provider.name().to_string(),
        });
    }

    let fetched = provider
        .fetch(&config.symbol, config.start_date, end)
        .map_err(|source| AnalysisError::Fetch {
            symbol: config.symbol.clone(),
            provider: provider.name().to_string(),
            source,
        })?;

    let observations = fetched.observations();
    let matrix =
        PerformanceMatrix::from_observations(&observations).map_err(|source| {
            AnalysisError::Transform {
                symbol: config.symbol.clone(),
                source,
            }
        })?;

    info!(
        symbol = %config.symbol,
        source = fetched.source.label(),
        observations = observations.len(),
        months = matrix.len(),
        "analysis complete"
    );

    Ok(Analysis {
        report: PerformanceReport::build(&config.symbol, config.start_date, end, &matrix),
        source: fetched.source,
        observation_count: observations.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{FetchResult, RawBar, SyntheticProvider};

    struct FixedProvider {
        bars: Vec<RawBar>,
        available: bool,
    }

    impl DataProvider for FixedProvider {
        fn name(&self) -> &str {
            "fixed"
        }

        fn fetch(
            &self,
            symbol: &str,
            _start: NaiveDate,
            _end: NaiveDate,
        ) -> Result<FetchResult, DataError> {
            if self.bars.is_empty() {
                return Err(DataError::SymbolNotFound {
                    symbol: symbol.to_string(),
                });
            }
            Ok(FetchResult {
                symbol: symbol.to_string(),
                bars: self.bars.clone(),
                source: DataSource::CsvImport,
            })
        }

        fn is_available(&self) -> bool {
            self.available
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn bar(date: NaiveDate, adj_close: f64) -> RawBar {
        RawBar {
            date,
            open: adj_close,
            high: adj_close,
            low: adj_close,
            close: adj_close,
            volume: 0,
            adj_close,
        }
    }

    fn config() -> AnalysisConfig {
        AnalysisConfig::new("TEST", d(2021, 1, 1)).unwrap()
    }

    #[test]
    fn builds_report_from_provider() {
        let provider = FixedProvider {
            bars: vec![
                bar(d(2021, 1, 4), 100.0),
                bar(d(2021, 1, 29), 110.0),
                bar(d(2021, 2, 1), 110.0),
                bar(d(2021, 2, 26), 99.0),
            ],
            available: true,
        };
        let analysis = analyze(&provider, &config(), d(2021, 3, 1)).unwrap();
        assert_eq!(analysis.observation_count, 4);
        assert_eq!(analysis.source, DataSource::CsvImport);
        assert_eq!(analysis.report.matrix().get(2021, 1), Some(0.10));
        assert_eq!(analysis.report.end_date, d(2021, 3, 1));
    }

    #[test]
    fn unavailable_provider_fails_fast() {
        let provider = FixedProvider {
            bars: vec![],
            available: false,
        };
        let err = analyze(&provider, &config(), d(2021, 3, 1)).unwrap_err();
        assert!(matches!(err, AnalysisError::Unavailable { .. }));
    }

    #[test]
    fn fetch_error_is_wrapped() {
        let provider = FixedProvider {
            bars: vec![],
            available: true,
        };
        let err = analyze(&provider, &config(), d(2021, 3, 1)).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Fetch {
                source: DataError::SymbolNotFound { .. },
                ..
            }
        ));
    }

    #[test]
    fn all_void_bars_is_empty_input() {
        let provider = FixedProvider {
            bars: vec![bar(d(2021, 1, 4), f64::NAN)],
            available: true,
        };
        let err = analyze(&provider, &config(), d(2021, 3, 1)).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Transform {
                source: TransformError::EmptyInput,
                ..
            }
        ));
    }

    #[test]
    fn synthetic_end_to_end() {
        let analysis = analyze(&SyntheticProvider::default(), &config(), d(2022, 12, 31)).unwrap();
        assert_eq!(analysis.report.years, vec![2021, 2022]);
        assert!(analysis.report.values.iter().flatten().all(|c| c.is_some()));
    }
}
