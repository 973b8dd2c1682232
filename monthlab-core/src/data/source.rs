//! Provider selection from command-line flags.

use std::path::PathBuf;
use std::sync::Arc;

use super::circuit_breaker::CircuitBreaker;
use super::csv_import::CsvProvider;
use super::provider::{DataError, DataProvider};
use super::synthetic::SyntheticProvider;
use super::yahoo::YahooProvider;

/// Which provider a run should use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderChoice {
    Yahoo,
    Csv(PathBuf),
    Synthetic,
}

impl ProviderChoice {
    /// `--csv` wins over `--synthetic`; neither means Yahoo.
    pub fn from_flags(csv: Option<PathBuf>, synthetic: bool) -> Self {
        match (csv, synthetic) {
            (Some(path), _) => ProviderChoice::Csv(path),
            (None, true) => ProviderChoice::Synthetic,
            (None, false) => ProviderChoice::Yahoo,
        }
    }

    pub fn build(self) -> Result<Box<dyn DataProvider>, DataError> {
        Ok(match self {
            ProviderChoice::Yahoo => {
                let breaker = Arc::new(CircuitBreaker::default_provider());
                Box::new(YahooProvider::new(breaker)?)
            }
            ProviderChoice::Csv(path) => Box::new(CsvProvider::new(path)),
            ProviderChoice::Synthetic => Box::new(SyntheticProvider::default()),
        })
    }
}
