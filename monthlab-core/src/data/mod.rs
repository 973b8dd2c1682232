//! Price sources: Yahoo Finance, CSV import, synthetic walk.

pub mod circuit_breaker;
pub mod csv_import;
pub mod provider;
pub mod source;
pub mod synthetic;
pub mod yahoo;

pub use circuit_breaker::{BreakerState, CircuitBreaker};
pub use csv_import::CsvProvider;
pub use provider::{
    observations_from_bars, DataError, DataProvider, DataSource, FetchResult, RawBar,
};
pub use source::ProviderChoice;
pub use synthetic::SyntheticProvider;
pub use yahoo::YahooProvider;
