//! MonthLab Core — monthly performance of a single stock.
//!
//! This crate contains:
//! - Domain types (daily observations, calendar-month keys)
//! - The performance transform (daily prices → Year × Month return matrix)
//! - Per-cell color classification and per-axis positive/negative counts
//! - The renderer-facing `PerformanceReport`
//! - Price providers (Yahoo Finance, CSV import, synthetic walk)
//! - TOML analysis configuration

pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod performance;
pub mod report;

pub use analysis::{analyze, Analysis, AnalysisError};
pub use config::{AnalysisConfig, ConfigError};
pub use domain::{DailyObservation, MonthKey};
pub use performance::{
    Axis, AxisCount, AxisCounts, ColorClass, ColorMatrix, PerformanceMatrix, TransformError,
};
pub use report::PerformanceReport;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: public data types are Send + Sync so renderers
    /// may hand them across threads.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<DailyObservation>();
        require_sync::<DailyObservation>();
        require_send::<PerformanceMatrix>();
        require_sync::<PerformanceMatrix>();
        require_send::<ColorMatrix>();
        require_sync::<ColorMatrix>();
        require_send::<AxisCounts>();
        require_sync::<AxisCounts>();
        require_send::<PerformanceReport>();
        require_sync::<PerformanceReport>();
        require_send::<data::YahooProvider>();
        require_sync::<data::YahooProvider>();
        require_send::<data::CircuitBreaker>();
        require_sync::<data::CircuitBreaker>();
    }

    /// The core never depends on wall-clock time: the same input always
    /// produces the same matrix.
    #[test]
    fn transform_is_idempotent() {
        let provider = data::SyntheticProvider::default();
        let start = chrono::NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
        let end = chrono::NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
        let bars = provider.generate("IDEMP", start, end);
        let obs = data::observations_from_bars(&bars);
        let a = PerformanceMatrix::from_observations(&obs).unwrap();
        let b = PerformanceMatrix::from_observations(&obs).unwrap();
        assert_eq!(a, b);
    }
}
