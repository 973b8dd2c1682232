//! Synthetic price provider for demos and offline runs.
//!
//! Produces a weekday random walk from 100.0, seeded by a BLAKE3 hash of the
//! symbol so the same symbol always yields the same series.

use chrono::{Datelike, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

use super::provider::{DataError, DataProvider, DataSource, FetchResult, RawBar};

#[derive(Debug, Clone, Copy)]
pub struct SyntheticProvider {
    start_price: f64,
    daily_range: f64,
}

impl Default for SyntheticProvider {
    fn default() -> Self {
        Self {
            start_price: 100.0,
            daily_range: 0.03,
        }
    }
}

impl SyntheticProvider {
    pub fn new(start_price: f64, daily_range: f64) -> Self {
        Self {
            start_price,
            daily_range: daily_range.abs(),
        }
    }

    /// Deterministic bars for `symbol` on every weekday in `[start, end]`.
    pub fn generate(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Vec<RawBar> {
        let seed: [u8; 32] = *blake3::hash(symbol.as_bytes()).as_bytes();
        let mut rng = StdRng::from_seed(seed);

        let mut bars = Vec::new();
        let mut price = self.start_price;

        for current in start.iter_days().take_while(|d| *d <= end) {
            if matches!(current.weekday(), Weekday::Sat | Weekday::Sun) {
                continue;
            }

            let daily_return: f64 = if self.daily_range > 0.0 {
                rng.gen_range(-self.daily_range..self.daily_range)
            } else {
                0.0
            };
            let open = price;
            let close = price * (1.0 + daily_return);
            let high = open.max(close) * (1.0 + rng.gen_range(0.0..0.01));
            let low = open.min(close) * (1.0 - rng.gen_range(0.0..0.01));
            let volume = rng.gen_range(500_000..5_000_000u64);

            bars.push(RawBar {
                date: current,
                open,
                high,
                low,
                close,
                volume,
                adj_close: close,
            });

            price = close;
        }

        bars
    }
}

impl DataProvider for SyntheticProvider {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<FetchResult, DataError> {
        warn!(symbol, "generating synthetic data, results are not real prices");
        Ok(FetchResult {
            symbol: symbol.to_string(),
            bars: self.generate(symbol, start, end),
            source: DataSource::Synthetic,
        })
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn deterministic_per_symbol() {
        let p = SyntheticProvider::default();
        let a = p.generate("SPY", d(2020, 1, 1), d(2020, 3, 31));
        let b = p.generate("SPY", d(2020, 1, 1), d(2020, 3, 31));
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.date, y.date);
            assert_eq!(x.adj_close, y.adj_close);
        }
    }

    #[test]
    fn different_symbols_differ() {
        let p = SyntheticProvider::default();
        let a = p.generate("SPY", d(2020, 1, 1), d(2020, 1, 31));
        let b = p.generate("QQQ", d(2020, 1, 1), d(2020, 1, 31));
        assert_ne!(a.last().unwrap().close, b.last().unwrap().close);
    }

    #[test]
    fn skips_weekends() {
        // 2024-01-06 is a Saturday
        let bars = SyntheticProvider::default().generate("X", d(2024, 1, 1), d(2024, 1, 7));
        assert_eq!(bars.len(), 5);
        assert!(bars
            .iter()
            .all(|b| !matches!(b.date.weekday(), Weekday::Sat | Weekday::Sun)));
    }

    #[test]
    fn empty_when_end_before_start() {
        let bars = SyntheticProvider::default().generate("X", d(2024, 1, 7), d(2024, 1, 1));
        assert!(bars.is_empty());
    }

    #[test]
    fn flat_walk_with_zero_range() {
        let bars = SyntheticProvider::new(50.0, 0.0).generate("X", d(2024, 1, 1), d(2024, 1, 5));
        assert!(bars.iter().all(|b| b.close == 50.0));
    }
}
