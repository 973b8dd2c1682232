//! CSV price import — offline alternative to the Yahoo provider.
//!
//! Accepts the layout of Yahoo's "Download" button and of common pandas
//! exports: a `Date` column plus `Adj Close` and/or `Close`. Header matching
//! ignores case, spaces and underscores. Dates may carry a time suffix
//! (`2021-01-04 00:00:00+03:00`); only the leading `YYYY-MM-DD` is read.

use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info};

use super::provider::{DataError, DataProvider, DataSource, FetchResult, RawBar};

/// Reads daily bars for one symbol from a CSV file.
#[derive(Debug, Clone)]
pub struct CsvProvider {
    path: PathBuf,
}

/// Column positions resolved from the header row.
#[derive(Debug, Default)]
struct Columns {
    date: usize,
    open: Option<usize>,
    high: Option<usize>,
    low: Option<usize>,
    close: Option<usize>,
    adj_close: Option<usize>,
    volume: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, DataError> {
        let mut date = None;
        let mut cols = Columns::default();
        for (i, raw) in headers.iter().enumerate() {
            match normalize_header(raw).as_str() {
                "date" | "datetime" => date = Some(i),
                "open" => cols.open = Some(i),
                "high" => cols.high = Some(i),
                "low" => cols.low = Some(i),
                "close" => cols.close = Some(i),
                "adjclose" => cols.adj_close = Some(i),
                "volume" => cols.volume = Some(i),
                _ => {}
            }
        }
        cols.date = date.ok_or_else(|| DataError::Other("CSV has no Date column".into()))?;
        if cols.close.is_none() && cols.adj_close.is_none() {
            return Err(DataError::Other(
                "CSV has neither an Adj Close nor a Close column".into(),
            ));
        }
        Ok(cols)
    }
}

impl CsvProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse bars from any reader, keeping rows within `[start, end]`.
    pub fn read_bars<R: Read>(
        reader: R,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RawBar>, DataError> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let cols = Columns::from_headers(rdr.headers()?)?;

        let mut bars = Vec::new();
        for (line, record) in rdr.records().enumerate() {
            let record = record?;
            let raw_date = record.get(cols.date).unwrap_or("");
            let date = parse_date(raw_date).ok_or_else(|| {
                DataError::Other(format!("row {}: unparseable date '{raw_date}'", line + 2))
            })?;
            if date < start || date > end {
                continue;
            }

            let field = |idx: Option<usize>| -> f64 {
                idx.and_then(|i| record.get(i))
                    .and_then(|s| s.parse::<f64>().ok())
                    .unwrap_or(f64::NAN)
            };

            let close = field(cols.close);
            let adj_close = match cols.adj_close {
                Some(_) => field(cols.adj_close),
                None => close,
            };

            bars.push(RawBar {
                date,
                open: field(cols.open),
                high: field(cols.high),
                low: field(cols.low),
                close,
                volume: cols
                    .volume
                    .and_then(|i| record.get(i))
                    .and_then(|s| s.parse::<f64>().ok())
                    .filter(|v| v.is_finite() && *v >= 0.0)
                    .map(|v| v as u64)
                    .unwrap_or(0),
                adj_close,
            });
        }

        debug!(rows = bars.len(), "parsed CSV rows in range");
        Ok(bars)
    }
}

impl DataProvider for CsvProvider {
    fn name(&self) -> &str {
        "csv_import"
    }

    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<FetchResult, DataError> {
        let file = std::fs::File::open(&self.path)?;
        let bars = Self::read_bars(file, start, end)?;
        info!(
            symbol,
            bars = bars.len(),
            path = %self.path.display(),
            "loaded bars from CSV"
        );
        Ok(FetchResult {
            symbol: symbol.to_string(),
            bars,
            source: DataSource::CsvImport,
        })
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }
}

fn normalize_header(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let head = raw.get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}
