//! Performance transform — daily observations to a Year × Month return matrix.
//!
//! Observations are grouped by calendar month. Each month's return is
//! `(last - first) / first`, where first and last are the chronologically
//! first and last observations inside that month. A month with a single
//! observation therefore has a return of exactly zero.
//!
//! Cells for months without any observation are `None`, never zero: the
//! classifier and the counter treat "no data" differently from a flat month.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::classify::{ColorClass, ColorMatrix};
use super::counts::{Axis, AxisCounts};
use super::TransformError;
use crate::domain::{DailyObservation, MonthKey};

/// One matrix row: twelve month cells, January first.
pub type MonthRow = [Option<f64>; 12];

/// Sparse table of monthly returns keyed by year (rows) and month (columns).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMatrix {
    rows: BTreeMap<i32, MonthRow>,
}

/// Running first/last price of one month while grouping.
#[derive(Debug, Clone, Copy)]
struct MonthBounds {
    first: f64,
    last: f64,
    count: usize,
}

impl PerformanceMatrix {
    /// Build the matrix from daily observations.
    ///
    /// Unsorted input is sorted by date before grouping. The sort is stable,
    /// so observations sharing a date keep their input order.
    pub fn from_observations(observations: &[DailyObservation]) -> Result<Self, TransformError> {
        if observations.is_empty() {
            return Err(TransformError::EmptyInput);
        }

        if let Some(bad) = observations.iter().find(|o| o.is_void()) {
            return Err(TransformError::NonFinitePrice { date: bad.date });
        }

        let mut sorted = observations.to_vec();
        if !is_date_ordered(&sorted) {
            debug!(count = sorted.len(), "observations out of order, sorting by date");
            sorted.sort_by_key(|o| o.date);
        }

        let mut bounds: BTreeMap<MonthKey, MonthBounds> = BTreeMap::new();
        for obs in &sorted {
            bounds
                .entry(obs.month_key())
                .and_modify(|b| {
                    b.last = obs.price;
                    b.count += 1;
                })
                .or_insert(MonthBounds {
                    first: obs.price,
                    last: obs.price,
                    count: 1,
                });
        }

        let mut rows: BTreeMap<i32, MonthRow> = BTreeMap::new();
        for (key, b) in &bounds {
            let ret = monthly_return(b.first, b.last).ok_or(TransformError::DivisionByZero {
                year: key.year,
                month: key.month,
            })?;
            // Tiny but finite first prices can still overflow the ratio
            if !ret.is_finite() {
                return Err(TransformError::NonFiniteReturn {
                    year: key.year,
                    month: key.month,
                });
            }
            debug!(month = %key, observations = b.count, ret, "monthly return");
            if let Some(col) = key.column() {
                rows.entry(key.year).or_insert([None; 12])[col] = Some(ret);
            }
        }

        info!(
            observations = sorted.len(),
            months = bounds.len(),
            years = rows.len(),
            "built performance matrix"
        );

        Ok(Self { rows })
    }

    /// Build a matrix directly from `(month, return)` cells.
    ///
    /// Later duplicates of the same month overwrite earlier ones. Cells whose
    /// month is outside 1..=12 are skipped.
    pub fn from_cells(cells: impl IntoIterator<Item = (MonthKey, f64)>) -> Self {
        let mut rows: BTreeMap<i32, MonthRow> = BTreeMap::new();
        for (key, value) in cells {
            match key.column() {
                Some(col) => rows.entry(key.year).or_insert([None; 12])[col] = Some(value),
                None => warn!(year = key.year, month = key.month, "skipping out-of-range month"),
            }
        }
        Self { rows }
    }

    /// Distinct years present, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.rows.keys().copied().collect()
    }

    /// Return for a month, or `None` if that month had no data.
    pub fn get(&self, year: i32, month: u32) -> Option<f64> {
        if !(1..=12).contains(&month) {
            return None;
        }
        self.rows
            .get(&year)
            .and_then(|row| row[(month - 1) as usize])
    }

    pub fn row(&self, year: i32) -> Option<&MonthRow> {
        self.rows.get(&year)
    }

    /// Rows in ascending year order.
    pub fn rows(&self) -> impl Iterator<Item = (i32, &MonthRow)> + '_ {
        self.rows.iter().map(|(y, row)| (*y, row))
    }

    /// Present cells in chronological order.
    pub fn cells(&self) -> impl Iterator<Item = (MonthKey, f64)> + '_ {
        self.rows.iter().flat_map(|(year, row)| {
            row.iter().enumerate().filter_map(move |(i, cell)| {
                cell.map(|v| (MonthKey::new(*year, i as u32 + 1), v))
            })
        })
    }

    /// Number of present (non-missing) cells.
    pub fn len(&self) -> usize {
        self.rows
            .values()
            .map(|row| row.iter().filter(|c| c.is_some()).count())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Nested `year -> (month -> return)` view holding only present cells.
    pub fn to_nested(&self) -> BTreeMap<i32, BTreeMap<u32, f64>> {
        let mut nested: BTreeMap<i32, BTreeMap<u32, f64>> = BTreeMap::new();
        for (key, value) in self.cells() {
            nested.entry(key.year).or_default().insert(key.month, value);
        }
        nested
    }

    /// Color class of every cell, same shape as the matrix.
    pub fn classify(&self) -> ColorMatrix {
        ColorMatrix::from_rows(
            self.rows
                .iter()
                .map(|(year, row)| (*year, row.map(ColorClass::classify))),
        )
    }

    /// Positive / non-positive counts along an axis.
    pub fn counts(&self, axis: Axis) -> AxisCounts {
        AxisCounts::from_matrix(self, axis)
    }
}

/// Fractional change from `first` to `last`; `None` when `first` is zero.
pub fn monthly_return(first: f64, last: f64) -> Option<f64> {
    if first == 0.0 {
        return None;
    }
    Some((last - first) / first)
}

fn is_date_ordered(observations: &[DailyObservation]) -> bool {
    observations.windows(2).all(|w| w[0].date <= w[1].date)
}
