//! Positive / non-positive month counts along one axis of the matrix.
//!
//! Missing cells fall in neither bucket. They are reported separately in
//! `AxisCount::missing` so callers can see what the two counts leave out.

use serde::{Deserialize, Serialize};

use super::matrix::PerformanceMatrix;
use crate::domain::month_name;

/// Which axis to count along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// One entry per calendar month, counting across years.
    ByMonth,
    /// One entry per year, counting across months.
    ByYear,
}

impl Axis {
    pub fn label(self) -> &'static str {
        match self {
            Axis::ByMonth => "Month",
            Axis::ByYear => "Year",
        }
    }
}

/// Counts for one index value along an axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisCount {
    /// Month number (1..=12) or year.
    pub index: i32,
    /// Display label: short month name or the year.
    pub label: String,
    pub positive: usize,
    pub non_positive: usize,
    pub missing: usize,
}

impl AxisCount {
    /// Cells with data (positive + non-positive).
    pub fn present(&self) -> usize {
        self.positive + self.non_positive
    }
}

/// Aligned positive / non-positive counts for every index along an axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisCounts {
    pub axis: Axis,
    /// Number of cells along the axis for each index.
    pub cells_per_index: usize,
    pub entries: Vec<AxisCount>,
}

impl AxisCounts {
    pub fn from_matrix(matrix: &PerformanceMatrix, axis: Axis) -> Self {
        match axis {
            Axis::ByMonth => {
                let years = matrix.years().len();
                let entries = (1..=12u32)
                    .map(|month| {
                        let col = (month - 1) as usize;
                        let cells = matrix.rows().map(|(_, row)| row[col]);
                        tally(month as i32, month_name(month).to_string(), cells)
                    })
                    .collect();
                Self {
                    axis,
                    cells_per_index: years,
                    entries,
                }
            }
            Axis::ByYear => {
                let entries = matrix
                    .rows()
                    .map(|(year, row)| tally(year, year.to_string(), row.iter().copied()))
                    .collect();
                Self {
                    axis,
                    cells_per_index: 12,
                    entries,
                }
            }
        }
    }

    pub fn positives(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.positive).collect()
    }

    pub fn non_positives(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.non_positive).collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    /// Largest single count, for scaling bar charts.
    pub fn max_count(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.positive.max(e.non_positive))
            .max()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn tally(index: i32, label: String, cells: impl Iterator<Item = Option<f64>>) -> AxisCount {
    let mut count = AxisCount {
        index,
        label,
        positive: 0,
        non_positive: 0,
        missing: 0,
    };
    for cell in cells {
        match cell {
            // Non-finite cells are missing, as in the classifier
            Some(v) if !v.is_finite() => count.missing += 1,
            Some(v) if v > 0.0 => count.positive += 1,
            Some(_) => count.non_positive += 1,
            None => count.missing += 1,
        }
    }
    count
}
