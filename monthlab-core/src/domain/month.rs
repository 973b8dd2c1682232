//! Calendar-month grouping key.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// English short month names, indexed by `month - 1`.
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A (year, month) bucket. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    /// 1..=12
    pub month: u32,
}

impl MonthKey {
    /// Keys are not range-checked here; see [`MonthKey::is_valid`].
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Month is within 1..=12.
    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month)
    }

    /// Zero-based column index in a 12-column matrix row, `None` when the
    /// month is out of range.
    pub fn column(&self) -> Option<usize> {
        self.is_valid().then(|| (self.month - 1) as usize)
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// Short name for a month number. Out-of-range numbers yield `"???"`.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_NAMES[(month - 1) as usize],
        _ => "???",
    }
}
