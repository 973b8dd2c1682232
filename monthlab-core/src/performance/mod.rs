//! Monthly performance: transform, classification and counting.

pub mod classify;
pub mod counts;
pub mod matrix;

pub use classify::{ColorClass, ColorMatrix, LARGE_POSITIVE_THRESHOLD};
pub use counts::{Axis, AxisCount, AxisCounts};
pub use matrix::{monthly_return, MonthRow, PerformanceMatrix};

use chrono::NaiveDate;
use thiserror::Error;

/// Failures of the performance transform.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransformError {
    #[error("no observations to group")]
    EmptyInput,

    #[error("first price of {year}-{month:02} is zero")]
    DivisionByZero { year: i32, month: u32 },

    #[error("non-finite price on {date}")]
    NonFinitePrice { date: NaiveDate },

    #[error("return for {year}-{month:02} is not finite")]
    NonFiniteReturn { year: i32, month: u32 },
}
