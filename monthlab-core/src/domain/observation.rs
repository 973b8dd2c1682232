//! DailyObservation — one adjusted-close price on one trading day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::month::MonthKey;

/// Adjusted close for a single symbol on a single day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyObservation {
    pub date: NaiveDate,
    pub price: f64,
}

impl DailyObservation {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }

    /// Calendar month this observation falls into.
    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }

    /// Returns true if the price is NaN or infinite.
    pub fn is_void(&self) -> bool {
        !self.price.is_finite()
    }
}
