//! Domain types for MonthLab

pub mod month;
pub mod observation;

pub use month::{month_name, MonthKey, MONTH_NAMES};
pub use observation::DailyObservation;

/// Symbol type alias
pub type Symbol = String;
