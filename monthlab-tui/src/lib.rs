//! MonthLab TUI - interactive monthly performance views
//!
//! - Heatmap of monthly returns with a cell cursor
//! - Positive / non-positive counts by calendar month
//! - Positive / non-positive counts by year

pub mod app;
pub mod input;
pub mod panels;
pub mod theme;
pub mod ui;

pub use app::{AppState, View};
pub use input::handle_key;
pub use theme::Theme;
