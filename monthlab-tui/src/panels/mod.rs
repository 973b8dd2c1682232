//! TUI panels for each view
//!
//! - HeatmapPanel: Year × Month grid colored by class
//! - CountsChart: positive / non-positive bars by month or by year
//! - HelpPanel: key bindings

pub mod counts_chart;
pub mod heatmap;
pub mod help;

pub use counts_chart::CountsChart;
pub use heatmap::HeatmapPanel;
pub use help::HelpPanel;
