//! Plain-text rendering of a performance report.

use std::fmt::Write;

use monthlab_core::report::format_percent;
use monthlab_core::{AxisCounts, ColorClass, PerformanceReport};

const CELL_WIDTH: usize = 9;
const BAR_WIDTH: usize = 30;

/// Year × Month table with a percentage and a class marker per cell.
pub fn heatmap(report: &PerformanceReport) -> String {
    let mut out = String::new();

    let _ = write!(out, "{:<6}", "Year");
    for name in &report.month_names {
        let _ = write!(out, "{:>width$}", name, width = CELL_WIDTH);
    }
    out.push('\n');
    out.push_str(&"-".repeat(6 + CELL_WIDTH * report.month_names.len()));
    out.push('\n');

    for (year, row) in report.matrix().rows() {
        let _ = write!(out, "{:<6}", year);
        for cell in row {
            let class = ColorClass::classify(*cell);
            let text = match cell {
                Some(v) if class != ColorClass::Missing => format_percent(*v),
                _ => String::new(),
            };
            let _ = write!(out, "{:>width$}{}", text, class.marker(), width = CELL_WIDTH - 1);
        }
        out.push('\n');
    }

    out.push('\n');
    let _ = writeln!(
        out,
        "Legend: {} > 10%   {} 0% to 10%   {} < 0%   {} no data",
        ColorClass::LargePositive.marker(),
        ColorClass::SmallPositive.marker(),
        ColorClass::Negative.marker(),
        ColorClass::Missing.marker(),
    );
    out
}

/// Positive / negative counts with horizontal bars.
pub fn counts(counts: &AxisCounts) -> String {
    let mut out = String::new();
    let axis = counts.axis.label();
    let _ = writeln!(out, "Counts of Positive and Negative Performance by {axis}");
    let _ = writeln!(out, "{:<6} {:>4} {:>4}", axis, "Pos", "Neg");
    out.push_str(&"-".repeat(16 + 2 * BAR_WIDTH + 3));
    out.push('\n');

    let max = counts.max_count();
    for entry in &counts.entries {
        let _ = writeln!(
            out,
            "{:<6} {:>4} {:>4}  {:<bar$} | {}",
            entry.label,
            entry.positive,
            entry.non_positive,
            "+".repeat(scale(entry.positive, max)),
            "-".repeat(scale(entry.non_positive, max)),
            bar = BAR_WIDTH,
        );
    }
    out
}

/// Bar length for `count`, rounding up so any non-zero count is visible.
fn scale(count: usize, max: usize) -> usize {
    if max == 0 {
        return 0;
    }
    (count * BAR_WIDTH).div_ceil(max)
}
