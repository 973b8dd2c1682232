//! Application state — single-owner, main-thread only.
//!
//! The report is computed before the terminal is entered, so the state is
//! read-only apart from navigation.

use monthlab_core::data::DataSource;
use monthlab_core::report::format_percent;
use monthlab_core::{Analysis, Axis, AxisCounts, ColorClass, PerformanceReport};

use crate::theme::Theme;

/// Which view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Heatmap,
    ByMonth,
    ByYear,
    Help,
}

impl View {
    pub const ALL: [View; 4] = [View::Heatmap, View::ByMonth, View::ByYear, View::Help];

    pub fn index(self) -> usize {
        match self {
            View::Heatmap => 0,
            View::ByMonth => 1,
            View::ByYear => 2,
            View::Help => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            View::Heatmap => "Heatmap",
            View::ByMonth => "By Month",
            View::ByYear => "By Year",
            View::Help => "Help",
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Count axis shown by this view, if it is a chart view.
    pub fn axis(self) -> Option<Axis> {
        match self {
            View::ByMonth => Some(Axis::ByMonth),
            View::ByYear => Some(Axis::ByYear),
            _ => None,
        }
    }
}

/// Heatmap cursor position: row index into `report.years`, column 0..12.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// The cell under the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedCell {
    pub year: i32,
    pub month: u32,
    pub value: Option<f64>,
    pub class: ColorClass,
}

impl SelectedCell {
    pub fn describe(&self, month_name: &str) -> String {
        match self.value {
            Some(v) if self.class != ColorClass::Missing => format!(
                "{} {}: {} ({})",
                month_name,
                self.year,
                format_percent(v),
                self.class.label()
            ),
            _ => format!("{} {}: no data", month_name, self.year),
        }
    }
}

pub struct AppState {
    pub report: PerformanceReport,
    pub source: DataSource,
    pub observation_count: usize,
    pub active_view: View,
    pub cursor: Cursor,
    pub running: bool,
    pub theme: Theme,
}

impl AppState {
    pub fn new(analysis: Analysis) -> Self {
        Self {
            report: analysis.report,
            source: analysis.source,
            observation_count: analysis.observation_count,
            active_view: View::Heatmap,
            cursor: Cursor::default(),
            running: true,
            theme: Theme::default(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.report.years.len()
    }

    /// Move the heatmap cursor, clamping to the grid.
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let rows = self.row_count();
        if rows == 0 {
            return;
        }
        self.cursor.row = step(self.cursor.row, d_row, rows);
        self.cursor.col = step(self.cursor.col, d_col, 12);
    }

    pub fn jump_first_row(&mut self) {
        self.cursor.row = 0;
    }

    pub fn jump_last_row(&mut self) {
        self.cursor.row = self.row_count().saturating_sub(1);
    }

    pub fn selected_cell(&self) -> Option<SelectedCell> {
        let year = *self.report.years.get(self.cursor.row)?;
        let month = self.cursor.col as u32 + 1;
        let (value, class) = self.report.cell(year, month);
        Some(SelectedCell {
            year,
            month,
            value,
            class,
        })
    }

    pub fn counts_for(&self, axis: Axis) -> &AxisCounts {
        self.report.counts(axis)
    }
}

fn step(pos: usize, delta: isize, len: usize) -> usize {
    let max = len.saturating_sub(1) as isize;
    (pos as isize + delta).clamp(0, max) as usize
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::NaiveDate;
    use monthlab_core::{MonthKey, PerformanceMatrix};

    pub(crate) fn sample_report() -> PerformanceReport {
        let m = PerformanceMatrix::from_cells([
            (MonthKey::new(2021, 1), 0.05),
            (MonthKey::new(2021, 2), -0.02),
            (MonthKey::new(2022, 1), 0.15),
            (MonthKey::new(2023, 12), 0.0),
        ]);
        PerformanceReport::build(
            "TEST",
            NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
            &m,
        )
    }

    pub(crate) fn sample_app() -> AppState {
        AppState::new(Analysis {
            report: sample_report(),
            source: DataSource::Synthetic,
            observation_count: 8,
        })
    }

    #[test]
    fn view_cycles() {
        assert_eq!(View::Heatmap.next(), View::ByMonth);
        assert_eq!(View::Help.next(), View::Heatmap);
        assert_eq!(View::Heatmap.prev(), View::Help);
        for v in View::ALL {
            assert_eq!(View::from_index(v.index()), Some(v));
        }
        assert_eq!(View::from_index(4), None);
    }

    #[test]
    fn cursor_clamps_to_grid() {
        let mut app = sample_app();
        app.move_cursor(-1, -1);
        assert_eq!(app.cursor, Cursor { row: 0, col: 0 });
        app.move_cursor(10, 20);
        assert_eq!(app.cursor, Cursor { row: 2, col: 11 });
        app.jump_first_row();
        assert_eq!(app.cursor.row, 0);
    }

    #[test]
    fn selected_cell_reports_value_and_class() {
        let mut app = sample_app();
        let cell = app.selected_cell().unwrap();
        assert_eq!((cell.year, cell.month), (2021, 1));
        assert_eq!(cell.class, ColorClass::SmallPositive);
        assert_eq!(cell.describe("Jan"), "Jan 2021: +5.00% (small positive)");

        app.move_cursor(0, 2);
        let cell = app.selected_cell().unwrap();
        assert_eq!(cell.class, ColorClass::Missing);
        assert_eq!(cell.describe("Mar"), "Mar 2021: no data");
    }

    #[test]
    fn empty_report_has_no_selection() {
        let report = PerformanceReport::build(
            "EMPTY",
            NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            &PerformanceMatrix::default(),
        );
        let mut app = AppState::new(Analysis {
            report,
            source: DataSource::Synthetic,
            observation_count: 0,
        });
        app.move_cursor(1, 1);
        assert!(app.selected_cell().is_none());
    }
}
