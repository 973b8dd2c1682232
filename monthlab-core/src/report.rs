//! PerformanceReport — everything a renderer needs, in plain data.
//!
//! Renderers own colors, month-name lookup, layout and display; the report
//! only carries the matrix, its color classes, the per-axis counts and the
//! labels to put on rows and columns.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{MonthKey, MONTH_NAMES};
use crate::performance::{Axis, AxisCounts, ColorClass, ColorMatrix, PerformanceMatrix};

/// Reading a report back rebuilds the matrix, classes and counts from
/// `years` and `values`, so derived fields can never disagree with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ReportFile")]
pub struct PerformanceReport {
    pub symbol: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Row labels, ascending.
    pub years: Vec<i32>,
    /// Column labels, 1..=12.
    pub months: Vec<u32>,
    pub month_names: Vec<String>,
    /// `values[row][col]`; `None` where the month had no data.
    pub values: Vec<Vec<Option<f64>>>,
    /// Class codes (-1 missing, 0 negative, 1 small positive, 2 large positive).
    pub classes: Vec<Vec<i8>>,
    pub by_month: AxisCounts,
    pub by_year: AxisCounts,
    #[serde(skip)]
    matrix: PerformanceMatrix,
    #[serde(skip)]
    colors: ColorMatrix,
}

impl PerformanceReport {
    pub fn build(
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        matrix: &PerformanceMatrix,
    ) -> Self {
        let colors = matrix.classify();
        Self {
            symbol: symbol.to_string(),
            start_date,
            end_date,
            years: matrix.years(),
            months: (1..=12).collect(),
            month_names: MONTH_NAMES.iter().map(|s| s.to_string()).collect(),
            values: matrix.rows().map(|(_, row)| row.to_vec()).collect(),
            classes: colors.codes().iter().map(|row| row.to_vec()).collect(),
            by_month: matrix.counts(Axis::ByMonth),
            by_year: matrix.counts(Axis::ByYear),
            matrix: matrix.clone(),
            colors,
        }
    }

    pub fn title(&self) -> String {
        format!(
            "Monthly Performance of {} from {} to {}",
            self.symbol, self.start_date, self.end_date
        )
    }

    pub fn matrix(&self) -> &PerformanceMatrix {
        &self.matrix
    }

    pub fn colors(&self) -> &ColorMatrix {
        &self.colors
    }

    /// Value and class of one cell.
    pub fn cell(&self, year: i32, month: u32) -> (Option<f64>, ColorClass) {
        let value = self.matrix.get(year, month);
        (value, ColorClass::classify(value))
    }

    pub fn counts(&self, axis: Axis) -> &AxisCounts {
        match axis {
            Axis::ByMonth => &self.by_month,
            Axis::ByYear => &self.by_year,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Serialized fields a report is rebuilt from.
#[derive(Deserialize)]
struct ReportFile {
    symbol: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    years: Vec<i32>,
    values: Vec<Vec<Option<f64>>>,
}

impl TryFrom<ReportFile> for PerformanceReport {
    type Error = String;

    fn try_from(file: ReportFile) -> Result<Self, Self::Error> {
        if file.years.len() != file.values.len() {
            return Err(format!(
                "{} years but {} value rows",
                file.years.len(),
                file.values.len()
            ));
        }
        let mut cells = Vec::new();
        for (year, row) in file.years.iter().zip(&file.values) {
            if row.len() != 12 {
                return Err(format!("row {year} has {} cells, expected 12", row.len()));
            }
            for (col, value) in row.iter().enumerate() {
                if let Some(v) = value {
                    cells.push((MonthKey::new(*year, col as u32 + 1), *v));
                }
            }
        }
        let matrix = PerformanceMatrix::from_cells(cells);
        Ok(Self::build(&file.symbol, file.start_date, file.end_date, &matrix))
    }
}

/// Percentage annotation, e.g. `+10.00%` or `-3.25%`.
pub fn format_percent(value: f64) -> String {
    format!("{:+.2}%", value * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MonthKey;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn report() -> PerformanceReport {
        let matrix = PerformanceMatrix::from_cells([
            (MonthKey::new(2020, 12), 0.15),
            (MonthKey::new(2021, 1), 0.10),
            (MonthKey::new(2021, 2), -0.10),
        ]);
        PerformanceReport::build("TEST", d(2020, 12, 1), d(2021, 2, 28), &matrix)
    }

    #[test]
    fn shapes_line_up() {
        let r = report();
        assert_eq!(r.years, vec![2020, 2021]);
        assert_eq!(r.values.len(), 2);
        assert_eq!(r.classes.len(), 2);
        assert!(r.values.iter().all(|row| row.len() == 12));
        assert!(r.classes.iter().all(|row| row.len() == 12));
        assert_eq!(r.by_month.len(), 12);
        assert_eq!(r.by_year.len(), r.years.len());
        assert_eq!(r.month_names[0], "Jan");
    }

    #[test]
    fn classes_follow_values() {
        let r = report();
        assert_eq!(r.classes[0][11], 2);
        assert_eq!(r.classes[0][0], -1);
        assert_eq!(r.classes[1][0], 1);
        assert_eq!(r.classes[1][1], 0);
        assert_eq!(r.cell(2021, 2), (Some(-0.10), ColorClass::Negative));
        assert_eq!(r.cell(2021, 3), (None, ColorClass::Missing));
    }

    #[test]
    fn title_names_symbol_and_range() {
        assert_eq!(
            report().title(),
            "Monthly Performance of TEST from 2020-12-01 to 2021-02-28"
        );
    }

    #[test]
    fn json_has_null_for_missing() {
        let json = report().to_json().unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["symbol"], "TEST");
        assert!(v["values"][0][0].is_null());
        assert_eq!(v["values"][1][0], 0.1);
        assert_eq!(v["by_year"]["axis"], "by_year");
        assert_eq!(v["by_month"]["entries"][0]["label"], "Jan");
    }

    #[test]
    fn json_reads_back_into_working_report() {
        let original = report();
        let json = original.to_json().unwrap();
        let back: PerformanceReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.cell(2021, 1), (Some(0.10), ColorClass::SmallPositive));
        assert_eq!(back.matrix().len(), 3);
        assert_eq!(back.colors().row_count(), 2);
        assert_eq!(back, original);
    }

    #[test]
    fn json_with_ragged_rows_is_rejected() {
        let json = r#"{"symbol":"X","start_date":"2021-01-01","end_date":"2021-12-31",
            "years":[2021],"values":[[0.1,null]]}"#;
        assert!(serde_json::from_str::<PerformanceReport>(json).is_err());
        let json = r#"{"symbol":"X","start_date":"2021-01-01","end_date":"2021-12-31",
            "years":[2021,2022],"values":[]}"#;
        assert!(serde_json::from_str::<PerformanceReport>(json).is_err());
    }

    #[test]
    fn percent_format() {
        assert_eq!(format_percent(0.1), "+10.00%");
        assert_eq!(format_percent(-0.0325), "-3.25%");
        assert_eq!(format_percent(0.0), "+0.00%");
    }
}
