//! Per-cell color classification.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Returns strictly above this are `LargePositive`.
pub const LARGE_POSITIVE_THRESHOLD: f64 = 0.10;

/// Discrete visualization bucket for a monthly return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorClass {
    /// No data for the month (grey).
    Missing,
    /// Return below zero (red).
    Negative,
    /// Return in `[0, 0.10]` (yellow).
    SmallPositive,
    /// Return above 0.10 (green).
    LargePositive,
}

impl ColorClass {
    /// Classify a cell. Total over every input: non-finite values count as missing.
    pub fn classify(value: Option<f64>) -> Self {
        match value {
            Some(v) if !v.is_finite() => ColorClass::Missing,
            None => ColorClass::Missing,
            Some(v) if v > LARGE_POSITIVE_THRESHOLD => ColorClass::LargePositive,
            Some(v) if v >= 0.0 => ColorClass::SmallPositive,
            Some(_) => ColorClass::Negative,
        }
    }

    /// Integer code used by colormaps: grey, red, yellow, green.
    pub fn code(self) -> i8 {
        match self {
            ColorClass::Missing => -1,
            ColorClass::Negative => 0,
            ColorClass::SmallPositive => 1,
            ColorClass::LargePositive => 2,
        }
    }

    pub fn from_code(code: i8) -> Option<Self> {
        match code {
            -1 => Some(ColorClass::Missing),
            0 => Some(ColorClass::Negative),
            1 => Some(ColorClass::SmallPositive),
            2 => Some(ColorClass::LargePositive),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorClass::Missing => "missing",
            ColorClass::Negative => "negative",
            ColorClass::SmallPositive => "small positive",
            ColorClass::LargePositive => "large positive",
        }
    }

    /// One-character marker for plain-text output.
    pub fn marker(self) -> char {
        match self {
            ColorClass::Missing => '.',
            ColorClass::Negative => '-',
            ColorClass::SmallPositive => '~',
            ColorClass::LargePositive => '+',
        }
    }
}

/// Color classes in the same Year × Month shape as the performance matrix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorMatrix {
    rows: BTreeMap<i32, [ColorClass; 12]>,
}

impl ColorMatrix {
    pub fn from_rows(rows: impl IntoIterator<Item = (i32, [ColorClass; 12])>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
        }
    }

    /// Class of a cell. Years outside the matrix yield `None`.
    pub fn get(&self, year: i32, month: u32) -> Option<ColorClass> {
        if !(1..=12).contains(&month) {
            return None;
        }
        self.rows.get(&year).map(|row| row[(month - 1) as usize])
    }

    pub fn rows(&self) -> impl Iterator<Item = (i32, &[ColorClass; 12])> + '_ {
        self.rows.iter().map(|(y, row)| (*y, row))
    }

    /// Integer codes per row, ascending year.
    pub fn codes(&self) -> Vec<[i8; 12]> {
        self.rows.values().map(|row| row.map(ColorClass::code)).collect()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
