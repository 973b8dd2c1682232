//! Heatmap panel — Year × Month grid of monthly returns
//!
//! Each cell is painted with its color class and annotated with the return
//! as a percentage. The cursor cell is drawn reversed; rows scroll so the
//! cursor row is always visible.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use monthlab_core::report::format_percent;
use monthlab_core::{ColorClass, PerformanceReport};

use crate::app::Cursor;
use crate::theme::Theme;

const YEAR_WIDTH: u16 = 6;
const MAX_CELL_WIDTH: u16 = 9;
const MIN_CELL_WIDTH: u16 = 4;

pub struct HeatmapPanel<'a> {
    report: &'a PerformanceReport,
    cursor: Cursor,
    theme: &'a Theme,
}

impl<'a> HeatmapPanel<'a> {
    pub fn new(report: &'a PerformanceReport, cursor: Cursor, theme: &'a Theme) -> Self {
        Self {
            report,
            cursor,
            theme,
        }
    }
}

/// Width of one month column for the available width.
fn cell_width(available: u16) -> u16 {
    (available.saturating_sub(YEAR_WIDTH) / 12).clamp(MIN_CELL_WIDTH, MAX_CELL_WIDTH)
}

/// First row to draw so that `cursor_row` fits in `visible` rows.
fn scroll_offset(cursor_row: usize, visible: usize) -> usize {
    if visible == 0 {
        0
    } else {
        (cursor_row + 1).saturating_sub(visible)
    }
}

/// Cell annotation, shortened when the column is narrow.
fn cell_text(value: f64, width: u16) -> String {
    let text = if width >= MAX_CELL_WIDTH {
        format_percent(value)
    } else {
        format!("{:+.0}", value * 100.0)
    };
    text.chars().take(width.saturating_sub(1) as usize).collect()
}

impl<'a> Widget for HeatmapPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.report.title()))
            .title_style(self.theme.title())
            .borders(Borders::ALL)
            .border_style(self.theme.border())
            .style(Style::default().bg(self.theme.background));

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        if inner.width < YEAR_WIDTH + 12 * MIN_CELL_WIDTH || inner.height < 3 {
            buf.set_string(inner.x, inner.y, "Terminal too small", self.theme.secondary());
            return;
        }

        if self.report.years.is_empty() {
            buf.set_string(inner.x, inner.y, "No data", self.theme.secondary());
            return;
        }

        let cw = cell_width(inner.width);

        // Header row: month names
        buf.set_string(inner.x, inner.y, "Year", self.theme.title());
        for (col, name) in self.report.month_names.iter().enumerate() {
            let x = inner.x + YEAR_WIDTH + col as u16 * cw;
            let label: String = name.chars().take(cw as usize - 1).collect();
            buf.set_string(x, inner.y, label, self.theme.title());
        }

        // Rows: header above, legend below
        let visible = inner.height.saturating_sub(3) as usize;
        let offset = scroll_offset(self.cursor.row, visible);

        for (line, (row_idx, year)) in self
            .report
            .years
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .enumerate()
        {
            let y = inner.y + 1 + line as u16;
            buf.set_string(inner.x, y, year.to_string(), self.theme.text());

            for col in 0..12u16 {
                let month = col as u32 + 1;
                let (value, class) = self.report.cell(*year, month);
                let mut style = self.theme.cell_style(class);
                if row_idx == self.cursor.row && col as usize == self.cursor.col {
                    style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                }

                let text = match value {
                    Some(v) if class != ColorClass::Missing => cell_text(v, cw),
                    _ => String::new(),
                };
                let x = inner.x + YEAR_WIDTH + col * cw;
                let padded = format!("{:>w$}", text, w = cw as usize - 1);
                buf.set_string(x, y, padded, style);
            }
        }

        // Legend
        let legend_y = inner.bottom() - 1;
        let mut x = inner.x;
        for (class, label) in [
            (ColorClass::LargePositive, " > 10% "),
            (ColorClass::SmallPositive, " 0-10% "),
            (ColorClass::Negative, " < 0% "),
            (ColorClass::Missing, " no data "),
        ] {
            if x + label.len() as u16 > inner.right() {
                break;
            }
            buf.set_string(x, legend_y, label, self.theme.cell_style(class));
            x += label.len() as u16 + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::sample_report;

    fn render_to_string(
        report: &PerformanceReport,
        cursor: Cursor,
        area: Rect,
    ) -> (Buffer, String) {
        let theme = Theme::default();
        let mut buf = Buffer::empty(area);
        HeatmapPanel::new(report, cursor, &theme).render(area, &mut buf);
        let mut content = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                content.push_str(buf.cell((x, y)).unwrap().symbol());
            }
            content.push('\n');
        }
        (buf, content)
    }

    #[test]
    fn renders_header_years_and_values() {
        let report = sample_report();
        let (_, content) = render_to_string(&report, Cursor::default(), Rect::new(0, 0, 120, 12));
        assert!(content.contains("Monthly Performance of TEST"));
        assert!(content.contains("Jan"));
        assert!(content.contains("Dec"));
        assert!(content.contains("2021"));
        assert!(content.contains("2023"));
        assert!(content.contains("+5.00%"));
        assert!(content.contains("-2.00%"));
        assert!(content.contains("+15.00%"));
        assert!(content.contains("no data"));
    }

    #[test]
    fn cells_take_class_colors() {
        let report = sample_report();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 120, 12);
        let (buf, _) = render_to_string(&report, Cursor { row: 2, col: 0 }, area);
        // Row 2021 is at y = 2 (border + header); January column starts after the year label.
        let jan_x = 1 + YEAR_WIDTH;
        assert_eq!(buf.cell((jan_x, 2)).unwrap().bg, theme.caution);
        // February 2021 is negative.
        assert_eq!(buf.cell((jan_x + MAX_CELL_WIDTH, 2)).unwrap().bg, theme.negative);
        // March 2021 has no data.
        assert_eq!(buf.cell((jan_x + 2 * MAX_CELL_WIDTH, 2)).unwrap().bg, theme.missing);
    }

    #[test]
    fn cursor_cell_is_highlighted() {
        let report = sample_report();
        let area = Rect::new(0, 0, 120, 12);
        let (buf, _) = render_to_string(&report, Cursor { row: 0, col: 1 }, area);
        let x = 1 + YEAR_WIDTH + MAX_CELL_WIDTH;
        assert!(buf.cell((x, 2)).unwrap().modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn scrolls_to_keep_cursor_visible() {
        assert_eq!(scroll_offset(0, 5), 0);
        assert_eq!(scroll_offset(4, 5), 0);
        assert_eq!(scroll_offset(5, 5), 1);
        assert_eq!(scroll_offset(3, 0), 0);

        let report = sample_report();
        // Room for one data row only.
        let area = Rect::new(0, 0, 120, 6);
        let (_, content) = render_to_string(&report, Cursor { row: 2, col: 0 }, area);
        assert!(content.contains("│2023"));
        assert!(!content.contains("│2021"));
    }

    #[test]
    fn narrow_columns_use_compact_text() {
        assert_eq!(cell_width(200), MAX_CELL_WIDTH);
        assert_eq!(cell_width(10), MIN_CELL_WIDTH);
        assert_eq!(cell_text(0.1234, 9), "+12.34%");
        assert_eq!(cell_text(0.1234, 5), "+12");
    }

    #[test]
    fn area_without_interior_does_not_panic() {
        let report = sample_report();
        for area in [Rect::new(0, 0, 2, 1), Rect::new(0, 0, 2, 2), Rect::new(0, 0, 0, 0)] {
            render_to_string(&report, Cursor::default(), area);
        }
    }

    #[test]
    fn tiny_area_does_not_panic() {
        let report = sample_report();
        let (_, content) = render_to_string(&report, Cursor::default(), Rect::new(0, 0, 20, 4));
        assert!(content.contains("Terminal"));
    }
}
