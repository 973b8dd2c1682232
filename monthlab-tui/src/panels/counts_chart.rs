//! Counts chart - grouped vertical bars of positive / non-positive months
//!
//! One group per axis index (calendar month or year). Positive counts are
//! drawn green, non-positive counts red, with the count printed above each
//! bar when there is room.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
};

use monthlab_core::AxisCounts;

use crate::theme::Theme;

const BAR_CHAR: &str = "\u{2588}"; // █

pub struct CountsChart<'a> {
    counts: &'a AxisCounts,
    theme: &'a Theme,
}

impl<'a> CountsChart<'a> {
    pub fn new(counts: &'a AxisCounts, theme: &'a Theme) -> Self {
        Self { counts, theme }
    }
}

/// Bar height in rows, scaled to `max` and at least one row for non-zero counts.
fn bar_height(count: usize, max: usize, plot_height: u16) -> u16 {
    if count == 0 || max == 0 || plot_height == 0 {
        return 0;
    }
    let h = (count as f64 / max as f64 * plot_height as f64).round() as u16;
    h.clamp(1, plot_height)
}

impl<'a> Widget for CountsChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(
            " Counts of Positive and Negative Performance by {} ",
            self.counts.axis.label()
        );
        let block = Block::default()
            .title(title)
            .title_style(self.theme.title())
            .borders(Borders::ALL)
            .border_style(self.theme.border())
            .style(Style::default().bg(self.theme.background));

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        if self.counts.is_empty() || self.counts.max_count() == 0 {
            buf.set_string(inner.x, inner.y, "No data", self.theme.secondary());
            return;
        }
        if inner.width < 6 || inner.height < 5 {
            return;
        }

        let pos_style = Style::default().fg(self.theme.positive);
        let neg_style = Style::default().fg(self.theme.negative);

        // Row 0: legend
        buf.set_string(inner.x, inner.y, BAR_CHAR, pos_style);
        buf.set_string(inner.x + 2, inner.y, "Positive", self.theme.text());
        if inner.width >= 26 {
            buf.set_string(inner.x + 12, inner.y, BAR_CHAR, neg_style);
            buf.set_string(inner.x + 14, inner.y, "Non-positive", self.theme.text());
        }

        // Plot between legend and axis labels; top row reserved for value labels
        let label_y = inner.bottom() - 1;
        let plot_top = inner.y + 2;
        let plot_height = label_y.saturating_sub(plot_top);

        let n = self.counts.len() as u16;
        let group_width = (inner.width / n).max(3);
        let max_groups = (inner.width / group_width) as usize;
        // Keep the most recent entries when the axis does not fit
        let skip = self.counts.len().saturating_sub(max_groups);
        let bar_width = ((group_width - 1) / 2).max(1);
        let max = self.counts.max_count();

        for (slot, entry) in self.counts.entries.iter().skip(skip).enumerate() {
            let gx = inner.x + slot as u16 * group_width;

            for (offset, count, style) in [
                (0, entry.positive, pos_style),
                (bar_width, entry.non_positive, neg_style),
            ] {
                let x = gx + offset;
                let h = bar_height(count, max, plot_height);
                for row in 0..h {
                    let y = label_y - 1 - row;
                    for dx in 0..bar_width {
                        buf.set_string(x + dx, y, BAR_CHAR, style);
                    }
                }
                let value = count.to_string();
                let value_y = label_y - 1 - h;
                if value_y >= plot_top - 1 && value.len() as u16 <= bar_width + 1 {
                    buf.set_string(x, value_y, value, self.theme.text());
                }
            }

            let label: String = entry
                .label
                .chars()
                .take(group_width.saturating_sub(1) as usize)
                .collect();
            buf.set_string(gx, label_y, label, self.theme.secondary());
        }
    }
}
