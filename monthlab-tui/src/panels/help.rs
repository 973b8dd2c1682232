//! Help: keyboard shortcuts and the color legend.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use monthlab_core::ColorClass;

use crate::theme::Theme;

pub struct HelpPanel<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPanel<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn section(&self, lines: &mut Vec<Line<'static>>, title: &str) {
        lines.push(Line::from(Span::styled(title.to_string(), self.theme.title())));
    }

    fn key(&self, lines: &mut Vec<Line<'static>>, keys: &str, desc: &str) {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:>16}  ", keys), self.theme.text()),
            Span::styled(desc.to_string(), self.theme.secondary()),
        ]));
    }
}

impl<'a> Widget for HelpPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line<'static>> = Vec::new();

        self.section(&mut lines, "Views");
        self.key(&mut lines, "1", "Heatmap of monthly returns");
        self.key(&mut lines, "2", "Positive / negative counts by month");
        self.key(&mut lines, "3", "Positive / negative counts by year");
        self.key(&mut lines, "4 / ?", "This help");
        self.key(&mut lines, "Tab / Shift+Tab", "Cycle views forward / back");
        lines.push(Line::from(""));

        self.section(&mut lines, "Heatmap");
        self.key(&mut lines, "h j k l / arrows", "Move the cell cursor");
        self.key(&mut lines, "g / G", "Jump to first / last year");
        lines.push(Line::from(""));

        self.section(&mut lines, "Colors");
        for (class, desc) in [
            (ColorClass::LargePositive, "Return above 10%"),
            (ColorClass::SmallPositive, "Return from 0% to 10% inclusive"),
            (ColorClass::Negative, "Return below 0%"),
            (ColorClass::Missing, "No data for the month"),
        ] {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(format!(" {:<14} ", class.label()), self.theme.cell_style(class)),
                Span::raw("  "),
                Span::styled(desc.to_string(), self.theme.secondary()),
            ]));
        }
        lines.push(Line::from(""));

        self.section(&mut lines, "Quit");
        self.key(&mut lines, "q / Esc", "Exit");

        let block = Block::default()
            .title(" Help ")
            .title_style(self.theme.title())
            .borders(Borders::ALL)
            .border_style(self.theme.border());
        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_keys_and_legend() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        HelpPanel::new(&theme).render(area, &mut buf);
        let mut content = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                content.push_str(buf.cell((x, y)).unwrap().symbol());
            }
        }
        assert!(content.contains("Tab / Shift+Tab"));
        assert!(content.contains("large positive"));
        assert!(content.contains("q / Esc"));
    }
}
