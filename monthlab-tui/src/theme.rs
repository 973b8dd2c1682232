//! Color tokens for the MonthLab TUI
//!
//! Heatmap cells use the classic four-step scale:
//! - **Missing**: grey
//! - **Negative**: red
//! - **SmallPositive**: yellow
//! - **LargePositive**: green
//!
//! Chrome (borders, titles, status bar) uses a dark background with cyan accents.

use ratatui::style::{Color, Modifier, Style};

use monthlab_core::ColorClass;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Deep charcoal (primary surface)
    pub background: Color,
    /// Cyan accent (focus, titles)
    pub accent: Color,
    /// Green (large gains, positive bars)
    pub positive: Color,
    /// Red (losses, non-positive bars)
    pub negative: Color,
    /// Yellow (small gains)
    pub caution: Color,
    /// Grey (no data)
    pub missing: Color,
    /// Steel blue (secondary text, borders)
    pub muted: Color,
    pub text_primary: Color,
    /// Text drawn on top of colored cells
    pub text_on_cell: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::heatmap()
    }
}

impl Theme {
    pub fn heatmap() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(46, 160, 67),
            negative: Color::Rgb(218, 54, 51),
            caution: Color::Rgb(230, 200, 40),
            missing: Color::Rgb(110, 110, 110),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_on_cell: Color::Black,
        }
    }

    /// Cell background for a color class.
    pub fn class_color(&self, class: ColorClass) -> Color {
        match class {
            ColorClass::Missing => self.missing,
            ColorClass::Negative => self.negative,
            ColorClass::SmallPositive => self.caution,
            ColorClass::LargePositive => self.positive,
        }
    }

    pub fn cell_style(&self, class: ColorClass) -> Style {
        Style::default()
            .bg(self.class_color(class))
            .fg(self.text_on_cell)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn secondary(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_colors_are_distinct() {
        let theme = Theme::default();
        let colors = [
            theme.class_color(ColorClass::Missing),
            theme.class_color(ColorClass::Negative),
            theme.class_color(ColorClass::SmallPositive),
            theme.class_color(ColorClass::LargePositive),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn class_mapping() {
        let theme = Theme::default();
        assert_eq!(theme.class_color(ColorClass::Negative), theme.negative);
        assert_eq!(theme.class_color(ColorClass::LargePositive), theme.positive);
        assert_eq!(theme.cell_style(ColorClass::Missing).bg, Some(theme.missing));
    }
}
