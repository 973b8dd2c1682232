//! Bottom status bar — data source, selected cell, key hints.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use monthlab_core::domain::month_name;

use crate::app::{AppState, View};

pub fn status_line(app: &AppState) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::styled(
        format!(
            " {} | {} ({} obs)",
            app.report.symbol,
            app.source.label(),
            app.observation_count
        ),
        app.theme.text(),
    )];

    if app.active_view == View::Heatmap {
        if let Some(cell) = app.selected_cell() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                cell.describe(month_name(cell.month)),
                app.theme.title(),
            ));
        }
    }

    spans.push(Span::raw(" | "));
    spans.push(Span::styled("1-4:view Tab:next q:quit", app.theme.secondary()));
    Line::from(spans)
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Paragraph::new(status_line(app)), area);
}
