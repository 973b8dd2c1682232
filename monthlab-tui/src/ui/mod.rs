//! Top-level UI layout — tab bar, active view, status bar.

pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::text::Line;
use ratatui::widgets::Tabs;
use ratatui::Frame;

use crate::app::{AppState, View};
use crate::panels::{CountsChart, HeatmapPanel, HelpPanel};

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let titles: Vec<Line> = View::ALL
        .iter()
        .map(|v| Line::from(format!(" {} {} ", v.index() + 1, v.label())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.active_view.index())
        .style(app.theme.secondary())
        .highlight_style(app.theme.title())
        .divider("|");
    f.render_widget(tabs, chunks[0]);

    let main_area = chunks[1];
    match app.active_view {
        View::Heatmap => f.render_widget(
            HeatmapPanel::new(&app.report, app.cursor, &app.theme),
            main_area,
        ),
        View::ByMonth | View::ByYear => {
            if let Some(axis) = app.active_view.axis() {
                f.render_widget(CountsChart::new(app.counts_for(axis), &app.theme), main_area);
            }
        }
        View::Help => f.render_widget(HelpPanel::new(&app.theme), main_area),
    }

    status_bar::render(f, chunks[2], app);
}
