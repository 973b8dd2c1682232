//! Keyboard handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, View};

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => { app.active_view = View::Heatmap; return; }
        KeyCode::Char('2') => { app.active_view = View::ByMonth; return; }
        KeyCode::Char('3') => { app.active_view = View::ByYear; return; }
        KeyCode::Char('4') | KeyCode::Char('?') => { app.active_view = View::Help; return; }
        KeyCode::Tab => {
            app.active_view = if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_view.prev()
            } else {
                app.active_view.next()
            };
            return;
        }
        KeyCode::BackTab => {
            app.active_view = app.active_view.prev();
            return;
        }
        _ => {}
    }

    if app.active_view == View::Heatmap {
        handle_heatmap_key(app, key);
    }
}

fn handle_heatmap_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1, 0),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1, 0),
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(0, -1),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(0, 1),
        KeyCode::Char('g') | KeyCode::Home => app.jump_first_row(),
        KeyCode::Char('G') | KeyCode::End => app.jump_last_row(),
        _ => {}
    }
}
