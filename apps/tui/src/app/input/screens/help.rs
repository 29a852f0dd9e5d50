use crossterm::event::KeyCode;

use crate::app::state::{App, AppScreen};

pub fn handle_help_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') => {
            app.screen = AppScreen::Heatmap;
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        _ => {}
    }
}
