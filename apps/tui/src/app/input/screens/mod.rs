pub mod heatmap;
pub mod help;
pub mod records;

use crossterm::event::KeyCode;

use crate::app::state::{App, AppScreen};

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    match app.screen {
        AppScreen::Heatmap => heatmap::handle_heatmap_input(app, key),
        AppScreen::Records => records::handle_records_input(app, key),
        AppScreen::Help => help::handle_help_input(app, key),
    }
}
