// UI module for tempgrid
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::state::AppScreen;
use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    match app.screen {
        AppScreen::Heatmap => screens::heatmap::render_heatmap(app, f),
        AppScreen::Records => screens::records::render_records_view(app, f),
        AppScreen::Help => screens::help::render_help_screen(f),
    }
}
