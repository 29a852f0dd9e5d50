use crossterm::event::KeyCode;

use crate::app::input::helpers::step_saturating;
use crate::app::state::{App, AppScreen};

pub fn handle_records_input(app: &mut App, key: KeyCode) {
    let len = app.dataset.monthly_variance.len();

    match key {
        KeyCode::Up => {
            app.selected_record_index = step_saturating(app.selected_record_index, -1, len);
        }
        KeyCode::Down => {
            app.selected_record_index = step_saturating(app.selected_record_index, 1, len);
        }
        KeyCode::PageUp => {
            app.selected_record_index = step_saturating(app.selected_record_index, -12, len);
        }
        KeyCode::PageDown => {
            app.selected_record_index = step_saturating(app.selected_record_index, 12, len);
        }
        KeyCode::Home => {
            app.selected_record_index = 0;
        }
        KeyCode::End => {
            app.selected_record_index = len.saturating_sub(1);
        }
        KeyCode::Enter => {
            app.jump_to_record(app.selected_record_index);
            app.screen = AppScreen::Heatmap;
        }
        KeyCode::Esc => {
            app.screen = AppScreen::Heatmap;
        }
        KeyCode::F(1) | KeyCode::Char('?') => {
            app.screen = AppScreen::Help;
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::TooltipState;
    use tempgrid_shared::{Dataset, TemperatureRecord};

    fn app() -> App {
        let records = (0..20)
            .map(|i| TemperatureRecord {
                year: 1900 + i / 12,
                month: (i % 12 + 1) as u32,
                variance: 0.1,
            })
            .collect();
        let mut app = App::new(Dataset {
            base_temperature: 8.0,
            monthly_variance: records,
        })
        .unwrap();
        app.screen = AppScreen::Records;
        app
    }

    #[test]
    fn navigation_saturates_at_both_ends() {
        let mut app = app();
        handle_records_input(&mut app, KeyCode::Up);
        assert_eq!(app.selected_record_index, 0);

        handle_records_input(&mut app, KeyCode::End);
        assert_eq!(app.selected_record_index, 19);
        handle_records_input(&mut app, KeyCode::PageDown);
        assert_eq!(app.selected_record_index, 19);
    }

    #[test]
    fn enter_jumps_the_heatmap_cursor_to_the_record() {
        let mut app = app();
        handle_records_input(&mut app, KeyCode::Down);
        handle_records_input(&mut app, KeyCode::Enter);

        assert_eq!(app.screen, AppScreen::Heatmap);
        assert_eq!(app.tooltip, TooltipState::Visible { record: 1 });
    }
}
