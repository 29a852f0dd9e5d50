use crossterm::event::KeyCode;

use crate::app::state::{App, AppScreen};

pub fn handle_heatmap_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Left => app.move_selection(-1, 0),
        KeyCode::Right => app.move_selection(1, 0),
        KeyCode::Up => app.move_selection(0, -1),
        KeyCode::Down => app.move_selection(0, 1),
        KeyCode::PageUp => app.move_selection(-10, 0),
        KeyCode::PageDown => app.move_selection(10, 0),
        KeyCode::Home => app.select_first_year(),
        KeyCode::End => app.select_last_year(),
        KeyCode::Enter => {
            // re-show the tooltip for the current cell after an Esc
            let year = app.selected_year();
            let month = app.selected_month();
            app.enter_cell(year, month);
        }
        KeyCode::Esc => app.leave_grid(),
        KeyCode::Char('r') => {
            app.selected_record_index = app.selected_record_id().unwrap_or(0);
            app.screen = AppScreen::Records;
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
        let dataset = Dataset {
            base_temperature: 8.0,
            monthly_variance: vec![
                TemperatureRecord {
                    year: 1900,
                    month: 1,
                    variance: -0.5,
                },
                TemperatureRecord {
                    year: 1900,
                    month: 2,
                    variance: 0.2,
                },
            ],
        };
        App::new(dataset).unwrap()
    }

    #[test]
    fn escape_hides_and_enter_restores_the_tooltip() {
        let mut app = app();
        handle_heatmap_input(&mut app, KeyCode::Esc);
        assert_eq!(app.tooltip, TooltipState::Hidden);

        handle_heatmap_input(&mut app, KeyCode::Enter);
        assert_eq!(app.tooltip, TooltipState::Visible { record: 0 });
    }

    #[test]
    fn arrows_walk_the_month_bands() {
        let mut app = app();
        handle_heatmap_input(&mut app, KeyCode::Down);
        assert_eq!(app.tooltip, TooltipState::Visible { record: 1 });
    }

    #[test]
    fn q_requests_shutdown() {
        let mut app = app();
        handle_heatmap_input(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }
}
