use std::collections::HashMap;
use std::time::Instant;

use color_eyre::Result;
use tempgrid_shared::{Dataset, Extents, Month};

#[derive(Debug, PartialEq, Eq)]
pub enum AppScreen {
    Heatmap,
    Records,
    Help,
}

/// Hover state machine: either nothing is inspected, or exactly one record
/// is, identified by its index into the record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipState {
    Hidden,
    Visible { record: usize },
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub dataset: Dataset,
    pub extents: Extents,
    pub tooltip: TooltipState,
    pub selected_year_index: usize,
    pub selected_month_index: usize,
    pub selected_record_index: usize,
    pub status_message: String,
    pub animation_counter: f64,
    pub last_frame: Instant,
    record_lookup: HashMap<(i32, u32), usize>,
}

impl App {
    pub fn new(dataset: Dataset) -> Result<Self> {
        let extents = Extents::from_dataset(&dataset)?;

        let record_lookup = dataset
            .monthly_variance
            .iter()
            .enumerate()
            .map(|(index, record)| ((record.year, record.month), index))
            .collect();

        let mut app = Self {
            running: true,
            screen: AppScreen::Heatmap,
            dataset,
            extents,
            tooltip: TooltipState::Hidden,
            selected_year_index: 0,
            selected_month_index: 0,
            selected_record_index: 0,
            status_message: String::new(),
            animation_counter: 0.0,
            last_frame: Instant::now(),
            record_lookup,
        };
        app.refresh_tooltip();

        Ok(app)
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        // Update animation counter (cycles between 0 and 2*PI)
        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const fn selected_year(&self) -> i32 {
        self.extents.min_year + self.selected_year_index as i32
    }

    pub fn selected_month(&self) -> Month {
        Month::from_index(self.selected_month_index).unwrap_or(Month::January)
    }

    pub fn record_index_at(&self, year: i32, month: Month) -> Option<usize> {
        self.record_lookup.get(&(year, month.number())).copied()
    }

    /// The record under the selection cursor, if that cell was observed.
    pub fn selected_record_id(&self) -> Option<usize> {
        self.record_index_at(self.selected_year(), self.selected_month())
    }

    /// Transition hidden -> visible-for-record: the pointer (or the cursor)
    /// entered a cell. Cells with no record hide the tooltip instead.
    pub fn enter_cell(&mut self, year: i32, month: Month) {
        if year < self.extents.min_year || year > self.extents.max_year {
            self.leave_grid();
            return;
        }

        #[allow(clippy::cast_sign_loss)]
        {
            self.selected_year_index = (year - self.extents.min_year) as usize;
        }
        self.selected_month_index = month.index();
        self.refresh_tooltip();
    }

    /// Transition visible -> hidden: the pointer left the chart.
    pub fn leave_grid(&mut self) {
        self.tooltip = TooltipState::Hidden;
    }

    /// Move the selection cursor by whole years and months. Years clamp at
    /// the dataset edges, months wrap around.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn move_selection(&mut self, years: i32, months: i32) {
        self.status_message.clear();

        let year_count = self.extents.year_count() as i64;
        let index = self.selected_year_index as i64 + i64::from(years);
        self.selected_year_index = index.clamp(0, year_count - 1) as usize;

        let months = i64::from(months).rem_euclid(12) as usize;
        self.selected_month_index = (self.selected_month_index + months) % 12;

        self.refresh_tooltip();
    }

    pub fn select_first_year(&mut self) {
        self.selected_year_index = 0;
        self.refresh_tooltip();
    }

    pub fn select_last_year(&mut self) {
        self.selected_year_index = self.extents.year_count() - 1;
        self.refresh_tooltip();
    }

    /// Jump the heatmap cursor to a record picked on the records screen.
    pub fn jump_to_record(&mut self, index: usize) {
        if let Some(record) = self.dataset.monthly_variance.get(index) {
            let year = record.year;
            let month = Month::from_number(record.month).unwrap_or(Month::January);
            self.enter_cell(year, month);
            self.status_message = format!("Showing {} {year}", month.name());
        }
    }

    fn refresh_tooltip(&mut self) {
        self.tooltip = self
            .selected_record_id()
            .map_or(TooltipState::Hidden, |record| TooltipState::Visible {
                record,
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempgrid_shared::TemperatureRecord;

    fn record(year: i32, month: u32, variance: f64) -> TemperatureRecord {
        TemperatureRecord {
            year,
            month,
            variance,
        }
    }

    fn sample_app() -> App {
        let dataset = Dataset {
            base_temperature: 8.0,
            monthly_variance: vec![
                record(1900, 1, -0.5),
                record(1900, 2, 0.1),
                record(1901, 1, 0.3),
            ],
        };
        App::new(dataset).unwrap()
    }

    #[test]
    fn starts_with_the_tooltip_on_the_first_record() {
        let app = sample_app();
        assert_eq!(app.tooltip, TooltipState::Visible { record: 0 });
        assert_eq!(app.selected_year(), 1900);
        assert_eq!(app.selected_month(), Month::January);
    }

    #[test]
    fn entering_an_observed_cell_shows_its_record() {
        let mut app = sample_app();
        app.enter_cell(1901, Month::January);
        assert_eq!(app.tooltip, TooltipState::Visible { record: 2 });
    }

    #[test]
    fn entering_an_unobserved_cell_hides_the_tooltip() {
        let mut app = sample_app();
        app.enter_cell(1901, Month::March);
        assert_eq!(app.tooltip, TooltipState::Hidden);
    }

    #[test]
    fn leaving_the_grid_hides_the_tooltip() {
        let mut app = sample_app();
        app.leave_grid();
        assert_eq!(app.tooltip, TooltipState::Hidden);
    }

    #[test]
    fn year_movement_clamps_at_the_dataset_edges() {
        let mut app = sample_app();
        app.move_selection(-5, 0);
        assert_eq!(app.selected_year(), 1900);
        app.move_selection(100, 0);
        assert_eq!(app.selected_year(), 1901);
    }

    #[test]
    fn month_movement_wraps() {
        let mut app = sample_app();
        app.move_selection(0, -1);
        assert_eq!(app.selected_month(), Month::December);
        app.move_selection(0, 1);
        assert_eq!(app.selected_month(), Month::January);
    }

    #[test]
    fn jumping_to_a_record_moves_cursor_and_tooltip() {
        let mut app = sample_app();
        app.jump_to_record(1);
        assert_eq!(app.selected_month(), Month::February);
        assert_eq!(app.tooltip, TooltipState::Visible { record: 1 });
    }
}
