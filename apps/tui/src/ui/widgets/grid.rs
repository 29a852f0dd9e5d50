use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use tempgrid_shared::domain::Month;
use tempgrid_shared::extent::Extents;
use tempgrid_shared::scale::{BandScale, QuantizeScale, Rgb, TimeScale};

use crate::app::App;

pub const fn palette_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

fn grid_scales(grid: Rect, extents: &Extents) -> (TimeScale, BandScale) {
    (
        TimeScale::new(extents, 0.0, f64::from(grid.width)),
        BandScale::months(0.0, f64::from(grid.height)),
    )
}

/// Map an absolute terminal position onto the (year, month) cell under it.
pub fn cell_at(grid: Rect, extents: &Extents, column: u16, row: u16) -> Option<(i32, Month)> {
    let inside = column >= grid.x
        && column < grid.x.saturating_add(grid.width)
        && row >= grid.y
        && row < grid.y.saturating_add(grid.height);
    if !inside {
        return None;
    }

    let (time, band) = grid_scales(grid, extents);
    let year = time.year_at(f64::from(column - grid.x) + 0.5)?;
    let month_index = band.index_at(f64::from(row - grid.y) + 0.5)?;
    Month::from_index(month_index).map(|month| (year, month))
}

/// Absolute terminal position of a cell, used to anchor the tooltip.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn cell_position(grid: Rect, extents: &Extents, year: i32, month: Month) -> (u16, u16) {
    let (time, band) = grid_scales(grid, extents);

    let x = time
        .map_year(year)
        .round()
        .clamp(0.0, f64::from(grid.width.saturating_sub(1))) as u16;
    let y = band
        .band_start(month.index())
        .round()
        .clamp(0.0, f64::from(grid.height.saturating_sub(1))) as u16;

    (grid.x.saturating_add(x), grid.y.saturating_add(y))
}

/// Paint one colored cell per terminal cell: columns resolve to years
/// through the time scale, rows to months through the band scale, fill
/// through the quantize scale. Unobserved cells stay dark.
pub fn render_grid(app: &App, f: &mut Frame<'_>, area: Rect) {
    if area.width < 12 || area.height < 12 {
        let paragraph = Paragraph::new("Terminal too small for the heatmap")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, area);
        return;
    }

    let quantize = QuantizeScale::from_extents(&app.extents);
    let (time, band) = grid_scales(area, &app.extents);
    let selected = (app.selected_year(), app.selected_month());
    let blink = (app.animation_counter * 2.0).sin() > 0.0;

    let mut lines = Vec::with_capacity(area.height as usize);
    for row in 0..area.height {
        let month = band
            .index_at(f64::from(row) + 0.5)
            .and_then(Month::from_index);

        let mut spans = Vec::with_capacity(area.width as usize);
        for col in 0..area.width {
            let year = time.year_at(f64::from(col) + 0.5);

            let cell = match (year, month) {
                (Some(year), Some(month)) => app
                    .record_index_at(year, month)
                    .map(|index| (year, month, index)),
                _ => None,
            };

            let span = match cell {
                Some((year, month, index)) => {
                    let record = &app.dataset.monthly_variance[index];
                    let color = palette_color(quantize.color(app.dataset.temperature(record)));
                    if (year, month) == selected {
                        // blinking cursor block over the selected cell
                        let marker = if blink { "\u{2588}" } else { " " };
                        Span::styled(
                            marker,
                            Style::default()
                                .fg(Color::White)
                                .bg(color)
                                .add_modifier(Modifier::BOLD),
                        )
                    } else {
                        Span::styled(" ", Style::default().bg(color))
                    }
                }
                None => Span::styled("\u{b7}", Style::default().fg(Color::DarkGray)),
            };
            spans.push(span);
        }
        lines.push(TextLine::from(spans));
    }

    f.render_widget(Paragraph::new(Text::from(lines)), area);
}

/// Year tick labels along the bottom edge of the grid.
pub fn render_year_axis(extents: &Extents, f: &mut Frame<'_>, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let time = TimeScale::new(extents, 0.0, f64::from(area.width));
    let labels = year_tick_row(extents, &time, area.width);

    let paragraph = Paragraph::new(labels).style(Style::default().fg(Color::Gray));
    f.render_widget(paragraph, area);
}

const TICK_STEPS: [i32; 8] = [1, 2, 5, 10, 20, 25, 50, 100];

/// Lay year labels into a single text row, skipping any that would collide.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn year_tick_row(extents: &Extents, time: &TimeScale, width: u16) -> String {
    let span = extents.max_year - extents.min_year;
    let step = TICK_STEPS
        .iter()
        .copied()
        .find(|step| (span / step + 1) * 6 <= i32::from(width))
        .unwrap_or(100);

    let mut row = vec![' '; width as usize];
    let mut next_free = 0_usize;

    // first multiple of the step inside the year span
    let mut year = extents.min_year.div_euclid(step) * step;
    if year < extents.min_year {
        year += step;
    }

    while year <= extents.max_year {
        let label = year.to_string();
        let x = time.map_year(year).round().max(0.0) as usize;

        if x >= next_free && x + label.len() <= row.len() {
            for (offset, ch) in label.chars().enumerate() {
                row[x + offset] = ch;
            }
            next_free = x + label.len() + 1;
        }

        year += step;
    }

    row.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempgrid_shared::{Dataset, TemperatureRecord};

    fn extents() -> Extents {
        Extents {
            min_year: 1753,
            max_year: 2015,
            min_temp: 1.68,
            max_temp: 13.89,
        }
    }

    #[test]
    fn cell_lookup_round_trips_through_the_grid() {
        let grid = Rect::new(12, 4, 120, 24);
        let extents = extents();

        let (x, y) = cell_position(grid, &extents, 1900, Month::June);
        let (year, month) = cell_at(grid, &extents, x, y).unwrap();
        // a terminal cell can cover several years; the month band is exact
        assert!((year - 1900).abs() <= 3);
        assert_eq!(month, Month::June);
    }

    #[test]
    fn positions_outside_the_grid_are_not_cells() {
        let grid = Rect::new(12, 4, 120, 24);
        let extents = extents();
        assert_eq!(cell_at(grid, &extents, 11, 10), None);
        assert_eq!(cell_at(grid, &extents, 12 + 120, 10), None);
        assert_eq!(cell_at(grid, &extents, 40, 3), None);
    }

    #[test]
    fn column_positions_do_not_decrease_with_year() {
        let grid = Rect::new(0, 0, 100, 24);
        let extents = extents();
        let mut last = 0;
        for year in extents.min_year..=extents.max_year {
            let (x, _) = cell_position(grid, &extents, year, Month::January);
            assert!(x >= last, "year {year} moved left");
            last = x;
        }
    }

    #[test]
    fn rows_cover_exactly_twelve_bands() {
        let grid = Rect::new(0, 0, 80, 36);
        let extents = extents();
        let mut seen = std::collections::BTreeSet::new();
        for row in 0..36 {
            if let Some((_, month)) = cell_at(grid, &extents, 10, row) {
                seen.insert(month.index());
            }
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn year_ticks_fit_the_row_without_collisions() {
        let extents = extents();
        let time = TimeScale::new(&extents, 0.0, 120.0);
        let row = year_tick_row(&extents, &time, 120);
        assert_eq!(row.len(), 120);
        assert!(row.contains("1800"));
    }

    #[test]
    fn hover_enter_and_leave_follow_the_pointer() {
        let dataset = Dataset {
            base_temperature: 8.0,
            monthly_variance: vec![TemperatureRecord {
                year: 1900,
                month: 6,
                variance: 0.0,
            }],
        };
        let mut app = App::new(dataset).unwrap();
        let grid = Rect::new(0, 0, 60, 24);

        let (x, y) = cell_position(grid, &app.extents, 1900, Month::June);
        if let Some((year, month)) = cell_at(grid, &app.extents, x, y) {
            app.enter_cell(year, month);
        }
        assert_eq!(
            app.tooltip,
            crate::app::TooltipState::Visible { record: 0 }
        );

        app.leave_grid();
        assert_eq!(app.tooltip, crate::app::TooltipState::Hidden);
    }
}
