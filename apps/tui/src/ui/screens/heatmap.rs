use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use tempgrid_shared::domain::MONTHS;
use tempgrid_shared::scale::BandScale;

use crate::app::{App, TooltipState};
use crate::ui::widgets::{grid, legend, tooltip};

/// Fixed chrome around the chart. Input handling recomputes this from the
/// frame size to hit-test mouse positions, so it must stay a pure function
/// of the area.
#[derive(Debug, Clone, Copy)]
pub struct HeatmapLayout {
    pub header: Rect,
    pub gutter: Rect,
    pub grid: Rect,
    pub x_axis: Rect,
    pub axis_title: Rect,
    pub legend: Rect,
    pub status: Rect,
    pub shortcuts: Rect,
}

pub fn heatmap_layout(area: Rect) -> HeatmapLayout {
    let outer = area.inner(Margin::new(2, 1));

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title area
            Constraint::Min(14),   // Chart area
            Constraint::Length(3), // Legend
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(outer);

    let chart = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(11), Constraint::Min(10)])
        .split(main[1]);

    let plot = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(12),   // Grid
            Constraint::Length(1), // Year ticks
            Constraint::Length(1), // Axis title
        ])
        .split(chart[1]);

    // the month gutter only runs alongside the grid, not the axis rows
    let gutter = Rect {
        x: chart[0].x,
        y: plot[0].y,
        width: chart[0].width,
        height: plot[0].height,
    };

    HeatmapLayout {
        header: main[0],
        gutter,
        grid: plot[0],
        x_axis: plot[1],
        axis_title: plot[2],
        legend: main[2],
        status: main[3],
        shortcuts: main[4],
    }
}

pub fn render_heatmap(app: &App, f: &mut Frame<'_>) {
    let layout = heatmap_layout(f.area());

    render_header(app, f, layout.header);
    render_month_gutter(f, layout.gutter);
    grid::render_grid(app, f, layout.grid);
    grid::render_year_axis(&app.extents, f, layout.x_axis);
    render_axis_title(f, layout.axis_title);
    legend::render_legend(&app.extents, f, layout.legend);
    render_status(app, f, layout.status);
    render_shortcuts(f, layout.shortcuts);

    // drawn last so it floats above the grid
    tooltip::render_tooltip(app, f, layout.grid);
}

fn render_header(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .title("== Global Temperature Heatmap ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let header_line = TextLine::from(vec![
        Span::styled("Base temperature: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{:.2} \u{b0}C", app.dataset.base_temperature),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "   {} - {}, {} records",
                app.extents.min_year,
                app.extents.max_year,
                app.dataset.monthly_variance.len()
            ),
            Style::default().fg(Color::Gray),
        ),
    ]);

    let paragraph = Paragraph::new(Text::from(header_line))
        .block(title_block)
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

/// Full month names down the left edge, one per band.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn render_month_gutter(f: &mut Frame<'_>, area: Rect) {
    if area.width < 4 || area.height == 0 {
        return;
    }

    let band = BandScale::months(0.0, f64::from(area.height));
    let label_width = (area.width - 1) as usize;

    let mut rows = vec![String::new(); area.height as usize];
    for month in MONTHS {
        let row = band.band_start(month.index()).round().max(0.0) as usize;
        if let Some(slot) = rows.get_mut(row) {
            let name = if label_width >= 9 {
                month.name()
            } else {
                month.short_name()
            };
            *slot = format!("{name:>label_width$} ");
        }
    }

    let lines: Vec<TextLine<'_>> = rows.into_iter().map(TextLine::from).collect();
    let paragraph = Paragraph::new(Text::from(lines)).style(Style::default().fg(Color::Gray));
    f.render_widget(paragraph, area);
}

fn render_axis_title(f: &mut Frame<'_>, area: Rect) {
    let paragraph = Paragraph::new("Years")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(paragraph, area);
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let status_text = if app.status_message.is_empty() {
        match app.tooltip {
            TooltipState::Visible { record } => {
                app.dataset.monthly_variance.get(record).map_or_else(
                    || Text::from(""),
                    |record| {
                        let (heading, body) = app.dataset.tooltip_lines(record);
                        Text::from(TextLine::from(vec![
                            Span::styled(
                                heading,
                                Style::default()
                                    .fg(Color::White)
                                    .add_modifier(Modifier::BOLD),
                            ),
                            Span::raw("  "),
                            Span::styled(body, Style::default().fg(Color::Yellow)),
                        ]))
                    },
                )
            }
            TooltipState::Hidden => Text::from(Span::styled(
                "Hover a cell with the mouse or move the cursor with the arrow keys",
                Style::default().fg(Color::Gray),
            )),
        }
    } else {
        let style = if app.status_message.starts_with("Error") {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        Text::from(Span::styled(&app.status_message, style))
    };

    let paragraph = Paragraph::new(status_text)
        .block(status_block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let hint_style = Style::default().fg(Color::Gray);

    let shortcuts = TextLine::from(vec![
        Span::styled("\u{2190}\u{2191}\u{2192}\u{2193}", key_style),
        Span::styled(": Move cell | ", hint_style),
        Span::styled("PgUp/PgDn", key_style),
        Span::styled(": Jump 10 years | ", hint_style),
        Span::styled("Esc", key_style),
        Span::styled(": Hide tooltip | ", hint_style),
        Span::styled("r", key_style),
        Span::styled(": Records | ", hint_style),
        Span::styled("F1", key_style),
        Span::styled(": Help | ", hint_style),
        Span::styled("q", key_style),
        Span::styled(": Quit", hint_style),
    ]);

    let paragraph = Paragraph::new(shortcuts).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_deterministic_for_hit_testing() {
        let area = Rect::new(0, 0, 120, 40);
        let first = heatmap_layout(area);
        let second = heatmap_layout(area);
        assert_eq!(first.grid, second.grid);
        assert_eq!(first.legend, second.legend);
    }

    #[test]
    fn gutter_and_grid_share_their_rows() {
        let layout = heatmap_layout(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.gutter.y, layout.grid.y);
        assert_eq!(layout.gutter.height, layout.grid.height);
        assert_eq!(layout.gutter.right(), layout.grid.x);
    }
}
