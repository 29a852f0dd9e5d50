use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use tempgrid_shared::domain::Month;
use tempgrid_shared::scale::QuantizeScale;

use crate::app::App;
use crate::ui::widgets::grid::palette_color;

pub fn render_records_view(app: &App, f: &mut Frame<'_>) {
    let area = f.area();

    if app.dataset.monthly_variance.is_empty() {
        let block = Block::default()
            .title("Records Table")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let paragraph = Paragraph::new("No records found.")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Year"),
        Cell::from("Month"),
        Cell::from("Variance"),
        Cell::from("Temperature"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let total_rows = app.dataset.monthly_variance.len();
    let max_visible_rows = area.height.saturating_sub(7) as usize;

    let mut scroll_offset = 0;
    if total_rows > max_visible_rows {
        if app.selected_record_index >= max_visible_rows + scroll_offset {
            scroll_offset = app.selected_record_index.saturating_sub(max_visible_rows) + 1;
        } else if app.selected_record_index < scroll_offset {
            scroll_offset = app.selected_record_index;
        }
    }

    let quantize = QuantizeScale::from_extents(&app.extents);
    let visible_records = app
        .dataset
        .monthly_variance
        .iter()
        .skip(scroll_offset)
        .take(max_visible_rows);

    let rows = visible_records.enumerate().map(|(i, record)| {
        let is_selected = i + scroll_offset == app.selected_record_index;
        let temperature = app.dataset.temperature(record);
        let style = if is_selected {
            Style::default()
                .bg(Color::Rgb(0, 0, 238))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette_color(quantize.color(temperature)))
        };

        Row::new(vec![
            Cell::from(record.year.to_string()),
            Cell::from(Month::from_number(record.month).map_or("?", Month::name)),
            Cell::from(format!("{:+.3}", record.variance)),
            Cell::from(format!("{temperature:.2} \u{b0}C")),
        ])
        .style(style)
    });

    let widths = [
        Constraint::Length(6),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(
                    "Records Table ({} of {})",
                    app.selected_record_index + 1,
                    total_rows
                ))
                .borders(Borders::ALL),
        )
        .column_spacing(1);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(area);

    f.render_widget(table, chunks[0]);

    let help_text = vec![
        Span::styled(
            "ESC",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Back to heatmap   "),
        Span::styled(
            "\u{2191}/\u{2193}",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Navigate   "),
        Span::styled(
            "PgUp/PgDn",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Jump 12 rows   "),
        Span::styled(
            "Home/End",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": First/Last   "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Show on heatmap   "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Quit"),
    ];

    let help_paragraph = Paragraph::new(TextLine::from(help_text))
        .block(Block::default().borders(Borders::TOP))
        .alignment(Alignment::Center);

    f.render_widget(help_paragraph, chunks[1]);
}
