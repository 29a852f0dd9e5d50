use ratatui::layout::Margin;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_help_screen(f: &mut Frame<'_>) {
    let area = f.area().inner(Margin::new(2, 1));

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let help_text = vec![
        TextLine::from(vec![
            Span::styled("Global Temperature Heatmap", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        ]),
        TextLine::from(""),
        TextLine::from("Each cell is one observed month: years run left to right, months top to bottom."),
        TextLine::from("The fill color is the absolute temperature (base temperature plus the month's"),
        TextLine::from("variance), quantized onto a 13-step ramp from cool blue to warm red."),
        TextLine::from(""),
        TextLine::from(vec![
            Span::styled("Keyboard Shortcuts:", Style::default().add_modifier(Modifier::BOLD)),
        ]),
        TextLine::from(vec![
            Span::styled("  Arrows", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" - Move the cell cursor (months wrap, years stop at the edges)", Style::default()),
        ]),
        TextLine::from(vec![
            Span::styled("  Mouse", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" - Hover a cell to inspect it; leaving the chart hides the tooltip", Style::default()),
        ]),
        TextLine::from(vec![
            Span::styled("  PgUp/PgDn", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" - Jump ten years", Style::default()),
        ]),
        TextLine::from(vec![
            Span::styled("  Home/End", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" - First / last year", Style::default()),
        ]),
        TextLine::from(vec![
            Span::styled("  Enter", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" - Show the tooltip for the current cell", Style::default()),
        ]),
        TextLine::from(vec![
            Span::styled("  Esc", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" - Hide the tooltip / go back", Style::default()),
        ]),
        TextLine::from(vec![
            Span::styled("  r", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" - Raw records table", Style::default()),
        ]),
        TextLine::from(vec![
            Span::styled("  F1 or ?", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" - Toggle this help screen", Style::default()),
        ]),
        TextLine::from(vec![
            Span::styled("  q", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(" - Quit application", Style::default()),
        ]),
        TextLine::from(""),
        TextLine::from(vec![
            Span::styled("Legend:", Style::default().add_modifier(Modifier::BOLD)),
        ]),
        TextLine::from("  The strip under the chart shows all 13 palette colors with the temperature"),
        TextLine::from("  at every second band boundary, plus the dataset maximum."),
        TextLine::from(""),
        TextLine::from(vec![
            Span::styled("Press Esc to close this help screen", Style::default().fg(Color::Yellow)),
        ]),
    ];

    let help_paragraph = Paragraph::new(Text::from(help_text))
        .block(help_block)
        .wrap(Wrap { trim: true });

    f.render_widget(help_paragraph, area);
}
