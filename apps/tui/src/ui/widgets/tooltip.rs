use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use tempgrid_shared::domain::Month;

use crate::app::{App, TooltipState};
use crate::ui::widgets::grid;

/// Floating label for the inspected record, drawn last so it sits on top of
/// the grid, offset from the cell like a cursor-following tooltip.
pub fn render_tooltip(app: &App, f: &mut Frame<'_>, grid_area: Rect) {
    let TooltipState::Visible { record } = app.tooltip else {
        return;
    };
    let Some(record) = app.dataset.monthly_variance.get(record) else {
        return;
    };
    let Some(month) = Month::from_number(record.month) else {
        return;
    };

    let (heading, body) = app.dataset.tooltip_lines(record);

    #[allow(clippy::cast_possible_truncation)]
    let width = (heading.chars().count().max(body.chars().count()) as u16).saturating_add(4);
    let height = 4;

    let anchor = grid::cell_position(grid_area, &app.extents, record.year, month);
    let area = anchored_rect(anchor, width, height, f.area());

    let text = Text::from(vec![
        TextLine::from(Span::styled(
            heading,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(body, Style::default().fg(Color::Yellow))),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(text).block(block), area);
}

/// Place a popup next to an anchor cell, flipping to the other side when it
/// would run off the edge, and always staying inside the bounds.
fn anchored_rect(anchor: (u16, u16), width: u16, height: u16, bounds: Rect) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);

    let mut x = anchor.0.saturating_add(2);
    if x.saturating_add(width) > bounds.right() {
        x = anchor.0.saturating_sub(width.saturating_add(1));
    }
    let mut y = anchor.1.saturating_add(1);
    if y.saturating_add(height) > bounds.bottom() {
        y = anchor.1.saturating_sub(height);
    }

    let x = x.clamp(bounds.x, bounds.right().saturating_sub(width));
    let y = y.clamp(bounds.y, bounds.bottom().saturating_sub(height));

    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    #[test]
    fn popup_sits_right_and_below_the_anchor() {
        let area = anchored_rect((10, 5), 20, 4, bounds());
        assert_eq!((area.x, area.y), (12, 6));
    }

    #[test]
    fn popup_flips_near_the_right_edge() {
        let area = anchored_rect((75, 5), 20, 4, bounds());
        assert!(area.right() <= 80);
        assert!(area.x < 75);
    }

    #[test]
    fn popup_flips_near_the_bottom_edge() {
        let area = anchored_rect((10, 23), 20, 4, bounds());
        assert!(area.bottom() <= 24);
        assert!(area.y < 23);
    }

    #[test]
    fn popup_never_leaves_tiny_bounds() {
        let tiny = Rect::new(0, 0, 10, 3);
        let area = anchored_rect((5, 1), 20, 4, tiny);
        assert!(area.width <= 10 && area.height <= 3);
        assert!(area.right() <= 10 && area.bottom() <= 3);
    }
}
