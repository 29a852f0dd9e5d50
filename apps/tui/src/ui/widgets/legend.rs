use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use tempgrid_shared::extent::Extents;
use tempgrid_shared::scale::{LinearScale, QuantizeScale, PALETTE};

use super::grid::palette_color;

/// Color key: one swatch per palette entry (always all thirteen), with the
/// band boundary temperatures labelled underneath.
pub fn render_legend(extents: &Extents, f: &mut Frame<'_>, area: Rect) {
    let swatch_count = PALETTE.len() as u16;
    if area.width < swatch_count || area.height < 3 {
        let paragraph = Paragraph::new("(no room for legend)")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, area);
        return;
    }

    // keep swatches readable instead of stretching across a wide terminal
    let legend_width = area.width.min(swatch_count * 5);
    let widths = swatch_widths(legend_width);

    let swatch_line = TextLine::from(
        widths
            .iter()
            .zip(PALETTE)
            .map(|(width, rgb)| {
                Span::styled(
                    " ".repeat(*width as usize),
                    Style::default().bg(palette_color(rgb)),
                )
            })
            .collect::<Vec<_>>(),
    );

    let quantize = QuantizeScale::from_extents(extents);
    let tick_line = TextLine::styled(
        tick_row(&quantize, legend_width),
        Style::default().fg(Color::Gray),
    );

    let mut lines = vec![swatch_line.clone()];
    if area.height > 3 {
        lines.push(swatch_line);
    }
    lines.push(tick_line);

    f.render_widget(Paragraph::new(Text::from(lines)), area);
}

/// Distribute the legend width over the thirteen swatches; earlier swatches
/// absorb the remainder so the total always matches.
pub fn swatch_widths(total: u16) -> [u16; 13] {
    let count = 13_u16;
    let base = total / count;
    let remainder = total % count;

    let mut widths = [base; 13];
    for width in widths.iter_mut().take(remainder as usize) {
        *width += 1;
    }
    widths
}

/// Boundary labels placed by the linear legend scale. The domain maximum is
/// pinned to the right edge; boundary labels that would crowd it are skipped.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn tick_row(quantize: &QuantizeScale, width: u16) -> String {
    let ticks = quantize.legend_ticks();
    let first = ticks.first().copied().unwrap_or(0.0);
    let last = ticks.last().copied().unwrap_or(0.0);
    let linear = LinearScale::new(first, last, 0.0, f64::from(width));

    let mut row = vec![' '; width as usize];

    let max_label = format!("{last:.1}");
    let max_start = row.len().saturating_sub(max_label.len());
    for (offset, ch) in max_label.chars().enumerate() {
        row[max_start + offset] = ch;
    }

    let mut next_free = 0_usize;
    for tick in ticks.iter().take(ticks.len().saturating_sub(1)) {
        let label = format!("{tick:.1}");
        let center = linear.map(*tick).round().max(0.0) as usize;
        let start = center.saturating_sub(label.len() / 2);

        if start >= next_free && start + label.len() < max_start {
            for (offset, ch) in label.chars().enumerate() {
                row[start + offset] = ch;
            }
            next_free = start + label.len() + 1;
        }
    }

    row.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn there_are_always_thirteen_swatches() {
        for total in [13_u16, 26, 52, 65, 200] {
            let widths = swatch_widths(total);
            assert_eq!(widths.len(), 13);
            assert_eq!(widths.iter().sum::<u16>(), total);
            assert!(widths.iter().all(|w| *w >= 1), "total {total}");
        }
    }

    #[test]
    fn tick_row_spans_min_to_max() {
        let quantize = QuantizeScale::new(1.7, 13.9);
        let row = tick_row(&quantize, 60);
        assert_eq!(row.len(), 60);
        assert!(row.trim_start().starts_with("1.7"));
        assert!(row.trim_end().ends_with("13.9"));
    }
}
