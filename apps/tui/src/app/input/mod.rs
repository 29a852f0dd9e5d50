mod helpers;
pub mod screens;

use crossterm::event::{KeyCode, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::state::{App, AppScreen};
use crate::ui::screens::heatmap::heatmap_layout;
use crate::ui::widgets::grid;

pub fn handle_input(app: &mut App, key: KeyCode) {
    screens::dispatch_input(app, key);
}

/// Pointer hover: entering a cell shows its tooltip, leaving the chart (or
/// crossing a cell with no record) hides it. Only the heatmap screen has a
/// pointer surface.
pub fn handle_mouse(app: &mut App, event: MouseEvent, frame: Rect) {
    if app.screen != AppScreen::Heatmap {
        return;
    }

    if !matches!(
        event.kind,
        MouseEventKind::Moved | MouseEventKind::Down(_) | MouseEventKind::Drag(_)
    ) {
        return;
    }

    let layout = heatmap_layout(frame);
    match grid::cell_at(layout.grid, &app.extents, event.column, event.row) {
        Some((year, month)) => app.enter_cell(year, month),
        None => app.leave_grid(),
    }
}
