//! Picker container, wheel columns and the fixed highlight band.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::picker::{GestureColumn, Picker, Transition};
use crate::tui::interaction::{ClickRegion, InteractiveRegion};
use crate::tui::theme::*;

use super::{band_rows, label_row};

/// Width of one column in cells
const COLUMN_WIDTH: u16 = 14;

/// Terminal rows covered by the picker height.
pub fn picker_rows(picker: &Picker, cell_height: f64) -> u16 {
    let rows = (picker.metrics().column_height / cell_height).round();
    rows.clamp(1.0, f64::from(u16::MAX)) as u16
}

/// Render the picker centered in `area` and register its columns for hit testing.
pub fn render_picker(frame: &mut Frame, area: Rect, app: &mut App) {
    app.interactions.clear();

    let cell_height = app.config.cell_height();
    let columns = app.picker.len() as u16;
    let width = columns
        .saturating_mul(COLUMN_WIDTH)
        .saturating_add(2)
        .min(area.width);
    let height = picker_rows(&app.picker, cell_height)
        .saturating_add(2)
        .min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let picker_area = Rect::new(x, y, width, height);

    let block = Block::default()
        .title(" Pick ")
        .title_style(Style::new().fg(LOGO_MINT).bold())
        .borders(Borders::ALL)
        .border_style(Style::new().fg(LOGO_MINT));
    let inner = block.inner(picker_area);
    frame.render_widget(block, picker_area);

    if columns == 0 || inner.is_empty() {
        return;
    }

    let slots = Layout::horizontal(vec![Constraint::Fill(1); columns as usize]).split(inner);
    for (column, slot) in app.picker.columns().zip(slots.iter()) {
        render_column(frame, *slot, column, cell_height);
        app.interactions.register(InteractiveRegion::column(
            column.name(),
            ClickRegion::from(*slot),
        ));
    }

    // Fixed band across all columns, drawn over the labels
    let band = band_rows(app.picker.highlight(), cell_height);
    let band_area = Rect::new(
        inner.x,
        inner.y.saturating_add(band.start),
        inner.width,
        band.end.saturating_sub(band.start),
    )
    .intersection(inner);
    frame
        .buffer_mut()
        .set_style(band_area, Style::new().bg(HIGHLIGHT_BG));
}

fn render_column(frame: &mut Frame, area: Rect, column: &GestureColumn, cell_height: f64) {
    let mut lines = vec![Line::raw(""); area.height as usize];
    let half_item = column.metrics().item_height / 2.0;
    let tracking = column.transition() == Transition::Immediate;

    for item in column.visible_items() {
        let Some(row) = label_row(item.top + half_item, cell_height) else {
            continue;
        };
        let Some(line) = lines.get_mut(row as usize) else {
            continue;
        };

        let style = if item.selected {
            Style::new().fg(TEXT_WHITE).bold()
        } else if tracking {
            Style::new().fg(LOGO_LIGHT_BLUE)
        } else {
            Style::new().fg(TEXT_DIM)
        };
        *line = Line::styled(item.option.label.to_string(), style).centered();
    }

    frame.render_widget(Paragraph::new(lines), area);
}
