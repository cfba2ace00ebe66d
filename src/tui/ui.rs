use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::app::App;
use super::components::*;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Main vertical layout: logo, picker, values, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(2), // Logo + spacing
        Constraint::Min(0),    // Picker
        Constraint::Length(1), // Selected values
        Constraint::Length(1), // Hotkeys
    ])
    .split(area);

    render_logo(frame, main_layout[0]);
    render_picker(frame, main_layout[1], app);
    render_values(frame, main_layout[2], app);
    render_hotkeys(frame, main_layout[3], app);
}
