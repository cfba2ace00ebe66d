//! Title line.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::theme::*;

/// Render the centered colorful logo.
pub fn render_logo(frame: &mut Frame, area: Rect) {
    let colors = [LOGO_CORAL, LOGO_GOLD, LOGO_LIGHT_BLUE, LOGO_MINT];
    let spans: Vec<Span> = "wheelpick"
        .chars()
        .zip(colors.iter().cycle())
        .map(|(c, color)| Span::styled(c.to_string(), Style::new().fg(*color).bold()))
        .collect();

    let paragraph = Paragraph::new(Line::from(spans).centered());
    frame.render_widget(paragraph, area);
}
