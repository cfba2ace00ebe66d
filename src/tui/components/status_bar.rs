//! Selected values and hotkeys.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::tui::theme::*;

/// Render the label selected in each column.
pub fn render_values(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    for (i, column) in app.picker.columns().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", Style::new().fg(TEXT_DIM)));
        }
        let label = column
            .options()
            .iter()
            .find(|option| Some(&option.value) == column.value())
            .map(|option| option.label.to_string())
            .unwrap_or_else(|| "-".to_string());

        spans.push(Span::styled(
            format!("{} ", column.name()),
            Style::new().fg(TEXT_DIM),
        ));
        spans.push(Span::styled(label, Style::new().fg(LOGO_LIGHT_BLUE).bold()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
}

/// Render the hotkey bar with the last status message.
pub fn render_hotkeys(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled("[drag]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" scroll · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[click]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" select · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[Esc]", Style::new().fg(TEXT_WHITE)),
    ];

    if app.drag_owner().is_some() {
        spans.push(Span::styled(" cancel drag · ", Style::new().fg(TEXT_DIM)));
    } else {
        spans.push(Span::styled(" quit · ", Style::new().fg(TEXT_DIM)));
    }
    spans.push(Span::styled("[q]", Style::new().fg(TEXT_WHITE)));
    spans.push(Span::styled(" quit", Style::new().fg(TEXT_DIM)));

    if let Some(status) = &app.status {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(status.as_str(), Style::new().fg(LOGO_GOLD)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
