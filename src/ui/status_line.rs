use crate::app::{AppState, UiMode};
use crate::ui::styles::{default_style, error_style, hint_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the bottom status line: the active input prompt when typing,
/// otherwise the most recent status message.
pub fn render_status_line(f: &mut Frame, app: &AppState, area: Rect) {
    let line = match app.ui_mode {
        UiMode::AddingTask => Line::from(vec![
            Span::styled(" New task: ", hint_style()),
            Span::styled(format!("{}█", app.input_buffer), default_style()),
        ]),
        UiMode::EditingTime => Line::from(vec![
            Span::styled(" Set timer (MM:SS): ", hint_style()),
            Span::styled(format!("{}█", app.input_buffer), default_style()),
        ]),
        _ => match &app.status_message {
            Some(message) => Line::from(Span::styled(format!(" {message}"), error_style())),
            None => Line::raw(""),
        },
    };

    f.render_widget(Paragraph::new(line), area);
}
