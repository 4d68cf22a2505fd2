use crate::app::AppState;
use crate::domain::format_hours_minutes;
use crate::ui::styles::{border_style, default_style, done_style, hint_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the statistics pane: lifetime totals plus this session's task log
pub fn render_stats_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let record = app.stats.record();

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Time worked:   ", default_style()),
            Span::styled(format_hours_minutes(record.total_time_worked), done_style()),
        ]),
        Line::from(vec![
            Span::styled("Sessions done: ", default_style()),
            Span::styled(record.completed_sessions.to_string(), done_style()),
        ]),
        Line::from(vec![
            Span::styled("Tasks done:    ", default_style()),
            Span::styled(record.completed_tasks.to_string(), done_style()),
        ]),
        Line::from(vec![
            Span::styled("Tasks open:    ", default_style()),
            Span::raw(app.tasks.pending_count().to_string()),
        ]),
    ];

    if !app.stats.session_tasks().is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Done this session:",
            hint_style(),
        )));
        for text in app.stats.session_tasks() {
            lines.push(Line::from(vec![
                Span::styled("  ✔ ", done_style()),
                Span::raw(text.clone()),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Statistics ", title_style())),
    );

    f.render_widget(paragraph, area);
}
