use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{done_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the session-complete modal
pub fn render_completion_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let modal_area = create_modal_area(area);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let mut lines = Vec::new();

    lines.push(Line::raw(""));
    lines.push(Line::raw("  Session complete. Nice work!"));
    lines.push(Line::raw(""));

    if !app.stats.session_tasks().is_empty() {
        lines.push(Line::raw("  Finished this session:"));
        for text in app.stats.session_tasks() {
            lines.push(Line::from(vec![
                Span::styled("    ✔ ", done_style()),
                Span::raw(text.clone()),
            ]));
        }
        lines.push(Line::raw(""));
    }

    lines.push(Line::raw("  Keep going?"));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  [1]", modal_title_style()),
        Span::raw(" +5m  "),
        Span::styled("[2]", modal_title_style()),
        Span::raw(" +10m  "),
        Span::styled("[3]", modal_title_style()),
        Span::raw(" +15m  "),
        Span::styled("[4]", modal_title_style()),
        Span::raw(" +20m  "),
        Span::styled("[s]", modal_title_style()),
        Span::raw(" Stop"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" ⏱ Time's Up ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Render the reset-statistics confirmation modal
pub fn render_reset_confirm_modal(f: &mut Frame, area: Rect) {
    let modal_area = create_modal_area(area);

    f.render_widget(Clear, modal_area);

    let lines = vec![
        Line::raw(""),
        Line::raw("  Reset all statistics to zero?"),
        Line::raw(""),
        Line::raw("  This cannot be undone."),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [y]", modal_title_style()),
            Span::raw(" Reset  "),
            Span::styled("[any other key]", modal_title_style()),
            Span::raw(" Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Reset Statistics ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
