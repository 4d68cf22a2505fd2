use crate::app::AppState;
use crate::domain::{format_mm_ss, TimerPhase};
use crate::ui::styles::{
    border_style, default_style, done_style, gauge_style, idle_style, paused_style, running_style,
    title_style,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

fn phase_badge(phase: TimerPhase) -> (&'static str, Style) {
    match phase {
        TimerPhase::Running => ("● RUNNING", running_style()),
        TimerPhase::Paused => ("⏸ PAUSED", paused_style()),
        TimerPhase::Completed => ("✔ COMPLETE", done_style()),
        TimerPhase::Idle => ("○ IDLE", idle_style()),
    }
}

/// Render the session timer pane: countdown, phase badge, progress gauge
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Session ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Countdown
            Constraint::Length(1), // Phase badge
            Constraint::Length(1), // spacer
            Constraint::Length(1), // Progress gauge
            Constraint::Min(0),
        ])
        .split(inner);

    let countdown = Paragraph::new(Line::from(Span::styled(
        format_mm_ss(app.timer.remaining_secs()),
        default_style().add_modifier(ratatui::style::Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(countdown, chunks[0]);

    let (badge, style) = phase_badge(app.timer.phase());
    let badge_line = Paragraph::new(Line::from(Span::styled(badge, style)))
        .alignment(Alignment::Center);
    f.render_widget(badge_line, chunks[1]);

    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .ratio(app.timer.progress().clamp(0.0, 1.0))
        .label(format!("of {}", format_mm_ss(app.timer.total_secs())));
    f.render_widget(gauge, chunks[3]);
}
