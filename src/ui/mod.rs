pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod stats_pane;
pub mod status_line;
pub mod styles;
pub mod tasks_pane;
pub mod timer_pane;

use crate::app::{AppState, UiMode};
use keybindings::render_keybindings;
use layout::create_layout;
use modal::{render_completion_modal, render_reset_confirm_modal};
use ratatui::Frame;
use stats_pane::render_stats_pane;
use status_line::render_status_line;
use tasks_pane::render_tasks_pane;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &mut AppState) {
    let size = f.size();
    let layout = create_layout(size);

    // Render keybindings bar
    render_keybindings(f, layout.keybindings_area);

    // Render panes
    render_timer_pane(f, app, layout.timer_area);
    render_stats_pane(f, app, layout.stats_area);
    render_tasks_pane(f, app, layout.tasks_area);

    // Render status / input line
    render_status_line(f, app, layout.status_area);

    // Completion modal takes precedence over everything
    if app.timer.completion_pending() {
        render_completion_modal(f, app, size);
        return;
    }

    if app.ui_mode == UiMode::ConfirmResetStats {
        render_reset_confirm_modal(f, size);
    }
}
