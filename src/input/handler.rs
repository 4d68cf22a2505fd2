use crate::app::{AppState, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns `true` when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Any keypress clears a lingering status message
    app.status_message = None;

    // The completion modal takes over all input until resolved
    if app.timer.completion_pending() {
        return handle_completion_modal(app, key);
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask | UiMode::EditingTime => handle_input_line_mode(app, key),
        UiMode::ConfirmResetStats => handle_reset_confirm_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation (with Shift modifier for reordering)
        KeyCode::Up => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.move_task_up();
            } else {
                app.move_selection_up();
            }
            Ok(false)
        }
        KeyCode::Down => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.move_task_down();
            } else {
                app.move_selection_down();
            }
            Ok(false)
        }

        // Start / pause the session
        KeyCode::Char(' ') => {
            if app.timer.is_running() {
                app.pause_timer();
            } else {
                app.start_timer();
            }
            Ok(false)
        }

        // Stop: reset to the configured duration
        KeyCode::Char('r') => {
            app.stop_timer();
            Ok(false)
        }

        // Adjust remaining time by a minute
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.adjust_time(60);
            Ok(false)
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            app.adjust_time(-60);
            Ok(false)
        }

        // Set an exact MM:SS target
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.begin_time_entry();
            Ok(false)
        }

        // Add task
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.begin_add_task();
            Ok(false)
        }

        // Toggle completion of the selected task
        KeyCode::Enter => {
            app.toggle_selected_task();
            Ok(false)
        }

        // Delete the selected task
        KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => {
            app.delete_selected_task();
            Ok(false)
        }

        // Reset all statistics (asks for confirmation)
        KeyCode::Char('R') => {
            app.request_reset_stats();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        KeyCode::Esc => Ok(false),

        _ => Ok(false),
    }
}

/// Handle keys while the session-complete modal is showing
fn handle_completion_modal(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Stop: back to the configured duration
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Enter => {
            app.completion_stop();
            Ok(false)
        }

        // Quick-extend options
        KeyCode::Char('1') => {
            app.completion_extend(5);
            Ok(false)
        }
        KeyCode::Char('2') => {
            app.completion_extend(10);
            Ok(false)
        }
        KeyCode::Char('3') => {
            app.completion_extend(15);
            Ok(false)
        }
        KeyCode::Char('4') => {
            app.completion_extend(20);
            Ok(false)
        }

        // Escape just closes the modal, leaving the timer at zero
        KeyCode::Esc => {
            app.dismiss_completion();
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys in the single-line input modes (new task / time entry)
fn handle_input_line_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            match app.ui_mode {
                UiMode::AddingTask => app.submit_new_task(),
                UiMode::EditingTime => app.submit_time_entry(),
                _ => {}
            }
            Ok(false)
        }

        KeyCode::Esc => {
            app.cancel_input();
            Ok(false)
        }

        KeyCode::Backspace => {
            app.input_buffer.pop();
            Ok(false)
        }

        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input_buffer.push(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys while the reset-statistics confirmation is showing
fn handle_reset_confirm_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.confirm_reset_stats();
            Ok(false)
        }

        // Anything else cancels
        _ => {
            app.ui_mode = UiMode::Normal;
            Ok(false)
        }
    }
}
