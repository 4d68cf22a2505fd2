use crate::app::AppState;
use crate::ui::styles::{border_style, default_style, done_style, selected_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the task list pane
pub fn render_tasks_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = app
        .tasks
        .tasks()
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let checkbox = if task.completed { "[x] " } else { "[ ] " };
            let text_style = if i == app.selected_index {
                selected_style()
            } else if task.completed {
                done_style()
            } else {
                default_style()
            };

            ListItem::new(Line::from(vec![
                Span::styled(checkbox, text_style),
                Span::styled(task.text.clone(), text_style),
            ]))
        })
        .collect();

    let title = format!(
        " Tasks ({} done, {} open) ",
        app.tasks.completed_count(),
        app.tasks.pending_count()
    );

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}
