use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" Space start/pause   "),
        Span::raw("r reset   "),
        Span::raw("+ / - minute   "),
        Span::raw("t set time   "),
        Span::raw("a add   "),
        Span::raw("Enter toggle   "),
        Span::raw("x delete   "),
        Span::raw("↑/↓ select   "),
        Span::raw("Shift+↑/↓ reorder   "),
        Span::raw("R reset stats   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
