//! Status bar view
//!
//! Shows the active edit input, transient status messages, and key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    // While editing, the status line is the input field
    if app.input_mode == InputMode::Editing {
        frame.render_widget(&app.input, area);
        return;
    }

    let mut spans = vec![];

    if let Some(ref message) = app.status_message {
        spans.push(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw(" │ "));
    }

    let hints = " e:Edit  b:Budget  c:Currency  r:Reset  ?:Help  q:Quit";
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}
