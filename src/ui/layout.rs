//! Layout components (content area and status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Key hints for the current view
fn get_view_hints(view: &View) -> &'static str {
    match view {
        View::CreateAccount => "Tab/↑↓: move | Enter: select | ^S: submit | Esc: quit",
        View::SignIn => "Esc: back | q: quit",
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(" ● ", Style::default().fg(Color::Green)),
        Span::styled(
            format!("{} ", app.service_label),
            Style::default().fg(Color::Blue),
        ),
        Span::raw("| "),
        Span::styled(
            get_view_hints(&app.state.current_view),
            Style::default().fg(Color::Black),
        ),
    ];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        let color = if app.state.form.errors.is_empty() {
            Color::Green
        } else {
            Color::Red
        };
        spans.push(Span::styled(msg.clone(), Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
