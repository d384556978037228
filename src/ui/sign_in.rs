//! Sign In placeholder reached from the "Sign in" link

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            View::SignIn.title(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Route: ", Style::default().fg(Color::Gray)),
            Span::styled(app.sign_in_route.clone(), Style::default().fg(Color::Blue)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Signing in is handled outside this form.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "Press Esc to return to Create Account.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" {} ", View::SignIn.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(paragraph, area);
}
