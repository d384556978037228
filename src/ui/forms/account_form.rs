//! Create Account form rendering

use super::field_renderer::{draw_checkbox, draw_field, draw_help_text, draw_strength};
use crate::app::App;
use crate::state::{Form, View, SIGN_IN_SLOT, SUBMIT_SLOT};
use crate::ui::components::{render_button, render_link, BUTTON_HEIGHT};
use crate::validation::FieldName;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the form card
const FORM_WIDTH: u16 = 64;

/// Centre a fixed-width column inside `area`
fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Draw the Create Account view
pub fn draw_create_account(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let card = centered_column(area, FORM_WIDTH);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // START FOR FREE
            Constraint::Length(2),             // Create Account
            Constraint::Length(3),             // First / last name
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Password
            Constraint::Length(1),             // Strength
            Constraint::Length(3),             // Confirm password
            Constraint::Length(2),             // Terms
            Constraint::Length(1),             // Submission error
            Constraint::Length(1),             // Sign in prompt
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),                // Help
        ])
        .margin(1)
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "START FOR FREE",
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            View::CreateAccount.title(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        chunks[1],
    );

    let names = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    let slots = [
        (0, names[0]),
        (1, names[1]),
        (2, chunks[3]),
        (3, chunks[4]),
        (4, chunks[6]),
        (5, chunks[7]),
    ];
    for (index, slot) in slots {
        let Some(field) = form.get_field(index) else {
            continue;
        };
        let is_active = form.active_field() == index;
        let error = form.error_for(field.name);
        if field.is_checkbox() {
            draw_checkbox(frame, slot, &field, is_active, error);
        } else {
            draw_field(frame, slot, &field, is_active, error, form.reveal_passwords);
        }
    }

    draw_strength(frame, chunks[5], form.strength());

    if let Some(message) = form.error_for(FieldName::Api) {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red),
            )))
            .alignment(Alignment::Center),
            chunks[8],
        );
    }

    render_link(
        frame,
        chunks[9],
        "Already have an account?",
        "Sign in",
        form.active_field() == SIGN_IN_SLOT,
    );

    render_button(
        frame,
        chunks[10],
        "Create Account",
        form.active_field() == SUBMIT_SLOT,
        Some(Color::Green),
    );

    draw_help_text(
        frame,
        chunks[11],
        "Tab: next  Space: toggle  Ctrl+S: submit  Ctrl+R: show passwords",
    );
}
