//! Field rendering utilities for forms

use crate::state::FormField;
use crate::validation::PasswordStrength;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Border/text color for a field given focus and error state
fn field_color(is_active: bool, has_error: bool) -> Color {
    match (is_active, has_error) {
        (true, _) => Color::Cyan,
        (false, true) => Color::Red,
        (false, false) => Color::DarkGray,
    }
}

/// Draw a bordered text input; a validation error is shown on the bottom border
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
    reveal: bool,
) {
    let color = field_color(is_active, error.is_some());

    let display_value = field.display_value(reveal);
    let (text, text_style) = if display_value.is_empty() && !is_active {
        // Placeholder, like an empty input showing its hint
        (field.label.to_string(), Style::default().fg(Color::DarkGray))
    } else {
        (display_value, Style::default().fg(Color::White))
    };

    let cursor = if is_active { "▌" } else { "" };

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }

    let content = Paragraph::new(Line::from(vec![
        Span::styled(text, text_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    frame.render_widget(content.block(block), area);
}

/// Draw a checkbox row with its error (if any) on the line below
pub fn draw_checkbox(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let color = field_color(is_active, error.is_some());
    let box_style = if is_active {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(field.display_value(false), box_style),
        Span::raw(" "),
        Span::styled(field.label, Style::default().fg(Color::Gray)),
    ])];
    if let Some(message) = error {
        lines.push(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Draw the "Password Strength: ..." indicator (nothing for an empty password)
pub fn draw_strength(frame: &mut Frame, area: Rect, strength: PasswordStrength) {
    if !strength.is_visible() {
        return;
    }
    let line = Line::from(vec![
        Span::styled("Password Strength: ", Style::default().fg(Color::Gray)),
        Span::styled(
            strength.label(),
            Style::default()
                .fg(strength.color())
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw a dimmed help line
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(Color::DarkGray),
        ))),
        area,
    );
}
