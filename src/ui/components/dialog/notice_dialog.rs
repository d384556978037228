//! Success notice dialog

use super::base::{dismiss_hint, render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

/// Render a success notice centered on the screen
pub fn render_notice_dialog(frame: &mut Frame, message: &str) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Success",
            title_color: Color::Green,
            border_color: Color::Green,
            message,
            hint: Some(dismiss_hint()),
            max_width: 50,
        },
    );
}
