//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod sign_in;

use crate::app::App;
use crate::state::View;
use components::{render_error_dialog, render_notice_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    match &app.state.current_view {
        View::CreateAccount => forms::draw_create_account(frame, main_area, app),
        View::SignIn => sign_in::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Errors first, then the success notice
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    } else if let Some(notice) = &app.state.notice {
        render_notice_dialog(frame, notice);
    }
}
