//! Application state definitions

use super::forms::AccountForm;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    CreateAccount,
    /// Target of the "Sign in" link
    SignIn,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::CreateAccount => "Create Account",
            View::SignIn => "Sign In",
        }
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Form
    pub form: AccountForm,

    // Feedback
    /// Errors waiting to be shown, oldest first
    pub error_queue: VecDeque<String>,
    /// Success notice shown in a dialog until dismissed
    pub notice: Option<String>,
    /// One-line message in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(reveal_passwords: bool) -> Self {
        Self {
            form: AccountForm::new(reveal_passwords),
            ..Self::default()
        }
    }

    /// Navigate to a view, remembering where we came from
    pub fn navigate(&mut self, view: View) {
        if self.current_view != view {
            let previous = std::mem::replace(&mut self.current_view, view);
            self.view_history.push(previous);
        }
    }

    /// Return to the previous view; false when there is nowhere to go
    pub fn go_back(&mut self) -> bool {
        match self.view_history.pop() {
            Some(view) => {
                self.current_view = view;
                true
            }
            None => false,
        }
    }

    /// Queue an error message for display
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    /// Error currently on screen
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    /// Whether a modal dialog is covering the view
    pub fn has_dialog(&self) -> bool {
        !self.error_queue.is_empty() || self.notice.is_some()
    }

    /// Dismiss the front-most dialog (errors before notices)
    pub fn dismiss_dialog(&mut self) {
        if self.error_queue.pop_front().is_none() {
            self.notice = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_view_is_create_account() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::CreateAccount);
        assert!(!state.has_dialog());
    }

    #[test]
    fn test_new_passes_reveal_to_form() {
        assert!(AppState::new(true).form.reveal_passwords);
    }

    #[test]
    fn test_navigate_and_back() {
        let mut state = AppState::default();
        state.navigate(View::SignIn);
        assert_eq!(state.current_view, View::SignIn);
        assert!(state.go_back());
        assert_eq!(state.current_view, View::CreateAccount);
        assert!(!state.go_back());
    }

    #[test]
    fn test_navigate_to_same_view_keeps_history() {
        let mut state = AppState::default();
        state.navigate(View::CreateAccount);
        assert!(state.view_history.is_empty());
    }

    #[test]
    fn test_errors_dismissed_in_order_before_notice() {
        let mut state = AppState::default();
        state.notice = Some("done".to_string());
        state.push_error("first".to_string());
        state.push_error("second".to_string());

        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_dialog();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_dialog();
        assert_eq!(state.current_error(), None);
        assert!(state.has_dialog());
        state.dismiss_dialog();
        assert!(!state.has_dialog());
    }

    #[test]
    fn test_view_titles() {
        assert_eq!(View::CreateAccount.title(), "Create Account");
        assert_eq!(View::SignIn.title(), "Sign In");
    }
}
