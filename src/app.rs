//! Application state and core logic

use crate::config::TuiConfig;
use crate::service::{self, AccountService};
use crate::state::{AppState, Form, View};
use crate::validation::{is_valid, validate, FieldName};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Shown after the service accepted the account
pub const SUCCESS_MESSAGE: &str = "Account created successfully!";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where validated forms are submitted
    service: Box<dyn AccountService>,
    /// Status bar description of the service
    pub service_label: String,
    /// Route the "Sign in" link points at
    pub sign_in_route: String,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance from user configuration
    pub fn new(config: &TuiConfig) -> Self {
        let service = service::from_config(config);
        let label = service.describe();
        Self::with_service(
            AppState::new(config.reveal_passwords()),
            service,
            label,
            config.sign_in_route().to_string(),
        )
    }

    pub fn with_service(
        state: AppState,
        service: Box<dyn AccountService>,
        service_label: String,
        sign_in_route: String,
    ) -> Self {
        Self {
            state,
            service,
            service_label,
            sign_in_route,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Open dialogs swallow input until dismissed
        if self.state.has_dialog() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_dialog();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::CreateAccount => self.handle_create_account_key(key).await,
            View::SignIn => self.handle_sign_in_key(key),
        }
    }

    /// Handle keys in the Create Account view
    async fn handle_create_account_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let on_submit = self.state.form.is_submit_active();
        let on_sign_in = self.state.form.is_sign_in_active();
        let on_checkbox = self.state.form.active_input() == Some(FieldName::AcceptTerms);

        match key.code {
            KeyCode::Char('s') if ctrl => self.submit_account().await,
            KeyCode::Char('r') if ctrl => self.state.form.toggle_reveal(),
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Enter if on_submit => self.submit_account().await,
            KeyCode::Enter if on_sign_in => self.state.navigate(View::SignIn),
            KeyCode::Enter if on_checkbox => self.state.form.toggle_checkbox(),
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Char(c) if !ctrl => self.state.form.input_char(c),
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the Sign In placeholder view
    fn handle_sign_in_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => {
                self.state.go_back();
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    /// Validate the form and, when it is clean, submit it.
    ///
    /// Field errors stay inline; a service failure is recorded under `api`
    /// and raised in the error dialog.
    pub async fn submit_account(&mut self) {
        let errors = validate(self.state.form.data());

        if !is_valid(&errors) {
            tracing::debug!(
                fields = ?errors.keys().map(FieldName::key).collect::<Vec<_>>(),
                "Account form has validation errors"
            );
            if let Some(first) = FieldName::INPUTS.iter().position(|f| errors.contains_key(f)) {
                self.state.form.set_active_field(first);
            }
            self.state.status_message = Some(format!(
                "Fix {} field{} before submitting",
                errors.len(),
                if errors.len() == 1 { "" } else { "s" }
            ));
            self.state.form.errors = errors;
            return;
        }

        self.state.form.errors = errors;
        let data = self.state.form.data().clone();

        match self.service.create_account(&data).await {
            Ok(created) => {
                tracing::info!(
                    account_id = %created.account_id,
                    created_at = %created.created_at,
                    "Account created"
                );
                self.state.form.reset();
                self.state.notice = Some(SUCCESS_MESSAGE.to_string());
                self.state.status_message = Some(format!("Account {} created", created.account_id));
            }
            Err(err) => {
                tracing::warn!("Account submission failed: {err}");
                let message = err.to_string();
                self.state.form.record_api_error(message.clone());
                self.state.status_message = None;
                self.push_error(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{AccountCreated, MockAccountService, SubmitError};
    use crate::state::{SIGN_IN_SLOT, SUBMIT_SLOT};
    use crate::validation::{FieldInput, FormData};
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_with(service: MockAccountService) -> App {
        App::with_service(
            AppState::default(),
            Box::new(service),
            "mock".to_string(),
            "/login".to_string(),
        )
    }

    fn fill_valid(app: &mut App) {
        let form = &mut app.state.form;
        form.apply(FieldName::FirstName, FieldInput::Text("A".into()));
        form.apply(FieldName::LastName, FieldInput::Text("B".into()));
        form.apply(FieldName::Email, FieldInput::Text("a@b.co".into()));
        form.apply(FieldName::Password, FieldInput::Text("Abcdef1!".into()));
        form.apply(FieldName::ConfirmPassword, FieldInput::Text("Abcdef1!".into()));
        form.apply(FieldName::AcceptTerms, FieldInput::Checked(true));
    }

    fn created(id: &str) -> AccountCreated {
        AccountCreated {
            account_id: id.to_string(),
            created_at: Utc::now(),
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_invalid_form_is_not_submitted() {
            let mut service = MockAccountService::new();
            service.expect_create_account().times(0);
            let mut app = app_with(service);

            app.submit_account().await;

            assert_eq!(app.state.form.errors.len(), 5);
            assert_eq!(app.state.form.active_field_index, 0);
            assert!(app.state.notice.is_none());
            assert!(app.state.error_queue.is_empty());
        }

        #[tokio::test]
        async fn test_focus_moves_to_first_invalid_field() {
            let mut service = MockAccountService::new();
            service.expect_create_account().times(0);
            let mut app = app_with(service);
            fill_valid(&mut app);
            app.state
                .form
                .apply(FieldName::ConfirmPassword, FieldInput::Text("different".into()));

            app.submit_account().await;

            assert_eq!(
                app.state.form.error_for(FieldName::ConfirmPassword),
                Some("Passwords do not match")
            );
            assert_eq!(app.state.form.errors.len(), 1);
            assert_eq!(app.state.form.active_field_index, 4);
        }

        #[tokio::test]
        async fn test_valid_form_submits_and_resets() {
            let mut service = MockAccountService::new();
            service
                .expect_create_account()
                .withf(|data: &FormData| data.email == "a@b.co" && data.accept_terms)
                .times(1)
                .returning(|_| Ok(created("acc-42")));
            let mut app = app_with(service);
            fill_valid(&mut app);

            app.submit_account().await;

            assert_eq!(app.state.notice.as_deref(), Some(SUCCESS_MESSAGE));
            assert_eq!(app.state.form.data(), &FormData::default());
            assert!(app.state.form.errors.is_empty());
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Account acc-42 created")
            );
        }

        #[tokio::test]
        async fn test_service_failure_recorded_under_api() {
            let mut service = MockAccountService::new();
            service
                .expect_create_account()
                .times(1)
                .returning(|_| Err(SubmitError::Rejected("Email already registered".into())));
            let mut app = app_with(service);
            fill_valid(&mut app);

            app.submit_account().await;

            assert_eq!(
                app.state.form.error_for(FieldName::Api),
                Some("Email already registered")
            );
            assert_eq!(app.state.current_error(), Some("Email already registered"));
            assert!(app.state.notice.is_none());
            // Values survive so the user can retry
            assert_eq!(app.state.form.data().email, "a@b.co");
        }

        #[tokio::test]
        async fn test_api_error_cleared_by_next_attempt() {
            let mut service = MockAccountService::new();
            let mut seq = mockall::Sequence::new();
            service
                .expect_create_account()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Err(SubmitError::Timeout(10)));
            service
                .expect_create_account()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(created("acc-1")));
            let mut app = app_with(service);
            fill_valid(&mut app);

            app.submit_account().await;
            assert!(app.state.form.error_for(FieldName::Api).is_some());
            app.state.dismiss_dialog();

            app.submit_account().await;
            assert!(app.state.form.error_for(FieldName::Api).is_none());
            assert!(app.state.notice.is_some());
        }
    }

    mod keys {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_typing_and_tabbing_fill_fields() {
            let mut app = app_with(MockAccountService::new());
            for c in "Ada".chars() {
                app.handle_key(key(KeyCode::Char(c))).await.unwrap();
            }
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Char('L'))).await.unwrap();
            app.handle_key(key(KeyCode::Backspace)).await.unwrap();
            app.handle_key(key(KeyCode::Char('B'))).await.unwrap();

            assert_eq!(app.state.form.data().first_name, "Ada");
            assert_eq!(app.state.form.data().last_name, "B");
        }

        #[tokio::test]
        async fn test_ctrl_s_submits() {
            let mut service = MockAccountService::new();
            service
                .expect_create_account()
                .times(1)
                .returning(|_| Ok(created("acc-9")));
            let mut app = app_with(service);
            fill_valid(&mut app);

            app.handle_key(ctrl('s')).await.unwrap();

            assert!(app.state.notice.is_some());
            // Ctrl chords never reach the text field
            assert_eq!(app.state.form.data().first_name, "");
        }

        #[tokio::test]
        async fn test_enter_on_submit_button() {
            let mut service = MockAccountService::new();
            service.expect_create_account().times(0);
            let mut app = app_with(service);
            app.state.form.set_active_field(SUBMIT_SLOT);

            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert!(!app.state.form.errors.is_empty());
        }

        #[tokio::test]
        async fn test_enter_toggles_terms() {
            let mut app = app_with(MockAccountService::new());
            app.state.form.set_active_field(5);
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(app.state.form.data().accept_terms);
        }

        #[tokio::test]
        async fn test_sign_in_link_navigates_and_returns() {
            let mut app = app_with(MockAccountService::new());
            app.state.form.set_active_field(SIGN_IN_SLOT);

            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.current_view, View::SignIn);

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_view, View::CreateAccount);
            assert!(!app.should_quit());
        }

        #[tokio::test]
        async fn test_dialog_swallows_input_until_dismissed() {
            let mut app = app_with(MockAccountService::new());
            app.push_error("boom");

            app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
            assert_eq!(app.state.form.data().first_name, "");

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(!app.state.has_dialog());
            assert!(!app.should_quit());
        }

        #[tokio::test]
        async fn test_ctrl_r_toggles_reveal() {
            let mut app = app_with(MockAccountService::new());
            app.handle_key(ctrl('r')).await.unwrap();
            assert!(app.state.form.reveal_passwords);
        }

        #[tokio::test]
        async fn test_esc_on_form_quits() {
            let mut app = app_with(MockAccountService::new());
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(app.should_quit());
        }
    }
}
