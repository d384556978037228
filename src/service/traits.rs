//! Trait abstraction for the account service to enable mocking in tests

use super::error::SubmitError;
use crate::validation::FormData;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Result of a successful account creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountCreated {
    pub account_id: String,
    pub created_at: DateTime<Utc>,
}

/// Account service operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Create an account from already-validated form data
    async fn create_account(&mut self, data: &FormData) -> Result<AccountCreated, SubmitError>;

    /// Short description shown in the status bar
    fn describe(&self) -> String;
}
