//! Local stand-in used when no account service address is configured

use super::error::SubmitError;
use super::traits::{AccountCreated, AccountService};
use crate::validation::FormData;
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

/// Accepts every submission after logging it
#[derive(Debug, Default)]
pub struct SimulatedAccountService {
    submissions: usize,
}

impl SimulatedAccountService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountService for SimulatedAccountService {
    async fn create_account(&mut self, data: &FormData) -> Result<AccountCreated, SubmitError> {
        tracing::info!(
            first_name = %data.first_name,
            last_name = %data.last_name,
            email = %data.email,
            accept_terms = data.accept_terms,
            "Submitting account (simulated)"
        );
        self.submissions += 1;
        tracing::debug!("Simulated submission #{}", self.submissions);
        Ok(AccountCreated {
            account_id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
        })
    }

    fn describe(&self) -> String {
        "simulated".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_succeeds() {
        let mut service = SimulatedAccountService::new();
        let created = tokio_test::block_on(service.create_account(&FormData::default()));
        let created = created.unwrap();
        assert!(Uuid::parse_str(&created.account_id).is_ok());
        assert_eq!(service.submissions, 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut service = SimulatedAccountService::new();
        let data = FormData::default();
        let a = tokio_test::block_on(service.create_account(&data)).unwrap();
        let b = tokio_test::block_on(service.create_account(&data)).unwrap();
        assert_ne!(a.account_id, b.account_id);
    }

    #[test]
    fn test_describe() {
        assert_eq!(SimulatedAccountService::new().describe(), "simulated");
    }
}
