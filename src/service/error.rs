//! Errors returned by account submission

use thiserror::Error;

/// Why an account could not be created
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The service received the request and refused it
    #[error("{0}")]
    Rejected(String),
    /// The service could not be reached
    #[error("Account service unavailable: {0}")]
    Unavailable(String),
    /// The service did not answer in time
    #[error("Account service did not respond within {0}s")]
    Timeout(u64),
    /// Any other failure while talking to the service
    #[error("Failed to create account: {0}")]
    Transport(String),
}

impl From<tonic::Status> for SubmitError {
    fn from(status: tonic::Status) -> Self {
        match status.code() {
            tonic::Code::Unavailable => SubmitError::Unavailable(status.message().to_string()),
            tonic::Code::InvalidArgument | tonic::Code::AlreadyExists => {
                SubmitError::Rejected(status.message().to_string())
            }
            _ => SubmitError::Transport(status.message().to_string()),
        }
    }
}
