//! gRPC client for the remote account service
//!
//! Talks to `account.v1.AccountService/CreateAccount` over a lazily
//! established tonic channel.

use super::error::SubmitError;
use super::traits::{AccountCreated, AccountService};
use crate::validation::FormData;
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, Endpoint};

/// Wire messages for the account service
pub mod proto {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct CreateAccountRequest {
        #[prost(string, tag = "1")]
        pub first_name: String,
        #[prost(string, tag = "2")]
        pub last_name: String,
        #[prost(string, tag = "3")]
        pub email: String,
        #[prost(string, tag = "4")]
        pub password: String,
        #[prost(bool, tag = "5")]
        pub accept_terms: bool,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct CreateAccountResponse {
        #[prost(bool, tag = "1")]
        pub success: bool,
        #[prost(string, tag = "2")]
        pub error: String,
        #[prost(string, tag = "3")]
        pub account_id: String,
    }
}

const CREATE_ACCOUNT_PATH: &str = "/account.v1.AccountService/CreateAccount";

/// Environment variable overriding the configured address
pub const ADDRESS_ENV: &str = "ACCOUNT_SERVICE_ADDRESS";

impl From<&FormData> for proto::CreateAccountRequest {
    fn from(data: &FormData) -> Self {
        Self {
            first_name: data.first_name.trim().to_string(),
            last_name: data.last_name.trim().to_string(),
            email: data.email.clone(),
            password: data.password.clone(),
            accept_terms: data.accept_terms,
        }
    }
}

/// Map the service's answer onto the submission result
fn into_result(response: proto::CreateAccountResponse) -> Result<AccountCreated, SubmitError> {
    if !response.success {
        let message = if response.error.is_empty() {
            "Account creation failed".to_string()
        } else {
            response.error
        };
        return Err(SubmitError::Rejected(message));
    }
    Ok(AccountCreated {
        account_id: response.account_id,
        created_at: Utc::now(),
    })
}

/// Client for the remote account service
pub struct GrpcAccountService {
    /// Connected channel, created on first use
    channel: Option<Channel>,
    /// The service address
    address: String,
    /// Upper bound for a single submission
    timeout: Duration,
}

impl GrpcAccountService {
    pub fn new(address: impl Into<String>, timeout: Duration) -> Self {
        Self {
            channel: None,
            address: address.into(),
            timeout,
        }
    }

    /// Ensure a channel is established
    async fn ensure_connected(&mut self) -> Result<Channel, SubmitError> {
        if self.channel.is_none() {
            let endpoint = Endpoint::from_shared(self.address.clone())
                .map_err(|e| SubmitError::Unavailable(format!("invalid address: {e}")))?
                .connect_timeout(self.timeout);
            let channel = endpoint
                .connect()
                .await
                .map_err(|e| SubmitError::Unavailable(e.to_string()))?;
            tracing::debug!("Connected to account service at {}", self.address);
            self.channel = Some(channel);
        }
        self.channel
            .clone()
            .ok_or_else(|| SubmitError::Unavailable("client not connected".to_string()))
    }

    async fn send(
        &mut self,
        request: proto::CreateAccountRequest,
    ) -> Result<proto::CreateAccountResponse, SubmitError> {
        let channel = self.ensure_connected().await?;
        let mut grpc = tonic::client::Grpc::new(channel);
        grpc.ready()
            .await
            .map_err(|e| SubmitError::Unavailable(format!("service was not ready: {e}")))?;

        let codec: ProstCodec<proto::CreateAccountRequest, proto::CreateAccountResponse> =
            ProstCodec::default();
        let response = grpc
            .unary(
                tonic::Request::new(request),
                PathAndQuery::from_static(CREATE_ACCOUNT_PATH),
                codec,
            )
            .await?;
        Ok(response.into_inner())
    }
}

#[async_trait]
impl AccountService for GrpcAccountService {
    async fn create_account(&mut self, data: &FormData) -> Result<AccountCreated, SubmitError> {
        tracing::info!(email = %data.email, "Submitting account to {}", self.address);
        let request = proto::CreateAccountRequest::from(data);

        let response = match tokio::time::timeout(self.timeout, self.send(request)).await {
            Ok(result) => result,
            Err(_) => {
                // Drop the channel so the next attempt reconnects
                self.channel = None;
                return Err(SubmitError::Timeout(self.timeout.as_secs()));
            }
        };

        if let Err(SubmitError::Unavailable(_)) = &response {
            self.channel = None;
        }
        into_result(response?)
    }

    fn describe(&self) -> String {
        self.address.clone()
    }
}
