//! Account service module: where validated forms are sent

mod client;
mod error;
mod simulated;
mod traits;

pub use client::{GrpcAccountService, ADDRESS_ENV};
pub use error::SubmitError;
pub use simulated::SimulatedAccountService;
pub use traits::{AccountCreated, AccountService};

#[cfg(test)]
pub use traits::MockAccountService;

use crate::config::TuiConfig;
use std::time::Duration;

/// Pick the service implementation for the current configuration.
///
/// `ACCOUNT_SERVICE_ADDRESS` wins over the config file; with neither set,
/// submissions are simulated locally.
pub fn from_config(config: &TuiConfig) -> Box<dyn AccountService> {
    let address = std::env::var(ADDRESS_ENV)
        .ok()
        .filter(|a| !a.trim().is_empty())
        .or_else(|| config.service_address.clone());

    match address {
        Some(address) => {
            let timeout = Duration::from_secs(config.submit_timeout_secs());
            tracing::info!("Using account service at {address}");
            Box::new(GrpcAccountService::new(address, timeout))
        }
        None => {
            tracing::info!("No account service configured, submissions are simulated");
            Box::new(SimulatedAccountService::new())
        }
    }
}
