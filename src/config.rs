//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default upper bound for a single submission, in seconds
pub const DEFAULT_SUBMIT_TIMEOUT_SECS: u64 = 10;

/// Default route opened by the "Sign in" link
pub const DEFAULT_SIGN_IN_ROUTE: &str = "/login";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Account service address (simulated submissions when unset)
    pub service_address: Option<String>,
    /// Submission timeout in seconds
    pub submit_timeout_secs: Option<u64>,
    /// Show password characters instead of masking them
    pub reveal_passwords: Option<bool>,
    /// Route shown by the Sign In view
    pub sign_in_route: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "create-account", "create-account-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn submit_timeout_secs(&self) -> u64 {
        self.submit_timeout_secs
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_SUBMIT_TIMEOUT_SECS)
    }

    pub fn reveal_passwords(&self) -> bool {
        self.reveal_passwords.unwrap_or(false)
    }

    pub fn sign_in_route(&self) -> &str {
        self.sign_in_route
            .as_deref()
            .unwrap_or(DEFAULT_SIGN_IN_ROUTE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.service_address.is_none());
        assert!(config.submit_timeout_secs.is_none());
        assert!(config.reveal_passwords.is_none());
        assert!(config.sign_in_route.is_none());
    }

    #[test]
    fn test_defaults_for_unset_values() {
        let config = TuiConfig::default();
        assert_eq!(config.submit_timeout_secs(), DEFAULT_SUBMIT_TIMEOUT_SECS);
        assert!(!config.reveal_passwords());
        assert_eq!(config.sign_in_route(), "/login");
    }

    #[test]
    fn test_zero_timeout_falls_back_to_default() {
        let config = TuiConfig {
            submit_timeout_secs: Some(0),
            ..Default::default()
        };
        assert_eq!(config.submit_timeout_secs(), DEFAULT_SUBMIT_TIMEOUT_SECS);
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            service_address: Some("http://localhost:50052".to_string()),
            submit_timeout_secs: Some(3),
            reveal_passwords: Some(true),
            sign_in_route: Some("/signin".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.service_address,
            Some("http://localhost:50052".to_string())
        );
        assert_eq!(parsed.submit_timeout_secs(), 3);
        assert!(parsed.reveal_passwords());
        assert_eq!(parsed.sign_in_route(), "/signin");
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.service_address.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"service_address": "http://svc:1", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.service_address, Some("http://svc:1".to_string()));
    }

    #[test]
    fn test_load_returns_ok() {
        // Missing file yields defaults; an existing file must parse
        assert!(TuiConfig::load().is_ok());
    }
}
