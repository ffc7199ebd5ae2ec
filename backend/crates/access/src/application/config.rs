//! Application Configuration
//!
//! API endpoint and persisted-storage layout for the access layer.

use std::env;
use std::time::Duration;

use crate::error::{AuthError, AuthResult};

pub const API_BASE_URL_ENV: &str = "RESCUE_API_BASE_URL";
pub const API_TIMEOUT_ENV: &str = "RESCUE_API_TIMEOUT_SECS";

/// Access application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessConfig {
    /// RescueConnect API origin, without trailing slash
    pub api_base_url: String,
    /// Storage key of the JSON identity
    pub identity_key: String,
    /// Storage key of the bearer token
    pub credential_key: String,
    /// Per-request timeout for API calls
    pub request_timeout: Duration,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://rescue-backend-67i2.onrender.com".to_string(),
            identity_key: "user".to_string(),
            credential_key: "token".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl AccessConfig {
    /// Create config for development (local API)
    pub fn development() -> Self {
        Self {
            api_base_url: "http://localhost:5000".to_string(),
            request_timeout: Duration::from_secs(10),
            ..Default::default()
        }
    }

    /// Defaults overridden by `RESCUE_API_BASE_URL` / `RESCUE_API_TIMEOUT_SECS`
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> AuthResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> AuthResult<Self> {
        let mut config = Self::default();

        if let Some(url) = var(API_BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            let url = url.trim().trim_end_matches('/');
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(AuthError::Config(format!(
                    "{} must be an http(s) URL, got {:?}",
                    API_BASE_URL_ENV, url
                )));
            }
            config.api_base_url = url.to_string();
        }

        if let Some(secs) = var(API_TIMEOUT_ENV) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                AuthError::Config(format!("{} must be a whole number of seconds", API_TIMEOUT_ENV))
            })?;
            if secs == 0 {
                return Err(AuthError::Config(format!("{} must be positive", API_TIMEOUT_ENV)));
            }
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_storage_keys() {
        let config = AccessConfig::default();
        assert_eq!(config.identity_key, "user");
        assert_eq!(config.credential_key, "token");
        assert!(config.api_base_url.starts_with("https://"));
    }

    #[test]
    fn test_from_vars_without_overrides() {
        assert_eq!(AccessConfig::from_vars(vars(&[])).unwrap(), AccessConfig::default());
    }

    #[test]
    fn test_from_vars_overrides() {
        let config = AccessConfig::from_vars(vars(&[
            (API_BASE_URL_ENV, "http://127.0.0.1:8080/"),
            (API_TIMEOUT_ENV, "5"),
        ]))
        .unwrap();
        assert_eq!(config.api_base_url, "http://127.0.0.1:8080");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_from_vars_rejects_bad_values() {
        assert!(matches!(
            AccessConfig::from_vars(vars(&[(API_BASE_URL_ENV, "ftp://x")])),
            Err(AuthError::Config(_))
        ));
        assert!(AccessConfig::from_vars(vars(&[(API_TIMEOUT_ENV, "soon")])).is_err());
        assert!(AccessConfig::from_vars(vars(&[(API_TIMEOUT_ENV, "0")])).is_err());
    }
}
