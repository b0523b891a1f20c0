//! API configuration
//!
//! # Environment Variables
//!
//! - `API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `API_PORT`: Port to listen on (default: 8080)
//! - `GITHUB_API_URL`: Base URI of the GitHub REST API (default: https://api.github.com)
//! - `HOST_REQUEST_TIMEOUT_SECS`: Upper bound for a single GitHub call (default: 10)
//! - `RUST_LOG`: Log level (default: info), read by the binary

use github_client::{HostSettings, DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT};
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::{errors::ConfigError, DEFAULT_PORT};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// How to reach the repository host
    pub host_settings: HostSettings,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            host_settings: HostSettings::default(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set to a value that
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or("API_PORT", &lookup, DEFAULT_PORT)?;
        let api_base_url =
            lookup("GITHUB_API_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let timeout_secs = parse_or(
            "HOST_REQUEST_TIMEOUT_SECS",
            &lookup,
            DEFAULT_REQUEST_TIMEOUT.as_secs(),
        )?;

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                variable: "HOST_REQUEST_TIMEOUT_SECS".to_string(),
                value: "0".to_string(),
                reason: "timeout must be at least one second".to_string(),
            });
        }

        Ok(Self {
            host,
            port,
            host_settings: HostSettings {
                api_base_url,
                request_timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

fn parse_or<T, F>(variable: &str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(variable) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                variable: variable.to_string(),
                value: value.clone(),
                reason: e.to_string(),
            }),
    }
}
