//! Client configuration from environment variables.

use std::env;

use notehub_core::{Credentials, DEFAULT_API_VERSION};

use crate::client::NoteClient;
use crate::transport::HttpTransport;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Publisher credentials.
    pub credentials: Credentials,
    /// API version sent with every request.
    pub api_version: String,
}

impl ClientConfig {
    /// Build a configuration, rejecting an empty API version.
    pub fn new(
        credentials: Credentials,
        api_version: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let api_version = api_version.into();
        if api_version.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "NOTEHUB_API_VERSION".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(Self {
            credentials,
            api_version,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `NOTEHUB_PID`: Publisher ID
    /// - `NOTEHUB_PSK`: Publisher secret key
    ///
    /// Optional:
    /// - `NOTEHUB_API_VERSION`: API version (default: "1.1")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let publisher_id = required(&lookup, "NOTEHUB_PID")?;
        let secret_key = required(&lookup, "NOTEHUB_PSK")?;

        let api_version =
            lookup("NOTEHUB_API_VERSION").unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        Self::new(Credentials::new(publisher_id, secret_key), api_version)
    }

    /// Build a client that talks to the live service.
    pub fn into_client(self) -> NoteClient<HttpTransport> {
        NoteClient::with_transport(self.credentials, self.api_version, HttpTransport::new())
    }
}

fn required<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}
