//! Client configuration
//!
//! `FloatConfig` is the immutable credential/session value shared by all
//! operations. It is constructed explicitly through the builder or from
//! the `FLOAT_ACCESS_TOKEN` environment variable, and may be cloned
//! freely; there is no process-wide mutable state.

use crate::error::{Error, Result};
use std::time::Duration;
use url::Url;

/// Default base URL for all Float API v3 calls
pub const DEFAULT_BASE_URL: &str = "https://api.float.com/v3";

/// Environment variable holding the access token
pub const ACCESS_TOKEN_ENV: &str = "FLOAT_ACCESS_TOKEN";

/// Configuration for the Float API client
#[derive(Debug, Clone)]
pub struct FloatConfig {
    /// Bearer access token for the Float account
    pub access_token: String,
    /// Application name used in the identification header
    pub application_name: Option<String>,
    /// Contact email used in the identification header
    pub contact_email: Option<String>,
    /// Base URL for all requests
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl FloatConfig {
    /// Create a config builder
    pub fn builder() -> FloatConfigBuilder {
        FloatConfigBuilder::default()
    }

    /// Create a config with just an access token
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::builder().access_token(access_token).build()
    }

    /// Create a config from the `FLOAT_ACCESS_TOKEN` environment variable
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(ACCESS_TOKEN_ENV)
            .map_err(|_| Error::config(format!("{ACCESS_TOKEN_ENV} is not set")))?;
        Self::builder().access_token(token).build()
    }

    /// The User-Agent value identifying this client to Float.
    ///
    /// Float asks integrations to identify themselves as
    /// `application name (contact email)`. When the caller has not
    /// supplied both, fall back to the token-only form used by older
    /// integrations.
    pub fn user_agent(&self) -> String {
        match (&self.application_name, &self.contact_email) {
            (Some(app), Some(email)) => format!("{app} ({email})"),
            _ => format!("float-api-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Builder for `FloatConfig`
#[derive(Debug, Default)]
pub struct FloatConfigBuilder {
    access_token: Option<String>,
    application_name: Option<String>,
    contact_email: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl FloatConfigBuilder {
    /// Set the access token
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set the application name for the identification header
    pub fn application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = Some(name.into());
        self
    }

    /// Set the contact email for the identification header
    pub fn contact_email(mut self, email: impl Into<String>) -> Self {
        self.contact_email = Some(email.into());
        self
    }

    /// Override the base URL (primarily for tests)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the config
    pub fn build(self) -> Result<FloatConfig> {
        let access_token = self
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::config("access token is required"))?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Url::parse(&base_url)?;

        Ok(FloatConfig {
            access_token,
            application_name: self.application_name,
            contact_email: self.contact_email,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: self.timeout.unwrap_or(Duration::from_secs(30)),
        })
    }
}
