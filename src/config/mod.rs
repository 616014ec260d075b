//! Configuration types for the MatchDay API client.

use crate::errors::{MatchDayError, MatchDayResult};
use secrecy::SecretString;
use std::fmt;
use std::time::Duration;

/// Default MatchDay API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.thewfa.org.uk";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header.
pub const DEFAULT_USER_AGENT: &str = "integrations-matchday/0.1.0";

/// API version segment inserted between the base URL and the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiVersion {
    /// Unversioned routes (`https://host/path`).
    Unversioned,
    /// Version 1 routes (`https://host/v1/path`).
    #[default]
    V1,
}

impl ApiVersion {
    /// Path prefix for this version.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Unversioned => "",
            Self::V1 => "/v1",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// MatchDay client configuration.
///
/// Credentials are optional here: an access token may be supplied later
/// through [`crate::MatchDayClient::set_access_token`]. A request made with
/// neither credential fails before reaching the network.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL.
    pub base_url: String,
    /// API version segment.
    pub api_version: ApiVersion,
    /// Service-level API key, sent as `Authorization: ApiKey <key>`.
    pub api_key: Option<SecretString>,
    /// User-scoped OAuth access token, sent as `Authorization: Bearer <token>`.
    /// Preferred over the API key when both are set.
    pub access_token: Option<SecretString>,
    /// Request timeout.
    pub timeout: Duration,
    /// User-Agent header.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: ApiVersion::default(),
            api_key: None,
            access_token: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Creates a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `MATCHDAY_API_KEY` (optional): API key
    /// - `MATCHDAY_ACCESS_TOKEN` (optional): OAuth access token
    /// - `MATCHDAY_API_URL` (optional): Custom base URL
    /// - `MATCHDAY_TIMEOUT` (optional): Request timeout in seconds
    pub fn from_env() -> MatchDayResult<Self> {
        let mut builder = ClientConfigBuilder::new();

        if let Ok(key) = std::env::var("MATCHDAY_API_KEY") {
            builder = builder.api_key(key);
        }

        if let Ok(token) = std::env::var("MATCHDAY_ACCESS_TOKEN") {
            builder = builder.access_token(token);
        }

        if let Ok(base_url) = std::env::var("MATCHDAY_API_URL") {
            builder = builder.base_url(base_url);
        }

        if let Ok(timeout_str) = std::env::var("MATCHDAY_TIMEOUT") {
            if let Ok(timeout_secs) = timeout_str.parse::<u64>() {
                builder = builder.timeout(Duration::from_secs(timeout_secs));
            }
        }

        builder.build()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> MatchDayResult<()> {
        if self.base_url.is_empty() {
            return Err(MatchDayError::configuration("Base URL cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(MatchDayError::configuration(
                "Base URL must start with http:// or https://",
            ));
        }

        if self.timeout.is_zero() {
            return Err(MatchDayError::configuration("Timeout must be greater than zero"));
        }

        Ok(())
    }
}

/// Builder for ClientConfig.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    api_version: Option<ApiVersion>,
    api_key: Option<SecretString>,
    access_token: Option<SecretString>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL. A trailing slash is dropped.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = Some(url.trim_end_matches('/').to_string());
        self
    }

    /// Sets the API version.
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the API key. Empty keys are ignored.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = non_empty_secret(key.into());
        self
    }

    /// Sets the OAuth access token. Empty tokens are ignored.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = non_empty_secret(token.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the User-Agent header.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> MatchDayResult<ClientConfig> {
        let config = ClientConfig {
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_version: self.api_version.unwrap_or_default(),
            api_key: self.api_key,
            access_token: self.access_token,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent: self.user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        };

        config.validate()?;
        Ok(config)
    }
}

fn non_empty_secret(value: String) -> Option<SecretString> {
    if value.is_empty() {
        None
    } else {
        Some(SecretString::new(value))
    }
}
