//! OAuth2 client configuration.

use secrecy::SecretString;
use std::time::Duration;

use super::pkce::PkceMethod;
use crate::config::DEFAULT_TIMEOUT;
use crate::errors::{MatchDayError, MatchDayResult};

/// Default authorization server.
pub const DEFAULT_AUTH_URL: &str = "https://auth.thewfa.org.uk";

/// OAuth2 client configuration.
///
/// A client without a secret is public and always uses PKCE. A confidential
/// client uses PKCE only when `use_pkce` is set.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    /// Registered client ID.
    pub client_id: String,
    /// Client secret, for confidential clients.
    pub client_secret: Option<SecretString>,
    /// Authorization server base URL.
    pub auth_url: String,
    /// Force PKCE for a confidential client.
    pub use_pkce: bool,
    /// PKCE challenge method.
    pub pkce_method: PkceMethod,
    /// Token request timeout.
    pub timeout: Duration,
}

impl OAuthConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> OAuthConfigBuilder {
        OAuthConfigBuilder::new()
    }

    /// Creates a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `MATCHDAY_CLIENT_ID` (required): OAuth client ID
    /// - `MATCHDAY_CLIENT_SECRET` (optional): OAuth client secret
    /// - `MATCHDAY_AUTH_URL` (optional): Custom authorization server URL
    pub fn from_env() -> MatchDayResult<Self> {
        let client_id = std::env::var("MATCHDAY_CLIENT_ID").map_err(|_| {
            MatchDayError::configuration("MATCHDAY_CLIENT_ID environment variable not set")
        })?;

        let mut builder = OAuthConfigBuilder::new().client_id(client_id);

        if let Ok(secret) = std::env::var("MATCHDAY_CLIENT_SECRET") {
            builder = builder.client_secret(secret);
        }

        if let Ok(auth_url) = std::env::var("MATCHDAY_AUTH_URL") {
            builder = builder.auth_url(auth_url);
        }

        builder.build()
    }

    /// True when no client secret is configured.
    pub fn is_public_client(&self) -> bool {
        self.client_secret.is_none()
    }

    /// True when authorization requests carry a PKCE challenge.
    pub fn pkce_enabled(&self) -> bool {
        self.is_public_client() || self.use_pkce
    }

    /// Validates the configuration.
    pub fn validate(&self) -> MatchDayResult<()> {
        if !self.auth_url.starts_with("http://") && !self.auth_url.starts_with("https://") {
            return Err(MatchDayError::configuration(
                "Auth URL must start with http:// or https://",
            ));
        }

        Ok(())
    }
}

/// Builder for OAuthConfig.
#[derive(Debug, Default)]
pub struct OAuthConfigBuilder {
    client_id: Option<String>,
    client_secret: Option<SecretString>,
    auth_url: Option<String>,
    use_pkce: bool,
    pkce_method: Option<PkceMethod>,
    timeout: Option<Duration>,
}

impl OAuthConfigBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the client ID.
    pub fn client_id(mut self, id: impl Into<String>) -> Self {
        self.client_id = Some(id.into());
        self
    }

    /// Sets the client secret. Empty secrets are ignored.
    pub fn client_secret(mut self, secret: impl Into<String>) -> Self {
        let secret = secret.into();
        self.client_secret = if secret.is_empty() {
            None
        } else {
            Some(SecretString::new(secret))
        };
        self
    }

    /// Sets the authorization server URL. A trailing slash is dropped.
    pub fn auth_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.auth_url = Some(url.trim_end_matches('/').to_string());
        self
    }

    /// Forces PKCE for a confidential client.
    pub fn use_pkce(mut self, enabled: bool) -> Self {
        self.use_pkce = enabled;
        self
    }

    /// Sets the PKCE challenge method.
    pub fn pkce_method(mut self, method: PkceMethod) -> Self {
        self.pkce_method = Some(method);
        self
    }

    /// Sets the token request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the configuration.
    ///
    /// A missing client ID is accepted here and rejected by token exchange.
    pub fn build(self) -> MatchDayResult<OAuthConfig> {
        let config = OAuthConfig {
            client_id: self.client_id.unwrap_or_default(),
            client_secret: self.client_secret,
            auth_url: self.auth_url.unwrap_or_else(|| DEFAULT_AUTH_URL.to_string()),
            use_pkce: self.use_pkce,
            pkce_method: self.pkce_method.unwrap_or_default(),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        };

        config.validate()?;
        Ok(config)
    }
}
