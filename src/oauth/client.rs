//! Authorization Code flow client.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};
use url::{form_urlencoded, Url};

use super::config::OAuthConfig;
use super::pkce::{DefaultPkceGenerator, PkceGenerator, DEFAULT_VERIFIER_LENGTH};
use super::scopes::{join_scopes, OAuth2Scope};
use crate::config::DEFAULT_USER_AGENT;
use crate::errors::{MatchDayError, MatchDayResult};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

const AUTHORIZE_PATH: &str = "/api/auth/oauth2/authorize";
const TOKEN_PATH: &str = "/api/auth/oauth2/token";

/// Result of [`MatchDayOAuthClient::authorize`].
#[derive(Clone)]
pub struct AuthorizeResult {
    /// URL to send the user to.
    pub url: String,
    /// PKCE verifier to pass to [`MatchDayOAuthClient::exchange`]. Only set
    /// when PKCE is in use; the client does not keep a copy.
    pub pkce_verifier: Option<String>,
}

impl fmt::Debug for AuthorizeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizeResult")
            .field("url", &self.url)
            .field("pkce_verifier", &self.pkce_verifier.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Tokens returned by a successful code exchange.
#[derive(Debug, Clone)]
pub struct TokenResult {
    /// Access token for [`crate::MatchDayClient::set_access_token`].
    pub access_token: SecretString,
    /// Token type, normally `Bearer`.
    pub token_type: String,
    /// Lifetime in seconds.
    pub expires_in: Option<u64>,
    /// Space-separated granted scopes.
    pub scope: Option<String>,
}

impl TokenResult {
    /// Granted scope identifiers.
    pub fn scopes(&self) -> Vec<&str> {
        self.scope
            .as_deref()
            .map(|s| s.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Whether `scope` was granted.
    pub fn has_scope(&self, scope: OAuth2Scope) -> bool {
        self.scopes().contains(&scope.id())
    }
}

/// OAuth2 Authorization Code client for the MatchDay authorization server.
///
/// Stateless between calls: the caller carries `state` and the PKCE verifier
/// from [`Self::authorize`] to [`Self::exchange`].
pub struct MatchDayOAuthClient {
    config: OAuthConfig,
    transport: Arc<dyn HttpTransport>,
    pkce: Arc<dyn PkceGenerator>,
}

impl MatchDayOAuthClient {
    /// Creates a new client backed by reqwest.
    pub fn new(config: OAuthConfig) -> MatchDayResult<Self> {
        let transport = ReqwestTransport::new(config.timeout, DEFAULT_USER_AGENT)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Creates a new client with a custom transport.
    pub fn with_transport(
        config: OAuthConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> MatchDayResult<Self> {
        config.validate()?;

        Ok(Self {
            config,
            transport,
            pkce: Arc::new(DefaultPkceGenerator::new()),
        })
    }

    /// Replaces the PKCE generator.
    pub fn with_pkce_generator(mut self, pkce: Arc<dyn PkceGenerator>) -> Self {
        self.pkce = pkce;
        self
    }

    /// Gets the configuration.
    pub fn config(&self) -> &OAuthConfig {
        &self.config
    }

    /// Builds the authorization URL for `scopes`.
    ///
    /// `state` is only added when non-empty. PKCE parameters are added for
    /// public clients, and for confidential clients with PKCE enabled.
    pub fn authorize(
        &self,
        scopes: &[OAuth2Scope],
        redirect_url: &str,
        state: Option<&str>,
    ) -> MatchDayResult<AuthorizeResult> {
        let mut url = Url::parse(&self.config.auth_url)
            .and_then(|base| base.join(AUTHORIZE_PATH))
            .map_err(|e| {
                MatchDayError::configuration(format!("Invalid auth URL: {}", e)).with_cause(e)
            })?;

        let pkce_verifier = {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("response_type", "code")
                .append_pair("client_id", &self.config.client_id)
                .append_pair("scope", &join_scopes(scopes))
                .append_pair("redirect_uri", redirect_url);

            if let Some(state) = state.filter(|s| !s.is_empty()) {
                query.append_pair("state", state);
            }

            if self.config.pkce_enabled() {
                let method = self.config.pkce_method;
                let verifier = self.pkce.generate_verifier(DEFAULT_VERIFIER_LENGTH)?;
                let challenge = self.pkce.challenge(&verifier, method);

                query
                    .append_pair("code_challenge", &challenge)
                    .append_pair("code_challenge_method", method.as_str());
                Some(verifier)
            } else {
                None
            }
        };

        Ok(AuthorizeResult {
            url: url.into(),
            pkce_verifier,
        })
    }

    /// Exchanges an authorization code for tokens.
    ///
    /// `redirect_url` must be the one given to [`Self::authorize`]. Pass the
    /// PKCE verifier from that call when one was returned.
    pub async fn exchange(
        &self,
        code: &str,
        redirect_url: &str,
        pkce_verifier: Option<&str>,
    ) -> MatchDayResult<TokenResult> {
        if self.config.client_id.is_empty() {
            return Err(MatchDayError::configuration(
                "A client id is required to exchange code",
            ));
        }

        let mut form = form_urlencoded::Serializer::new(String::new());
        form.append_pair("grant_type", "authorization_code")
            .append_pair("code", code)
            .append_pair("redirect_uri", redirect_url)
            .append_pair("client_id", &self.config.client_id);

        if let Some(secret) = &self.config.client_secret {
            form.append_pair("client_secret", secret.expose_secret());
        }

        if let Some(verifier) = pkce_verifier.filter(|v| !v.is_empty()) {
            form.append_pair("code_verifier", verifier);
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let request = HttpRequest {
            method: Method::POST,
            url: format!("{}{}", self.config.auth_url, TOKEN_PATH),
            headers,
            body: Some(form.finish()),
        };

        debug!(url = %request.url, "Exchanging authorization code");

        let response = self.transport.send(request).await?;

        if !response.is_success() {
            let error = token_error(&response);
            warn!(status = response.status, "Token exchange failed");
            return Err(error);
        }

        let token = parse_token(&response.body)?;
        debug!(expires_in = ?token.expires_in, "Token exchange succeeded");
        Ok(token)
    }
}

fn token_error(response: &HttpResponse) -> MatchDayError {
    let detail = match serde_json::from_str::<serde_json::Value>(&response.body) {
        Ok(body) => error_detail(&body),
        Err(_) => response.body.clone(),
    };

    let mut message = format!(
        "Token exchange failed: {} {}",
        response.status, response.status_text
    );
    if !detail.is_empty() {
        message.push_str(" - ");
        message.push_str(&detail);
    }

    MatchDayError::api(message)
}

fn error_detail(body: &serde_json::Value) -> String {
    ["error_description", "error"]
        .iter()
        .filter_map(|key| body.get(key))
        .find_map(|value| match value {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            serde_json::Value::String(_) | serde_json::Value::Null => None,
            other => Some(other.to_string()),
        })
        .unwrap_or_else(|| body.to_string())
}

fn parse_token(body: &str) -> MatchDayResult<TokenResult> {
    let json: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        MatchDayError::api(format!("Failed to parse token response: {}", e)).with_cause(e)
    })?;

    let access_token = json
        .get("access_token")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            MatchDayError::api("Token exchange succeeded but no access_token was returned")
        })?;

    Ok(TokenResult {
        access_token: SecretString::new(access_token.to_string()),
        token_type: json
            .get("token_type")
            .and_then(|v| v.as_str())
            .unwrap_or("Bearer")
            .to_string(),
        expires_in: json.get("expires_in").and_then(|v| v.as_u64()),
        scope: json.get("scope").and_then(|v| v.as_str()).map(String::from),
    })
}
