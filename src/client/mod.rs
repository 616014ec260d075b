//! MatchDay API client implementation.

use crate::config::{ApiVersion, ClientConfig, ClientConfigBuilder};
use crate::errors::{map_error, MatchDayError, MatchDayResult};
use crate::query::with_query;
use crate::revive::{revive_json, RevivedValue};
use crate::services::*;
use crate::transport::{insert_header, HttpRequest, HttpTransport, ReqwestTransport};
use parking_lot::RwLock;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Per-request options passed to [`MatchDayClient::request`].
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// HTTP method.
    pub method: Method,
    /// Extra headers. These replace default headers of the same name.
    pub headers: Vec<(String, String)>,
    /// Raw request body.
    pub body: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    /// Options for a plain GET.
    pub fn get() -> Self {
        Self::default()
    }

    /// Options for a POST carrying a JSON body.
    pub fn post_json(body: &serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            body: Some(body.to_string()),
            ..Self::default()
        }
    }

    /// Sets the HTTP method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Adds a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the raw request body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// MatchDay API client.
///
/// Every call is a single HTTP round trip: no retries, no caching. The
/// access token can be swapped at any time with [`Self::set_access_token`];
/// requests already in flight keep whichever token they read when they
/// started.
pub struct MatchDayClient {
    /// HTTP transport.
    transport: Arc<dyn HttpTransport>,
    /// Configuration.
    config: ClientConfig,
    /// OAuth access token, preferred over the API key.
    access_token: RwLock<Option<SecretString>>,
}

impl MatchDayClient {
    /// Creates a new client backed by reqwest.
    pub fn new(config: ClientConfig) -> MatchDayResult<Self> {
        let transport = ReqwestTransport::new(config.timeout, &config.user_agent)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Creates a new client with a custom transport.
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> MatchDayResult<Self> {
        config.validate()?;

        let access_token = RwLock::new(config.access_token.clone());

        Ok(Self {
            transport,
            config,
            access_token,
        })
    }

    /// Creates a new client builder.
    pub fn builder() -> MatchDayClientBuilder {
        MatchDayClientBuilder::new()
    }

    /// Gets the base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Gets the configured API version.
    pub fn api_version(&self) -> ApiVersion {
        self.config.api_version
    }

    /// Replaces the OAuth access token used for subsequent requests.
    ///
    /// An empty token clears it. Requests already in flight may go out with
    /// either the old or the new token.
    pub fn set_access_token(&self, token: impl Into<String>) {
        let token = token.into();
        *self.access_token.write() = if token.is_empty() {
            None
        } else {
            Some(SecretString::new(token))
        };
    }

    /// Removes the access token, falling back to the API key if one is set.
    pub fn clear_access_token(&self) {
        *self.access_token.write() = None;
    }

    /// True when an access token is currently set.
    pub fn has_access_token(&self) -> bool {
        self.access_token.read().is_some()
    }

    // Service accessors

    /// Gets the matches service.
    pub fn matches(&self) -> MatchesService<'_> {
        MatchesService::new(self)
    }

    /// Gets the competitions service.
    pub fn competitions(&self) -> CompetitionsService<'_> {
        CompetitionsService::new(self)
    }

    /// Gets the teams service.
    pub fn teams(&self) -> TeamsService<'_> {
        TeamsService::new(self)
    }

    /// Gets the persons service.
    pub fn persons(&self) -> PersonsService<'_> {
        PersonsService::new(self)
    }

    /// Gets the seasons service.
    pub fn seasons(&self) -> SeasonsService<'_> {
        SeasonsService::new(self)
    }

    /// Gets the search service.
    pub fn search(&self) -> SearchService<'_> {
        SearchService::new(self)
    }

    /// Gets the locations service.
    pub fn locations(&self) -> LocationsService<'_> {
        LocationsService::new(self)
    }

    /// Gets the clubs service.
    pub fn clubs(&self) -> ClubsService<'_> {
        ClubsService::new(self)
    }

    /// Gets the users service.
    pub fn users(&self) -> UsersService<'_> {
        UsersService::new(self)
    }

    // HTTP methods

    /// Makes a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> MatchDayResult<T> {
        self.request(path, RequestOptions::get()).await
    }

    /// Makes a GET request with query parameters.
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> MatchDayResult<T> {
        let path = with_query(path, query)?;
        self.get(&path).await
    }

    /// Runs the request pipeline and decodes the revived result into `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> MatchDayResult<T> {
        let value = self.request_value(path, options).await?;

        serde_json::from_value(value.to_json()).map_err(|e| {
            MatchDayError::api(format!("Failed to decode response: {}", e)).with_cause(e)
        })
    }

    /// Runs the request pipeline and returns the revived JSON value.
    ///
    /// `path` is appended to the base URL and version prefix as-is, so any
    /// query string must already be part of it.
    pub async fn request_value(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> MatchDayResult<RevivedValue> {
        let headers = self.build_headers(&options.headers)?;
        let url = self.build_url(path);

        let request = HttpRequest {
            method: options.method,
            url,
            headers,
            body: options.body,
        };

        debug!(method = %request.method, url = %request.url, "MatchDay request");

        let response = self.transport.send(request).await?;

        debug!(status = response.status, "MatchDay response");

        if response.status == 204 {
            return Ok(RevivedValue::empty_object());
        }

        if let Some(error) = map_error(&response) {
            return Err(error);
        }

        let value: serde_json::Value = serde_json::from_str(&response.body).map_err(|e| {
            MatchDayError::api(format!("Failed to parse response: {}", e)).with_cause(e)
        })?;

        Ok(revive_json(value))
    }

    fn build_url(&self, path: &str) -> String {
        format!(
            "{}{}{}",
            self.config.base_url,
            self.config.api_version.prefix(),
            path
        )
    }

    fn auth_header(&self) -> MatchDayResult<String> {
        let non_empty = |s: &&SecretString| !s.expose_secret().is_empty();

        if let Some(token) = self.access_token.read().as_ref().filter(non_empty) {
            return Ok(format!("Bearer {}", token.expose_secret()));
        }

        if let Some(key) = self.config.api_key.as_ref().filter(non_empty) {
            return Ok(format!("ApiKey {}", key.expose_secret()));
        }

        Err(MatchDayError::configuration("No authentication method set"))
    }

    fn build_headers(&self, extra: &[(String, String)]) -> MatchDayResult<HeaderMap> {
        let auth = self.auth_header()?;

        let mut headers = HeaderMap::new();
        let mut auth_value = HeaderValue::from_str(&auth).map_err(|e| {
            MatchDayError::configuration(format!("Invalid credential for Authorization header: {}", e))
        })?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in extra {
            insert_header(&mut headers, name, value)?;
        }

        Ok(headers)
    }
}

/// Builder for MatchDayClient.
pub struct MatchDayClientBuilder {
    config_builder: ClientConfigBuilder,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl MatchDayClientBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            config_builder: ClientConfig::builder(),
            transport: None,
        }
    }

    /// Sets the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.base_url(url);
        self
    }

    /// Sets the API version.
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.config_builder = self.config_builder.api_version(version);
        self
    }

    /// Sets the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.api_key(key);
        self
    }

    /// Sets the OAuth access token.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.access_token(token);
        self
    }

    /// Sets the timeout.
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config_builder = self.config_builder.timeout(timeout);
        self
    }

    /// Sets the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.user_agent(ua);
        self
    }

    /// Uses a custom transport instead of reqwest.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the client.
    pub fn build(self) -> MatchDayResult<MatchDayClient> {
        let config = self.config_builder.build()?;
        match self.transport {
            Some(transport) => MatchDayClient::with_transport(config, transport),
            None => MatchDayClient::new(config),
        }
    }
}

impl Default for MatchDayClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
