//! OAuth2 Authorization Code flow with PKCE for the MatchDay authorization
//! server.
//!
//! ```rust,no_run
//! use integrations_matchday::oauth::{MatchDayOAuthClient, OAuth2Scope, OAuthConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let oauth = MatchDayOAuthClient::new(OAuthConfig::builder().client_id("my-app").build()?)?;
//!
//! let auth = oauth.authorize(&[OAuth2Scope::Email], "http://localhost:3000/callback", Some("xyz"))?;
//! // Redirect the user to `auth.url`, then on callback:
//! let token = oauth
//!     .exchange("code-from-callback", "http://localhost:3000/callback", auth.pkce_verifier.as_deref())
//!     .await?;
//! # let _ = token;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod pkce;
mod scopes;

pub use client::{AuthorizeResult, MatchDayOAuthClient, TokenResult};
pub use config::{OAuthConfig, OAuthConfigBuilder, DEFAULT_AUTH_URL};
pub use pkce::{
    challenge_from_verifier, generate_code_verifier, is_valid_verifier, DefaultPkceGenerator,
    MockPkceGenerator, PkceGenerator, PkceMethod, DEFAULT_VERIFIER_LENGTH, VERIFIER_LENGTH_RANGE,
};
pub use scopes::OAuth2Scope;
