//! # MatchDay Integration Library
//!
//! A typed client for the MatchDay sports-data REST API with:
//! - Resource services for matches, competitions, teams, persons, seasons,
//!   clubs, locations, search and the current user
//! - API key or OAuth bearer token authentication
//! - Status-to-error mapping with validation issues for bad requests
//! - Automatic conversion of ISO-8601 strings in responses to timestamps
//! - An OAuth2 Authorization Code client with PKCE
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use integrations_matchday::{MatchDayClient, MatchQuery, MatchStatus};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MatchDayClient::builder()
//!         .api_key("my-api-key")
//!         .build()?;
//!
//!     let query = MatchQuery {
//!         status: vec![MatchStatus::Scheduled],
//!         ..Default::default()
//!     };
//!
//!     for m in client.matches().list(&query).await? {
//!         println!("{} v {} at {}", m.home_team.name, m.away_team.name, m.scheduled_for);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod config;
pub mod errors;
pub mod types;

// Request pipeline
pub mod client;
pub mod query;
pub mod revive;
pub mod transport;

// API Services
pub mod services;

// Authorization
pub mod oauth;

// Re-exports for convenience
pub use client::{MatchDayClient, MatchDayClientBuilder, RequestOptions};
pub use config::{ApiVersion, ClientConfig, ClientConfigBuilder};
pub use errors::{map_error, MatchDayError, MatchDayErrorKind, MatchDayResult, ValidationIssue};
pub use oauth::{AuthorizeResult, MatchDayOAuthClient, OAuth2Scope, OAuthConfig, TokenResult};
pub use revive::{revive, revive_json, RevivedValue};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, MockHttpTransport, ReqwestTransport};
pub use types::*;
