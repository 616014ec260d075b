//! Integration tests for the OAuth2 authorization code flow

use integrations_matchday::oauth::{
    challenge_from_verifier, MatchDayOAuthClient, OAuth2Scope, OAuthConfig, PkceMethod,
};
use integrations_matchday::MatchDayErrorKind;
use pretty_assertions::assert_eq;
use secrecy::ExposeSecret;
use serde_json::json;
use std::collections::HashMap;
use url::{form_urlencoded, Url};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn oauth_client(server: &MockServer, secret: Option<&str>) -> MatchDayOAuthClient {
    let mut builder = OAuthConfig::builder()
        .client_id("matchday-app")
        .auth_url(server.uri());
    if let Some(secret) = secret {
        builder = builder.client_secret(secret);
    }
    MatchDayOAuthClient::new(builder.build().unwrap()).expect("Failed to build OAuth client")
}

async fn received_form(server: &MockServer) -> HashMap<String, String> {
    let requests = server.received_requests().await.unwrap();
    let request = requests.last().expect("no request received");
    form_urlencoded::parse(&request.body).into_owned().collect()
}

#[tokio::test]
async fn test_authorize_then_exchange_public_client() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/oauth2/token"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(header("Accept", "application/json"))
        .and(body_string_contains("grant_type=authorization_code"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "access-123",
            "token_type": "Bearer",
            "expires_in": 3600,
            "scope": "email player"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let oauth = oauth_client(&mock_server, None);
    let redirect = "http://localhost:3000/callback";

    let auth = oauth
        .authorize(&[OAuth2Scope::Email, OAuth2Scope::Player], redirect, Some("state-1"))
        .unwrap();

    let url = Url::parse(&auth.url).unwrap();
    assert_eq!(url.path(), "/api/auth/oauth2/authorize");
    let params: HashMap<String, String> = url.query_pairs().into_owned().collect();
    let verifier = auth.pkce_verifier.clone().unwrap();
    assert_eq!(params["state"], "state-1");
    assert_eq!(params["scope"], "email player");
    assert_eq!(
        params["code_challenge"],
        challenge_from_verifier(&verifier, PkceMethod::S256)
    );

    let token = oauth
        .exchange("auth-code", redirect, auth.pkce_verifier.as_deref())
        .await
        .unwrap();

    assert_eq!(token.access_token.expose_secret(), "access-123");
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.expires_in, Some(3600));

    let form = received_form(&mock_server).await;
    assert_eq!(form["code"], "auth-code");
    assert_eq!(form["redirect_uri"], redirect);
    assert_eq!(form["client_id"], "matchday-app");
    assert_eq!(form["code_verifier"], verifier);
    assert!(!form.contains_key("client_secret"));
}

#[tokio::test]
async fn test_exchange_confidential_client() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "access-456",
            "token_type": "Bearer"
        })))
        .mount(&mock_server)
        .await;

    let oauth = oauth_client(&mock_server, Some("top-secret"));

    let auth = oauth
        .authorize(&[OAuth2Scope::Staff], "http://localhost/cb", None)
        .unwrap();
    assert!(auth.pkce_verifier.is_none());
    assert!(!auth.url.contains("state="));

    let token = oauth.exchange("code", "http://localhost/cb", None).await.unwrap();
    assert!(token.scopes().is_empty());

    let form = received_form(&mock_server).await;
    assert_eq!(form["client_secret"], "top-secret");
    assert!(!form.contains_key("code_verifier"));
}

#[tokio::test]
async fn test_exchange_error_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/oauth2/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Authorization code expired"
        })))
        .mount(&mock_server)
        .await;

    let oauth = oauth_client(&mock_server, None);
    let err = oauth
        .exchange("stale", "http://localhost/cb", Some("v"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), MatchDayErrorKind::Api);
    assert_eq!(
        err.message(),
        "Token exchange failed: 400 Bad Request - Authorization code expired"
    );
}

#[tokio::test]
async fn test_exchange_error_with_plain_text_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/oauth2/token"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let oauth = oauth_client(&mock_server, None);
    let err = oauth.exchange("code", "http://localhost/cb", None).await.unwrap_err();

    assert_eq!(
        err.message(),
        "Token exchange failed: 503 Service Unavailable - maintenance"
    );
}

#[tokio::test]
async fn test_exchange_without_access_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "",
            "token_type": "Bearer"
        })))
        .mount(&mock_server)
        .await;

    let oauth = oauth_client(&mock_server, None);
    let err = oauth.exchange("code", "http://localhost/cb", None).await.unwrap_err();

    assert_eq!(err.kind(), MatchDayErrorKind::Api);
    assert_eq!(
        err.message(),
        "Token exchange succeeded but no access_token was returned"
    );
}

#[tokio::test]
async fn test_exchange_without_client_id_makes_no_request() {
    let mock_server = MockServer::start().await;

    let config = OAuthConfig::builder().auth_url(mock_server.uri()).build().unwrap();
    let oauth = MatchDayOAuthClient::new(config).unwrap();

    let err = oauth.exchange("code", "http://localhost/cb", None).await.unwrap_err();

    assert_eq!(err.kind(), MatchDayErrorKind::Configuration);
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}
