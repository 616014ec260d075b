//! Integration tests for the request pipeline

use super::*;
use chrono::{TimeZone, Utc};
use integrations_matchday::{MatchDayErrorKind, RequestOptions};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_api_key_header_and_version_prefix() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/matches/m1"))
        .and(header("Authorization", "ApiKey test-api-key"))
        .and(header("Content-Type", "application/json"))
        .respond_with(success_response(json!({ "id": "m1" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = api_key_client(&mock_server);
    let value = client
        .request_value("/matches/m1", RequestOptions::get())
        .await
        .unwrap();

    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some("m1"));
}

#[tokio::test]
async fn test_unversioned_path() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(success_response(json!({ "ok": true })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = unversioned_client(&mock_server);
    client
        .request_value("/health", RequestOptions::get())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_bearer_token_takes_precedence() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/users/@me"))
        .and(header("Authorization", "Bearer user-token"))
        .respond_with(success_response(json!({
            "id": "u1",
            "banned": false,
            "permissions": {},
            "persons": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = api_key_client(&mock_server);
    client.set_access_token("user-token");

    let user = client.users().me().await.unwrap();
    assert_eq!(user.id, "u1");
}

#[tokio::test]
async fn test_missing_credentials_fail_before_network() {
    let mock_server = setup_mock_server().await;

    let client = MatchDayClient::builder()
        .base_url(mock_server.uri())
        .build()
        .unwrap();

    let err = client
        .request_value("/matches", RequestOptions::get())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), MatchDayErrorKind::Configuration);
    assert_eq!(err.message(), "No authentication method set");
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_caller_headers_override_defaults() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v1/reports"))
        .and(header("Content-Type", "text/plain"))
        .and(header("X-Trace", "abc"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = api_key_client(&mock_server);
    let value = client
        .request_value(
            "/reports",
            RequestOptions::get()
                .method(reqwest::Method::POST)
                .header("content-type", "text/plain")
                .header("X-Trace", "abc")
                .body("hello"),
        )
        .await
        .unwrap();

    assert_eq!(value, integrations_matchday::RevivedValue::empty_object());
}

#[tokio::test]
async fn test_dates_are_revived_recursively() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/seasons/s1"))
        .respond_with(success_response(json!({
            "id": "s1",
            "name": "2024/25 Season",
            "startDate": "2024-09-01",
            "endDate": "2025-05-31T23:00:00+01:00",
            "nested": [{ "at": "2024-01-15T10:30:00.000Z" }, "not a date"]
        })))
        .mount(&mock_server)
        .await;

    let client = api_key_client(&mock_server);
    let value = client
        .request_value("/seasons/s1", RequestOptions::get())
        .await
        .unwrap();

    assert_eq!(
        value.get("startDate").and_then(|v| v.as_date()),
        Some(&Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap())
    );
    assert_eq!(
        value.get("endDate").and_then(|v| v.as_date()),
        Some(&Utc.with_ymd_and_hms(2025, 5, 31, 22, 0, 0).unwrap())
    );

    let nested = value.get("nested").and_then(|v| v.as_array()).unwrap();
    assert!(nested[0].get("at").and_then(|v| v.as_date()).is_some());
    assert_eq!(nested[1].as_str(), Some("not a date"));

    let season = client.seasons().get("s1").await.unwrap();
    assert_eq!(season.end_date, Some(Utc.with_ymd_and_hms(2025, 5, 31, 22, 0, 0).unwrap()));
}

#[tokio::test]
async fn test_bad_request_carries_validation_issues() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/matches"))
        .and(query_param("itemsPerPage", "1000"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "Invalid query",
            "errors": [
                { "path": "itemsPerPage", "message": "Must be at most 100", "code": "too_big" }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = api_key_client(&mock_server);
    let query = integrations_matchday::MatchQuery {
        base: integrations_matchday::BaseListQuery::new().items_per_page(1000),
        ..Default::default()
    };
    let err = client.matches().list(&query).await.unwrap_err();

    assert_eq!(err.kind(), MatchDayErrorKind::BadRequest);
    assert_eq!(err.status_code(), Some(400));
    assert_eq!(err.message(), "Invalid query");
    let issues = err.validation_issues().unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].path, "itemsPerPage");
    assert_eq!(issues[0].code, "too_big");
}

#[tokio::test]
async fn test_status_mapping() {
    let cases = [
        (401, json!({ "message": "Token expired" }), MatchDayErrorKind::Unauthorized, "Token expired"),
        (403, json!({}), MatchDayErrorKind::Forbidden, "Forbidden"),
        (404, json!({ "message": "Match not found" }), MatchDayErrorKind::NotFound, "Match not found"),
        (429, json!({}), MatchDayErrorKind::RateLimitExceeded, "You have exceeded the API rate limit"),
        (500, json!({ "message": "ignored" }), MatchDayErrorKind::Api, "An unknown error occurred"),
    ];

    for (status, body, kind, message) in cases {
        let mock_server = setup_mock_server().await;

        Mock::given(method("GET"))
            .and(path("/v1/matches/m1"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&mock_server)
            .await;

        let client = api_key_client(&mock_server);
        let err = client.matches().get("m1").await.unwrap_err();

        assert_eq!(err.kind(), kind, "status {}", status);
        assert_eq!(err.message(), message, "status {}", status);
    }
}

#[tokio::test]
async fn test_unparseable_error_body() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/clubs/c1"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<html>gone</html>"))
        .mount(&mock_server)
        .await;

    let client = api_key_client(&mock_server);
    let err = client.clubs().get("c1").await.unwrap_err();

    assert_eq!(err.kind(), MatchDayErrorKind::Api);
    assert_eq!(err.message(), "Failed to parse error");
}

#[tokio::test]
async fn test_unparseable_success_body() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/clubs/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = api_key_client(&mock_server);
    let err = client.clubs().get("c1").await.unwrap_err();

    assert_eq!(err.kind(), MatchDayErrorKind::Api);
    assert!(err.message().starts_with("Failed to parse response"));
}
