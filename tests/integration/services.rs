//! Integration tests for resource services

use super::*;
use chrono::{TimeZone, Utc};
use integrations_matchday::{
    BaseListQuery, DatePredicate, MatchEvent, MatchQuery, MatchStatus, SearchItemType,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::Mock;

fn match_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "homeTeam": { "id": "t1", "name": "Northside" },
        "awayTeam": { "id": "t2", "name": "Southend" },
        "homeScore": 2,
        "awayScore": 1,
        "status": "completed",
        "scheduledFor": "2024-03-02T14:00:00.000Z",
        "competition": { "id": "c1", "name": "Premier Division" },
        "season": { "id": "s1", "name": "2023/24 Season" }
    })
}

#[tokio::test]
async fn test_list_matches_with_filters() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/matches"))
        .and(query_param("status[0]", "completed"))
        .and(query_param("date[0][gt]", "2024-01-01T00:00:00Z"))
        .and(query_param("page", "2"))
        .respond_with(success_response(json!([match_json("m1"), match_json("m2")])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = api_key_client(&mock_server);
    let query = MatchQuery {
        status: vec![MatchStatus::Completed],
        date: vec![DatePredicate::after(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())],
        base: BaseListQuery::new().page(2),
        ..Default::default()
    };

    let matches = client.matches().list(&query).await.unwrap();

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].home_team.name, "Northside");
    assert_eq!(
        matches[0].scheduled_for,
        Utc.with_ymd_and_hms(2024, 3, 2, 14, 0, 0).unwrap()
    );
    assert!(matches[0].status.is_finished());
}

#[tokio::test]
async fn test_get_full_match_with_events() {
    let mock_server = setup_mock_server().await;

    let body = json!({
        "details": match_json("m1"),
        "events": [
        {
            "type": "goal",
            "createdAt": "2024-03-02T14:12:00.000Z",
            "time": 12,
            "player": { "id": "p1", "firstName": "Sam", "lastName": "Kerr" },
            "teamId": "t1",
            "goaltype": "goal"
        },
        { "type": "period_change", "createdAt": "2024-03-02T14:45:00.000Z" }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/v1/matches/m1"))
        .respond_with(success_response(body))
        .mount(&mock_server)
        .await;

    let client = api_key_client(&mock_server);
    let full = client.matches().get("m1").await.unwrap();

    assert_eq!(full.details.id, "m1");
    assert_eq!(full.events.len(), 2);
    assert!(matches!(full.events[0], MatchEvent::Goal(_)));
    assert_eq!(full.events[0].team_id(), Some("t1"));
    assert!(matches!(full.events[1], MatchEvent::Unknown));
}

#[tokio::test]
async fn test_search() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("query", "north"))
        .respond_with(success_response(json!([
            { "type": "team", "id": "t1", "label": "Northside" },
            { "type": "person", "id": "p1", "label": "Nora North", "rank": "0.4" }
        ])))
        .mount(&mock_server)
        .await;

    let client = api_key_client(&mock_server);
    let results = client
        .search()
        .list(&BaseListQuery::new().query("north"))
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].item_type, SearchItemType::Team);
    assert_eq!(results[1].label, "Nora North");
}

#[tokio::test]
async fn test_resource_ids_are_escaped() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/seasons/2024%2F25"))
        .respond_with(success_response(json!({ "id": "2024/25", "name": "2024/25 Season" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = api_key_client(&mock_server);
    let season = client.seasons().get("2024/25").await.unwrap();

    assert_eq!(season.id, "2024/25");
}
