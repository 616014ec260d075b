//! Club operations.

use super::resource_path;
use crate::client::MatchDayClient;
use crate::errors::MatchDayResult;
use crate::types::{BaseListQuery, Club, ClubPartial};

const BASE_PATH: &str = "/clubs";

/// Service for club operations.
pub struct ClubsService<'a> {
    client: &'a MatchDayClient,
}

impl<'a> ClubsService<'a> {
    /// Creates a new clubs service.
    pub fn new(client: &'a MatchDayClient) -> Self {
        Self { client }
    }

    /// Lists clubs.
    pub async fn list(&self, query: &BaseListQuery) -> MatchDayResult<Vec<ClubPartial>> {
        self.client.get_with_query(BASE_PATH, query).await
    }

    /// Gets a club.
    pub async fn get(&self, id: &str) -> MatchDayResult<Club> {
        self.client.get(&resource_path(BASE_PATH, id, "")).await
    }
}

#[cfg(test)]
mod tests {
    use crate::services::test_support::{last_path, mock_client};
    use crate::types::BaseListQuery;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_clubs() {
        let (client, transport) = mock_client();
        transport.queue_json_response(
            200,
            json!([{ "id": "club-1", "name": "Rovers FC", "logo": null }]),
        );

        let clubs = client.clubs().list(&BaseListQuery::new()).await.unwrap();

        assert_eq!(last_path(&transport), "/clubs?");
        assert_eq!(clubs[0].name, "Rovers FC");
    }

    #[tokio::test]
    async fn test_get_club() {
        let (client, transport) = mock_client();
        transport.queue_json_response(
            200,
            json!({
                "id": "club-1",
                "name": "Rovers FC",
                "logo": null,
                "contactEmail": "info@rovers.example",
                "teams": [{ "id": "t1", "name": "Rovers Women" }],
                "history": [{ "name": "Rovers AFC", "createdAt": "2019-06-01T00:00:00Z" }]
            }),
        );

        let club = client.clubs().get("club-1").await.unwrap();

        assert_eq!(last_path(&transport), "/clubs/club-1");
        assert_eq!(club.teams.len(), 1);
        assert_eq!(club.history[0].name.as_deref(), Some("Rovers AFC"));
    }

    #[tokio::test]
    async fn test_not_found() {
        let (client, transport) = mock_client();
        transport.queue_json_response(404, json!({ "message": "Club not found" }));

        let err = client.clubs().get("missing").await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.message(), "Club not found");
    }
}
