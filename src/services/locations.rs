//! Venue operations.

use super::resource_path;
use crate::client::MatchDayClient;
use crate::errors::MatchDayResult;
use crate::types::{BaseListQuery, LocationWithCourts};

const BASE_PATH: &str = "/locations";

/// Service for venue operations.
pub struct LocationsService<'a> {
    client: &'a MatchDayClient,
}

impl<'a> LocationsService<'a> {
    /// Creates a new locations service.
    pub fn new(client: &'a MatchDayClient) -> Self {
        Self { client }
    }

    /// Lists venues with their courts.
    pub async fn list(&self, query: &BaseListQuery) -> MatchDayResult<Vec<LocationWithCourts>> {
        self.client.get_with_query(BASE_PATH, query).await
    }

    /// Gets a venue with its courts.
    pub async fn get(&self, id: &str) -> MatchDayResult<LocationWithCourts> {
        self.client.get(&resource_path(BASE_PATH, id, "")).await
    }
}

#[cfg(test)]
mod tests {
    use crate::services::test_support::{last_path, mock_client};
    use crate::types::BaseListQuery;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_locations_with_courts() {
        let (client, transport) = mock_client();
        transport.queue_json_response(
            200,
            json!([{
                "id": "loc-1",
                "name": "Sports Center",
                "addressFirstLine": "123 Main St",
                "postcode": "AB1 2CD",
                "county": "Kent",
                "country": "England",
                "courts": [
                    { "id": "court-1", "name": "Main Court" },
                    { "id": "court-2", "name": "Training Court" }
                ]
            }]),
        );

        let locations = client
            .locations()
            .list(&BaseListQuery::new().items_per_page(25).page(3))
            .await
            .unwrap();

        assert_eq!(last_path(&transport), "/locations?page=3&itemsPerPage=25");
        assert_eq!(locations[0].courts.len(), 2);
        assert_eq!(
            locations[0].address.as_ref().map(|a| a.postcode.as_str()),
            Some("AB1 2CD")
        );
    }

    #[tokio::test]
    async fn test_get_location() {
        let (client, transport) = mock_client();
        transport.queue_json_response(200, json!({ "id": "loc-1", "courts": [] }));

        let location = client.locations().get("loc-1").await.unwrap();

        assert_eq!(last_path(&transport), "/locations/loc-1");
        assert!(location.address.is_none());
    }
}
