//! Season operations.

use super::resource_path;
use crate::client::MatchDayClient;
use crate::errors::MatchDayResult;
use crate::types::{BaseListQuery, SeasonPartial};

const BASE_PATH: &str = "/seasons";

/// Service for season operations.
pub struct SeasonsService<'a> {
    client: &'a MatchDayClient,
}

impl<'a> SeasonsService<'a> {
    /// Creates a new seasons service.
    pub fn new(client: &'a MatchDayClient) -> Self {
        Self { client }
    }

    /// Lists seasons.
    pub async fn list(&self, query: &BaseListQuery) -> MatchDayResult<Vec<SeasonPartial>> {
        self.client.get_with_query(BASE_PATH, query).await
    }

    /// Gets a season.
    pub async fn get(&self, id: &str) -> MatchDayResult<SeasonPartial> {
        self.client.get(&resource_path(BASE_PATH, id, "")).await
    }
}

#[cfg(test)]
mod tests {
    use crate::services::test_support::{last_path, mock_client};
    use crate::types::BaseListQuery;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_seasons() {
        let (client, transport) = mock_client();
        transport.queue_json_response(
            200,
            json!([
                { "id": "season-2024", "name": "2024/25 Season" },
                { "id": "season-2023", "name": "2023/24 Season" }
            ]),
        );

        let seasons = client
            .seasons()
            .list(&BaseListQuery::new().page(1).items_per_page(10))
            .await
            .unwrap();

        assert_eq!(last_path(&transport), "/seasons?page=1&itemsPerPage=10");
        assert_eq!(seasons.len(), 2);
    }

    #[tokio::test]
    async fn test_get_season_revives_dates() {
        let (client, transport) = mock_client();
        transport.queue_json_response(
            200,
            json!({
                "id": "season-2024",
                "name": "2024/25 Season",
                "startDate": "2024-08-01",
                "endDate": "2025-05-31"
            }),
        );

        let season = client.seasons().get("season-2024").await.unwrap();

        assert_eq!(last_path(&transport), "/seasons/season-2024");
        assert_eq!(
            season.start_date,
            Some(Utc.with_ymd_and_hms(2024, 8, 1, 0, 0, 0).unwrap())
        );
    }
}
