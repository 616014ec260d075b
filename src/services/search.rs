//! Search operations.

use crate::client::MatchDayClient;
use crate::errors::MatchDayResult;
use crate::types::{SearchItem, SearchQuery};

const BASE_PATH: &str = "/search";

/// Service for cross-entity search.
pub struct SearchService<'a> {
    client: &'a MatchDayClient,
}

impl<'a> SearchService<'a> {
    /// Creates a new search service.
    pub fn new(client: &'a MatchDayClient) -> Self {
        Self { client }
    }

    /// Searches teams, persons, competitions and matches.
    pub async fn list(&self, query: &SearchQuery) -> MatchDayResult<Vec<SearchItem>> {
        self.client.get_with_query(BASE_PATH, query).await
    }
}
