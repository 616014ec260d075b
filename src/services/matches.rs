//! Match operations.

use super::resource_path;
use crate::client::MatchDayClient;
use crate::errors::MatchDayResult;
use crate::types::{FullMatch, Match, MatchQuery};

const BASE_PATH: &str = "/matches";

/// Service for match operations.
pub struct MatchesService<'a> {
    client: &'a MatchDayClient,
}

impl<'a> MatchesService<'a> {
    /// Creates a new matches service.
    pub fn new(client: &'a MatchDayClient) -> Self {
        Self { client }
    }

    /// Lists matches.
    pub async fn list(&self, query: &MatchQuery) -> MatchDayResult<Vec<Match>> {
        self.client.get_with_query(BASE_PATH, query).await
    }

    /// Gets a match with lineups and events.
    pub async fn get(&self, id: &str) -> MatchDayResult<FullMatch> {
        self.client.get(&resource_path(BASE_PATH, id, "")).await
    }
}
