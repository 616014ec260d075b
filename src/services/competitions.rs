//! Competition and competition group operations.

use super::resource_path;
use crate::client::MatchDayClient;
use crate::errors::MatchDayResult;
use crate::types::{
    Competition, CompetitionGroup, CompetitionPartial, CompetitionPlayersStats,
    CompetitionPlayersStatsQuery, CompetitionQuery, CompetitionStatsSummary,
    CompetitionStatsSummaryQuery, CompetitionTeamsStats, CompetitionTeamsStatsQuery, ListResponse,
};

const BASE_PATH: &str = "/competitions";
const GROUPS_PATH: &str = "/competition-groups";

/// Service for competition operations.
pub struct CompetitionsService<'a> {
    client: &'a MatchDayClient,
}

impl<'a> CompetitionsService<'a> {
    /// Creates a new competitions service.
    pub fn new(client: &'a MatchDayClient) -> Self {
        Self { client }
    }

    /// Gets the competition statistics service.
    pub fn stats(&self) -> CompetitionStatsService<'a> {
        CompetitionStatsService::new(self.client)
    }

    /// Gets the competition groups service.
    pub fn groups(&self) -> CompetitionGroupsService<'a> {
        CompetitionGroupsService::new(self.client)
    }

    /// Lists competitions.
    pub async fn list(
        &self,
        query: &CompetitionQuery,
    ) -> MatchDayResult<ListResponse<CompetitionPartial>> {
        self.client.get_with_query(BASE_PATH, query).await
    }

    /// Gets a competition.
    pub async fn get(&self, id: &str) -> MatchDayResult<Competition> {
        self.client.get(&resource_path(BASE_PATH, id, "")).await
    }

    /// Lists per-player statistics for a competition.
    pub async fn players(
        &self,
        id: &str,
        query: &CompetitionPlayersStatsQuery,
    ) -> MatchDayResult<ListResponse<CompetitionPlayersStats>> {
        let path = resource_path(BASE_PATH, id, "/stats/players");
        self.client.get_with_query(&path, query).await
    }

    /// Lists per-team statistics for a competition.
    pub async fn teams(
        &self,
        id: &str,
        query: &CompetitionTeamsStatsQuery,
    ) -> MatchDayResult<ListResponse<CompetitionTeamsStats>> {
        let path = resource_path(BASE_PATH, id, "/stats/teams");
        self.client.get_with_query(&path, query).await
    }
}

/// Service for competition-wide statistics.
pub struct CompetitionStatsService<'a> {
    client: &'a MatchDayClient,
}

impl<'a> CompetitionStatsService<'a> {
    /// Creates a new competition statistics service.
    pub fn new(client: &'a MatchDayClient) -> Self {
        Self { client }
    }

    /// Gets summary statistics for a competition.
    pub async fn summary(
        &self,
        id: &str,
        query: &CompetitionStatsSummaryQuery,
    ) -> MatchDayResult<CompetitionStatsSummary> {
        let path = resource_path(BASE_PATH, id, "/stats/summary");
        self.client.get_with_query(&path, query).await
    }
}

/// Service for competition groups.
pub struct CompetitionGroupsService<'a> {
    client: &'a MatchDayClient,
}

impl<'a> CompetitionGroupsService<'a> {
    /// Creates a new competition groups service.
    pub fn new(client: &'a MatchDayClient) -> Self {
        Self { client }
    }

    /// Lists competition groups.
    pub async fn list(
        &self,
        query: &CompetitionQuery,
    ) -> MatchDayResult<ListResponse<CompetitionGroup>> {
        self.client.get_with_query(GROUPS_PATH, query).await
    }

    /// Gets a competition group.
    pub async fn get(&self, id: &str) -> MatchDayResult<CompetitionGroup> {
        self.client.get(&resource_path(GROUPS_PATH, id, "")).await
    }
}
