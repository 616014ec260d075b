//! Team operations.

use super::resource_path;
use crate::client::MatchDayClient;
use crate::errors::MatchDayResult;
use crate::types::{
    ListResponse, Team, TeamListQuery, TeamPartial, TeamPlayerRegistration, TeamPlayersStatsQuery,
    TeamStaffQuery, TeamStaffRegistration, TeamStatsSummary, TeamStatsSummaryQuery,
};

const BASE_PATH: &str = "/teams";

/// Service for team operations.
pub struct TeamsService<'a> {
    client: &'a MatchDayClient,
}

impl<'a> TeamsService<'a> {
    /// Creates a new teams service.
    pub fn new(client: &'a MatchDayClient) -> Self {
        Self { client }
    }

    /// Gets the team statistics service.
    pub fn stats(&self) -> TeamStatsService<'a> {
        TeamStatsService::new(self.client)
    }

    /// Lists teams.
    pub async fn list(&self, query: &TeamListQuery) -> MatchDayResult<ListResponse<TeamPartial>> {
        self.client.get_with_query(BASE_PATH, query).await
    }

    /// Gets a team.
    pub async fn get(&self, id: &str) -> MatchDayResult<Team> {
        self.client.get(&resource_path(BASE_PATH, id, "")).await
    }

    /// Lists players registered to a team.
    pub async fn players(
        &self,
        id: &str,
        query: &TeamPlayersStatsQuery,
    ) -> MatchDayResult<Vec<TeamPlayerRegistration>> {
        let path = resource_path(BASE_PATH, id, "/stats/players");
        self.client.get_with_query(&path, query).await
    }

    /// Lists a team's coaches, managers and assistants.
    pub async fn staff(
        &self,
        id: &str,
        query: &TeamStaffQuery,
    ) -> MatchDayResult<Vec<TeamStaffRegistration>> {
        let path = resource_path(BASE_PATH, id, "/staff");
        self.client.get_with_query(&path, query).await
    }
}

/// Service for team statistics.
pub struct TeamStatsService<'a> {
    client: &'a MatchDayClient,
}

impl<'a> TeamStatsService<'a> {
    /// Creates a new team statistics service.
    pub fn new(client: &'a MatchDayClient) -> Self {
        Self { client }
    }

    /// Gets summary statistics for a team.
    pub async fn summary(
        &self,
        id: &str,
        query: &TeamStatsSummaryQuery,
    ) -> MatchDayResult<TeamStatsSummary> {
        let path = resource_path(BASE_PATH, id, "/stats/summary");
        self.client.get_with_query(&path, query).await
    }
}
