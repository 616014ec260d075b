//! Person operations.

use super::resource_path;
use crate::client::MatchDayClient;
use crate::errors::MatchDayResult;
use crate::types::{
    ListResponse, Person, PersonAppearance, PersonHistoryQuery, PersonQuery, PersonRegistration,
    PersonStatsAssist, PersonStatsCard, PersonStatsGoal, PersonStatsQuery, PersonStatsSummary,
};

const BASE_PATH: &str = "/persons";

/// Service for person operations.
pub struct PersonsService<'a> {
    client: &'a MatchDayClient,
}

impl<'a> PersonsService<'a> {
    /// Creates a new persons service.
    pub fn new(client: &'a MatchDayClient) -> Self {
        Self { client }
    }

    /// Gets the person statistics service.
    pub fn stats(&self) -> PersonStatsService<'a> {
        PersonStatsService::new(self.client)
    }

    /// Gets a person.
    pub async fn get(&self, id: &str) -> MatchDayResult<Person> {
        self.client.get(&resource_path(BASE_PATH, id, "")).await
    }

    /// Lists persons.
    pub async fn list(&self, query: &PersonQuery) -> MatchDayResult<ListResponse<Person>> {
        self.client.get_with_query(BASE_PATH, query).await
    }

    /// Lists a person's registrations.
    pub async fn registrations(
        &self,
        id: &str,
        query: &PersonHistoryQuery,
    ) -> MatchDayResult<ListResponse<PersonRegistration>> {
        let path = resource_path(BASE_PATH, id, "/registrations/");
        self.client.get_with_query(&path, query).await
    }

    /// Lists a person's match appearances.
    pub async fn appearances(
        &self,
        id: &str,
        query: &PersonHistoryQuery,
    ) -> MatchDayResult<ListResponse<PersonAppearance>> {
        let path = resource_path(BASE_PATH, id, "/appearances/");
        self.client.get_with_query(&path, query).await
    }
}

/// Service for person statistics.
pub struct PersonStatsService<'a> {
    client: &'a MatchDayClient,
}

impl<'a> PersonStatsService<'a> {
    /// Creates a new person statistics service.
    pub fn new(client: &'a MatchDayClient) -> Self {
        Self { client }
    }

    /// Gets summary statistics for a person.
    pub async fn summary(
        &self,
        id: &str,
        query: &PersonStatsQuery,
    ) -> MatchDayResult<PersonStatsSummary> {
        let path = resource_path(BASE_PATH, id, "/stats/summary");
        self.client.get_with_query(&path, query).await
    }

    /// Lists goals scored by a person.
    pub async fn goals(
        &self,
        id: &str,
        query: &PersonStatsQuery,
    ) -> MatchDayResult<ListResponse<PersonStatsGoal>> {
        let path = resource_path(BASE_PATH, id, "/stats/goals");
        self.client.get_with_query(&path, query).await
    }

    /// Lists assists by a person.
    pub async fn assists(
        &self,
        id: &str,
        query: &PersonStatsQuery,
    ) -> MatchDayResult<ListResponse<PersonStatsAssist>> {
        let path = resource_path(BASE_PATH, id, "/stats/assists");
        self.client.get_with_query(&path, query).await
    }

    /// Lists cards shown to a person.
    pub async fn cards(
        &self,
        id: &str,
        query: &PersonStatsQuery,
    ) -> MatchDayResult<ListResponse<PersonStatsCard>> {
        let path = resource_path(BASE_PATH, id, "/stats/cards");
        self.client.get_with_query(&path, query).await
    }
}
