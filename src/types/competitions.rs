//! Competition, competition group and competition statistics types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{BaseListQuery, SeasonPartial};
use super::persons::PersonPartial;
use super::teams::TeamPartial;

/// Competition format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionType {
    /// Round-robin league.
    League,
    /// Knockout cup.
    Cup,
    /// Friendly fixtures.
    Friendly,
    /// A format this client does not know about.
    #[serde(other)]
    Unknown,
}

/// Competition group summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionGroupPartial {
    /// Group ID.
    pub id: String,
    /// Group name.
    pub name: String,
    /// Abbreviated name.
    #[serde(default)]
    pub short_name: Option<String>,
    /// Logo URL.
    #[serde(default)]
    pub logo: Option<String>,
}

/// Competition group with its competitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionGroup {
    /// Summary fields.
    #[serde(flatten)]
    pub group: CompetitionGroupPartial,
    /// Competitions in the group.
    #[serde(default)]
    pub competitions: Vec<CompetitionPartial>,
}

/// Competition summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionPartial {
    /// Competition ID.
    pub id: String,
    /// Competition name.
    pub name: String,
    /// Format.
    #[serde(rename = "type")]
    pub competition_type: CompetitionType,
    /// Season currently being played.
    #[serde(default)]
    pub active_season: Option<SeasonPartial>,
    /// Group the competition belongs to.
    #[serde(default)]
    pub group: Option<CompetitionGroupPartial>,
    /// Logo URL.
    #[serde(default)]
    pub logo: Option<String>,
}

/// A season of a competition, flagged if active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionSeason {
    /// Season fields.
    #[serde(flatten)]
    pub season: SeasonPartial,
    /// Whether this is the active season.
    #[serde(default)]
    pub is_active_season: bool,
}

/// Earlier branding of a competition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionHistory {
    /// History entry ID.
    pub id: String,
    /// Former name.
    #[serde(default)]
    pub name: Option<String>,
    /// Former logo URL.
    #[serde(default)]
    pub logo: Option<String>,
    /// When this entry was recorded.
    pub created_at: DateTime<Utc>,
}

/// Full competition record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    /// Competition ID.
    pub id: String,
    /// Competition name.
    pub name: String,
    /// Format.
    #[serde(rename = "type")]
    pub competition_type: CompetitionType,
    /// Group the competition belongs to.
    #[serde(default)]
    pub group: Option<CompetitionGroupPartial>,
    /// Logo URL.
    #[serde(default)]
    pub logo: Option<String>,
    /// All seasons of the competition.
    #[serde(default)]
    pub seasons: Vec<CompetitionSeason>,
    /// Earlier branding.
    #[serde(default)]
    pub history: Vec<CompetitionHistory>,
}

impl Competition {
    /// The season flagged as active, if any.
    pub fn active_season(&self) -> Option<&SeasonPartial> {
        self.seasons
            .iter()
            .find(|s| s.is_active_season)
            .map(|s| &s.season)
    }
}

/// A row of a league table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionTableRow {
    /// Team.
    pub team: TeamPartial,
    /// Table position.
    pub position: u32,
    /// Matches played.
    pub matches_played: u32,
    /// Wins.
    pub won: u32,
    /// Draws.
    pub drawn: u32,
    /// Losses.
    pub lost: u32,
    /// Goals scored.
    pub goals_for: u32,
    /// Goals conceded.
    pub goals_against: u32,
    /// Goal difference.
    pub goal_difference: i32,
    /// Points.
    pub points: i32,
}

/// Aggregate numbers for a competition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionStatsSummary {
    /// Matches played.
    pub matches: u32,
    /// Goals scored.
    pub goals: u32,
    /// Own goals.
    pub own_goals: u32,
    /// Average goals per match.
    pub goals_per_match: f64,
    /// Yellow cards shown.
    pub yellow_cards: u32,
    /// Red cards shown.
    pub red_cards: u32,
    /// Clean sheets kept.
    pub clean_sheets: u32,
    /// Teams taking part.
    pub teams: u32,
}

/// Per-player numbers within a competition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionPlayersStats {
    /// Player.
    pub player: PersonPartial,
    /// Player's team.
    pub team: TeamPartial,
    /// Goals.
    pub goals: u32,
    /// Assists.
    pub assists: u32,
    /// Goals plus assists.
    pub contributions: u32,
    /// Yellow cards.
    pub yellow_cards: u32,
    /// Red cards.
    pub red_cards: u32,
    /// Appearances.
    pub appearances: u32,
}

/// Per-team numbers within a competition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionTeamsStats {
    /// Team.
    pub team: TeamPartial,
    /// Matches played.
    pub played: u32,
    /// Wins.
    pub wins: u32,
    /// Draws.
    pub draws: u32,
    /// Losses.
    pub losses: u32,
    /// Goals scored.
    pub goals_for: u32,
    /// Goals conceded.
    pub goals_against: u32,
    /// Goal difference.
    pub goal_difference: i32,
    /// Average goals per match.
    pub goals_per_match: f64,
    /// Clean sheets.
    pub clean_sheets: u32,
    /// Yellow cards.
    pub yellow_cards: u32,
    /// Red cards.
    pub red_cards: u32,
    /// Points.
    pub points: i32,
}

/// Filter for competition and competition-group lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionQuery {
    /// Restrict to these competition group IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group: Vec<String>,
    /// Paging and text filter.
    #[serde(flatten)]
    pub base: BaseListQuery,
}

/// Filter for `GET /competitions/{id}/stats/summary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionStatsSummaryQuery {
    /// Window start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<Utc>>,
    /// Window end.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
    /// Restrict to these season IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub season: Vec<String>,
    /// Restrict to these match group IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub match_group: Vec<String>,
    /// Paging and text filter.
    #[serde(flatten)]
    pub base: BaseListQuery,
}

/// Sort key for competition player stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PlayersStatsOrder {
    /// By name.
    Name,
    /// By goals.
    Goals,
    /// By assists.
    Assists,
    /// By goals plus assists.
    Contributions,
    /// By yellow cards.
    YellowCards,
    /// By red cards.
    RedCards,
    /// By appearances.
    Appearances,
}

/// Filter for `GET /competitions/{id}/stats/players`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionPlayersStatsQuery {
    /// Window start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<Utc>>,
    /// Window end.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
    /// Restrict to these season IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub season: Vec<String>,
    /// Restrict to these match group IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub match_group: Vec<String>,
    /// Restrict to these team IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub team: Vec<String>,
    /// Sort key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<PlayersStatsOrder>,
    /// Paging and text filter.
    #[serde(flatten)]
    pub base: BaseListQuery,
}

/// Sort key for competition team stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TeamsStatsOrder {
    /// By name.
    Name,
    /// By goals scored.
    GoalsFor,
    /// By goals conceded.
    GoalsAgainst,
    /// By goal difference.
    GoalDifference,
    /// By clean sheets.
    CleanSheets,
    /// By yellow cards.
    YellowCards,
    /// By red cards.
    RedCards,
    /// By matches played.
    Played,
    /// By wins.
    Wins,
    /// By points.
    Points,
}

/// Filter for `GET /competitions/{id}/stats/teams`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionTeamsStatsQuery {
    /// Window start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<Utc>>,
    /// Window end.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
    /// Restrict to these season IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub season: Vec<String>,
    /// Restrict to these match group IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub match_group: Vec<String>,
    /// Sort key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<TeamsStatsOrder>,
    /// Paging and text filter.
    #[serde(flatten)]
    pub base: BaseListQuery,
}
