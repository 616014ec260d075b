//! Team and club types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{BaseListQuery, SeasonPartial};
use super::competitions::CompetitionPartial;
use super::persons::PersonPartial;

/// Team summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamPartial {
    /// Team ID.
    pub id: String,
    /// Team name.
    pub name: String,
    /// Logo URL.
    #[serde(default)]
    pub logo: Option<String>,
    /// Nickname.
    #[serde(default)]
    pub nickname: Option<String>,
}

/// Full team record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Summary fields.
    #[serde(flatten)]
    pub team: TeamPartial,
    /// Primary kit colour.
    #[serde(default)]
    pub primary: Option<String>,
    /// Secondary kit colour.
    #[serde(default)]
    pub secondary: Option<String>,
    /// Club the team belongs to.
    #[serde(default)]
    pub parent_club: Option<ClubPartial>,
}

/// Earlier branding of a team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamHistory {
    /// Former name.
    #[serde(default)]
    pub name: Option<String>,
    /// Former logo URL.
    #[serde(default)]
    pub logo: Option<String>,
    /// Former nickname.
    #[serde(default)]
    pub nickname: Option<String>,
    /// Former abbreviation.
    #[serde(default)]
    pub abbreviation: Option<String>,
    /// Former primary colour.
    #[serde(default)]
    pub primary: Option<String>,
    /// Former secondary colour.
    #[serde(default)]
    pub secondary: Option<String>,
}

/// Club summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubPartial {
    /// Club ID.
    pub id: String,
    /// Club name.
    pub name: String,
    /// Logo URL.
    #[serde(default)]
    pub logo: Option<String>,
}

/// Earlier details of a club.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubHistory {
    /// Former name.
    #[serde(default)]
    pub name: Option<String>,
    /// Former contact email.
    #[serde(default)]
    pub contact_email: Option<String>,
    /// Former logo URL.
    #[serde(default)]
    pub club_logo: Option<String>,
    /// When this entry was recorded.
    pub created_at: DateTime<Utc>,
}

/// Full club record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    /// Summary fields.
    #[serde(flatten)]
    pub club: ClubPartial,
    /// Contact email.
    #[serde(default)]
    pub contact_email: Option<String>,
    /// Teams run by the club.
    #[serde(default)]
    pub teams: Vec<TeamPartial>,
    /// Earlier club details.
    #[serde(default)]
    pub history: Vec<ClubHistory>,
}

/// A player registered to a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPlayerRegistration {
    /// The player.
    pub player: PersonPartial,
    /// Competition the registration is for.
    #[serde(default)]
    pub competition: Option<CompetitionPartial>,
    /// Registration time.
    pub registered_at: DateTime<Utc>,
    /// Shirt number.
    #[serde(default)]
    pub number: Option<u32>,
}

/// A coach, manager or assistant registered to a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStaffRegistration {
    /// The staff member.
    pub person: PersonPartial,
    /// Staff role, e.g. `coach`.
    #[serde(default)]
    pub role: Option<String>,
    /// Season of the registration.
    #[serde(default)]
    pub season: Option<SeasonPartial>,
    /// Registration time.
    #[serde(default)]
    pub registered_at: Option<DateTime<Utc>>,
}

/// Aggregate numbers for a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatsSummary {
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
    /// Matches without conceding.
    #[serde(default)]
    pub clean_sheets: u32,
}

/// Filter for `GET /teams`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamListQuery {
    /// Restrict to these competition IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub competition: Vec<String>,
    /// Restrict to these season IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub season: Vec<String>,
    /// Paging and text filter.
    #[serde(flatten)]
    pub base: BaseListQuery,
}

/// Filter for `GET /teams/{id}/stats/players`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPlayersStatsQuery {
    /// Restrict to these season IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub season: Vec<String>,
    /// Restrict to these competition IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub competition: Vec<String>,
    /// Paging and text filter.
    #[serde(flatten)]
    pub base: BaseListQuery,
}

/// Filter for `GET /teams/{id}/staff`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStaffQuery {
    /// Restrict to these season IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub season: Vec<String>,
    /// Paging and text filter.
    #[serde(flatten)]
    pub base: BaseListQuery,
}

/// Filter for `GET /teams/{id}/stats/summary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatsSummaryQuery {
    /// Window start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<Utc>>,
    /// Window end.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
    /// Restrict to these season IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub season: Vec<String>,
    /// Restrict to these competition IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub competition: Vec<String>,
}
