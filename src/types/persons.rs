//! People: players, staff and officials.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{BaseListQuery, SeasonPartial};
use super::competitions::CompetitionPartial;
use super::teams::TeamPartial;

/// Person summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonPartial {
    /// Person ID.
    pub id: String,
    /// First name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Preferred display name.
    #[serde(default)]
    pub known_as: Option<String>,
}

impl PersonPartial {
    /// Name to show: `knownAs` if set, else first and last name.
    pub fn display_name(&self) -> String {
        if let Some(known_as) = self.known_as.as_deref().filter(|s| !s.is_empty()) {
            return known_as.to_string();
        }

        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A player registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRegistration {
    /// Team registered to.
    pub team: TeamPartial,
    /// Competition.
    #[serde(default)]
    pub competition: Option<CompetitionPartial>,
    /// Season.
    #[serde(default)]
    pub season: Option<SeasonPartial>,
    /// Registration time.
    pub registered_at: DateTime<Utc>,
    /// Shirt number.
    #[serde(default)]
    pub number: Option<u32>,
}

/// A coaching registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachRegistration {
    /// Team registered to.
    pub team: TeamPartial,
    /// Competition.
    #[serde(default)]
    pub competition: Option<CompetitionPartial>,
    /// Season.
    #[serde(default)]
    pub season: Option<SeasonPartial>,
    /// Registration time.
    pub registered_at: DateTime<Utc>,
}

/// Full person record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Summary fields.
    #[serde(flatten)]
    pub person: PersonPartial,
    /// Player registrations, current and past.
    #[serde(default)]
    pub player_registrations: Vec<PlayerRegistration>,
    /// Coaching registrations, current and past.
    #[serde(default)]
    pub coach_registrations: Vec<CoachRegistration>,
}

/// Any registration of a person, as returned by
/// `GET /persons/{id}/registrations/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRegistration {
    /// Registration kind, e.g. `player` or `coach`.
    #[serde(rename = "type", default)]
    pub registration_type: Option<String>,
    /// Team registered to.
    pub team: TeamPartial,
    /// Competition.
    #[serde(default)]
    pub competition: Option<CompetitionPartial>,
    /// Season.
    #[serde(default)]
    pub season: Option<SeasonPartial>,
    /// Registration time.
    #[serde(default)]
    pub registered_at: Option<DateTime<Utc>>,
    /// Shirt number.
    #[serde(default)]
    pub number: Option<u32>,
}

/// A match a person appeared in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonAppearance {
    /// Match ID.
    pub match_id: String,
    /// Team the person played for.
    pub team: TeamPartial,
    /// Opposition.
    #[serde(default)]
    pub opponent: Option<TeamPartial>,
    /// Kick-off time.
    pub scheduled_for: DateTime<Utc>,
    /// Goals scored in the match.
    #[serde(default)]
    pub goals: u32,
}

/// Aggregate numbers for a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonStatsSummary {
    /// Appearances.
    pub appearances: u32,
    /// Goals.
    pub goals: u32,
    /// Assists.
    pub assists: u32,
    /// Yellow cards.
    #[serde(default)]
    pub yellow_cards: u32,
    /// Red cards.
    #[serde(default)]
    pub red_cards: u32,
}

/// A single goal scored by a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonStatsGoal {
    /// Match ID.
    pub match_id: String,
    /// Team scored for.
    #[serde(default)]
    pub team: Option<TeamPartial>,
    /// Minute of the goal.
    #[serde(default)]
    pub time: Option<u32>,
    /// Whether it was a penalty.
    #[serde(default)]
    pub penalty: bool,
    /// When the goal was recorded.
    pub created_at: DateTime<Utc>,
}

/// A single assist by a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonStatsAssist {
    /// Match ID.
    pub match_id: String,
    /// Team assisted for.
    #[serde(default)]
    pub team: Option<TeamPartial>,
    /// Scorer of the assisted goal.
    #[serde(default)]
    pub scorer: Option<PersonPartial>,
    /// When the goal was recorded.
    pub created_at: DateTime<Utc>,
}

/// A card shown to a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonStatsCard {
    /// Match ID.
    pub match_id: String,
    /// `yellow_card` or `red_card`.
    #[serde(rename = "type")]
    pub card_type: String,
    /// Minute of the card.
    #[serde(default)]
    pub time: Option<u32>,
    /// When the card was recorded.
    pub created_at: DateTime<Utc>,
}

/// Filter for `GET /persons`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonQuery {
    /// Restrict to these person types (e.g. `player`, `staff`).
    #[serde(rename = "type", skip_serializing_if = "Vec::is_empty")]
    pub person_type: Vec<String>,
    /// Paging and text filter.
    #[serde(flatten)]
    pub base: BaseListQuery,
}

/// Filter for a person's registrations and appearances.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonHistoryQuery {
    /// Restrict to these season IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub season: Vec<String>,
    /// Restrict to these team IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub team: Vec<String>,
    /// Restrict to these competition IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub competition: Vec<String>,
    /// Paging and text filter.
    #[serde(flatten)]
    pub base: BaseListQuery,
}

/// Filter for a person's stats endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonStatsQuery {
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
    /// Restrict to these team IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub team: Vec<String>,
    /// Paging and text filter.
    #[serde(flatten)]
    pub base: BaseListQuery,
}
