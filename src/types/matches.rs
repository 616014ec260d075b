//! Match, lineup and match event types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{BaseListQuery, SeasonPartial};
use super::locations::Court;
use super::persons::PersonPartial;
use super::teams::TeamPartial;

/// Match state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    /// Not yet started.
    #[serde(rename = "scheduled")]
    Scheduled,
    /// First half in play.
    #[serde(rename = "first-half")]
    FirstHalf,
    /// Half-time break.
    #[serde(rename = "half-time")]
    HalfTime,
    /// Second half in play.
    #[serde(rename = "second-half")]
    SecondHalf,
    /// Normal time finished.
    #[serde(rename = "full-time")]
    FullTime,
    /// Result confirmed.
    #[serde(rename = "completed")]
    Completed,
    /// Moved to a later date.
    #[serde(rename = "postponed")]
    Postponed,
    /// Stopped and not completed.
    #[serde(rename = "abandoned")]
    Abandoned,
    /// First half of extra time in play.
    #[serde(rename = "extra-time-first-half")]
    ExtraTimeFirstHalf,
    /// Break during extra time.
    #[serde(rename = "half-time-extra-time")]
    HalfTimeExtraTime,
    /// Second half of extra time in play.
    #[serde(rename = "extra-time-second-half")]
    ExtraTimeSecondHalf,
    /// Penalty shoot-out in progress.
    #[serde(rename = "penalty-shootout")]
    PenaltyShootout,
    /// A state this client does not know about.
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl MatchStatus {
    /// True while the ball is (or is about to be) in play.
    pub fn is_live(&self) -> bool {
        matches!(
            self,
            Self::FirstHalf
                | Self::HalfTime
                | Self::SecondHalf
                | Self::ExtraTimeFirstHalf
                | Self::HalfTimeExtraTime
                | Self::ExtraTimeSecondHalf
                | Self::PenaltyShootout
        )
    }

    /// True once no further play will happen.
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::FullTime | Self::Completed | Self::Abandoned)
    }
}

/// Kick-off times of each period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchTimes {
    /// First half kick-off.
    #[serde(default)]
    pub first_half_started_at: Option<DateTime<Utc>>,
    /// Second half kick-off.
    #[serde(default)]
    pub second_half_started_at: Option<DateTime<Utc>>,
    /// First half of extra time kick-off.
    #[serde(default)]
    pub first_half_extra_time_started_at: Option<DateTime<Utc>>,
    /// Second half of extra time kick-off.
    #[serde(default)]
    pub second_half_extra_time_started_at: Option<DateTime<Utc>>,
}

/// Officials appointed to a match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOfficials {
    /// Referee.
    #[serde(default)]
    pub referee: Option<PersonPartial>,
    /// First assistant.
    #[serde(default)]
    pub assistant1: Option<PersonPartial>,
    /// Second assistant.
    #[serde(default)]
    pub assistant2: Option<PersonPartial>,
    /// Fourth official.
    #[serde(default)]
    pub fourth_official: Option<PersonPartial>,
}

/// Group (round, division) a match belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchGroup {
    /// Group ID.
    pub id: String,
    /// Competition ID.
    pub competition: String,
    /// Group name.
    pub name: String,
}

/// Competition reference embedded in a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCompetition {
    /// Competition ID.
    pub id: String,
    /// Competition name.
    pub name: String,
    /// Logo URL.
    #[serde(default)]
    pub logo: Option<String>,
}

/// A match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Match ID.
    pub id: String,
    /// Home side.
    pub home_team: TeamPartial,
    /// Away side.
    pub away_team: TeamPartial,
    /// Home goals.
    #[serde(default)]
    pub home_score: u32,
    /// Away goals.
    #[serde(default)]
    pub away_score: u32,
    /// Home penalties in a shoot-out.
    #[serde(default)]
    pub home_score_penalty: u32,
    /// Away penalties in a shoot-out.
    #[serde(default)]
    pub away_score_penalty: u32,
    /// Current state.
    pub status: MatchStatus,
    /// Scheduled kick-off.
    pub scheduled_for: DateTime<Utc>,
    /// Period kick-off times.
    #[serde(default)]
    pub times: MatchTimes,
    /// Competition.
    pub competition: MatchCompetition,
    /// Season.
    pub season: SeasonPartial,
    /// Venue.
    #[serde(default)]
    pub court: Option<Court>,
    /// Group within the competition.
    #[serde(default)]
    pub group: Option<MatchGroup>,
    /// Appointed officials.
    #[serde(default)]
    pub officials: MatchOfficials,
    /// Live stream URL.
    #[serde(default)]
    pub stream_link: Option<String>,
}

/// Lineup position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerPosition {
    /// Left side.
    Left,
    /// Right side.
    Right,
    /// Centre.
    Centre,
    /// Goalkeeper.
    Goalkeeper,
    /// On the bench.
    #[serde(rename = "sub")]
    Substitute,
    /// A position this client does not know about.
    #[serde(other)]
    Unknown,
}

/// A player in a lineup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchPlayer {
    /// The player.
    pub person: PersonPartial,
    /// Shirt number.
    #[serde(default)]
    pub number: Option<u32>,
    /// Position, if assigned.
    #[serde(default)]
    pub position: Option<PlayerPosition>,
    /// Whether the player captains the side.
    #[serde(default)]
    pub captain: bool,
}

/// Kind of goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalType {
    /// A regular goal.
    #[serde(rename = "goal")]
    Goal,
    /// An own goal.
    #[serde(rename = "own-goal")]
    OwnGoal,
}

/// Fields shared by every match event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEventMeta {
    /// When the event was recorded.
    pub created_at: DateTime<Utc>,
    /// Match minute.
    #[serde(default)]
    pub time: Option<u32>,
    /// Period the event happened in.
    #[serde(default)]
    pub match_period: Option<MatchStatus>,
}

/// A goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalEvent {
    /// Shared fields.
    #[serde(flatten)]
    pub meta: MatchEventMeta,
    /// Scorer.
    pub player: PersonPartial,
    /// Team credited with the goal.
    pub team_id: String,
    /// Whether it was a penalty.
    #[serde(default)]
    pub penalty: bool,
    /// Goal kind.
    pub goaltype: GoalType,
}

/// A yellow or red card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardEvent {
    /// Shared fields.
    #[serde(flatten)]
    pub meta: MatchEventMeta,
    /// Player shown the card.
    pub player: PersonPartial,
    /// Player's team.
    pub team_id: String,
}

/// A substitution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstitutionEvent {
    /// Shared fields.
    #[serde(flatten)]
    pub meta: MatchEventMeta,
    /// Player coming on.
    pub player_on: PersonPartial,
    /// Player going off.
    pub player_off: PersonPartial,
    /// Team making the change.
    pub team_id: String,
}

/// Something that happened during a match, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchEvent {
    /// A goal.
    Goal(GoalEvent),
    /// A yellow card.
    YellowCard(CardEvent),
    /// A red card.
    RedCard(CardEvent),
    /// A substitution.
    Substitution(SubstitutionEvent),
    /// An event type this client does not know about.
    #[serde(other)]
    Unknown,
}

impl MatchEvent {
    /// Shared fields, unless the event type is unknown.
    pub fn meta(&self) -> Option<&MatchEventMeta> {
        match self {
            Self::Goal(e) => Some(&e.meta),
            Self::YellowCard(e) | Self::RedCard(e) => Some(&e.meta),
            Self::Substitution(e) => Some(&e.meta),
            Self::Unknown => None,
        }
    }

    /// Team the event is attributed to.
    pub fn team_id(&self) -> Option<&str> {
        match self {
            Self::Goal(e) => Some(&e.team_id),
            Self::YellowCard(e) | Self::RedCard(e) => Some(&e.team_id),
            Self::Substitution(e) => Some(&e.team_id),
            Self::Unknown => None,
        }
    }
}

/// A match with lineups and events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullMatch {
    /// Match details.
    pub details: Match,
    /// Home lineup.
    #[serde(default)]
    pub home_lineups: Vec<MatchPlayer>,
    /// Away lineup.
    #[serde(default)]
    pub away_lineups: Vec<MatchPlayer>,
    /// Events in recorded order.
    #[serde(default)]
    pub events: Vec<MatchEvent>,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

/// Match ordering. The server defaults to ascending date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MatchOrder {
    /// Direction by kick-off date.
    pub date: SortDirection,
}

/// Date predicate. Fields within one predicate are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatePredicate {
    /// Strictly before.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<DateTime<Utc>>,
    /// On.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eq: Option<DateTime<Utc>>,
    /// Strictly after.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt: Option<DateTime<Utc>>,
}

impl DatePredicate {
    /// Matches before `date`.
    pub fn before(date: DateTime<Utc>) -> Self {
        Self {
            lt: Some(date),
            ..Self::default()
        }
    }

    /// Matches after `date`.
    pub fn after(date: DateTime<Utc>) -> Self {
        Self {
            gt: Some(date),
            ..Self::default()
        }
    }

    /// Matches between `start` and `end`, both exclusive.
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            gt: Some(start),
            lt: Some(end),
            eq: None,
        }
    }
}

/// Filter for `GET /matches`.
///
/// Each list field matches any of its values; predicates in `date` are ORed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchQuery {
    /// Ordering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<MatchOrder>,
    /// Date predicates.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub date: Vec<DatePredicate>,
    /// Team IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub team: Vec<String>,
    /// Competition IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub competition: Vec<String>,
    /// Season IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub season: Vec<String>,
    /// Match group IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group: Vec<String>,
    /// Court IDs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub court: Vec<String>,
    /// Statuses.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<MatchStatus>,
    /// Paging and text filter.
    #[serde(flatten)]
    pub base: BaseListQuery,
}
