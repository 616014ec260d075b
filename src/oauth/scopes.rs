//! OAuth2 scopes offered by the MatchDay authorization server.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::MatchDayError;

/// A grantable scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuth2Scope {
    /// Name, email and profile picture.
    Email,
    /// Teams the user plays or played for.
    Player,
    /// Teams the user coaches, manages or assists.
    Staff,
}

impl OAuth2Scope {
    /// Every scope, in display order.
    pub fn all() -> &'static [OAuth2Scope] {
        &[Self::Email, Self::Player, Self::Staff]
    }

    /// Scope identifier sent in `scope`.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Player => "player",
            Self::Staff => "staff",
        }
    }

    /// Short consent-screen title.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Email => "Read your name and email",
            Self::Player => "Read your player associations",
            Self::Staff => "Read your team staff associations",
        }
    }

    /// Consent-screen description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Email => "Access to your name, email, and profile picture",
            Self::Player => "Access to who you play for and your previous teams",
            Self::Staff => "Access to who you coach, manage or assist and any previous teams",
        }
    }
}

impl fmt::Display for OAuth2Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for OAuth2Scope {
    type Err = MatchDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|scope| scope.id() == s)
            .ok_or_else(|| MatchDayError::configuration(format!("Unknown OAuth2 scope '{}'", s)))
    }
}

/// Joins scopes with spaces, keeping the caller's order.
pub(crate) fn join_scopes(scopes: &[OAuth2Scope]) -> String {
    scopes.iter().map(|s| s.id()).collect::<Vec<_>>().join(" ")
}
