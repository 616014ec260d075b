//! Search result types.

use serde::{Deserialize, Serialize};

use super::common::BaseListQuery;

/// Kind of entity a search hit refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchItemType {
    /// A team.
    Team,
    /// A person.
    Person,
    /// A competition.
    Competition,
    /// A match.
    Match,
    /// An entity kind this client does not know about.
    #[serde(other)]
    Unknown,
}

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchItem {
    /// Entity kind.
    #[serde(rename = "type")]
    pub item_type: SearchItemType,
    /// Entity ID.
    pub id: String,
    /// Primary label.
    pub label: String,
    /// Secondary text.
    #[serde(default)]
    pub description: Option<String>,
    /// Image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Relevance rank as reported by the server.
    #[serde(default)]
    pub rank: Option<String>,
}

/// Search query. `query` carries the search text.
pub type SearchQuery = BaseListQuery;
