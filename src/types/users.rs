//! Authenticated user types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::persons::PersonPartial;

/// The user behind an OAuth access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User ID.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Email address. Present with the `email` scope.
    #[serde(default)]
    pub email: Option<String>,
    /// Avatar URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Account creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Whether the account is banned.
    #[serde(default)]
    pub banned: bool,
    /// Account role.
    #[serde(default)]
    pub role: Option<String>,
    /// Permission flags.
    #[serde(default)]
    pub permissions: BTreeMap<String, bool>,
    /// Linked people. Present with the `player` or `staff` scope.
    #[serde(default)]
    pub persons: Vec<PersonPartial>,
}

impl User {
    /// True when `permission` is granted.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.get(permission).copied().unwrap_or(false)
    }
}
