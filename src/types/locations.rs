//! Venue types.

use serde::{Deserialize, Serialize};

/// Postal address of a venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// First address line.
    pub address_first_line: String,
    /// Second address line.
    #[serde(default)]
    pub address_second_line: Option<String>,
    /// Postcode.
    pub postcode: String,
    /// County.
    pub county: String,
    /// Country.
    pub country: String,
}

/// A playing surface at a venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Court {
    /// Court ID.
    pub id: String,
    /// Court name.
    pub name: String,
    /// Address of the venue the court belongs to.
    #[serde(default)]
    pub location: Option<Location>,
}

/// Court as listed under its venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourtPartial {
    /// Court ID.
    pub id: String,
    /// Court name.
    pub name: String,
}

/// A venue together with its courts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationWithCourts {
    /// Venue ID.
    pub id: String,
    /// Venue name.
    #[serde(default)]
    pub name: Option<String>,
    /// Venue address.
    #[serde(flatten)]
    pub address: Option<Location>,
    /// Courts at this venue.
    #[serde(default)]
    pub courts: Vec<CourtPartial>,
}
