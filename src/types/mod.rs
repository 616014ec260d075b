//! Data types for the MatchDay API.
//!
//! Field names follow the API's camelCase on the wire. Timestamps are
//! `DateTime<Utc>`; responses pass through the date reviver before decoding.

mod common;
mod competitions;
mod locations;
mod matches;
mod persons;
mod search;
mod teams;
mod users;

pub use common::*;
pub use competitions::*;
pub use locations::*;
pub use matches::*;
pub use persons::*;
pub use search::*;
pub use teams::*;
pub use users::*;
