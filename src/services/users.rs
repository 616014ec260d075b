//! User operations.

use crate::client::MatchDayClient;
use crate::errors::MatchDayResult;
use crate::types::User;

/// Service for user operations.
pub struct UsersService<'a> {
    client: &'a MatchDayClient,
}

impl<'a> UsersService<'a> {
    /// Creates a new users service.
    pub fn new(client: &'a MatchDayClient) -> Self {
        Self { client }
    }

    /// Gets the user the access token was issued to.
    ///
    /// The server only accepts bearer tokens here; API keys are rejected.
    pub async fn me(&self) -> MatchDayResult<User> {
        self.client.get("/users/@me").await
    }
}
