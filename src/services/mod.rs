//! MatchDay API resource services.
//!
//! Each service builds a path (plus query string for list endpoints) and
//! hands it to the client's request pipeline.

mod clubs;
mod competitions;
mod locations;
mod matches;
mod persons;
mod search;
mod seasons;
mod teams;
mod users;

pub use clubs::*;
pub use competitions::*;
pub use locations::*;
pub use matches::*;
pub use persons::*;
pub use search::*;
pub use seasons::*;
pub use teams::*;
pub use users::*;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a single path segment.
const SEGMENT_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Builds `base/id[/suffix]`, escaping `id` so it stays one segment.
pub(crate) fn resource_path(base: &str, id: &str, suffix: &str) -> String {
    format!("{}/{}{}", base, utf8_percent_encode(id, SEGMENT_SET), suffix)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::client::MatchDayClient;
    use crate::config::ClientConfig;
    use crate::transport::MockHttpTransport;
    use std::sync::Arc;

    pub(crate) fn mock_client() -> (MatchDayClient, Arc<MockHttpTransport>) {
        let transport = Arc::new(MockHttpTransport::new());
        let config = ClientConfig::builder()
            .base_url("https://api.example.com")
            .api_key("test-key")
            .build()
            .unwrap();
        let client = MatchDayClient::with_transport(config, transport.clone()).unwrap();
        (client, transport)
    }

    pub(crate) fn last_path(transport: &MockHttpTransport) -> String {
        let url = transport.last_request().unwrap().url;
        url.trim_start_matches("https://api.example.com/v1").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_path_escapes_id() {
        assert_eq!(resource_path("/teams", "team-1", ""), "/teams/team-1");
        assert_eq!(
            resource_path("/teams", "a/b c", "/staff?"),
            "/teams/a%2Fb%20c/staff?"
        );
    }
}
