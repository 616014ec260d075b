//! Maps non-success HTTP responses onto [`MatchDayError`].

use serde::Deserialize;
use tracing::warn;

use super::{MatchDayError, MatchDayErrorKind, ValidationIssue};
use crate::transport::HttpResponse;

/// Message for statuses without a dedicated kind.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Message used when an error body is not valid JSON.
pub const PARSE_FAILURE_MESSAGE: &str = "Failed to parse error";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<serde_json::Value>,
    #[serde(default)]
    errors: Option<serde_json::Value>,
}

/// Returns the error described by `response`, or `None` for a 2xx.
///
/// The body is only read for 400/401/403/404/429. Other failures get a fixed
/// message regardless of what the server sent. A body that fails to parse
/// yields a generic error with [`PARSE_FAILURE_MESSAGE`] whatever the status.
pub fn map_error(response: &HttpResponse) -> Option<MatchDayError> {
    if response.is_success() {
        return None;
    }

    let kind = match response.status {
        400 => MatchDayErrorKind::BadRequest,
        401 => MatchDayErrorKind::Unauthorized,
        403 => MatchDayErrorKind::Forbidden,
        404 => MatchDayErrorKind::NotFound,
        429 => MatchDayErrorKind::RateLimitExceeded,
        status => {
            warn!(status, "Request failed with unmapped status");
            return Some(MatchDayError::api(UNKNOWN_ERROR_MESSAGE));
        }
    };

    let body = match parse_body(&response.body) {
        Ok(body) => body,
        Err(e) => {
            warn!(status = response.status, error = %e, "Error body is not valid JSON");
            return Some(MatchDayError::api(PARSE_FAILURE_MESSAGE).with_cause(e));
        }
    };

    let message = body
        .message
        .as_ref()
        .and_then(message_text)
        .unwrap_or_else(|| kind.default_message().to_string());

    warn!(status = response.status, kind = %kind, message = %message, "Request failed");

    let mut error = MatchDayError::new(kind, message);

    if kind == MatchDayErrorKind::BadRequest {
        if let Some(issues) = body.errors.and_then(validation_issues) {
            error = error.with_validation_issues(issues);
        }
    }

    Some(error)
}

fn parse_body(body: &str) -> Result<ErrorBody, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    // A JSON body that is not an object carries no message.
    Ok(serde_json::from_value(value).unwrap_or(ErrorBody {
        message: None,
        errors: None,
    }))
}

fn message_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn validation_issues(value: serde_json::Value) -> Option<Vec<ValidationIssue>> {
    match value {
        serde_json::Value::Null => None,
        other => serde_json::from_value(other).ok(),
    }
}
