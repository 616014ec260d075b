//! Error types for the MatchDay client.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

mod mapping;

pub use mapping::{map_error, PARSE_FAILURE_MESSAGE, UNKNOWN_ERROR_MESSAGE};

/// Result type alias for MatchDay operations.
pub type MatchDayResult<T> = Result<T, MatchDayError>;

/// Error kinds for categorizing MatchDay errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchDayErrorKind {
    /// Caller misuse: no credentials, missing client id, bad base URL.
    Configuration,
    /// Bad request (400), may carry validation issues.
    BadRequest,
    /// Unauthorized (401).
    Unauthorized,
    /// Forbidden (403).
    Forbidden,
    /// Not found (404).
    NotFound,
    /// Rate limit exceeded (429).
    RateLimitExceeded,
    /// Any other failure: unknown status, unparseable body, transport
    /// failure or an OAuth payload that broke its contract.
    Api,
}

impl MatchDayErrorKind {
    /// Message used when the server did not supply one.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::Configuration => "Invalid configuration",
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::RateLimitExceeded => "You have exceeded the API rate limit",
            Self::Api => "API Error",
        }
    }

    /// Status code attached to errors of this kind.
    pub fn default_status(&self) -> Option<u16> {
        match self {
            Self::Configuration => None,
            Self::BadRequest => Some(400),
            Self::Unauthorized => Some(401),
            Self::Forbidden => Some(403),
            Self::NotFound => Some(404),
            Self::RateLimitExceeded => Some(429),
            Self::Api => Some(500),
        }
    }
}

impl fmt::Display for MatchDayErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "configuration"),
            Self::BadRequest => write!(f, "bad_request"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::NotFound => write!(f, "not_found"),
            Self::RateLimitExceeded => write!(f, "rate_limit_exceeded"),
            Self::Api => write!(f, "api_error"),
        }
    }
}

/// A single field-level problem reported with a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Path of the offending field.
    #[serde(default)]
    pub path: String,
    /// Human readable description.
    #[serde(default)]
    pub message: String,
    /// Machine readable code.
    #[serde(default)]
    pub code: String,
}

/// MatchDay API error.
#[derive(Error, Debug)]
pub struct MatchDayError {
    kind: MatchDayErrorKind,
    message: String,
    status_code: Option<u16>,
    validation_issues: Option<Vec<ValidationIssue>>,
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for MatchDayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(code) = self.status_code {
            write!(f, " (HTTP {})", code)?;
        }
        Ok(())
    }
}

impl MatchDayError {
    /// Creates an error of the given kind with that kind's default status.
    pub fn new(kind: MatchDayErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code: kind.default_status(),
            validation_issues: None,
            cause: None,
        }
    }

    /// Creates an error of the given kind with its default message.
    pub fn from_kind(kind: MatchDayErrorKind) -> Self {
        Self::new(kind, kind.default_message())
    }

    /// Overrides the HTTP status code.
    pub fn with_status(mut self, code: u16) -> Self {
        self.status_code = Some(code);
        self
    }

    /// Attaches validation issues.
    pub fn with_validation_issues(mut self, issues: Vec<ValidationIssue>) -> Self {
        self.validation_issues = Some(issues);
        self
    }

    /// Sets the underlying cause.
    pub fn with_cause(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Gets the error kind.
    pub fn kind(&self) -> MatchDayErrorKind {
        self.kind
    }

    /// Gets the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Gets the HTTP status code.
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Gets the validation issues of a bad request, if the server sent any.
    pub fn validation_issues(&self) -> Option<&[ValidationIssue]> {
        self.validation_issues.as_deref()
    }

    /// Returns true for a 404.
    pub fn is_not_found(&self) -> bool {
        self.kind == MatchDayErrorKind::NotFound
    }

    /// Returns true for a 429; callers should back off before retrying.
    pub fn is_rate_limited(&self) -> bool {
        self.kind == MatchDayErrorKind::RateLimitExceeded
    }

    /// Returns true when the error was caused by the request itself.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.kind,
            MatchDayErrorKind::Configuration
                | MatchDayErrorKind::BadRequest
                | MatchDayErrorKind::Unauthorized
                | MatchDayErrorKind::Forbidden
                | MatchDayErrorKind::NotFound
        )
    }

    /// Status and body as the server would have rendered them.
    pub fn debug_body(&self) -> serde_json::Value {
        let mut body = serde_json::json!({ "message": self.message });
        if let Some(issues) = &self.validation_issues {
            body["errors"] = serde_json::to_value(issues).unwrap_or_default();
        }
        serde_json::json!({ "status": self.status_code, "body": body })
    }

    // Convenience constructors

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(MatchDayErrorKind::Configuration, message)
    }

    /// Creates a generic API error.
    pub fn api(message: impl Into<String>) -> Self {
        Self::new(MatchDayErrorKind::Api, message)
    }

    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(MatchDayErrorKind::BadRequest, message)
    }

    /// Creates an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(MatchDayErrorKind::Unauthorized, message)
    }

    /// Creates a forbidden error.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(MatchDayErrorKind::Forbidden, message)
    }

    /// Creates a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(MatchDayErrorKind::NotFound, message)
    }

    /// Creates a rate limit error.
    pub fn rate_limit_exceeded(message: impl Into<String>) -> Self {
        Self::new(MatchDayErrorKind::RateLimitExceeded, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = MatchDayError::not_found("Match not found");

        let display = format!("{}", error);
        assert!(display.contains("not_found"));
        assert!(display.contains("Match not found"));
        assert!(display.contains("404"));
    }

    #[test]
    fn test_configuration_error_has_no_status() {
        let error = MatchDayError::configuration("No authentication method set");
        assert_eq!(error.status_code(), None);
        assert_eq!(format!("{}", error), "[configuration] No authentication method set");
    }

    #[test]
    fn test_default_status_per_kind() {
        assert_eq!(MatchDayError::from_kind(MatchDayErrorKind::BadRequest).status_code(), Some(400));
        assert_eq!(MatchDayError::from_kind(MatchDayErrorKind::Forbidden).status_code(), Some(403));
        assert_eq!(
            MatchDayError::from_kind(MatchDayErrorKind::RateLimitExceeded).status_code(),
            Some(429)
        );
        assert_eq!(MatchDayError::api("boom").status_code(), Some(500));
    }

    #[test]
    fn test_from_kind_uses_default_message() {
        let error = MatchDayError::from_kind(MatchDayErrorKind::RateLimitExceeded);
        assert_eq!(error.message(), "You have exceeded the API rate limit");
        assert!(error.is_rate_limited());
    }

    #[test]
    fn test_debug_body_includes_validation_issues() {
        let error = MatchDayError::bad_request("Invalid input").with_validation_issues(vec![
            ValidationIssue {
                path: "email".to_string(),
                message: "Invalid email format".to_string(),
                code: "invalid_format".to_string(),
            },
        ]);

        let body = error.debug_body();
        assert_eq!(body["status"], 400);
        assert_eq!(body["body"]["message"], "Invalid input");
        assert_eq!(body["body"]["errors"][0]["path"], "email");
    }

    #[test]
    fn test_is_client_error() {
        assert!(MatchDayError::not_found("x").is_client_error());
        assert!(!MatchDayError::api("x").is_client_error());
        assert!(!MatchDayError::rate_limit_exceeded("x").is_client_error());
    }
}
