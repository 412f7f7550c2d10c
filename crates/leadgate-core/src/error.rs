//! Error taxonomy for submission failures
//!
//! Every transport or HTTP failure is normalized into one of a closed set of
//! kinds, each with a fixed user-facing message. The classification exists to
//! produce a stable, testable string; it performs no recovery — retry is
//! always an explicit user action.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed classification of submission failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// No response at all: offline, DNS failure, timeout.
    Network,
    /// HTTP 400 — the server rejected the payload.
    Validation,
    /// HTTP 401.
    Authentication,
    /// HTTP 403.
    Authorization,
    /// HTTP 404.
    NotFound,
    /// HTTP 500.
    ServerError,
    /// Anything else, including malformed response bodies.
    Unknown,
}

/// A normalized submission failure: a kind, a user-facing message, and the
/// HTTP status when one was received.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ApiError {
    /// Taxonomy bucket.
    pub kind: ErrorKind,
    /// User-facing message, either the fixed template or a server-provided
    /// message where the taxonomy allows one.
    pub message: String,
    /// HTTP status code, absent for network-level failures.
    pub status: Option<u16>,
}

impl ApiError {
    /// A failure where no HTTP response was received.
    pub fn network() -> Self {
        Self {
            kind: ErrorKind::Network,
            message: "Network error. Please check your internet connection.".to_string(),
            status: None,
        }
    }

    /// Classify an HTTP response status. `server_message` is the error string
    /// extracted from the response body, when the body yielded one; only the
    /// 400 and catch-all buckets surface it.
    pub fn from_status(status: u16, server_message: Option<String>) -> Self {
        let (kind, message) = match status {
            400 => (
                ErrorKind::Validation,
                server_message
                    .unwrap_or_else(|| "Invalid request. Please check your input.".to_string()),
            ),
            401 => (
                ErrorKind::Authentication,
                "Authentication required. Please log in.".to_string(),
            ),
            403 => (
                ErrorKind::Authorization,
                "Access denied. You don't have permission for this action.".to_string(),
            ),
            404 => (ErrorKind::NotFound, "Resource not found.".to_string()),
            500 => (
                ErrorKind::ServerError,
                "Server error. Please try again later.".to_string(),
            ),
            _ => (
                ErrorKind::Unknown,
                server_message.unwrap_or_else(|| "An unexpected error occurred.".to_string()),
            ),
        };
        Self {
            kind,
            message,
            status: Some(status),
        }
    }

    /// A failure that received a response the client could not make sense of
    /// (malformed JSON, missing fields). Fails closed instead of propagating
    /// undefined data.
    pub fn malformed_response() -> Self {
        Self {
            kind: ErrorKind::Unknown,
            message: "An unexpected error occurred.".to_string(),
            status: None,
        }
    }

    /// An application-level rejection carried in a 2xx body
    /// (`{"success": false, "error": ...}`).
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Unknown,
            message: message.into(),
            status: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_table() {
        let cases = [
            (401, ErrorKind::Authentication, "Authentication required. Please log in."),
            (
                403,
                ErrorKind::Authorization,
                "Access denied. You don't have permission for this action.",
            ),
            (404, ErrorKind::NotFound, "Resource not found."),
            (500, ErrorKind::ServerError, "Server error. Please try again later."),
        ];
        for (status, kind, message) in cases {
            let err = ApiError::from_status(status, None);
            assert_eq!(err.kind, kind);
            assert_eq!(err.message, message);
            assert_eq!(err.status, Some(status));
        }
    }

    #[test]
    fn test_validation_prefers_server_message() {
        let err = ApiError::from_status(400, Some("email already registered".to_string()));
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "email already registered");

        let err = ApiError::from_status(400, None);
        assert_eq!(err.message, "Invalid request. Please check your input.");
    }

    #[test]
    fn test_unmatched_status_is_unknown() {
        let err = ApiError::from_status(503, None);
        assert_eq!(err.kind, ErrorKind::Unknown);
        assert_eq!(err.message, "An unexpected error occurred.");

        let err = ApiError::from_status(418, Some("teapot".to_string()));
        assert_eq!(err.message, "teapot");
    }

    #[test]
    fn test_network_has_no_status() {
        let err = ApiError::network();
        assert_eq!(err.kind, ErrorKind::Network);
        assert_eq!(err.status, None);
        assert_eq!(
            err.message,
            "Network error. Please check your internet connection."
        );
    }
}
