//! Error types for API operations.
//!
//! Every failure the client can produce, from a missing base URL to a 500
//! from the server, is a [`RequestError`]. Callers branch on one shape: the
//! HTTP `status` (0 when no response was received), a human-readable
//! `message`, and the raw server payload in `data` when there was one.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Message used when neither the body nor the transport error says anything.
pub const GENERIC_FAILURE_MESSAGE: &str = "Request failed";

/// Message used for transport failures with no usable description.
pub const GENERIC_NETWORK_MESSAGE: &str = "Network error. Please check your connection.";

/// Where a request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Client misconfiguration; no request was attempted.
    Configuration,
    /// A required field was missing; no request was attempted.
    Validation,
    /// No response was received (connect, DNS, TLS, timeout, cancellation).
    Transport,
    /// The server answered with a non-2xx status.
    Application,
    /// The server answered 2xx but the body did not have the expected shape.
    Decode,
    /// The credential storage backend failed.
    Storage,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Configuration => "configuration",
            Self::Validation => "validation",
            Self::Transport => "transport",
            Self::Application => "application",
            Self::Decode => "decode",
            Self::Storage => "storage",
        })
    }
}

/// Normalized request failure.
///
/// Serializes as `{"error": true, "status", "message", "data"}`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} error ({status}): {message}")]
pub struct RequestError {
    kind: ErrorKind,
    /// HTTP status, or 0 when no response was received.
    pub status: u16,
    /// Human-readable description.
    pub message: String,
    /// Raw server payload, if a response body was read.
    pub data: Option<Value>,
}

impl RequestError {
    /// Creates an error from its parts.
    pub fn new(kind: ErrorKind, status: u16, message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            kind,
            status,
            message: message.into(),
            data,
        }
    }

    /// Client misconfiguration.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, 0, message, None)
    }

    /// Local validation failure, reported as a 400.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, 400, message, None)
    }

    /// Transport failure. An empty message is replaced by a generic one.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            GENERIC_NETWORK_MESSAGE.to_string()
        } else {
            message
        };
        Self::new(ErrorKind::Transport, 0, message, None)
    }

    /// The request was cancelled before a response arrived.
    #[must_use]
    pub fn cancelled() -> Self {
        Self::new(ErrorKind::Transport, 0, "Request cancelled", None)
    }

    /// Non-2xx response. The message is taken from the body when possible.
    #[must_use]
    pub fn from_response(status: u16, data: Value) -> Self {
        let message = extract_message(&data).unwrap_or(GENERIC_FAILURE_MESSAGE).to_string();
        Self::new(ErrorKind::Application, status, message, Some(data))
    }

    /// A 2xx body that could not be narrowed into the expected model.
    pub fn decode(status: u16, reason: impl fmt::Display, data: Value) -> Self {
        Self::new(
            ErrorKind::Decode,
            status,
            format!("Unexpected response format: {reason}"),
            Some(data),
        )
    }

    /// Where the request failed.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Always true; mirrors the `error` flag of the serialized shape.
    #[must_use]
    pub fn is_error(&self) -> bool {
        true
    }

    /// 401 from the server.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// 404 from the server.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// 5xx from the server.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }

    /// No response was received.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        self.kind == ErrorKind::Transport
    }

    /// Message suitable for showing to an end user, chosen by status.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self.status {
            401 => "Invalid credentials. Please check your email and password.".to_string(),
            404 => "The requested endpoint was not found. Check the configured API URL.".to_string(),
            500..=599 => format!(
                "Server error: {}. Please try again in a few minutes.",
                self.message
            ),
            _ => self.message.clone(),
        }
    }
}

impl Serialize for RequestError {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RequestError", 4)?;
        state.serialize_field("error", &true)?;
        state.serialize_field("status", &self.status)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("data", &self.data)?;
        state.end()
    }
}

/// First non-empty string of `message`, then `error.message`.
fn extract_message(data: &Value) -> Option<&str> {
    fn non_empty(value: Option<&Value>) -> Option<&str> {
        value.and_then(Value::as_str).filter(|s| !s.is_empty())
    }

    non_empty(data.get("message"))
        .or_else(|| non_empty(data.get("error").and_then(|error| error.get("message"))))
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, RequestError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_from_top_level_field() {
        let err = RequestError::from_response(500, json!({"message": "Internal server error"}));
        assert_eq!(err.message, "Internal server error");
        assert_eq!(err.kind(), ErrorKind::Application);
        assert_eq!(err.data, Some(json!({"message": "Internal server error"})));
    }

    #[test]
    fn test_message_from_nested_error() {
        let err = RequestError::from_response(422, json!({"error": {"message": "Email taken"}}));
        assert_eq!(err.message, "Email taken");
    }

    #[test]
    fn test_message_skips_empty_and_non_string_values() {
        let err = RequestError::from_response(
            400,
            json!({"message": "", "error": {"message": "Bad input"}}),
        );
        assert_eq!(err.message, "Bad input");

        let err = RequestError::from_response(400, json!({"message": 12}));
        assert_eq!(err.message, GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_message_fallback() {
        let err = RequestError::from_response(418, json!([1, 2]));
        assert_eq!(err.message, "Request failed");
        assert_eq!(err.status, 418);
    }

    #[test]
    fn test_transport_error_never_has_empty_message() {
        let err = RequestError::transport("");
        assert_eq!(err.status, 0);
        assert_eq!(err.message, GENERIC_NETWORK_MESSAGE);
        assert!(err.data.is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let err = RequestError::transport("connection refused");
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({"error": true, "status": 0, "message": "connection refused", "data": null})
        );
    }

    #[test]
    fn test_user_message_by_status() {
        let unauthorized = RequestError::from_response(401, json!({"message": "bad"}));
        assert!(unauthorized.is_unauthorized());
        assert!(unauthorized.user_message().contains("Invalid credentials"));

        let server = RequestError::from_response(503, json!({"message": "db down"}));
        assert!(server.is_server_error());
        assert!(server.user_message().contains("db down"));

        let other = RequestError::validation("Missing required fields: email");
        assert_eq!(other.user_message(), "Missing required fields: email");
    }
}
