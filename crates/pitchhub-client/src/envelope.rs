//! Successful response wrapper.

use serde::de::DeserializeOwned;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::{RequestError, Result};

/// A 2xx response and its body.
///
/// Serializes as `{"error": false, "status", "data"}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope<T = Value> {
    /// HTTP status (always in the 2xx range).
    pub status: u16,
    /// Response body.
    pub data: T,
}

impl<T> ResponseEnvelope<T> {
    /// Wraps a body.
    pub fn new(status: u16, data: T) -> Self {
        Self { status, data }
    }

    /// Always false; mirrors the `error` flag of the serialized shape.
    #[must_use]
    pub fn is_error(&self) -> bool {
        false
    }

    /// Consumes the envelope, returning the body.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Transforms the body, keeping the status.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ResponseEnvelope<U> {
        ResponseEnvelope {
            status: self.status,
            data: f(self.data),
        }
    }
}

impl ResponseEnvelope<Value> {
    /// Narrows the raw JSON body into a typed model.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] of kind `Decode`, carrying the raw body,
    /// if the body does not match `U`.
    pub fn decode<U: DeserializeOwned>(self) -> Result<ResponseEnvelope<U>> {
        match serde_json::from_value::<U>(self.data.clone()) {
            Ok(data) => Ok(ResponseEnvelope {
                status: self.status,
                data,
            }),
            Err(e) => {
                tracing::warn!(status = self.status, error = %e, "Response body did not match expected shape");
                Err(RequestError::decode(self.status, e, self.data))
            }
        }
    }
}

impl<T: Serialize> Serialize for ResponseEnvelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ResponseEnvelope", 3)?;
        state.serialize_field("error", &false)?;
        state.serialize_field("status", &self.status)?;
        state.serialize_field("data", &self.data)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pitchhub_types::AuthResponse;
    use serde_json::json;

    #[test]
    fn test_serialized_shape() {
        let envelope = ResponseEnvelope::new(200, json!({"token": "T1"}));
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"error": false, "status": 200, "data": {"token": "T1"}})
        );
    }

    #[test]
    fn test_decode_success() {
        let envelope = ResponseEnvelope::new(201, json!({"token": "T1", "user": {"role": "viewer"}}));
        let typed: ResponseEnvelope<AuthResponse> = envelope.decode().unwrap();

        assert_eq!(typed.status, 201);
        assert_eq!(typed.data.token.as_deref(), Some("T1"));
    }

    #[test]
    fn test_decode_failure_keeps_raw_body() {
        let envelope = ResponseEnvelope::new(200, json!({"message": "<html>oops</html>"}));
        let err = envelope.decode::<Vec<u32>>().unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.status, 200);
        assert_eq!(err.data, Some(json!({"message": "<html>oops</html>"})));
    }

    #[test]
    fn test_map_keeps_status() {
        let envelope = ResponseEnvelope::new(202, 2u32).map(|n| n * 10);
        assert_eq!(envelope.status, 202);
        assert_eq!(envelope.into_data(), 20);
    }
}
