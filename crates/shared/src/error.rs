//! Response envelope and client-side error types.
//!
//! Every REST endpoint wraps its payload in `{ success, data, message? }`.
//! The envelope is validated once at the HTTP boundary so stores never poke
//! at loosely-typed JSON.

use serde::{Deserialize, Serialize};

/// Standard response envelope used by all `/api/*` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload of a successful response.
    pub fn into_data(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Server(
                self.message
                    .unwrap_or_else(|| "request failed".to_string()),
            ));
        }
        self.data
            .ok_or_else(|| ApiError::Deserialize("missing data in response envelope".to_string()))
    }

    /// Check a response that carries no payload the client cares about.
    pub fn into_ack(self) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Server(
                self.message
                    .unwrap_or_else(|| "request failed".to_string()),
            ))
        }
    }
}

/// Attempt to pull a server-provided `message` out of an error body.
pub fn try_server_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body).ok()?;
    let message = parsed.message?;
    if message.trim().is_empty() {
        None
    } else {
        Some(message)
    }
}

/// Error taxonomy for client-side API calls.
///
/// `Network` means no usable response arrived; `Http` is a non-2xx status
/// whose body carried no structured message; `Server` carries the backend's
/// own human-readable message; `Deserialize` means the body did not match
/// the expected envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Network(String),
    Http { status: u16, body: String },
    Server(String),
    Deserialize(String),
}

impl ApiError {
    /// Message suitable for a store's `error` field: the server's message
    /// when one exists, else the caller's per-operation fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server(message) => message.clone(),
            ApiError::Http { body, .. } => {
                try_server_message(body).unwrap_or_else(|| fallback.to_string())
            }
            _ => fallback.to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Http { status, body } => write!(f, "HTTP {}: {}", status, body),
            ApiError::Server(msg) => write!(f, "Server error: {}", msg),
            ApiError::Deserialize(msg) => write!(f, "Deserialization error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_envelope_yields_data() {
        let env: ApiEnvelope<u32> =
            serde_json::from_str(r#"{"success":true,"data":7}"#).unwrap();
        assert_eq!(env.into_data().unwrap(), 7);
    }

    #[test]
    fn failed_envelope_yields_server_message() {
        let env: ApiEnvelope<u32> =
            serde_json::from_str(r#"{"success":false,"message":"Gig not found"}"#).unwrap();
        assert_eq!(
            env.into_data(),
            Err(ApiError::Server("Gig not found".to_string()))
        );
    }

    #[test]
    fn successful_envelope_without_data_is_a_valid_ack() {
        let env: ApiEnvelope<serde_json::Value> =
            serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(env.into_ack().is_ok());
    }

    #[test]
    fn server_message_extraction_skips_unstructured_bodies() {
        assert_eq!(
            try_server_message(r#"{"success":false,"message":"Not authorized"}"#),
            Some("Not authorized".to_string())
        );
        assert_eq!(try_server_message("<html>502 Bad Gateway</html>"), None);
        assert_eq!(try_server_message(r#"{"success":false,"message":"  "}"#), None);
    }

    #[test]
    fn user_message_prefers_server_text_over_fallback() {
        let err = ApiError::Server("Bid already hired".to_string());
        assert_eq!(err.user_message("Failed to hire freelancer"), "Bid already hired");

        let err = ApiError::Http {
            status: 400,
            body: r#"{"success":false,"message":"Budget must be positive"}"#.to_string(),
        };
        assert_eq!(err.user_message("Failed to create gig"), "Budget must be positive");

        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.user_message("Failed to fetch gigs"), "Failed to fetch gigs");
    }
}
