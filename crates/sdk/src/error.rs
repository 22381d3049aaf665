//! SDK error types
//!
//! This module defines the error taxonomy used throughout the SDK. Local
//! decoding failures are split into three kinds mirroring what went wrong
//! with the payload (a missing required key, a type mismatch, a value outside
//! its declared domain); every remote failure carries the exact HTTP status
//! code and response body.

use thiserror::Error;

/// Result type alias for SDK operations
pub type SdkResult<T> = Result<T, SdkError>;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// A required field was absent while decoding a response
    #[error("Missing required field `{field}` in response")]
    MissingField {
        /// Name of the absent field
        field: String,
    },

    /// A response value did not match its declared type
    #[error("Unexpected type in response: {message}")]
    UnexpectedType {
        /// Decoder message naming the offending value and position
        message: String,
    },

    /// A response value was outside its declared domain (e.g. unknown enum variant)
    #[error("Invalid value in response: {message}")]
    InvalidValue {
        /// Decoder message naming the offending value
        message: String,
    },

    /// Request body could not be encoded, or a response failed to decode in a
    /// way that fits none of the classified kinds (e.g. malformed JSON)
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message
        message: String,
        /// Underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The server answered with a non-success status
    #[error("API error ({status_code} {reason}): {body}")]
    Api {
        /// Exact HTTP status code
        status_code: u16,
        /// Canonical reason phrase
        reason: String,
        /// Response headers
        headers: Vec<(String, String)>,
        /// Response body
        body: String,
    },

    /// The request failed before any response was received
    #[error("Network error: {message}")]
    Network {
        /// Error message
        message: String,
        /// Underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The configured transport timeout elapsed
    #[error("Request timed out: {message}")]
    Timeout {
        /// Error message
        message: String,
    },
}

impl SdkError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        SdkError::Config { message: message.into() }
    }

    /// Check if the error is retryable
    ///
    /// Retryable errors are transient: connection failures, timeouts, rate
    /// limiting, and server-side 5xx responses.
    pub fn is_retryable(&self) -> bool {
        match self {
            SdkError::Network { .. } => true,
            SdkError::Timeout { .. } => true,
            SdkError::Api { status_code, .. } => *status_code == 429 || *status_code >= 500,
            _ => false,
        }
    }

    /// Get the HTTP status code if the server produced one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SdkError::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Get a response header from an API error, if present
    pub fn header(&self, name: &str) -> Option<&str> {
        match self {
            SdkError::Api { headers, .. } => headers
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    /// Classify a response decoding failure
    ///
    /// serde_json data errors use a stable message grammar; the prefix tells
    /// apart a missing key, a type mismatch, and an out-of-domain value.
    pub(crate) fn classify_decode(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        if err.classify() != Category::Data {
            return SdkError::Serialization {
                message: format!("response body is not valid JSON: {err}"),
                source: Some(Box::new(err)),
            };
        }

        let message = err.to_string();
        if let Some(field) = message
            .strip_prefix("missing field `")
            .and_then(|rest| rest.split('`').next())
        {
            return SdkError::MissingField { field: field.to_string() };
        }
        if message.starts_with("invalid type") {
            return SdkError::UnexpectedType { message };
        }
        if message.starts_with("unknown variant")
            || message.starts_with("invalid value")
            || message.starts_with("invalid length")
        {
            return SdkError::InvalidValue { message };
        }

        SdkError::Serialization { message, source: Some(Box::new(err)) }
    }
}

/// Convert from reqwest errors
impl From<reqwest::Error> for SdkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SdkError::Timeout { message: err.to_string() }
        } else if err.is_connect() {
            SdkError::Network {
                message: format!("connection failed: {err}"),
                source: Some(Box::new(err)),
            }
        } else {
            SdkError::Network {
                message: err.to_string(),
                source: Some(Box::new(err)),
            }
        }
    }
}

/// Convert from JSON errors raised while encoding request bodies
impl From<serde_json::Error> for SdkError {
    fn from(err: serde_json::Error) -> Self {
        SdkError::Serialization {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Probe {
        name: String,
        replicas: i32,
    }

    fn decode_err(json: &str) -> SdkError {
        let err = serde_json::from_str::<Probe>(json).unwrap_err();
        SdkError::classify_decode(err)
    }

    #[test]
    fn test_missing_field_classification() {
        match decode_err(r#"{"name": "a"}"#) {
            SdkError::MissingField { field } => assert_eq!(field, "replicas"),
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn test_unexpected_type_classification() {
        match decode_err(r#"{"name": "a", "replicas": "two"}"#) {
            SdkError::UnexpectedType { message } => {
                assert!(message.contains("invalid type"));
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_variant_classification() {
        #[derive(Debug, Deserialize)]
        #[serde(rename_all = "lowercase")]
        #[allow(dead_code)]
        enum Kind {
            Json,
            Csv,
        }

        let err = serde_json::from_str::<Kind>("\"xml\"").unwrap_err();
        match SdkError::classify_decode(err) {
            SdkError::InvalidValue { message } => {
                assert!(message.contains("unknown variant"));
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn test_syntax_error_is_serialization() {
        let err = serde_json::from_str::<Probe>("{not json").unwrap_err();
        assert!(matches!(
            SdkError::classify_decode(err),
            SdkError::Serialization { .. }
        ));
    }

    #[test]
    fn test_error_is_retryable() {
        assert!(SdkError::Timeout { message: "deadline elapsed".into() }.is_retryable());
        assert!(SdkError::Network { message: "refused".into(), source: None }.is_retryable());
        assert!(SdkError::Api {
            status_code: 503,
            reason: "Service Unavailable".into(),
            headers: vec![],
            body: String::new(),
        }
        .is_retryable());
        assert!(SdkError::Api {
            status_code: 429,
            reason: "Too Many Requests".into(),
            headers: vec![],
            body: String::new(),
        }
        .is_retryable());

        assert!(!SdkError::Api {
            status_code: 404,
            reason: "Not Found".into(),
            headers: vec![],
            body: String::new(),
        }
        .is_retryable());
        assert!(!SdkError::MissingField { field: "id".into() }.is_retryable());
    }

    #[test]
    fn test_status_code_and_headers() {
        let err = SdkError::Api {
            status_code: 409,
            reason: "Conflict".into(),
            headers: vec![("Content-Type".into(), "application/json".into())],
            body: "{\"error\": \"duplicate\"}".into(),
        };
        assert_eq!(err.status_code(), Some(409));
        assert_eq!(err.header("content-type"), Some("application/json"));
        assert_eq!(err.header("retry-after"), None);
    }
}
