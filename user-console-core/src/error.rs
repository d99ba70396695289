//! Unified error type definition

use thiserror::Error;

/// Error type for all user-service operations.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    /// The configured base address could not be parsed. Fatal at startup.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The request exceeded its per-call deadline.
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// A connection could not be established (DNS failure, refused, reset).
    #[error("Connection failed: {0}")]
    Transport(String),

    /// The service answered 404 for a list or delete.
    #[error("Resource not found")]
    NotFound,

    /// Non-2xx response. Carries a truncated body excerpt for display.
    #[error("Request failed (HTTP {status}): {body}")]
    RequestFailed { status: u16, body: String },

    /// The 2xx response body was not the expected JSON shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// A required input was blank. Detected before any network call.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ApiError {
    /// Whether the error happened below the HTTP layer.
    ///
    /// These are the only errors the client retries against the alternate
    /// endpoint. An HTTP status of any kind means the address is reachable.
    #[must_use]
    pub fn is_transport_level(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout(_))
    }

    /// Whether it is expected behavior (user input, resource does not exist),
    /// used for log level selection: `warn` when `true`, `error` otherwise.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::NotFound | Self::Validation(_))
    }
}

/// Result type alias for user-service operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_level_variants() {
        assert!(ApiError::Transport("refused".into()).is_transport_level());
        assert!(ApiError::Timeout("8s elapsed".into()).is_transport_level());
        assert!(!ApiError::NotFound.is_transport_level());
        assert!(
            !ApiError::RequestFailed {
                status: 500,
                body: "boom".into(),
            }
            .is_transport_level()
        );
    }

    #[test]
    fn expected_variants() {
        assert!(ApiError::NotFound.is_expected());
        assert!(ApiError::Validation("name required".into()).is_expected());
        assert!(!ApiError::Transport("refused".into()).is_expected());
        assert!(!ApiError::Decode("bad json".into()).is_expected());
    }

    #[test]
    fn display_request_failed() {
        let e = ApiError::RequestFailed {
            status: 500,
            body: "internal error".into(),
        };
        assert_eq!(e.to_string(), "Request failed (HTTP 500): internal error");
    }

    #[test]
    fn display_invalid_endpoint() {
        let e = ApiError::InvalidEndpoint("not a url".into());
        assert_eq!(e.to_string(), "Invalid endpoint: not a url");
    }
}
