//! # Common Error Types
//!
//! Consolidated error handling for the dashboard client.
//!
//! Every failure the HTTP client can hit (transport, HTTP status, JSON
//! parsing) surfaces as one [`ApiError`] so facades and hooks handle a
//! single type regardless of root cause. Each variant displays its
//! user-facing message directly: hooks store `error.to_string()` and the
//! result is exactly what a message panel should show.

use thiserror::Error;

/// Client-wide error type.
///
/// - **Network**: no response received (DNS, connection, timeout).
/// - **Http**: a response arrived with a non-success status; `message` is the
///   server-supplied `message` field when present, else the configured
///   server-error fallback.
/// - **Parse**: the response body was not valid JSON, or did not match the
///   expected shape.
/// - **Application**: a 2xx response carried `success = false`; raised by
///   callers that check the envelope, never by the transport itself.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Network(String),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("{0}")]
    Parse(String),

    #[error("{0}")]
    Application(String),
}

impl ApiError {
    /// HTTP status code, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the backend rejected the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// True for transport-level failures that never received a response.
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

/// Convenience type alias used throughout the dashboard crate.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_displays_message_only() {
        let err = ApiError::Http {
            status: 403,
            message: "You do not have permission to perform this action.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "You do not have permission to perform this action."
        );
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn test_unauthorized_detection() {
        let err = ApiError::Http {
            status: 401,
            message: "expired".to_string(),
        };
        assert!(err.is_unauthorized());
        assert!(!ApiError::Network("connection refused".to_string()).is_unauthorized());
    }
}
