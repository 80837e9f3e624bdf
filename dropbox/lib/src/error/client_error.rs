//! HTTP client and network errors.

use thiserror::Error;

/// Errors from the HTTP client layer.
///
/// These cover network failures and the non-route status codes Dropbox
/// returns: 400 for malformed input, 429 for rate limiting and 5xx.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed due to network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an unexpected HTTP status code.
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: u16,
        /// Response body, or the status text if the body was unreadable.
        message: String,
    },

    /// The request was rejected as malformed (HTTP 400).
    #[error("Bad input: {message}")]
    BadInput {
        /// Plain-text explanation from the server.
        message: String,
    },

    /// Too many requests (HTTP 429).
    #[error("Rate limited{}", .retry_after_secs.map(|s| format!(", retry after {s}s")).unwrap_or_default())]
    RateLimited {
        /// Seconds to wait, from the `Retry-After` header.
        retry_after_secs: Option<u64>,
    },

    /// Request exceeded the configured timeout.
    #[error("Request timeout after {duration_ms}ms")]
    Timeout {
        /// The timeout duration in milliseconds.
        duration_ms: u64,
    },

    /// Failed to establish connection to the server.
    #[error("Connection failed: {0}")]
    Connection(String),
}

impl ClientError {
    /// Returns `true` if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Connection(_) | Self::RateLimited { .. } => true,
            Self::HttpStatus { status, .. } => *status >= 500,
            Self::BadInput { .. } => false,
            Self::Request(e) => e.is_timeout() || e.is_connect(),
        }
    }

    /// Returns the HTTP status code if one was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::BadInput { .. } => Some(400),
            Self::RateLimited { .. } => Some(429),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::Timeout { .. } | Self::Connection(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_is_retryable() {
        let err = ClientError::Timeout { duration_ms: 5000 };
        assert!(err.is_retryable());
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_rate_limited() {
        let err = ClientError::RateLimited {
            retry_after_secs: Some(300),
        };
        assert!(err.is_retryable());
        assert_eq!(err.status_code(), Some(429));
        assert_eq!(err.to_string(), "Rate limited, retry after 300s");

        let err = ClientError::RateLimited {
            retry_after_secs: None,
        };
        assert_eq!(err.to_string(), "Rate limited");
    }

    #[test]
    fn test_500_is_retryable() {
        let err = ClientError::HttpStatus {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        assert!(err.is_retryable());
        assert_eq!(err.status_code(), Some(503));
    }

    #[test]
    fn test_bad_input_not_retryable() {
        let err = ClientError::BadInput {
            message: "Error in call to API function \"files/copy_reference/get\"".to_string(),
        };
        assert!(!err.is_retryable());
        assert_eq!(err.status_code(), Some(400));
        assert!(err.to_string().starts_with("Bad input: "));
    }
}
