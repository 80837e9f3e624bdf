//! Top-level transport error type.

use super::{AuthError, ClientError, ConfigError, ValidationError};
use thiserror::Error;

/// Every failure that is not a route error.
///
/// ## Examples
///
/// ```rust
/// use dropbox_api::error::{ApiError, AuthError};
///
/// fn describe(err: &ApiError) -> &'static str {
///     match err {
///         ApiError::Client(_) => "network",
///         ApiError::Validation(_) => "bad response",
///         ApiError::Auth(_) => "credentials",
///         ApiError::Config(_) => "configuration",
///     }
/// }
///
/// assert_eq!(describe(&AuthError::TokenExpired.into()), "credentials");
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP client errors (network, timeout, status codes).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Response bodies that failed to parse.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Authentication and authorization errors.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Client configuration errors.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// Returns `true` if repeating the call may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Client(e) => e.is_retryable(),
            Self::Auth(e) => e.is_refreshable(),
            Self::Validation(_) | Self::Config(_) => false,
        }
    }
}
