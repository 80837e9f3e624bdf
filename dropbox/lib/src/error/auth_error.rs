//! Authentication and authorization errors.

use serde::Deserialize;
use thiserror::Error;

/// Errors related to the access token.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No access token was configured.
    #[error("Missing access token: set {env_var}")]
    MissingAccessToken {
        /// The environment variable expected to hold the token.
        env_var: &'static str,
    },

    /// The token cannot be sent as an HTTP header.
    #[error("Access token contains invalid header characters")]
    InvalidKeyFormat,

    /// The server rejected the token.
    #[error("Authentication failed: {message}")]
    AuthenticationFailed {
        /// Error summary or body from the server.
        message: String,
    },

    /// The token has expired and needs to be refreshed.
    #[error("Token expired")]
    TokenExpired,

    /// The token lacks a scope the route requires.
    #[error("Missing scope: {required_scope}")]
    MissingScope {
        /// The scope the route requires.
        required_scope: String,
    },

    /// The account may not perform the operation.
    #[error("Insufficient permissions: {operation}")]
    InsufficientPermissions {
        /// The route that was denied.
        operation: String,
    },
}

/// Body of a 401 response.
#[derive(Deserialize)]
struct AuthErrorBody {
    error_summary: String,
    error: AuthErrorTag,
}

#[derive(Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
enum AuthErrorTag {
    ExpiredAccessToken,
    MissingScope { required_scope: String },
    #[serde(other)]
    Other,
}

impl AuthError {
    /// Maps the body of a 401 response onto an auth error.
    ///
    /// Bodies that are not JSON become [`AuthError::AuthenticationFailed`]
    /// carrying the raw text.
    pub fn from_response_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<AuthErrorBody>(body) {
            Ok(AuthErrorBody {
                error: AuthErrorTag::ExpiredAccessToken,
                ..
            }) => Self::TokenExpired,
            Ok(AuthErrorBody {
                error: AuthErrorTag::MissingScope { required_scope },
                ..
            }) => Self::MissingScope { required_scope },
            Ok(AuthErrorBody { error_summary, .. }) => Self::AuthenticationFailed {
                message: error_summary,
            },
            Err(_) => Self::AuthenticationFailed {
                message: String::from_utf8_lossy(body).into_owned(),
            },
        }
    }

    /// Returns `true` if this error could potentially be resolved by
    /// refreshing credentials.
    pub fn is_refreshable(&self) -> bool {
        matches!(self, Self::TokenExpired | Self::AuthenticationFailed { .. })
    }
}
