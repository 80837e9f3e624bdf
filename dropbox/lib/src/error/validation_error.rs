//! Response parsing errors.

use thiserror::Error;

use crate::taxonomy::DecodeError;

/// Errors while parsing a response body.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Empty response body when content was expected.
    #[error("Empty response body")]
    EmptyBody,

    /// A route error body could not be decoded.
    #[error("Undecodable route error: {0}")]
    ErrorBody(#[from] DecodeError),
}

impl ValidationError {
    /// Returns `true` if this is a parsing error.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::JsonParse(_) | Self::ErrorBody(_))
    }
}
