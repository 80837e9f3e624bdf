//! The envelope every route error body is decoded into.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{DecodeError, TAG_FIELD, TaggedError, decode_tagged};

/// Localized message meant for the end user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMessage {
    /// Message text.
    pub text: String,
    /// Locale of `text`, e.g. `en`.
    pub locale: String,
}

/// A route error response: the summary fields plus the typed error `E`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicError<E> {
    /// Slash separated tag path, e.g. `path/not_found/..`. Not stable; for logs only.
    pub error_summary: String,
    /// Optional message the server wants shown to the user.
    pub user_message: Option<UserMessage>,
    /// The structured error.
    pub error: E,
}

impl<E> BasicError<E> {
    /// Converts the structured error, keeping the summary fields.
    pub fn map<U>(self, f: impl FnOnce(E) -> U) -> BasicError<U> {
        BasicError {
            error_summary: self.error_summary,
            user_message: self.user_message,
            error: f(self.error),
        }
    }
}

impl<E: fmt::Display> fmt::Display for BasicError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.error, self.error_summary)?;
        if let Some(message) = &self.user_message {
            write!(f, ": {}", message.text)?;
        }
        Ok(())
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for BasicError<E> {}

/// An error body parsed only as far as its envelope.
///
/// The `error` member stays raw JSON until [`decode`](Self::decode) walks it
/// against a subtype table, so the summary survives a failed decode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorEnvelope {
    /// See [`BasicError::error_summary`].
    pub error_summary: String,
    /// See [`BasicError::user_message`].
    #[serde(default)]
    pub user_message: Option<UserMessage>,
    /// The undecoded error value.
    pub error: Value,
}

impl ErrorEnvelope {
    /// Parses a response body.
    ///
    /// ## Errors
    ///
    /// Returns [`DecodeError::InvalidEnvelope`] if the body is not JSON or
    /// lacks `error_summary` / `error`.
    pub fn parse(body: &[u8]) -> Result<Self, DecodeError> {
        serde_json::from_slice(body).map_err(DecodeError::InvalidEnvelope)
    }

    /// The top-level tag of the error value, if present.
    pub fn tag(&self) -> Option<&str> {
        self.error.get(TAG_FIELD).and_then(Value::as_str)
    }

    /// Decodes the error value as `E`.
    ///
    /// ## Errors
    ///
    /// Propagates the [`DecodeError`] from [`decode_tagged`].
    pub fn decode<E: TaggedError>(&self) -> Result<BasicError<E>, DecodeError> {
        Ok(BasicError {
            error_summary: self.error_summary.clone(),
            user_message: self.user_message.clone(),
            error: decode_tagged(&self.error)?,
        })
    }
}

/// Parses `body` and decodes its error value as `E` in one step.
///
/// ## Examples
///
/// ```rust
/// use dropbox_api::taxonomy::{decode_basic_error, CopyReferenceGetError, LookupError};
///
/// let body = br#"{
///     "error_summary": "path/not_found/..",
///     "error": {".tag": "path", "path": {".tag": "not_found"}}
/// }"#;
///
/// let err = decode_basic_error::<CopyReferenceGetError>(body).unwrap();
/// assert_eq!(err.error, CopyReferenceGetError::Path(LookupError::NotFound));
/// ```
///
/// ## Errors
///
/// See [`ErrorEnvelope::parse`] and [`ErrorEnvelope::decode`].
pub fn decode_basic_error<E: TaggedError>(body: &[u8]) -> Result<BasicError<E>, DecodeError> {
    ErrorEnvelope::parse(body)?.decode()
}
