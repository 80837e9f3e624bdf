//! The error type returned by route calls.

use thiserror::Error;

use super::{ApiError, AuthError, ClientError, ConfigError, ValidationError};
use crate::taxonomy::BasicError;

/// Failure of a single route call.
///
/// `E` is the route's error taxonomy, e.g.
/// [`CopyReferenceGetError`](crate::taxonomy::CopyReferenceGetError).
///
/// ## Examples
///
/// ```rust,ignore
/// use dropbox_api::CallError;
/// use dropbox_api::taxonomy::{CopyReferenceGetError, LookupError};
///
/// match client.copy_reference_get("/report.pdf").await {
///     Ok(result) => println!("{}", result.copy_reference),
///     Err(CallError::Route(err)) => match err.error {
///         CopyReferenceGetError::Path(LookupError::NotFound) => println!("no such file"),
///         CopyReferenceGetError::Path(other) => println!("lookup failed: {other}"),
///     },
///     Err(other) => return Err(other.into()),
/// }
/// ```
#[derive(Debug, Error)]
pub enum CallError<E> {
    /// The route reported an error with a recognized subtype.
    #[error("{0}")]
    Route(BasicError<E>),

    /// The route reported an error whose subtype this client does not know.
    #[error("{error} '{tag}': {error_summary}")]
    Unrecognized {
        /// Name of the route error type.
        error: &'static str,
        /// The unknown tag.
        tag: String,
        /// Summary sent by the server.
        error_summary: String,
    },

    /// The call failed before a route error could be produced.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl<E> CallError<E> {
    /// The structured route error, if the server returned a recognized one.
    pub fn route_error(&self) -> Option<&E> {
        match self {
            Self::Route(err) => Some(&err.error),
            Self::Unrecognized { .. } | Self::Api(_) => None,
        }
    }

    /// Consumes the error, returning the route error envelope if present.
    pub fn into_route_error(self) -> Option<BasicError<E>> {
        match self {
            Self::Route(err) => Some(err),
            Self::Unrecognized { .. } | Self::Api(_) => None,
        }
    }

    /// The transport error, if the call never produced a route error.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            Self::Route(_) | Self::Unrecognized { .. } => None,
        }
    }
}

impl<E> From<ClientError> for CallError<E> {
    fn from(err: ClientError) -> Self {
        Self::Api(err.into())
    }
}

impl<E> From<ValidationError> for CallError<E> {
    fn from(err: ValidationError) -> Self {
        Self::Api(err.into())
    }
}

impl<E> From<AuthError> for CallError<E> {
    fn from(err: AuthError) -> Self {
        Self::Api(err.into())
    }
}

impl<E> From<ConfigError> for CallError<E> {
    fn from(err: ConfigError) -> Self {
        Self::Api(err.into())
    }
}
