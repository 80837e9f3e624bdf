//! Walking subtype tables to build structured errors.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::{ErrorCategory, ErrorSubtypeMap, LookupError};

/// Field carrying the union tag in Dropbox JSON values.
pub const TAG_FIELD: &str = ".tag";

/// Errors raised while turning an error payload into a typed error.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The tag is not registered in the error type's subtype table.
    #[error("{error}: unknown error subtype '{tag}'")]
    UnknownErrorSubtype {
        /// Name of the error type whose table was consulted.
        error: &'static str,
        /// The unrecognized tag.
        tag: String,
    },

    /// The error value has no string `.tag` field.
    #[error("{error}: error value has no \".tag\" field")]
    MissingTag {
        /// Name of the error type being decoded.
        error: &'static str,
    },

    /// The value named by the tag is absent.
    #[error("{error}: subtype '{tag}' has no payload")]
    MissingPayload {
        /// Name of the error type being decoded.
        error: &'static str,
        /// The tag whose payload is missing.
        tag: String,
    },

    /// The payload does not match its category's shape.
    #[error("{error}: invalid {category} payload for '{tag}': {source}")]
    InvalidPayload {
        /// Name of the error type being decoded.
        error: &'static str,
        /// The tag whose payload failed to decode.
        tag: String,
        /// The category the payload was decoded as.
        category: ErrorCategory,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// The table maps a tag to a category the error type cannot hold.
    #[error("{error}: subtype '{tag}' cannot hold a {category}")]
    CategoryMismatch {
        /// Name of the error type being decoded.
        error: &'static str,
        /// The offending tag.
        tag: String,
        /// The category the table resolved to.
        category: ErrorCategory,
    },

    /// The response body is not a Dropbox error envelope.
    #[error("invalid error envelope: {0}")]
    InvalidEnvelope(#[source] serde_json::Error),
}

impl DecodeError {
    /// Returns `true` for [`DecodeError::UnknownErrorSubtype`].
    pub fn is_unknown_subtype(&self) -> bool {
        matches!(self, Self::UnknownErrorSubtype { .. })
    }

    /// Returns the offending tag for errors tied to one.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::UnknownErrorSubtype { tag, .. }
            | Self::MissingPayload { tag, .. }
            | Self::InvalidPayload { tag, .. }
            | Self::CategoryMismatch { tag, .. } => Some(tag),
            Self::MissingTag { .. } | Self::InvalidEnvelope(_) => None,
        }
    }
}

/// A decoded category value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subtype {
    /// A decoded `files.LookupError`.
    Lookup(LookupError),
}

impl Subtype {
    /// The category this value belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Lookup(_) => ErrorCategory::Lookup,
        }
    }

    /// Decodes `payload` as a value of `category`.
    pub fn decode(category: ErrorCategory, payload: &Value) -> Result<Self, serde_json::Error> {
        match category {
            ErrorCategory::Lookup => LookupError::deserialize(payload).map(Self::Lookup),
        }
    }
}

/// A route error type whose variants are selected by a subtype table.
///
/// Implementors declare a `static` [`ErrorSubtypeMap`] and map each decoded
/// `(tag, Subtype)` pair onto one of their variants.
pub trait TaggedError: Sized + fmt::Debug + fmt::Display {
    /// The frozen subtype table for this error type.
    fn subtypes() -> &'static ErrorSubtypeMap;

    /// Builds the variant for `tag`, or `None` if `subtype` does not fit it.
    fn from_subtype(tag: &str, subtype: Subtype) -> Option<Self>;
}

/// Decodes a tagged error value against `E`'s subtype table.
///
/// The value must look like `{".tag": "path", "path": {...}}`: the tag selects
/// the category and the field of the same name carries its payload.
///
/// ## Errors
///
/// See [`DecodeError`]; unknown tags yield
/// [`DecodeError::UnknownErrorSubtype`].
pub fn decode_tagged<E: TaggedError>(value: &Value) -> Result<E, DecodeError> {
    let table = E::subtypes();
    let tag = value
        .get(TAG_FIELD)
        .and_then(Value::as_str)
        .ok_or(DecodeError::MissingTag {
            error: table.name(),
        })?;

    let category = table.resolve(tag)?;

    let payload = value.get(tag).ok_or_else(|| DecodeError::MissingPayload {
        error: table.name(),
        tag: tag.to_string(),
    })?;

    let subtype =
        Subtype::decode(category, payload).map_err(|source| DecodeError::InvalidPayload {
            error: table.name(),
            tag: tag.to_string(),
            category,
            source,
        })?;

    E::from_subtype(tag, subtype).ok_or_else(|| DecodeError::CategoryMismatch {
        error: table.name(),
        tag: tag.to_string(),
        category,
    })
}
