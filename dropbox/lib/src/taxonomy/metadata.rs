//! Errors for `files/get_metadata`.

use thiserror::Error;

use super::{ErrorCategory, ErrorSubtypeMap, LookupError, Subtype, TaggedError};

/// Subtype table for [`GetMetadataError`].
pub static GET_METADATA_SUBTYPES: ErrorSubtypeMap =
    ErrorSubtypeMap::new("GetMetadataError", &[("path", ErrorCategory::Lookup)]);

/// Why metadata for a path could not be returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetMetadataError {
    /// The path could not be looked up.
    #[error("path lookup failed: {0}")]
    Path(LookupError),
}

impl TaggedError for GetMetadataError {
    fn subtypes() -> &'static ErrorSubtypeMap {
        &GET_METADATA_SUBTYPES
    }

    fn from_subtype(tag: &str, subtype: Subtype) -> Option<Self> {
        match (tag, subtype) {
            ("path", Subtype::Lookup(lookup)) => Some(Self::Path(lookup)),
            _ => None,
        }
    }
}
