//! Errors for `files/copy_reference/get`.

use thiserror::Error;

use super::{ErrorCategory, ErrorSubtypeMap, LookupError, Subtype, TaggedError};

/// Subtype table for [`CopyReferenceGetError`].
pub static COPY_REFERENCE_GET_SUBTYPES: ErrorSubtypeMap = ErrorSubtypeMap::new(
    "CopyReferenceGetError",
    &[("path", ErrorCategory::Lookup)],
);

/// Why a copy reference could not be created.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CopyReferenceGetError {
    /// The source path could not be looked up.
    #[error("path lookup failed: {0}")]
    Path(LookupError),
}

impl CopyReferenceGetError {
    /// The lookup failure behind a `path` error.
    pub fn as_path(&self) -> Option<&LookupError> {
        match self {
            Self::Path(lookup) => Some(lookup),
        }
    }
}

impl TaggedError for CopyReferenceGetError {
    fn subtypes() -> &'static ErrorSubtypeMap {
        &COPY_REFERENCE_GET_SUBTYPES
    }

    fn from_subtype(tag: &str, subtype: Subtype) -> Option<Self> {
        match (tag, subtype) {
            ("path", Subtype::Lookup(lookup)) => Some(Self::Path(lookup)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_resolves_to_lookup() {
        assert_eq!(
            COPY_REFERENCE_GET_SUBTYPES.resolve("path").unwrap(),
            ErrorCategory::Lookup
        );
    }

    #[test]
    fn test_single_entry() {
        assert_eq!(COPY_REFERENCE_GET_SUBTYPES.len(), 1);
        assert_eq!(
            COPY_REFERENCE_GET_SUBTYPES.iter().collect::<Vec<_>>(),
            vec![("path", ErrorCategory::Lookup)]
        );
        assert_eq!(COPY_REFERENCE_GET_SUBTYPES.name(), "CopyReferenceGetError");
    }

    #[test]
    fn test_other_is_not_registered() {
        assert!(!COPY_REFERENCE_GET_SUBTYPES.contains("other"));
        assert!(COPY_REFERENCE_GET_SUBTYPES.resolve("other").is_err());
    }

    #[test]
    fn test_table_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| COPY_REFERENCE_GET_SUBTYPES.get("path")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some(ErrorCategory::Lookup));
        }
    }

    #[test]
    fn test_from_subtype() {
        let err = CopyReferenceGetError::from_subtype("path", Subtype::Lookup(LookupError::Locked));
        assert_eq!(err, Some(CopyReferenceGetError::Path(LookupError::Locked)));
        assert_eq!(err.unwrap().as_path(), Some(&LookupError::Locked));

        assert_eq!(
            CopyReferenceGetError::from_subtype("to", Subtype::Lookup(LookupError::Locked)),
            None
        );
    }
}
