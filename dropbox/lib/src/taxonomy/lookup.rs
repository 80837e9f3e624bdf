//! The shared `files.LookupError` category.

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;
use thiserror::Error;

/// Why a path could not be resolved to an entry.
///
/// Several route errors defer to this category for their `path` subtype.
/// Tags the server adds later decode as [`LookupError::Other`].
#[derive(
    Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, IntoStaticStr,
)]
#[serde(tag = ".tag", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LookupError {
    /// The path does not satisfy the required path format.
    #[error("malformed path")]
    MalformedPath {
        /// Server-side detail about the malformation, when given.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        malformed_path: Option<String>,
    },

    /// There is nothing at the given path.
    #[error("not found")]
    NotFound,

    /// A file was expected but the path refers to something else.
    #[error("not a file")]
    NotFile,

    /// A folder was expected but the path refers to something else.
    #[error("not a folder")]
    NotFolder,

    /// The content is restricted for legal reasons.
    #[error("restricted content")]
    RestrictedContent,

    /// The operation does not support this content type.
    #[error("unsupported content type")]
    UnsupportedContentType,

    /// The given path is locked.
    #[error("locked")]
    Locked,

    /// A tag this client does not know.
    #[serde(other)]
    #[error("other lookup error")]
    Other,
}

impl LookupError {
    /// The wire tag for this variant, e.g. `not_found`.
    pub fn tag(&self) -> &'static str {
        self.into()
    }

    /// Returns `true` if nothing exists at the path.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Server detail for [`LookupError::MalformedPath`].
    pub fn malformed_path(&self) -> Option<&str> {
        match self {
            Self::MalformedPath { malformed_path } => malformed_path.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unit_tags() {
        let err: LookupError = serde_json::from_value(json!({".tag": "not_folder"})).unwrap();
        assert_eq!(err, LookupError::NotFolder);
        assert_eq!(err.tag(), "not_folder");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_malformed_path_with_detail() {
        let err: LookupError = serde_json::from_value(json!({
            ".tag": "malformed_path",
            "malformed_path": "Path must start with '/'"
        }))
        .unwrap();
        assert_eq!(err.malformed_path(), Some("Path must start with '/'"));
        assert_eq!(err.tag(), "malformed_path");
    }

    #[test]
    fn test_malformed_path_without_detail() {
        let err: LookupError =
            serde_json::from_value(json!({".tag": "malformed_path"})).unwrap();
        assert_eq!(
            err,
            LookupError::MalformedPath {
                malformed_path: None
            }
        );
    }

    #[test]
    fn test_unknown_tag_is_other() {
        let err: LookupError =
            serde_json::from_value(json!({".tag": "some_future_reason"})).unwrap();
        assert_eq!(err, LookupError::Other);
    }

    #[test]
    fn test_serializes_with_tag() {
        let value = serde_json::to_value(LookupError::NotFound).unwrap();
        assert_eq!(value, json!({".tag": "not_found"}));
    }

    #[test]
    fn test_display() {
        assert_eq!(LookupError::RestrictedContent.to_string(), "restricted content");
    }
}
