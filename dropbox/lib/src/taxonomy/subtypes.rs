//! Frozen tag-to-category tables.
//!
//! Each route error type declares one [`ErrorSubtypeMap`] as a `static`. The
//! table is built at compile time from a `&'static` slice and exposes no
//! mutating API, so it can be shared by any number of threads.
//!
//! Attempting to change a table does not compile:
//!
//! ```compile_fail
//! use dropbox_api::taxonomy::{ErrorCategory, COPY_REFERENCE_GET_SUBTYPES};
//!
//! COPY_REFERENCE_GET_SUBTYPES.insert("other", ErrorCategory::Lookup);
//! ```

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use super::DecodeError;

/// Reusable error categories a subtype tag can resolve to.
///
/// The set is closed: a table entry can only point at a category the crate
/// knows how to decode.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum ErrorCategory {
    /// `files.LookupError`, see [`LookupError`](super::LookupError).
    #[strum(serialize = "LookupError")]
    Lookup,
}

/// Immutable mapping from a subtype tag to its [`ErrorCategory`].
///
/// ## Examples
///
/// ```rust
/// use dropbox_api::taxonomy::{ErrorCategory, ErrorSubtypeMap};
///
/// static LIST_FOLDER_SUBTYPES: ErrorSubtypeMap =
///     ErrorSubtypeMap::new("ListFolderError", &[("path", ErrorCategory::Lookup)]);
///
/// assert_eq!(LIST_FOLDER_SUBTYPES.get("path"), Some(ErrorCategory::Lookup));
/// assert!(LIST_FOLDER_SUBTYPES.resolve("other").is_err());
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct ErrorSubtypeMap {
    name: &'static str,
    entries: &'static [(&'static str, ErrorCategory)],
}

impl ErrorSubtypeMap {
    /// Creates a table for the error type called `name`.
    ///
    /// ## Panics
    ///
    /// Panics if two entries share a tag. In a `static` initializer this is a
    /// compile error.
    pub const fn new(name: &'static str, entries: &'static [(&'static str, ErrorCategory)]) -> Self {
        assert!(has_unique_tags(entries), "duplicate tag in error subtype table");
        Self { name, entries }
    }

    /// Name of the error type owning this table, e.g. `CopyReferenceGetError`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the category registered for `tag`, if any.
    pub fn get(&self, tag: &str) -> Option<ErrorCategory> {
        self.entries
            .iter()
            .find(|(known, _)| *known == tag)
            .map(|(_, category)| *category)
    }

    /// Resolves `tag` to its category.
    ///
    /// ## Errors
    ///
    /// Returns [`DecodeError::UnknownErrorSubtype`] when the tag is not in the
    /// table. Whether that is fatal is up to the caller.
    pub fn resolve(&self, tag: &str) -> Result<ErrorCategory, DecodeError> {
        self.get(tag).ok_or_else(|| DecodeError::UnknownErrorSubtype {
            error: self.name,
            tag: tag.to_string(),
        })
    }

    /// Returns `true` if `tag` is registered.
    pub fn contains(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    /// Number of registered subtypes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no subtypes are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(tag, category)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, ErrorCategory)> + '_ {
        self.entries.iter().copied()
    }

    /// Iterates over the registered tags.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(tag, _)| *tag)
    }
}

const fn has_unique_tags(entries: &[(&str, ErrorCategory)]) -> bool {
    let mut i = 0;
    while i < entries.len() {
        let mut j = i + 1;
        while j < entries.len() {
            if str_eq(entries[i].0, entries[j].0) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
