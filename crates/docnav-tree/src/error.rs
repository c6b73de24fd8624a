//! Resolution errors.
//!
//! Every fatal failure is reported as a [`ConfigValidationError`]: the
//! structural [`NodePath`] of the offending value plus a [`ResolveErrorKind`]
//! describing what is wrong with it.

use crate::path::NodePath;

/// A Link Entry could not be constructed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidLinkEntry {
    /// `text` is empty or whitespace-only.
    #[error("link text cannot be empty")]
    EmptyText,
    /// `link` is empty.
    #[error("link target cannot be empty")]
    EmptyLink,
    /// Entry has no `text` key.
    #[error("missing `text`")]
    MissingText,
    /// Entry has no `link` key.
    #[error("missing `link`")]
    MissingLink,
    /// A field holds something other than a string.
    #[error("`{field}` must be a string")]
    NotAString {
        /// Offending key.
        field: &'static str,
    },
}

/// A Group descriptor is malformed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidGroup {
    /// Group has no `text` label.
    #[error("missing `text`")]
    MissingText,
    /// Group label is empty or whitespace-only.
    #[error("group label cannot be empty")]
    EmptyText,
    /// Group has no `items` sequence.
    #[error("missing `items`")]
    MissingItems,
    /// A field holds a value of the wrong type.
    #[error("`{field}` must be a {expected}")]
    WrongType {
        /// Offending key.
        field: &'static str,
        /// Expected value type.
        expected: &'static str,
    },
}

/// Site title or description is absent or empty.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("site `{field}` is missing or empty")]
pub struct MissingMetadata {
    /// `title` or `description`.
    pub field: &'static str,
}

/// What went wrong at a given location.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveErrorKind {
    /// Site title or description missing.
    #[error(transparent)]
    MissingMetadata(#[from] MissingMetadata),
    /// Nav or sidebar leaf is not a valid Link Entry.
    #[error("invalid link entry: {0}")]
    InvalidLinkEntry(#[from] InvalidLinkEntry),
    /// Sidebar group descriptor is malformed.
    #[error("invalid sidebar group: {0}")]
    InvalidGroup(#[from] InvalidGroup),
    /// Sidebar groups are nested deeper than the configured maximum.
    #[error("sidebar nesting exceeds the maximum depth of {max_depth}")]
    SidebarTooDeep {
        /// Configured maximum group depth.
        max_depth: usize,
    },
    /// Value has the wrong structural type.
    #[error("expected {expected}, found {found}")]
    InvalidShape {
        /// Expected shape (`map`, `sequence`, ...).
        expected: &'static str,
        /// Actual shape.
        found: &'static str,
    },
    /// Sidebar item has neither `link` nor `items`.
    #[error("sidebar item has neither `link` nor `items`")]
    UnclassifiableItem,
    /// `nav` or `sidebar` declared both at the top level and in `themeConfig`.
    #[error("`{key}` is declared both at the top level and in `themeConfig`")]
    ConflictingSections {
        /// `nav` or `sidebar`.
        key: &'static str,
    },
}

/// Fatal resolution failure located at a structural path.
///
/// Displays as `path: reason`, or just `reason` when the failure is at the
/// root of the input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}{kind}", location(.path))]
pub struct ConfigValidationError {
    path: NodePath,
    kind: ResolveErrorKind,
}

impl ConfigValidationError {
    /// Create an error at `path`.
    pub fn new(path: NodePath, kind: impl Into<ResolveErrorKind>) -> Self {
        Self {
            path,
            kind: kind.into(),
        }
    }

    /// Where the failure occurred.
    #[must_use]
    pub fn path(&self) -> &NodePath {
        &self.path
    }

    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> &ResolveErrorKind {
        &self.kind
    }
}

fn location(path: &NodePath) -> String {
    if path.is_root() {
        String::new()
    } else {
        format!("{path}: ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_at_root_omits_path() {
        let err = ConfigValidationError::new(
            NodePath::root(),
            ResolveErrorKind::InvalidShape {
                expected: "map",
                found: "sequence",
            },
        );

        assert_eq!(err.to_string(), "expected map, found sequence");
    }

    #[test]
    fn test_display_includes_path_and_reason() {
        let path = NodePath::root()
            .key("sidebar")
            .index(0)
            .key("items")
            .index(2);
        let err = ConfigValidationError::new(path, InvalidLinkEntry::EmptyLink);

        assert_eq!(
            err.to_string(),
            "sidebar[0].items[2]: invalid link entry: link target cannot be empty"
        );
    }

    #[test]
    fn test_missing_metadata_is_transparent() {
        let err = ConfigValidationError::new(
            NodePath::root().key("title"),
            MissingMetadata { field: "title" },
        );

        assert_eq!(err.to_string(), "title: site `title` is missing or empty");
        assert!(matches!(
            err.kind(),
            ResolveErrorKind::MissingMetadata(MissingMetadata { field: "title" })
        ));
    }

    #[test]
    fn test_too_deep_message_names_limit() {
        let err = ConfigValidationError::new(
            NodePath::root().key("sidebar").index(0),
            ResolveErrorKind::SidebarTooDeep { max_depth: 64 },
        );
        assert!(err.to_string().contains("64"));
    }
}
