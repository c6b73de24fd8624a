//! Structural paths into the raw configuration.
//!
//! A [`NodePath`] names the exact position of a value in the raw input, so
//! errors and diagnostics can point configuration authors at the defect:
//! `sidebar[0].items[2]`, `themeConfig.nav[1]`, `sidebar["/guide/"][0]`.

use std::fmt;

use serde::{Serialize, Serializer};

/// One step into the raw structure.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Map key.
    Key(String),
    /// Sequence index.
    Index(usize),
}

/// Location of a value inside the raw configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodePath {
    segments: Vec<Segment>,
}

impl NodePath {
    /// Path of the configuration root.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of the map entry `key` below this path.
    #[must_use]
    pub fn key(&self, key: impl Into<String>) -> Self {
        self.child(Segment::Key(key.into()))
    }

    /// Path of the sequence element `index` below this path.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        self.child(Segment::Index(index))
    }

    /// Whether this is the configuration root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments from the root down.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    fn child(&self, segment: Segment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self { segments }
    }
}

/// Keys that can be written bare (`themeConfig.nav`) rather than quoted.
fn is_bare_key(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<root>");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) if is_bare_key(key) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                }
                Segment::Key(key) => write!(f, "[{key:?}]")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for NodePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_display() {
        assert_eq!(NodePath::root().to_string(), "<root>");
        assert!(NodePath::root().is_root());
    }

    #[test]
    fn test_nested_sidebar_path() {
        let path = NodePath::root()
            .key("sidebar")
            .index(0)
            .key("items")
            .index(2);

        assert_eq!(path.to_string(), "sidebar[0].items[2]");
        assert_eq!(path.segments().len(), 4);
    }

    #[test]
    fn test_theme_path() {
        let path = NodePath::root().key("themeConfig").key("nav").index(1);
        assert_eq!(path.to_string(), "themeConfig.nav[1]");
    }

    #[test]
    fn test_route_key_is_quoted() {
        let path = NodePath::root().key("sidebar").key("/guide/").index(0);
        assert_eq!(path.to_string(), r#"sidebar["/guide/"][0]"#);
    }

    #[test]
    fn test_child_does_not_mutate_parent() {
        let parent = NodePath::root().key("nav");
        let child = parent.index(3);

        assert_eq!(parent.to_string(), "nav");
        assert_eq!(child.to_string(), "nav[3]");
    }

    #[test]
    fn test_serializes_as_string() {
        let path = NodePath::root().key("nav").index(0);
        let json = serde_json::to_value(&path).unwrap();
        assert_eq!(json, serde_json::json!("nav[0]"));
    }
}
