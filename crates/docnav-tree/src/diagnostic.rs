//! Non-fatal validation findings.
//!
//! Diagnostics never block resolution; they are returned next to the tree so
//! tooling can surface them as lint warnings.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::item::{Group, NavItem, Sidebar, SidebarSections};
use crate::link::LinkEntry;
use crate::path::NodePath;
use crate::tree::NavigationTree;

/// What a diagnostic reports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Sidebar item had both `link` and `items`; it became a group and the
    /// link was dropped.
    IgnoredLink {
        /// The dropped link value.
        link: String,
    },
    /// Group declares no items.
    EmptyGroup,
    /// A sibling link entry earlier in the same sequence has the same link.
    DuplicateLink {
        /// The shared (normalized) link.
        link: String,
        /// Location of the first entry with this link.
        first: NodePath,
    },
    /// Key that the schema does not know; its value is ignored.
    UnknownKey {
        /// The unrecognized key.
        key: String,
    },
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IgnoredLink { link } => {
                write!(f, "item has both `link` and `items`; link {link:?} ignored")
            }
            Self::EmptyGroup => f.write_str("group has no items"),
            Self::DuplicateLink { link, first } => {
                write!(f, "duplicate link {link:?} (first declared at {first})")
            }
            Self::UnknownKey { key } => write!(f, "unknown key `{key}` ignored"),
        }
    }
}

/// A located non-fatal finding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Location of the offending entry.
    pub path: NodePath,
    /// What was found.
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub(crate) fn new(path: NodePath, kind: DiagnosticKind) -> Self {
        Self { path, kind }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

impl NavigationTree {
    /// Run the structural lint pass, reporting paths in the flat layout
    /// (`nav[..]`, `sidebar[..]`).
    #[must_use]
    pub fn lint(&self) -> Vec<Diagnostic> {
        let root = NodePath::root();
        lint(self, &root.key("nav"), &root.key("sidebar"))
    }
}

/// Collect duplicate-link and empty-group diagnostics.
///
/// `nav_path` and `sidebar_path` are where the sequences were read from, so
/// reported paths match the raw input.
pub(crate) fn lint(
    tree: &NavigationTree,
    nav_path: &NodePath,
    sidebar_path: &NodePath,
) -> Vec<Diagnostic> {
    let mut lint = Lint::default();
    lint.links(
        tree.nav().iter().enumerate().map(|(i, l)| (nav_path.index(i), l)),
    );
    match tree.sidebar() {
        Sidebar::Flat(sections) => lint.sections(sections, sidebar_path),
        Sidebar::Scoped(scopes) => {
            for scope in scopes {
                lint.sections(scope.sections(), &sidebar_path.key(scope.prefix()));
            }
        }
    }
    lint.diagnostics
}

#[derive(Default)]
struct Lint {
    diagnostics: Vec<Diagnostic>,
}

impl Lint {
    fn sections(&mut self, sections: &SidebarSections, path: &NodePath) {
        match sections {
            SidebarSections::Groups(groups) => {
                for (i, group) in groups.iter().enumerate() {
                    self.group(group, &path.index(i));
                }
            }
            SidebarSections::Single(items) => self.items(items, path),
        }
    }

    fn group(&mut self, group: &Group, path: &NodePath) {
        if group.items().is_empty() {
            self.diagnostics
                .push(Diagnostic::new(path.clone(), DiagnosticKind::EmptyGroup));
        }
        self.items(group.items(), &path.key("items"));
    }

    /// Lint one sibling sequence and recurse into nested groups.
    fn items(&mut self, items: &[NavItem], path: &NodePath) {
        self.links(items.iter().enumerate().filter_map(|(i, item)| match item {
            NavItem::Link(link) => Some((path.index(i), link)),
            NavItem::Group(_) => None,
        }));
        for (i, item) in items.iter().enumerate() {
            if let NavItem::Group(group) = item {
                self.group(group, &path.index(i));
            }
        }
    }

    /// Report every link entry whose link repeats an earlier sibling's.
    fn links<'a>(&mut self, siblings: impl Iterator<Item = (NodePath, &'a LinkEntry)>) {
        let mut first_seen: HashMap<&str, NodePath> = HashMap::new();
        for (path, entry) in siblings {
            if let Some(first) = first_seen.get(entry.link()) {
                self.diagnostics.push(Diagnostic::new(
                    path,
                    DiagnosticKind::DuplicateLink {
                        link: entry.link().to_owned(),
                        first: first.clone(),
                    },
                ));
            } else {
                first_seen.insert(entry.link(), path);
            }
        }
    }
}
