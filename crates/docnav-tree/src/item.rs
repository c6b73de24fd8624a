//! Sidebar tree nodes.
//!
//! The sidebar is a tree of [`NavItem`]s: leaves are [`LinkEntry`] values,
//! branches are labeled [`Group`]s that exclusively own their children.
//! Ownership is strictly top-down, so the tree cannot contain cycles.

use serde::Serialize;

use crate::error::InvalidGroup;
use crate::link::LinkEntry;

/// Sidebar node: a leaf link or a nested group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NavItem {
    /// Leaf link.
    Link(LinkEntry),
    /// Labeled container.
    Group(Group),
}

impl NavItem {
    /// Display label of the node.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Link(link) => link.text(),
            Self::Group(group) => group.text(),
        }
    }
}

impl From<LinkEntry> for NavItem {
    fn from(link: LinkEntry) -> Self {
        Self::Link(link)
    }
}

impl From<Group> for NavItem {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

/// Labeled sidebar section owning an ordered list of children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Group {
    text: String,
    /// `None`: not collapsible. `Some(true)`: collapsible, initially collapsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    collapsed: Option<bool>,
    items: Vec<NavItem>,
}

impl Group {
    /// Create a group. An empty `items` list is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidGroup::EmptyText`] when the label is empty or
    /// whitespace-only.
    pub fn new(text: impl Into<String>, items: Vec<NavItem>) -> Result<Self, InvalidGroup> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(InvalidGroup::EmptyText);
        }
        Ok(Self {
            text,
            collapsed: None,
            items,
        })
    }

    /// Set the collapse state.
    #[must_use]
    pub fn with_collapsed(mut self, collapsed: Option<bool>) -> Self {
        self.collapsed = collapsed;
        self
    }

    /// Section label.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Children in declaration order.
    #[must_use]
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Declared collapse state.
    #[must_use]
    pub fn collapsed(&self) -> Option<bool> {
        self.collapsed
    }

    /// Whether the renderer should let readers fold this section.
    #[must_use]
    pub fn is_collapsible(&self) -> bool {
        self.collapsed.is_some()
    }

    /// Nesting depth of this group, counting itself as 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self
            .items
            .iter()
            .filter_map(|item| match item {
                NavItem::Group(group) => Some(group.depth()),
                NavItem::Link(_) => None,
            })
            .max()
            .unwrap_or(0)
    }
}

/// One sidebar: labeled sections, or the single-section form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "form", content = "items", rename_all = "lowercase")]
pub enum SidebarSections {
    /// Every top-level entry is a labeled group.
    Groups(Vec<Group>),
    /// Items of one implicit, unlabeled group.
    Single(Vec<NavItem>),
}

impl SidebarSections {
    /// Whether the sidebar has no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Groups(groups) => groups.is_empty(),
            Self::Single(items) => items.is_empty(),
        }
    }

    /// Visit every leaf in document order together with the labels of its
    /// enclosing groups (outermost first).
    pub(crate) fn walk_links<'a>(&'a self, visit: &mut impl FnMut(&'a LinkEntry, &[&'a str])) {
        let mut trail = Vec::new();
        match self {
            Self::Groups(groups) => {
                for group in groups {
                    walk_group(group, &mut trail, visit);
                }
            }
            Self::Single(items) => walk_items(items, &mut trail, visit),
        }
    }
}

impl Default for SidebarSections {
    fn default() -> Self {
        Self::Groups(Vec::new())
    }
}

fn walk_group<'a>(
    group: &'a Group,
    trail: &mut Vec<&'a str>,
    visit: &mut impl FnMut(&'a LinkEntry, &[&'a str]),
) {
    trail.push(group.text());
    walk_items(group.items(), trail, visit);
    trail.pop();
}

fn walk_items<'a>(
    items: &'a [NavItem],
    trail: &mut Vec<&'a str>,
    visit: &mut impl FnMut(&'a LinkEntry, &[&'a str]),
) {
    for item in items {
        match item {
            NavItem::Link(link) => visit(link, trail.as_slice()),
            NavItem::Group(group) => walk_group(group, trail, visit),
        }
    }
}

/// Sidebar shown for routes under `prefix`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarScope {
    prefix: String,
    sections: SidebarSections,
}

impl SidebarScope {
    /// Create a scope for routes starting with `prefix`.
    #[must_use]
    pub fn new(prefix: impl Into<String>, sections: SidebarSections) -> Self {
        Self {
            prefix: prefix.into(),
            sections,
        }
    }

    /// Route prefix, e.g. `/guide/`.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Sidebar content for this scope.
    #[must_use]
    pub fn sections(&self) -> &SidebarSections {
        &self.sections
    }

    /// Whether `route` falls under this scope. `/guide` matches `/guide/`.
    pub(crate) fn matches(&self, route: &str) -> bool {
        route.starts_with(&self.prefix)
            || self
                .prefix
                .strip_suffix('/')
                .is_some_and(|dir| dir == route)
    }
}

/// The whole sidebar declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "sidebar", rename_all = "lowercase")]
pub enum Sidebar {
    /// One sidebar for every page.
    Flat(SidebarSections),
    /// Route-prefix keyed sidebars, in declaration order.
    Scoped(Vec<SidebarScope>),
}

impl Sidebar {
    /// Whether no sidebar entries are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Flat(sections) => sections.is_empty(),
            Self::Scoped(scopes) => scopes.iter().all(|scope| scope.sections.is_empty()),
        }
    }
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::Flat(SidebarSections::default())
    }
}
