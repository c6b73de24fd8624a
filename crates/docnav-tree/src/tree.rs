//! Resolved navigation tree and render-time lookups.
//!
//! [`NavigationTree`] is the immutable, render-ready result of resolution.
//! It is built once per configuration load and replaced wholesale on reload.
//!
//! The lookup methods answer the questions page chrome needs for a given
//! route: which sidebar to show, the labels of the sections enclosing the
//! page, and the neighbouring pages for "previous / next" links.

use serde::Serialize;

use crate::error::MissingMetadata;
use crate::item::{Sidebar, SidebarScope, SidebarSections};
use crate::link::{LinkEntry, normalize_route};

/// Site identity shown in page chrome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteMetadata {
    title: String,
    description: String,
}

impl SiteMetadata {
    /// Create site metadata.
    ///
    /// # Errors
    ///
    /// Returns [`MissingMetadata`] naming the first empty field.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, MissingMetadata> {
        let title = title.into();
        let description = description.into();
        if title.trim().is_empty() {
            return Err(MissingMetadata { field: "title" });
        }
        if description.trim().is_empty() {
            return Err(MissingMetadata {
                field: "description",
            });
        }
        Ok(Self { title, description })
    }

    /// Site title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Site description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Neighbouring sidebar pages of a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PrevNext<'a> {
    /// Previous internal page in sidebar order.
    pub prev: Option<&'a LinkEntry>,
    /// Next internal page in sidebar order.
    pub next: Option<&'a LinkEntry>,
}

/// Site metadata, top navigation and sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavigationTree {
    site: SiteMetadata,
    nav: Vec<LinkEntry>,
    sidebar: Sidebar,
}

impl NavigationTree {
    /// Assemble a tree from already validated parts.
    #[must_use]
    pub fn new(site: SiteMetadata, nav: Vec<LinkEntry>, sidebar: Sidebar) -> Self {
        Self { site, nav, sidebar }
    }

    /// Site title and description.
    #[must_use]
    pub fn site(&self) -> &SiteMetadata {
        &self.site
    }

    /// Top navigation bar entries in declaration order.
    #[must_use]
    pub fn nav(&self) -> &[LinkEntry] {
        &self.nav
    }

    /// Full sidebar declaration.
    #[must_use]
    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    /// Sidebar to display on `route`.
    ///
    /// For route-scoped sidebars the longest matching prefix wins; `None` when
    /// no scope matches. A flat sidebar applies to every route.
    #[must_use]
    pub fn sidebar_for(&self, route: &str) -> Option<&SidebarSections> {
        match &self.sidebar {
            Sidebar::Flat(sections) => Some(sections),
            Sidebar::Scoped(scopes) => {
                let route = normalize_route(route);
                scopes
                    .iter()
                    .filter(|scope| scope.matches(&route))
                    .max_by_key(|scope| scope.prefix().len())
                    .map(|scope| scope.sections())
            }
        }
    }

    /// All sidebar leaves in document order, across every scope.
    pub fn links(&self) -> impl Iterator<Item = &LinkEntry> {
        let sections: Vec<&SidebarSections> = match &self.sidebar {
            Sidebar::Flat(sections) => vec![sections],
            Sidebar::Scoped(scopes) => scopes.iter().map(SidebarScope::sections).collect(),
        };
        let mut links = Vec::new();
        for section in sections {
            section.walk_links(&mut |link, _| links.push(link));
        }
        links.into_iter()
    }

    /// Labels of the groups enclosing the sidebar entry for `route`,
    /// outermost first.
    ///
    /// Returns `None` when the route has no entry in its sidebar.
    #[must_use]
    pub fn trail(&self, route: &str) -> Option<Vec<&str>> {
        let sections = self.sidebar_for(route)?;
        let wanted = normalize_route(route);
        let wanted = route_path(&wanted);

        let mut found = None;
        sections.walk_links(&mut |link, trail| {
            if found.is_none() && addresses(link, wanted) {
                found = Some(trail.to_vec());
            }
        });
        found
    }

    /// Previous and next internal pages around `route` in its sidebar.
    ///
    /// External links are skipped. When the route appears more than once,
    /// the first occurrence decides.
    #[must_use]
    pub fn prev_next(&self, route: &str) -> PrevNext<'_> {
        let Some(sections) = self.sidebar_for(route) else {
            return PrevNext::default();
        };
        let wanted = normalize_route(route);
        let wanted = route_path(&wanted);

        let mut pages = Vec::new();
        sections.walk_links(&mut |link, _| {
            if link.is_internal() {
                pages.push(link);
            }
        });

        let Some(pos) = pages.iter().position(|link| addresses(link, wanted)) else {
            return PrevNext::default();
        };
        PrevNext {
            prev: pos.checked_sub(1).and_then(|i| pages.get(i).copied()),
            next: pages.get(pos + 1).copied(),
        }
    }
}

/// Whether `link` points at the normalized route `wanted`. Links are
/// normalized again so trees built by hand match as resolved ones do.
fn addresses(link: &LinkEntry, wanted: &str) -> bool {
    link.is_internal() && normalize_route(link.route()) == wanted
}

/// Route part of a link, without query or fragment.
fn route_path(link: &str) -> &str {
    link.split(['?', '#']).next().unwrap_or(link)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::item::{Group, NavItem};

    fn link(text: &str, target: &str) -> LinkEntry {
        LinkEntry::new(text, target).unwrap()
    }

    fn group(text: &str, items: Vec<NavItem>) -> Group {
        Group::new(text, items).unwrap()
    }

    fn site() -> SiteMetadata {
        SiteMetadata::new("Docs", "Documentation").unwrap()
    }

    fn guide_tree() -> NavigationTree {
        let sidebar = Sidebar::Flat(SidebarSections::Groups(vec![
            group(
                "Introduction",
                vec![
                    link("Getting Started", "/guide/").into(),
                    link("Installation", "/guide/install").into(),
                ],
            ),
            group(
                "Advanced",
                vec![
                    group(
                        "Internals",
                        vec![link("Storage", "/guide/storage").into()],
                    )
                    .into(),
                    link("Changelog", "https://example.com/changelog").into(),
                    link("Deploy", "/guide/deploy").into(),
                ],
            ),
        ]));
        NavigationTree::new(site(), vec![link("Home", "/")], sidebar)
    }

    #[test]
    fn test_site_metadata_rejects_empty_title() {
        assert_eq!(
            SiteMetadata::new("", "x"),
            Err(MissingMetadata { field: "title" })
        );
    }

    #[test]
    fn test_site_metadata_rejects_blank_description() {
        assert_eq!(
            SiteMetadata::new("Docs", "  "),
            Err(MissingMetadata {
                field: "description"
            })
        );
    }

    #[test]
    fn test_links_in_document_order() {
        let tree = guide_tree();
        let links: Vec<_> = tree.links().map(LinkEntry::text).collect();
        assert_eq!(
            links,
            vec![
                "Getting Started",
                "Installation",
                "Storage",
                "Changelog",
                "Deploy"
            ]
        );
    }

    #[test]
    fn test_trail_for_nested_page() {
        let tree = guide_tree();
        assert_eq!(
            tree.trail("/guide/storage"),
            Some(vec!["Advanced", "Internals"])
        );
    }

    #[test]
    fn test_trail_normalizes_route() {
        let tree = guide_tree();
        assert_eq!(tree.trail("/guide/index.md"), Some(vec!["Introduction"]));
        assert_eq!(
            tree.trail("/guide/install.html#linux"),
            Some(vec!["Introduction"])
        );
    }

    #[test]
    fn test_lookups_match_unnormalized_links() {
        let sidebar = Sidebar::Flat(SidebarSections::Groups(vec![group(
            "Pages",
            vec![
                link("A", "/a.md").into(),
                link("B", "/b/index.html").into(),
            ],
        )]));
        let tree = NavigationTree::new(site(), Vec::new(), sidebar);

        assert_eq!(tree.trail("/a.md"), Some(vec!["Pages"]));
        assert_eq!(tree.trail("/a"), Some(vec!["Pages"]));
        assert_eq!(tree.prev_next("/a").next.map(LinkEntry::text), Some("B"));
        assert_eq!(tree.prev_next("/b/").prev.map(LinkEntry::text), Some("A"));
    }

    #[test]
    fn test_trail_unknown_route() {
        let tree = guide_tree();
        assert_eq!(tree.trail("/missing"), None);
    }

    #[test]
    fn test_prev_next_skips_external_links() {
        let tree = guide_tree();
        let around = tree.prev_next("/guide/storage");

        assert_eq!(around.prev.map(LinkEntry::text), Some("Installation"));
        assert_eq!(around.next.map(LinkEntry::text), Some("Deploy"));
    }

    #[test]
    fn test_prev_next_at_edges() {
        let tree = guide_tree();

        let first = tree.prev_next("/guide/");
        assert!(first.prev.is_none());
        assert_eq!(first.next.map(LinkEntry::text), Some("Installation"));

        let last = tree.prev_next("/guide/deploy");
        assert_eq!(last.prev.map(LinkEntry::text), Some("Storage"));
        assert!(last.next.is_none());
    }

    #[test]
    fn test_prev_next_unknown_route() {
        let tree = guide_tree();
        assert_eq!(tree.prev_next("/nowhere"), PrevNext::default());
    }

    #[test]
    fn test_sidebar_for_scoped_picks_longest_prefix() {
        let guide = SidebarSections::Single(vec![link("Guide", "/guide/").into()]);
        let advanced = SidebarSections::Single(vec![link("Deep", "/guide/advanced/").into()]);
        let sidebar = Sidebar::Scoped(vec![
            SidebarScope::new("/guide/", guide.clone()),
            SidebarScope::new("/guide/advanced/", advanced.clone()),
        ]);
        let tree = NavigationTree::new(site(), Vec::new(), sidebar);

        assert_eq!(tree.sidebar_for("/guide/intro"), Some(&guide));
        assert_eq!(tree.sidebar_for("/guide/advanced/x"), Some(&advanced));
        assert_eq!(tree.sidebar_for("/api/"), None);
    }

    #[test]
    fn test_links_cover_all_scopes() {
        let sidebar = Sidebar::Scoped(vec![
            SidebarScope::new(
                "/guide/",
                SidebarSections::Single(vec![link("Guide", "/guide/").into()]),
            ),
            SidebarScope::new(
                "/api/",
                SidebarSections::Single(vec![link("API", "/api/").into()]),
            ),
        ]);
        let tree = NavigationTree::new(site(), Vec::new(), sidebar);

        let links: Vec<_> = tree.links().map(LinkEntry::link).collect();
        assert_eq!(links, vec!["/guide/", "/api/"]);
    }

    #[test]
    fn test_tree_is_send_and_sync() {
        static_assertions::assert_impl_all!(NavigationTree: Send, Sync, Clone);
    }
}
