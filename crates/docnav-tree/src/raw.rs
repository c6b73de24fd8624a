//! Serialization back into the raw configuration shape.
//!
//! [`NavigationTree::to_raw`] writes the flat layout (`nav` and `sidebar` at
//! the top level) with normalized links, so re-resolving its output yields an
//! equal tree.

use serde_json::{Map, Value, json};

use crate::item::{Group, NavItem, Sidebar, SidebarSections};
use crate::link::LinkEntry;
use crate::tree::NavigationTree;

impl NavigationTree {
    /// Raw form of this tree, accepted by [`resolve`](crate::resolve()).
    #[must_use]
    pub fn to_raw(&self) -> Value {
        json!({
            "title": self.site().title(),
            "description": self.site().description(),
            "nav": self.nav().iter().map(link_to_raw).collect::<Vec<_>>(),
            "sidebar": sidebar_to_raw(self.sidebar()),
        })
    }
}

fn sidebar_to_raw(sidebar: &Sidebar) -> Value {
    match sidebar {
        Sidebar::Flat(sections) => sections_to_raw(sections),
        Sidebar::Scoped(scopes) => Value::Object(
            scopes
                .iter()
                .map(|scope| (scope.prefix().to_owned(), sections_to_raw(scope.sections())))
                .collect::<Map<_, _>>(),
        ),
    }
}

fn sections_to_raw(sections: &SidebarSections) -> Value {
    match sections {
        SidebarSections::Groups(groups) => groups.iter().map(group_to_raw).collect(),
        SidebarSections::Single(items) => items.iter().map(item_to_raw).collect(),
    }
}

fn item_to_raw(item: &NavItem) -> Value {
    match item {
        NavItem::Link(link) => link_to_raw(link),
        NavItem::Group(group) => group_to_raw(group),
    }
}

fn group_to_raw(group: &Group) -> Value {
    let mut map = Map::new();
    map.insert("text".to_owned(), Value::from(group.text()));
    if let Some(collapsed) = group.collapsed() {
        map.insert("collapsed".to_owned(), Value::Bool(collapsed));
    }
    map.insert(
        "items".to_owned(),
        group.items().iter().map(item_to_raw).collect(),
    );
    Value::Object(map)
}

fn link_to_raw(link: &LinkEntry) -> Value {
    json!({ "text": link.text(), "link": link.link() })
}
