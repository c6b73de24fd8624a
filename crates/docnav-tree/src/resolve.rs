//! Raw configuration to [`NavigationTree`] resolution.
//!
//! The resolver is the only place that looks at untyped input. It walks the
//! raw structure once, classifies every sidebar descriptor as a link or a
//! group, and either returns a complete tree with its diagnostics or a single
//! located error. A partial tree is never returned.
//!
//! # Raw shape
//!
//! ```text
//! title: string                 (required)
//! description: string           (required)
//! nav: [ {text, link} ]         (optional)
//! sidebar: [ group ] | [ item ] | { "/prefix/": [ ... ] }   (optional)
//! themeConfig: { nav, sidebar } (optional, alternative location)
//! ```

use serde_json::{Map, Value};

use crate::diagnostic::{self, Diagnostic, DiagnosticKind};
use crate::error::{
    ConfigValidationError, InvalidGroup, InvalidLinkEntry, MissingMetadata, ResolveErrorKind,
};
use crate::item::{Group, NavItem, Sidebar, SidebarScope, SidebarSections};
use crate::link::LinkEntry;
use crate::path::NodePath;
use crate::tree::{NavigationTree, SiteMetadata};

/// Default maximum sidebar group nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Key of the VitePress-style theme section holding `nav` and `sidebar`.
const THEME_KEY: &str = "themeConfig";

const LINK_KEYS: &[&str] = &["text", "link"];
const GROUP_KEYS: &[&str] = &["text", "items", "collapsed", "link"];

type Result<T> = std::result::Result<T, ConfigValidationError>;

/// Resolver settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Deepest allowed group nesting; top-level groups are depth 1.
    pub max_depth: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Successful resolution: the tree plus non-fatal findings.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Resolved {
    /// Render-ready navigation tree.
    pub tree: NavigationTree,
    /// Lint findings, in input order (parse-time findings first).
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolve raw configuration with default options.
///
/// # Errors
///
/// Returns [`ConfigValidationError`] locating the first structural defect.
pub fn resolve(raw: &Value) -> Result<Resolved> {
    Resolver::default().resolve(raw)
}

/// Navigation tree resolver.
///
/// Holds no state between calls; one resolver can serve concurrent
/// resolutions of independent inputs.
#[derive(Clone, Debug, Default)]
pub struct Resolver {
    options: ResolveOptions,
}

impl Resolver {
    /// Create a resolver with the given options.
    #[must_use]
    pub fn new(options: ResolveOptions) -> Self {
        Self { options }
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> ResolveOptions {
        self.options
    }

    /// Resolve raw configuration into a navigation tree.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigValidationError`] when metadata is missing, a link
    /// entry or group is malformed, sidebar groups nest deeper than
    /// [`ResolveOptions::max_depth`], or a value has the wrong shape.
    pub fn resolve(&self, raw: &Value) -> Result<Resolved> {
        let root = NodePath::root();
        let map = expect_map(raw, &root)?;

        let site = parse_site(map)?;
        let layout = Layout::detect(map)?;

        let mut parser = Parser {
            max_depth: self.options.max_depth,
            diagnostics: Vec::new(),
        };
        let nav = parser.nav(layout.nav, &layout.nav_path)?;
        let sidebar = parser.sidebar(layout.sidebar, &layout.sidebar_path)?;
        let tree = NavigationTree::new(site, nav, sidebar);

        let mut diagnostics = parser.diagnostics;
        diagnostics.extend(diagnostic::lint(
            &tree,
            &layout.nav_path,
            &layout.sidebar_path,
        ));

        tracing::debug!(
            title = tree.site().title(),
            nav = tree.nav().len(),
            sidebar_links = tree.links().count(),
            diagnostics = diagnostics.len(),
            "Resolved navigation tree"
        );
        for diagnostic in &diagnostics {
            tracing::debug!(path = %diagnostic.path, "{}", diagnostic.kind);
        }

        Ok(Resolved { tree, diagnostics })
    }
}

/// Where `nav` and `sidebar` were found in the raw input.
struct Layout<'a> {
    nav: Option<&'a Value>,
    nav_path: NodePath,
    sidebar: Option<&'a Value>,
    sidebar_path: NodePath,
}

impl<'a> Layout<'a> {
    fn detect(map: &'a Map<String, Value>) -> Result<Self> {
        let root = NodePath::root();
        let theme_path = root.key(THEME_KEY);
        let theme = match map.get(THEME_KEY) {
            None | Some(Value::Null) => None,
            Some(value) => Some(expect_map(value, &theme_path)?),
        };

        let locate = |key: &'static str| -> Result<(Option<&'a Value>, NodePath)> {
            let top = present(map.get(key));
            let themed = theme.and_then(|theme| present(theme.get(key)));
            match (top, themed) {
                (Some(_), Some(_)) => Err(ConfigValidationError::new(
                    root.key(key),
                    ResolveErrorKind::ConflictingSections { key },
                )),
                (None, Some(value)) => Ok((Some(value), theme_path.key(key))),
                (top, None) => Ok((top, root.key(key))),
            }
        };

        let (nav, nav_path) = locate("nav")?;
        let (sidebar, sidebar_path) = locate("sidebar")?;
        Ok(Self {
            nav,
            nav_path,
            sidebar,
            sidebar_path,
        })
    }
}

/// Treat an explicit `null` like an absent key.
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|value| !value.is_null())
}

fn parse_site(map: &Map<String, Value>) -> Result<SiteMetadata> {
    let title = site_field(map, "title")?;
    let description = site_field(map, "description")?;
    SiteMetadata::new(title, description)
        .map_err(|e| ConfigValidationError::new(NodePath::root().key(e.field), e))
}

fn site_field<'a>(map: &'a Map<String, Value>, name: &'static str) -> Result<&'a str> {
    let path = NodePath::root().key(name);
    match present(map.get(name)) {
        None => Err(ConfigValidationError::new(
            path,
            MissingMetadata { field: name },
        )),
        Some(Value::String(value)) => Ok(value),
        Some(other) => Err(shape_error(path, "string", other)),
    }
}

/// Recursive descent over `nav` and `sidebar`, collecting parse-time
/// diagnostics.
struct Parser {
    max_depth: usize,
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    fn nav(&mut self, value: Option<&Value>, path: &NodePath) -> Result<Vec<LinkEntry>> {
        let Some(entries) = value else {
            return Ok(Vec::new());
        };
        let entries = expect_sequence(entries, path)?;
        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| self.link_entry(entry, &path.index(i)))
            .collect()
    }

    fn sidebar(&mut self, value: Option<&Value>, path: &NodePath) -> Result<Sidebar> {
        match value {
            None => Ok(Sidebar::default()),
            Some(Value::Array(items)) => Ok(Sidebar::Flat(self.sections(items, path)?)),
            Some(Value::Object(scopes)) => scopes
                .iter()
                .map(|(prefix, value)| {
                    let scope_path = path.key(prefix.as_str());
                    let items = expect_sequence(value, &scope_path)?;
                    let sections = self.sections(items, &scope_path)?;
                    Ok(SidebarScope::new(prefix.as_str(), sections))
                })
                .collect::<Result<Vec<_>>>()
                .map(Sidebar::Scoped),
            Some(other) => Err(shape_error(path.clone(), "sequence or map", other)),
        }
    }

    /// One sidebar sequence. Any leaf at the top level switches to the
    /// single-section form, where the sequence is one implicit group.
    fn sections(&mut self, items: &[Value], path: &NodePath) -> Result<SidebarSections> {
        if items.iter().any(is_leaf_shaped) {
            return self.items(items, path, 1).map(SidebarSections::Single);
        }
        items
            .iter()
            .enumerate()
            .map(|(i, item)| self.group(item, &path.index(i), 1))
            .collect::<Result<Vec<_>>>()
            .map(SidebarSections::Groups)
    }

    /// Children of a group at `depth`.
    fn items(&mut self, items: &[Value], path: &NodePath, depth: usize) -> Result<Vec<NavItem>> {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| self.item(item, &path.index(i), depth))
            .collect()
    }

    /// Classify a sidebar item: branch wins over leaf.
    fn item(&mut self, value: &Value, path: &NodePath, parent_depth: usize) -> Result<NavItem> {
        let map = expect_map(value, path)?;
        if present(map.get("items")).is_some() {
            self.group(value, path, parent_depth + 1).map(NavItem::Group)
        } else if present(map.get("link")).is_some() {
            self.link_entry(value, path).map(NavItem::Link)
        } else {
            Err(ConfigValidationError::new(
                path.clone(),
                ResolveErrorKind::UnclassifiableItem,
            ))
        }
    }

    fn group(&mut self, value: &Value, path: &NodePath, depth: usize) -> Result<Group> {
        if depth > self.max_depth {
            return Err(ConfigValidationError::new(
                path.clone(),
                ResolveErrorKind::SidebarTooDeep {
                    max_depth: self.max_depth,
                },
            ));
        }
        let map = expect_map(value, path)?;

        let text = match present(map.get("text")) {
            None => return Err(group_error(path, InvalidGroup::MissingText)),
            Some(Value::String(text)) if text.trim().is_empty() => {
                return Err(group_error(path, InvalidGroup::EmptyText));
            }
            Some(Value::String(text)) => text,
            Some(_) => {
                return Err(group_error(
                    path,
                    InvalidGroup::WrongType {
                        field: "text",
                        expected: "string",
                    },
                ));
            }
        };
        let items = match present(map.get("items")) {
            None => return Err(group_error(path, InvalidGroup::MissingItems)),
            Some(items) => expect_sequence(items, &path.key("items"))?,
        };
        let collapsed = match present(map.get("collapsed")) {
            None => None,
            Some(Value::Bool(collapsed)) => Some(*collapsed),
            Some(_) => {
                return Err(group_error(
                    path,
                    InvalidGroup::WrongType {
                        field: "collapsed",
                        expected: "boolean",
                    },
                ));
            }
        };

        if let Some(link) = present(map.get("link")) {
            let link = match link {
                Value::String(link) => link.clone(),
                other => other.to_string(),
            };
            self.warn(path, DiagnosticKind::IgnoredLink { link });
        }
        self.unknown_keys(map, GROUP_KEYS, path);

        let children = self.items(items, &path.key("items"), depth)?;
        let group = Group::new(text.as_str(), children).map_err(|e| group_error(path, e))?;
        Ok(group.with_collapsed(collapsed))
    }

    fn link_entry(&mut self, value: &Value, path: &NodePath) -> Result<LinkEntry> {
        let map = expect_map(value, path)?;
        let text = string_field(map, "text", InvalidLinkEntry::MissingText)
            .map_err(|e| link_error(path, e))?;
        let link = string_field(map, "link", InvalidLinkEntry::MissingLink)
            .map_err(|e| link_error(path, e))?;
        let entry = LinkEntry::new(text, link).map_err(|e| link_error(path, e))?;
        self.unknown_keys(map, LINK_KEYS, path);
        Ok(entry.normalized())
    }

    fn unknown_keys(&mut self, map: &Map<String, Value>, known: &[&str], path: &NodePath) {
        for (key, value) in map {
            if !value.is_null() && !known.contains(&key.as_str()) {
                self.warn(path, DiagnosticKind::UnknownKey { key: key.clone() });
            }
        }
    }

    fn warn(&mut self, path: &NodePath, kind: DiagnosticKind) {
        self.diagnostics.push(Diagnostic::new(path.clone(), kind));
    }
}

/// Leaf-shaped: a map with `link` and without `items`, `null` counting as
/// absent.
fn is_leaf_shaped(value: &Value) -> bool {
    value.as_object().is_some_and(|map| {
        present(map.get("link")).is_some() && present(map.get("items")).is_none()
    })
}

fn string_field<'a>(
    map: &'a Map<String, Value>,
    field: &'static str,
    missing: InvalidLinkEntry,
) -> std::result::Result<&'a str, InvalidLinkEntry> {
    match present(map.get(field)) {
        None => Err(missing),
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(InvalidLinkEntry::NotAString { field }),
    }
}

fn expect_map<'a>(value: &'a Value, path: &NodePath) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| shape_error(path.clone(), "map", value))
}

fn expect_sequence<'a>(value: &'a Value, path: &NodePath) -> Result<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| shape_error(path.clone(), "sequence", value))
}

fn shape_error(path: NodePath, expected: &'static str, found: &Value) -> ConfigValidationError {
    ConfigValidationError::new(
        path,
        ResolveErrorKind::InvalidShape {
            expected,
            found: shape_name(found),
        },
    )
}

fn link_error(path: &NodePath, e: InvalidLinkEntry) -> ConfigValidationError {
    ConfigValidationError::new(path.clone(), e)
}

fn group_error(path: &NodePath, e: InvalidGroup) -> ConfigValidationError {
    ConfigValidationError::new(path.clone(), e)
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "map",
    }
}
