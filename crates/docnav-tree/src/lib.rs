//! Navigation tree model and resolver for documentation sites.
//!
//! This crate turns an untyped site configuration (site metadata, a top
//! navigation bar and a sidebar tree) into an immutable, validated
//! [`NavigationTree`] that a rendering layer consumes to build page chrome.
//!
//! - [`resolve`] / [`Resolver`]: raw configuration to [`Resolved`] (tree plus
//!   [`Diagnostic`]s), or a [`ConfigValidationError`] naming the exact path of
//!   the defect
//! - [`NavItem`]: the sidebar sum type, a [`LinkEntry`] leaf or a [`Group`]
//! - [`NavigationTree::sidebar_for`], [`NavigationTree::trail`],
//!   [`NavigationTree::prev_next`]: render-time lookups
//! - [`NavigationTree::to_raw`]: serialization back into the raw shape
//!
//! Resolution is pure: it performs no I/O and keeps no global state, so
//! independent inputs can be resolved concurrently.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let raw = json!({
//!     "title": "RusChain",
//!     "description": "Experimental 2-layered blockchain",
//!     "nav": [{"text": "Home", "link": "/"}],
//!     "sidebar": [
//!         {"text": "Introduction", "items": [{"text": "get started", "link": "/"}]}
//!     ]
//! });
//!
//! let resolved = docnav_tree::resolve(&raw).unwrap();
//! assert_eq!(resolved.tree.nav().len(), 1);
//! assert_eq!(resolved.tree.trail("/"), Some(vec!["Introduction"]));
//! assert!(resolved.diagnostics.is_empty());
//! ```

mod diagnostic;
mod error;
mod item;
mod link;
mod path;
mod raw;
mod resolve;
mod tree;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use error::{
    ConfigValidationError, InvalidGroup, InvalidLinkEntry, MissingMetadata, ResolveErrorKind,
};
pub use item::{Group, NavItem, Sidebar, SidebarScope, SidebarSections};
pub use link::{LinkEntry, LinkTarget, normalize_route};
pub use path::{NodePath, Segment};
pub use resolve::{DEFAULT_MAX_DEPTH, ResolveOptions, Resolved, Resolver, resolve};
pub use tree::{NavigationTree, PrevNext, SiteMetadata};
