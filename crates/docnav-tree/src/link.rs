//! Link Entry: the atomic unit of navigation.

use std::borrow::Cow;

use serde::Serialize;

use crate::error::InvalidLinkEntry;

/// Where a link points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkTarget {
    /// Route inside the site (starts with `/`).
    Internal,
    /// Anything else: absolute URL, `mailto:`, relative reference.
    External,
}

/// A display label paired with a destination path or URL.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct LinkEntry {
    text: String,
    link: String,
}

impl LinkEntry {
    /// Create a link entry.
    ///
    /// The link is stored verbatim; route normalization happens during
    /// resolution.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidLinkEntry::EmptyText`] when `text` is empty or
    /// whitespace-only, and [`InvalidLinkEntry::EmptyLink`] when `link` is.
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Result<Self, InvalidLinkEntry> {
        let text = text.into();
        let link = link.into();
        if text.trim().is_empty() {
            return Err(InvalidLinkEntry::EmptyText);
        }
        if link.trim().is_empty() {
            return Err(InvalidLinkEntry::EmptyLink);
        }
        Ok(Self { text, link })
    }

    /// Display label.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Destination path or URL.
    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Whether the link is an internal route or an external URL.
    #[must_use]
    pub fn target(&self) -> LinkTarget {
        if self.link.starts_with('/') {
            LinkTarget::Internal
        } else {
            LinkTarget::External
        }
    }

    /// Shorthand for `target() == LinkTarget::Internal`.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        self.target() == LinkTarget::Internal
    }

    /// Route without query string or fragment, for page matching.
    #[must_use]
    pub fn route(&self) -> &str {
        split_suffix(&self.link).0
    }

    /// Normalize internal routes in place; external links are left as is.
    pub(crate) fn normalized(mut self) -> Self {
        if self.is_internal()
            && let Cow::Owned(route) = normalize_route(&self.link)
        {
            self.link = route;
        }
        self
    }
}

/// Page extensions that address the same route as the bare path.
const PAGE_EXTENSIONS: [&str; 2] = [".md", ".html"];

/// Normalize an internal route the way pages are addressed.
///
/// Strips trailing `.md`/`.html` extensions and collapses a trailing `index`
/// segment to its directory (`/guide/index.md` becomes `/guide/`). Query
/// strings and fragments are preserved. Applying it twice gives the same
/// result as applying it once.
#[must_use]
pub fn normalize_route(route: &str) -> Cow<'_, str> {
    let (path, suffix) = split_suffix(route);

    let mut trimmed = path;
    while let Some(stripped) = PAGE_EXTENSIONS
        .iter()
        .find_map(|ext| trimmed.strip_suffix(ext))
    {
        trimmed = stripped;
    }
    if let Some(dir) = trimmed.strip_suffix("index")
        && dir.ends_with('/')
    {
        trimmed = dir;
    }

    if trimmed.len() == path.len() {
        Cow::Borrowed(route)
    } else {
        Cow::Owned(format!("{trimmed}{suffix}"))
    }
}

/// Split `/path?query#fragment` into `/path` and `?query#fragment`.
fn split_suffix(link: &str) -> (&str, &str) {
    match link.find(['?', '#']) {
        Some(pos) => link.split_at(pos),
        None => (link, ""),
    }
}
