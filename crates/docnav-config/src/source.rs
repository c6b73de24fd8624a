//! Site configuration loading.
//!
//! Reads the site configuration file (title, description, nav, sidebar) and
//! turns it into the untyped [`serde_json::Value`] that
//! [`docnav_tree::Resolver`] consumes. The format is chosen by extension:
//! `.json`, `.yaml`/`.yml` or `.toml`.

use std::path::{Path, PathBuf};

use serde_json::Value;

/// Supported site configuration formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceFormat {
    /// JSON (`.json`).
    Json,
    /// YAML (`.yaml`, `.yml`).
    Yaml,
    /// TOML (`.toml`).
    Toml,
}

impl SourceFormat {
    /// Detect the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Error loading a site configuration file.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Site configuration file does not exist.
    #[error("Site configuration not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error reading the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// Malformed YAML.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Malformed TOML.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// Extension is not one of the supported formats.
    #[error("Unsupported site configuration format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Parse site configuration content in the given format.
///
/// Empty or whitespace-only content parses as an empty map, which the
/// resolver then rejects for missing metadata.
///
/// # Errors
///
/// Returns the format's parse error for malformed content.
pub fn parse_source(content: &str, format: SourceFormat) -> Result<Value, SourceError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }

    let value = match format {
        SourceFormat::Json => serde_json::from_str(trimmed)?,
        SourceFormat::Yaml => serde_yaml::from_str(trimmed)?,
        SourceFormat::Toml => toml::from_str(trimmed)?,
    };
    Ok(value)
}

/// Read and parse a site configuration file.
///
/// # Errors
///
/// Returns [`SourceError::NotFound`] if the file is missing,
/// [`SourceError::UnsupportedFormat`] for unknown extensions, or a parse error.
pub fn load_source(path: &Path) -> Result<Value, SourceError> {
    let format =
        SourceFormat::from_path(path).ok_or_else(|| SourceError::UnsupportedFormat(path.into()))?;
    if !path.exists() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let value = parse_source(&content, format)?;
    tracing::debug!(path = %path.display(), format = ?format, "Loaded site configuration");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn ruschain() -> Value {
        json!({
            "title": "RusChain",
            "description": "Experimental 2-layered blockchain",
            "nav": [{"text": "Home", "link": "/"}],
            "sidebar": [
                {"text": "Introduction", "items": [{"text": "get started", "link": "/"}]}
            ]
        })
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            SourceFormat::from_path(Path::new("site.json")),
            Some(SourceFormat::Json)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("site.YML")),
            Some(SourceFormat::Yaml)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("docs/site.toml")),
            Some(SourceFormat::Toml)
        );
        assert_eq!(SourceFormat::from_path(Path::new("config.js")), None);
        assert_eq!(SourceFormat::from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
title: RusChain
description: Experimental 2-layered blockchain
nav:
  - text: Home
    link: /
sidebar:
  - text: Introduction
    items:
      - text: get started
        link: /
"#;
        assert_eq!(parse_source(yaml, SourceFormat::Yaml).unwrap(), ruschain());
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
title = "RusChain"
description = "Experimental 2-layered blockchain"

[[nav]]
text = "Home"
link = "/"

[[sidebar]]
text = "Introduction"

[[sidebar.items]]
text = "get started"
link = "/"
"#;
        assert_eq!(parse_source(toml, SourceFormat::Toml).unwrap(), ruschain());
    }

    #[test]
    fn test_parse_json() {
        let json = ruschain().to_string();
        assert_eq!(parse_source(&json, SourceFormat::Json).unwrap(), ruschain());
    }

    #[test]
    fn test_parse_empty_is_empty_map() {
        let value = parse_source("  \n", SourceFormat::Yaml).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = parse_source("title: [broken", SourceFormat::Yaml).unwrap_err();
        assert!(matches!(err, SourceError::Yaml(_)));
    }

    #[test]
    fn test_load_source_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(&path, ruschain().to_string()).unwrap();

        assert_eq!(load_source(&path).unwrap(), ruschain());
    }

    #[test]
    fn test_load_source_missing_file() {
        let err = load_source(Path::new("/nonexistent/site.yaml")).unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
    }

    #[test]
    fn test_load_source_unsupported_format() {
        let err = load_source(Path::new("docs/.vitepress/config.js")).unwrap_err();
        assert!(matches!(err, SourceError::UnsupportedFormat(_)));
        assert!(err.to_string().contains("config.js"));
    }

    #[test]
    fn test_loaded_source_resolves() {
        let value = parse_source(
            "title: Docs\ndescription: Handbook\nthemeConfig:\n  nav:\n    - text: Home\n      link: /\n",
            SourceFormat::Yaml,
        )
        .unwrap();

        let resolved = docnav_tree::resolve(&value).unwrap();

        assert_eq!(resolved.tree.nav()[0].text(), "Home");
    }
}
