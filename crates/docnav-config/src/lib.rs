//! Configuration management for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. The [`source`]
//! module loads the site configuration itself (JSON, YAML or TOML) into the
//! raw structure the resolver consumes.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `site.source` supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;
pub mod source;

use std::path::{Path, PathBuf};

use docnav_tree::{DEFAULT_MAX_DEPTH, ResolveOptions};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site configuration file.
    pub source: Option<PathBuf>,
    /// Override maximum sidebar depth.
    pub max_depth: Option<usize>,
    /// Override strict lint mode.
    pub strict: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Default site configuration path, relative to the config directory.
const DEFAULT_SOURCE: &str = "docs/.vitepress/config.json";

/// Upper bound accepted for `resolver.max_depth`.
const MAX_DEPTH_LIMIT: usize = 1024;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site source configuration (path is a relative string from TOML).
    site: SiteConfigRaw,
    /// Resolver configuration.
    pub resolver: ResolverConfig,
    /// Lint configuration.
    pub lint: LintConfig,

    /// Resolved site source path (set after loading).
    #[serde(skip)]
    pub source: PathBuf,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw site configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    source: Option<String>,
}

/// Resolver configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Deepest allowed sidebar group nesting.
    pub max_depth: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Lint configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Treat diagnostics as failures.
    pub strict: bool,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.source`").
        field: String,
        /// Error message (e.g., "${`DOCS_DIR`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the final configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            tracing::debug!(path = %discovered.display(), "Discovered config file");
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Options for [`docnav_tree::Resolver`].
    #[must_use]
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            max_depth: self.resolver.max_depth,
        }
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source) = &settings.source {
            self.source.clone_from(source);
        }
        if let Some(max_depth) = settings.max_depth {
            self.resolver.max_depth = max_depth;
        }
        if let Some(strict) = settings.strict {
            self.lint.strict = strict;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_config_from(&current)
    }

    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfigRaw::default(),
            resolver: ResolverConfig::default(),
            lint: LintConfig::default(),
            source: base.join(DEFAULT_SOURCE),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "site.source cannot be empty".to_owned(),
            ));
        }

        let max_depth = self.resolver.max_depth;
        if max_depth == 0 {
            return Err(ConfigError::Validation(
                "resolver.max_depth must be greater than 0".to_owned(),
            ));
        }
        if max_depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::Validation(format!(
                "resolver.max_depth cannot exceed {MAX_DEPTH_LIMIT}"
            )));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref source) = self.site.source {
            self.site.source = Some(expand::expand_env(source, "site.source")?);
        }
        Ok(())
    }

    /// Resolve the site source path against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.source = config_dir.join(self.site.source.as_deref().unwrap_or(DEFAULT_SOURCE));
    }
}
