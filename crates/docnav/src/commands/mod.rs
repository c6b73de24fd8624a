//! CLI command implementations.

mod check;
mod dump;

use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config};
use docnav_tree::{Resolved, Resolver};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use dump::DumpArgs;

/// Arguments shared by every command that resolves a site.
#[derive(Args, Debug)]
pub(crate) struct SiteArgs {
    /// Site configuration file (JSON, YAML or TOML).
    #[arg(value_name = "SITE")]
    pub(crate) site: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long, env = "DOCNAV_CONFIG")]
    pub(crate) config: Option<PathBuf>,

    /// Maximum sidebar nesting depth.
    #[arg(long, value_name = "N")]
    pub(crate) max_depth: Option<usize>,
}

/// A site configuration that was loaded and resolved.
pub(crate) struct LoadedSite {
    pub(crate) config: Config,
    pub(crate) resolved: Resolved,
}

impl SiteArgs {
    /// Load `docnav.toml`, read the site file and resolve it.
    ///
    /// # Errors
    ///
    /// Returns error if configuration loading, site parsing or resolution fails.
    pub(crate) fn load(&self, strict: Option<bool>) -> Result<LoadedSite, CliError> {
        let cli_settings = CliSettings {
            source: self.site.clone(),
            max_depth: self.max_depth,
            strict,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let raw = docnav_config::source::load_source(&config.source)?;
        let resolver = Resolver::new(config.resolve_options());
        let resolved = resolver
            .resolve(&raw)
            .map_err(|source| CliError::Resolve {
                path: config.source.clone(),
                source,
            })?;

        tracing::info!(
            source = %config.source.display(),
            diagnostics = resolved.diagnostics.len(),
            "Resolved site configuration"
        );

        Ok(LoadedSite { config, resolved })
    }
}
