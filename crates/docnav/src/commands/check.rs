//! Check command implementation.

use clap::Args;
use docnav_tree::{Diagnostic, NavigationTree};

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub(crate) site: SiteArgs,

    /// Fail when any diagnostic is reported.
    #[arg(long, conflicts_with = "no_strict")]
    strict: bool,

    /// Report diagnostics without failing (overrides lint.strict).
    #[arg(long, conflicts_with = "strict")]
    no_strict: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the site cannot be resolved, or if diagnostics
    /// are present in strict mode.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let loaded = self.site.load(self.resolve_strict())?;
        let diagnostics = &loaded.resolved.diagnostics;

        for diagnostic in diagnostics {
            output.diagnostic(diagnostic);
        }
        output.success(&summary(&loaded.resolved.tree, diagnostics));

        if loaded.config.lint.strict && !diagnostics.is_empty() {
            return Err(CliError::DiagnosticsPresent(diagnostics.len()));
        }
        Ok(())
    }

    /// Resolve strict mode from CLI flags.
    ///
    /// Returns `Some(true)` for `--strict`, `Some(false)` for `--no-strict`,
    /// or `None` to use the config file setting.
    pub(crate) fn resolve_strict(&self) -> Option<bool> {
        if self.strict {
            Some(true)
        } else if self.no_strict {
            Some(false)
        } else {
            None
        }
    }
}

fn summary(tree: &NavigationTree, diagnostics: &[Diagnostic]) -> String {
    format!(
        "{}: {} nav link(s), {} sidebar link(s), {} diagnostic(s)",
        tree.site().title(),
        tree.nav().len(),
        tree.links().count(),
        diagnostics.len()
    )
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    /// Write a strict `docnav.toml` and a site with one empty group.
    fn strict_site(dir: &Path) -> std::path::PathBuf {
        let site = json!({
            "title": "Docs",
            "description": "Handbook",
            "sidebar": [
                {"text": "Guide", "items": [{"text": "Intro", "link": "/guide/"}]},
                {"text": "Drafts", "items": []}
            ]
        });
        std::fs::write(dir.join("site.json"), site.to_string()).unwrap();

        let config = dir.join("docnav.toml");
        std::fs::write(
            &config,
            "[site]\nsource = \"site.json\"\n\n[lint]\nstrict = true\n",
        )
        .unwrap();
        config
    }

    fn check_args(config: std::path::PathBuf, strict: bool, no_strict: bool) -> CheckArgs {
        CheckArgs {
            site: SiteArgs {
                site: None,
                config: Some(config),
                max_depth: None,
            },
            strict,
            no_strict,
            verbose: false,
        }
    }

    #[test]
    fn test_strict_config_fails_on_diagnostics() {
        let dir = tempfile::tempdir().unwrap();
        let config = strict_site(dir.path());

        let err = check_args(config, false, false).execute().unwrap_err();

        assert!(matches!(err, CliError::DiagnosticsPresent(1)));
    }

    #[test]
    fn test_no_strict_flag_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = strict_site(dir.path());

        assert!(check_args(config, false, true).execute().is_ok());
    }

    #[test]
    fn test_summary_counts_links_and_diagnostics() {
        let resolved = docnav_tree::resolve(&json!({
            "title": "RusChain",
            "description": "Experimental 2-layered blockchain",
            "nav": [{"text": "Home", "link": "/"}],
            "sidebar": [
                {"text": "Introduction", "items": [
                    {"text": "get started", "link": "/"},
                    {"text": "again", "link": "/"}
                ]},
                {"text": "Empty", "items": []}
            ]
        }))
        .unwrap();

        assert_eq!(
            summary(&resolved.tree, &resolved.diagnostics),
            "RusChain: 1 nav link(s), 2 sidebar link(s), 2 diagnostic(s)"
        );
    }
}
