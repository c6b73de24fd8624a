//! Dump command implementation.

use std::io::Write;

use clap::Args;
use docnav_tree::Resolved;

use super::SiteArgs;
use crate::error::CliError;

/// Arguments for the dump command.
#[derive(Args, Debug)]
pub(crate) struct DumpArgs {
    #[command(flatten)]
    pub(crate) site: SiteArgs,

    /// Print the normalized raw configuration instead of the typed tree.
    #[arg(long)]
    pub(crate) raw: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl DumpArgs {
    /// Execute the dump command.
    ///
    /// # Errors
    ///
    /// Returns an error if the site cannot be resolved or stdout is closed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let loaded = self.site.load(None)?;
        let rendered = render(&loaded.resolved, self.raw)?;

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{rendered}")?;
        Ok(())
    }
}

fn render(resolved: &Resolved, raw: bool) -> Result<String, serde_json::Error> {
    if raw {
        serde_json::to_string_pretty(&resolved.tree.to_raw())
    } else {
        serde_json::to_string_pretty(resolved)
    }
}
