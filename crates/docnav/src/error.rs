//! CLI error types.

use std::path::PathBuf;

use docnav_config::ConfigError;
use docnav_config::source::SourceError;
use docnav_tree::ConfigValidationError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Source(#[from] SourceError),

    #[error("{}: {source}", path.display())]
    Resolve {
        path: PathBuf,
        source: ConfigValidationError,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} diagnostic(s) reported in strict mode")]
    DiagnosticsPresent(usize),
}
