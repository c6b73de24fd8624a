//! Colored terminal output utilities.

use console::{Style, Term};
use docnav_tree::Diagnostic;

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
    green: Style,
    yellow: Style,
    yellow_bold: Style,
    red: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            yellow_bold: Style::new().yellow().bold(),
            red: Style::new().red(),
        }
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.term.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print a diagnostic: location in bold, finding in plain yellow.
    pub(crate) fn diagnostic(&self, diagnostic: &Diagnostic) {
        let line = format!(
            "{} {}",
            self.yellow_bold
                .apply_to(format!("warning: {}:", diagnostic.path)),
            self.yellow.apply_to(&diagnostic.kind),
        );
        let _ = self.term.write_line(&line);
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }
}
