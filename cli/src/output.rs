//! Styled terminal output.

use console::{Term, style};
use std::fmt::Display;

/// Writes status lines and tables to stdout.
pub struct Output {
    term: Term,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    pub fn success(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&format!("{} {}", style("✓").green().bold(), message)),
        );
    }

    pub fn error(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&format!("{} {}", style("✗").red().bold(), message)),
        );
    }

    /// Print a plain message without any prefix.
    pub fn print(&self, message: impl Display) {
        drop(self.term.write_line(&message.to_string()));
    }

    pub fn header(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&style(message).bold().cyan().to_string()),
        );
    }

    pub fn dim(&self, message: impl Display) {
        drop(self.term.write_line(&style(message).dim().to_string()));
    }

    /// Footer under a page of results: `Page 2 / 5, 93 record(s)`.
    pub fn page_footer(&self, index: u32, page_count: u64, total: u64) {
        drop(self.term.write_line(&format!(
            "{} {} / {}, {} record(s)",
            style("Page").dim(),
            style(index).cyan().bold(),
            page_count.max(1),
            style(total).cyan()
        )));
    }
}
