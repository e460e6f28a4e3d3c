//! User-facing output.
//!
//! A single warning or an informational line per command run. Behind a
//! trait so tests can record what was shown instead of parsing stderr.

use colored::Colorize;

/// Feedback channel for the command flows.
pub trait Console {
    /// Informational line on a success path.
    fn info(&self, message: &str);

    /// Warning explaining why the command stopped.
    fn warn(&self, message: &str);
}

/// Writes to stderr so `--print` output on stdout stays clean.
pub struct Terminal;

impl Console for Terminal {
    fn info(&self, message: &str) {
        eprintln!("{}", message.dimmed());
    }

    fn warn(&self, message: &str) {
        eprintln!("{} {}", "warning:".yellow().bold(), message);
    }
}
