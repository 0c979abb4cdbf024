//! Terminal notifications for mutation outcomes.
//!
//! Implements the core `Notify` trait with colored ✓/✗ lines on stderr,
//! so structured stdout output stays machine-parseable.

use owo_colors::OwoColorize;

use storefront_core::Notify;

/// Notification sink for the CLI. One line per mutation outcome.
#[derive(Debug, Clone, Copy)]
pub struct TermNotifier {
    color: bool,
    quiet: bool,
}

impl TermNotifier {
    #[must_use]
    pub fn new(color: bool, quiet: bool) -> Self {
        Self { color, quiet }
    }
}

impl Notify for TermNotifier {
    fn success(&self, message: &str) {
        if self.quiet {
            return;
        }
        if self.color {
            eprintln!("{} {message}", "✓".green());
        } else {
            eprintln!("✓ {message}");
        }
    }

    fn error(&self, message: &str) {
        // Errors are never suppressed by quiet mode.
        if self.color {
            eprintln!("{} {message}", "✗".red());
        } else {
            eprintln!("✗ {message}");
        }
    }
}
