//! Shared helpers for command handlers.

use std::io::{self, BufRead, IsTerminal, Write};

use crate::error::CliError;

/// Ask the user to confirm a destructive operation.
///
/// `--yes` short-circuits to true; a non-interactive stdin without
/// `--yes` is an error rather than a hang.
pub fn confirm(prompt: &str, yes: bool) -> Result<bool, CliError> {
    if yes {
        return Ok(true);
    }
    if !io::stdin().is_terminal() {
        return Err(CliError::ConfirmationRequired {
            action: prompt.to_owned(),
        });
    }

    let mut stderr = io::stderr().lock();
    write!(stderr, "{prompt} [y/N] ")?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}
