//! Interactive place-name input.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

/// Prompt for a place name on stdin and return the trimmed input.
///
/// Empty input is passed through; the resolver rejects it with a
/// descriptive error so interactive and flag-driven queries fail the
/// same way.
pub fn read_place_name(prompt_text: &str) -> Result<String> {
    print!("{prompt_text}");
    io::stdout().flush().context("failed to flush prompt")?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .context("failed to read place name from stdin")?;

    Ok(input.trim().to_string())
}
