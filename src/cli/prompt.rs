//! Labeled, typed prompts over standard input.

use anyhow::{anyhow, Context};
use std::io::{self, Write};

/// Print `label` and read the next line, trimmed.
///
/// Returns `None` when standard input is closed.
pub fn read_line(label: &str) -> anyhow::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut buf = String::new();
    let bytes = io::stdin().read_line(&mut buf)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

/// Read a free-text field. End of input here is an error, not a quit.
pub fn read_text(label: &str) -> anyhow::Result<String> {
    read_line(label)?.ok_or_else(|| anyhow!("standard input closed mid-entry"))
}

/// Read an integer field. Input is taken as typed: a line that does not
/// parse is an error the caller propagates, not a retry.
pub fn read_i64(label: &str) -> anyhow::Result<i64> {
    let text = read_text(label)?;
    text.parse()
        .with_context(|| format!("expected an integer, got {text:?}"))
}

/// Read a price field.
pub fn read_f64(label: &str) -> anyhow::Result<f64> {
    let text = read_text(label)?;
    text.parse()
        .with_context(|| format!("expected a number, got {text:?}"))
}
