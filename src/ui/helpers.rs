use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

/// Write `label` without a trailing newline, flush so it shows up before the
/// read blocks, and return one line of input with the line ending stripped.
/// End-of-input is an error since the menu cannot continue without a user.
pub(crate) fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<String> {
    write!(output, "{label}").context("failed to write prompt")?;
    output.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read input")?;
    if read == 0 {
        bail!("input closed before the menu was exited");
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
