use crate::error::{GamedlError, Result};
use crate::models::CatalogEntry;
use std::io::{BufRead, Write};

/// Presents a numbered menu of `entries` on `output` and resolves one line
/// of `input` to a zero-based index. Callers must pass a non-empty list.
pub fn choose(
    entries: &[CatalogEntry],
    mut input: impl BufRead,
    mut output: impl Write,
) -> Result<usize> {
    debug_assert!(!entries.is_empty());

    writeln!(output, "Pick a game:")?;
    for (i, entry) in entries.iter().enumerate() {
        writeln!(output, "{}. {}", i + 1, entry.name)?;
    }
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let trimmed = line.trim();

    let choice: i64 = trimmed
        .parse()
        .map_err(|_| GamedlError::InvalidSelectionInput {
            input: trimmed.to_string(),
        })?;

    if choice < 1 || choice as usize > entries.len() {
        return Err(GamedlError::SelectionOutOfRange {
            choice,
            len: entries.len(),
        });
    }

    Ok(choice as usize - 1)
}
