//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use camino::Utf8Path;
use chrono::{DateTime, Utc};
use kudos::KudosError;

/// Writes the line announcing the start of the merge window.
pub fn write_run_header<W: Write>(writer: &mut W, since: DateTime<Utc>) -> Result<(), KudosError> {
    writeln!(writer, "Finding PRs since {}.", since.to_rfc2822()).map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))
}

/// Writes the closing summary once the report file exists.
pub fn write_completion<W: Write>(
    writer: &mut W,
    contributors: usize,
    path: &Utf8Path,
) -> Result<(), KudosError> {
    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(writer, "Wrote {contributors} contributors to '{path}'.").map_err(|e| io_error(&e))
}

pub(crate) fn io_error(error: &io::Error) -> KudosError {
    KudosError::Io {
        message: error.to_string(),
    }
}
