//! CLI output.

use std::fmt::Display;
use std::io::{self, Write};

/// Write `value` followed by a newline and flush.
///
/// Flushing per line keeps streamed terms visible as they are produced when
/// stdout is a pipe.
pub fn emit_line<W, T>(out: &mut W, value: &T) -> io::Result<()>
where
    W: Write + ?Sized,
    T: Display + ?Sized,
{
    writeln!(out, "{value}")?;
    out.flush()
}

/// Whether `err` means the reading end of stdout has gone away.
#[must_use]
pub fn is_closed_pipe(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::BrokenPipe
}
