//! Application entry point and dispatch.

use std::io::{self, Write};

use anyhow::{Context, Result};

use fibseq_cli::output::{emit_line, is_closed_pipe};
use fibseq_cli::stream::{run_stream, StreamConfig, StreamEnd};
use fibseq_core::engine::fibonacci;
use fibseq_core::progress::CancellationToken;

use crate::config::{parse_index, AppConfig, Mode, INTEGER_REQUIRED, USAGE};

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The selected mode ran to completion.
    Completed,
    /// Streaming was stopped by Ctrl+C.
    Interrupted,
}

/// Run the application against stdout.
pub fn run(config: &AppConfig) -> Result<Outcome> {
    let mode = config.mode();
    tracing::debug!(?mode, "selected mode");

    let cancel = CancellationToken::new();
    if mode == Mode::Stream {
        ctrlc_handler(cancel.clone())?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(&mode, &mut out, &cancel)
}

/// Run `mode`, writing to `out`.
pub fn run_with<W: Write + ?Sized>(
    mode: &Mode,
    out: &mut W,
    cancel: &CancellationToken,
) -> Result<Outcome> {
    let written = match mode {
        Mode::Stream => {
            let end = run_stream(out, cancel, &StreamConfig::default())?;
            tracing::info!(emitted = end.emitted(), "stream ended");
            return Ok(match end {
                StreamEnd::Cancelled { .. } => Outcome::Interrupted,
                StreamEnd::Closed { .. } => Outcome::Completed,
            });
        }
        Mode::Single(arg) => match parse_index(arg) {
            Ok(n) => emit_line(out, &fibonacci(n)),
            Err(e) => {
                tracing::debug!(error = %e, "rejected argument");
                emit_line(out, INTEGER_REQUIRED)
            }
        },
        Mode::Usage => emit_line(out, USAGE),
    };

    match written {
        Ok(()) => Ok(Outcome::Completed),
        Err(e) if is_closed_pipe(&e) => {
            tracing::warn!("stdout closed before output was written");
            Ok(Outcome::Completed)
        }
        Err(e) => Err(e).context("failed to write to stdout"),
    }
}

fn ctrlc_handler(cancel: CancellationToken) -> Result<()> {
    ctrlc::set_handler(move || {
        cancel.cancel();
    })
    .context("failed to set Ctrl+C handler")
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::*;

    fn output_of(mode: &Mode) -> String {
        let mut buf = Vec::new();
        let outcome = run_with(mode, &mut buf, &CancellationToken::new()).unwrap();
        assert_eq!(outcome, Outcome::Completed);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn single_value() {
        assert_eq!(output_of(&Mode::Single(OsString::from("7"))), "13\n");
        assert_eq!(output_of(&Mode::Single(OsString::from("10"))), "55\n");
    }

    #[test]
    fn single_value_negative_is_zero() {
        assert_eq!(output_of(&Mode::Single(OsString::from("-4"))), "0\n");
    }

    #[test]
    fn single_value_huge_negative_is_zero() {
        assert_eq!(
            output_of(&Mode::Single(OsString::from("-99999999999999999999999"))),
            "0\n"
        );
    }

    #[test]
    fn single_value_not_an_integer() {
        assert_eq!(
            output_of(&Mode::Single(OsString::from("abc"))),
            "Please specify an integer.\n"
        );
    }

    #[test]
    fn usage() {
        assert_eq!(output_of(&Mode::Usage), "Usage: python fibonacci.py [n]\n");
    }

    #[test]
    fn stream_stops_when_cancelled() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let mut buf = Vec::new();
        let outcome = run_with(&Mode::Stream, &mut buf, &cancel).unwrap();
        assert_eq!(outcome, Outcome::Interrupted);
        assert!(buf.is_empty());
    }
}
