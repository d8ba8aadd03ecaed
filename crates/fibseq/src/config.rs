//! Command-line configuration and mode selection.

use std::ffi::{OsStr, OsString};
use std::num::IntErrorKind;

use clap::Parser;
use fibseq_core::engine::FibError;

/// Printed when the single argument is not an integer.
pub const INTEGER_REQUIRED: &str = "Please specify an integer.";

/// Printed when more than one argument is given.
pub const USAGE: &str = "Usage: python fibonacci.py [n]";

/// Print the n-th Fibonacci number, or stream the sequence every 0.5s.
///
/// Arguments are collected verbatim: the number of positionals alone picks
/// the mode, so there are no `--help` or `--version` flags and `--` is an
/// ordinary argument.
#[derive(Parser, Debug)]
#[command(
    name = "fibonacci",
    about,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct AppConfig {
    /// Index of the Fibonacci number to print; omit to stream the sequence.
    #[arg(num_args = 1..)]
    pub args: Vec<OsString>,
}

impl AppConfig {
    /// Parse the process arguments.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_raw(std::env::args_os())
    }

    /// Parse `argv` (program name first) keeping every argument as given.
    ///
    /// An escape `--` is inserted after the program name, so clap reads all
    /// user arguments as positionals, a user-supplied `--` included.
    #[must_use]
    pub fn parse_raw<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(|arg| -> OsString { arg.into() });
        let program = argv.next().unwrap_or_else(|| OsString::from("fibonacci"));
        let escaped = std::iter::once(program)
            .chain(std::iter::once(OsString::from("--")))
            .chain(argv);
        <Self as Parser>::parse_from(escaped)
    }

    /// The mode selected by the argument count.
    #[must_use]
    pub fn mode(&self) -> Mode {
        Mode::from_args(&self.args)
    }
}

/// What the program does for a given argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// No arguments: print the sequence forever.
    Stream,
    /// One argument: print F(argument).
    Single(OsString),
    /// Anything else: print the usage line.
    Usage,
}

impl Mode {
    #[must_use]
    pub fn from_args(args: &[OsString]) -> Self {
        match args {
            [] => Self::Stream,
            [arg] => Self::Single(arg.clone()),
            _ => Self::Usage,
        }
    }
}

/// Parse a base-10 integer literal.
///
/// Surrounding whitespace is ignored, a leading `+` or `-` is allowed, and
/// digits may be grouped with single underscores (`1_000`). Well-formed
/// literals outside the `i64` range saturate to `i64::MIN` or `i64::MAX`.
pub fn parse_index(arg: &OsStr) -> Result<i64, FibError> {
    let text = arg
        .to_str()
        .ok_or_else(|| FibError::InvalidInput(arg.to_string_lossy().into_owned()))?;
    let invalid = || FibError::InvalidInput(text.to_owned());

    let trimmed = text.trim();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'+' | b'-') => trimmed.split_at(1),
        _ => ("", trimmed),
    };

    let well_formed = !digits.is_empty()
        && !digits.starts_with('_')
        && !digits.ends_with('_')
        && !digits.contains("__")
        && digits.bytes().all(|b| b.is_ascii_digit() || b == b'_');
    if !well_formed {
        return Err(invalid());
    }

    let literal: String = sign
        .chars()
        .chain(digits.chars().filter(|&c| c != '_'))
        .collect();
    match literal.parse::<i64>() {
        Ok(n) => Ok(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(invalid()),
        },
    }
}
