//! # fibseq-cli
//!
//! Terminal-facing pieces of the `fibonacci` command: line output and the
//! streaming loop.

pub mod output;
pub mod stream;

pub use stream::{run_stream, StreamConfig, StreamEnd};
