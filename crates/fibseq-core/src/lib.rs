//! # fibseq-core
//!
//! Core library for the `fibonacci` command: the iterative Fibonacci engine,
//! an unbounded sequence iterator, and cooperative cancellation.

pub mod constants;
pub mod engine;
pub mod iterator;
pub mod progress;

// Re-exports
pub use constants::{exit_codes, FIB_TABLE, MAX_FIB_U64, STREAM_DELAY};
pub use engine::{fibonacci, fibonacci_checked, fibonacci_u64, FibError};
pub use iterator::FibIterator;
pub use progress::CancellationToken;
