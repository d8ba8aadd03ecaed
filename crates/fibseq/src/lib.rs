//! fibseq library — argument handling and dispatch for the `fibonacci` command.

pub mod app;
pub mod config;
pub mod errors;
