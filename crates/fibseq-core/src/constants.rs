//! Constants for the Fibonacci engine and the streaming mode.

use std::time::Duration;

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: i64 = 93;

/// Pause between two emissions in streaming mode.
pub const STREAM_DELAY: Duration = Duration::from_millis(500);

/// Precomputed Fibonacci values for n = 0..=93 (fast path).
///
/// F(93) = 12,200,160,415,121,876,738 is the largest Fibonacci number
/// that fits in `u64`. F(94) = 19,740,274,219,868,223,167 overflows
/// `u64::MAX` (18,446,744,073,709,551,615).
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution, including the usage and parse-failure paths.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O failure on stdout, signal handler setup).
    pub const ERROR_GENERIC: i32 = 1;
    /// Streaming interrupted by the user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
