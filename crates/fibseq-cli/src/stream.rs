//! Streaming mode: emit F(0), F(1), ... forever with a fixed pause.

use std::io::Write;
use std::time::{Duration, Instant};

use fibseq_core::constants::STREAM_DELAY;
use fibseq_core::engine::FibError;
use fibseq_core::iterator::FibIterator;
use fibseq_core::progress::CancellationToken;

use crate::output::{emit_line, is_closed_pipe};

/// Granularity at which a pause re-checks the cancellation token.
const PAUSE_SLICE: Duration = Duration::from_millis(50);

/// Streaming parameters.
#[derive(Debug, Clone)]
pub struct StreamConfig {
    /// Pause after each emitted term.
    pub delay: Duration,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            delay: STREAM_DELAY,
        }
    }
}

/// Why a stream stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamEnd {
    /// The cancellation token fired (Ctrl+C).
    Cancelled { emitted: u64 },
    /// The reader closed the output.
    Closed { emitted: u64 },
}

impl StreamEnd {
    /// Number of terms written before the stream stopped.
    #[must_use]
    pub fn emitted(self) -> u64 {
        match self {
            Self::Cancelled { emitted } | Self::Closed { emitted } => emitted,
        }
    }
}

/// Emit the Fibonacci sequence to `out`, one term per line, pausing
/// `config.delay` after each term.
///
/// There is no upper bound on the index; the loop only ends through `cancel`
/// or a closed output.
pub fn run_stream<W: Write + ?Sized>(
    out: &mut W,
    cancel: &CancellationToken,
    config: &StreamConfig,
) -> Result<StreamEnd, FibError> {
    let mut emitted = 0u64;

    for (n, value) in FibIterator::new() {
        if cancel.is_cancelled() {
            return Ok(StreamEnd::Cancelled { emitted });
        }

        match emit_line(out, &value) {
            Ok(()) => {}
            Err(e) if is_closed_pipe(&e) => {
                tracing::debug!(emitted, "output closed, stopping stream");
                return Ok(StreamEnd::Closed { emitted });
            }
            Err(e) => return Err(e.into()),
        }
        emitted += 1;
        tracing::debug!(n, "emitted term");

        if pause(config.delay, cancel) {
            return Ok(StreamEnd::Cancelled { emitted });
        }
    }

    unreachable!("FibIterator never ends")
}

/// Block for `delay`, waking early if `cancel` fires. Returns whether it did.
fn pause(delay: Duration, cancel: &CancellationToken) -> bool {
    let deadline = Instant::now() + delay;
    loop {
        if cancel.is_cancelled() {
            return true;
        }
        let now = Instant::now();
        if now >= deadline {
            return false;
        }
        std::thread::sleep((deadline - now).min(PAUSE_SLICE));
    }
}
