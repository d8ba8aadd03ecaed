//! Exit codes.

use fibseq_core::constants::exit_codes;

use crate::app::Outcome;

/// Map the result of a run to the process exit code.
///
/// Parse failures and the usage message are normal completions.
pub fn exit_code(result: &anyhow::Result<Outcome>) -> i32 {
    match result {
        Ok(Outcome::Completed) => exit_codes::SUCCESS,
        Ok(Outcome::Interrupted) => exit_codes::ERROR_CANCELED,
        Err(_) => exit_codes::ERROR_GENERIC,
    }
}
