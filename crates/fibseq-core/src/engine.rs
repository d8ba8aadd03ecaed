//! The Fibonacci engine: F(n) by iterative accumulation.
//!
//! `fibonacci` is total over all `i64` indices: every `n <= 0` maps to 0 and
//! terms are `BigUint`, so nothing overflows. `fibonacci_checked` runs the
//! same iteration over a native integer type and reports overflow instead.

use num_bigint::BigUint;
use num_traits::{CheckedAdd, One, Zero};

use crate::constants::{FIB_TABLE, MAX_FIB_U64};

/// Error type shared by the workspace.
#[derive(Debug, thiserror::Error)]
pub enum FibError {
    /// The argument is not a base-10 integer literal.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// F(n) does not fit in the requested native type.
    #[error("F({0}) overflows {1}")]
    Overflow(i64, &'static str),

    /// Writing a term failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Compute F(n), 0-indexed: F(0) = 0, F(1) = 1, F(n) = F(n-1) + F(n-2).
///
/// Negative indices yield 0.
///
/// # Example
/// ```
/// use fibseq_core::engine::fibonacci;
/// assert_eq!(fibonacci(10).to_string(), "55");
/// assert_eq!(fibonacci(-3).to_string(), "0");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fibonacci(n: i64) -> BigUint {
    if n <= 0 {
        return BigUint::zero();
    }
    if n <= MAX_FIB_U64 {
        return BigUint::from(FIB_TABLE[n as usize]);
    }

    tracing::trace!(n, "iterating past the u64 table");
    let top = MAX_FIB_U64 as usize;
    let mut a = BigUint::from(FIB_TABLE[top - 1]);
    let mut b = BigUint::from(FIB_TABLE[top]);
    for _ in MAX_FIB_U64 + 1..=n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
    b
}

/// Compute F(n) in a native integer type, or `None` if a term overflows `T`.
///
/// ```
/// use fibseq_core::engine::fibonacci_checked;
/// assert_eq!(fibonacci_checked::<u8>(13), Some(233));
/// assert_eq!(fibonacci_checked::<u8>(14), None);
/// ```
#[must_use]
pub fn fibonacci_checked<T>(n: i64) -> Option<T>
where
    T: Zero + One + CheckedAdd,
{
    if n <= 0 {
        return Some(T::zero());
    }
    if n == 1 {
        return Some(T::one());
    }
    let mut a = T::zero();
    let mut b = T::one();
    for _ in 2..=n {
        let next = a.checked_add(&b)?;
        a = std::mem::replace(&mut b, next);
    }
    Some(b)
}

/// Compute F(n) as a `u64`.
pub fn fibonacci_u64(n: i64) -> Result<u64, FibError> {
    fibonacci_checked(n).ok_or(FibError::Overflow(n, "u64"))
}
