//! Golden file integration tests.
//!
//! Reads tests/testdata/fibonacci_golden.json and checks the engine and the
//! sequence iterator against known Fibonacci numbers.

use num_bigint::BigUint;
use serde::Deserialize;

use fibseq_core::engine::{fibonacci, fibonacci_u64};
use fibseq_core::iterator::FibIterator;
use fibseq_core::MAX_FIB_U64;

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    values: Vec<GoldenEntry>,
}

#[derive(Deserialize)]
struct GoldenEntry {
    n: i64,
    #[serde(default)]
    fib: Option<String>,
    #[serde(default)]
    fib_prefix: Option<String>,
    #[serde(default)]
    fib_digits: Option<usize>,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/fibonacci_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

#[test]
fn golden_exact_values() {
    let data = load_golden_data();
    for entry in &data.values {
        if let Some(expected) = &entry.fib {
            assert_eq!(&fibonacci(entry.n).to_string(), expected, "F({})", entry.n);
        }
    }
}

#[test]
fn golden_prefix_and_digits() {
    let data = load_golden_data();
    for entry in &data.values {
        let (Some(prefix), Some(digits)) = (&entry.fib_prefix, entry.fib_digits) else {
            continue;
        };
        let s = fibonacci(entry.n).to_string();
        assert!(s.starts_with(prefix.as_str()), "F({}) prefix", entry.n);
        assert_eq!(s.len(), digits, "F({}) digit count", entry.n);
    }
}

#[test]
fn golden_native_within_u64() {
    let data = load_golden_data();
    for entry in &data.values {
        let Some(expected) = &entry.fib else { continue };
        let native = fibonacci_u64(entry.n);
        if entry.n <= MAX_FIB_U64 {
            assert_eq!(&native.unwrap().to_string(), expected, "F({})", entry.n);
        } else {
            assert!(native.is_err(), "F({}) should overflow u64", entry.n);
        }
    }
}

#[test]
fn golden_iterator_values() {
    let data = load_golden_data();
    let terms: Vec<BigUint> = FibIterator::new().take(501).map(|(_, v)| v).collect();
    for entry in &data.values {
        let Some(expected) = &entry.fib else { continue };
        let Ok(idx) = usize::try_from(entry.n) else { continue };
        if let Some(term) = terms.get(idx) {
            assert_eq!(&term.to_string(), expected, "iterator F({})", entry.n);
        }
    }
}
