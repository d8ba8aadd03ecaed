#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use fibseq_core::engine::{fibonacci, fibonacci_checked};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Signed index in [-32768, 32767]; big enough to leave the u64 table.
    let n = i64::from(i16::from_le_bytes([data[0], data[1]]));

    let big = fibonacci(n);
    if let Some(native) = fibonacci_checked::<u128>(n) {
        assert_eq!(BigUint::from(native), big, "u128 != BigUint at n={n}");
    }
    if n >= 2 {
        assert_eq!(big, fibonacci(n - 1) + fibonacci(n - 2), "recurrence at n={n}");
    }
});
