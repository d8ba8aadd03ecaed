#![no_main]

use std::ffi::OsStr;

use libfuzzer_sys::fuzz_target;

use fibseq_lib::config::parse_index;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Accepted literals must agree with the standard parser once whitespace
    // and digit separators are removed, saturating outside the i64 range.
    if let Ok(n) = parse_index(OsStr::new(text)) {
        let plain: String = text.trim().chars().filter(|&c| c != '_').collect();
        match plain.parse::<i64>() {
            Ok(expected) => assert_eq!(expected, n, "{text:?}"),
            Err(_) => assert!(n == i64::MIN || n == i64::MAX, "{text:?}"),
        }
    }
});
