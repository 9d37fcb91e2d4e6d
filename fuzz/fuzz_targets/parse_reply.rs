// SPDX-License-Identifier: Apache-2.0

#![no_main]

use issuelens_core::ai::provider::{parse_analysis, strip_code_fence};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let cleaned = strip_code_fence(s);
        assert!(cleaned.len() <= s.len());
        if let Err(e) = parse_analysis(s) {
            assert_eq!(e.raw_reply(), Some(s));
        }
    }
});
