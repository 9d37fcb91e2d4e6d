// SPDX-License-Identifier: Apache-2.0

#![no_main]

use issuelens_core::facade::parse_issue_number;
use issuelens_core::github::parse_repo_input;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Some(repo) = parse_repo_input(s) {
            assert!(!repo.owner.is_empty());
            assert!(!repo.repo.is_empty());
            assert!(!repo.owner.contains('/'));
        }
        let _ = parse_issue_number(s);
    }
});
