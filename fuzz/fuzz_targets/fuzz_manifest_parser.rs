//! Fuzz target for root manifest parsing.
//!
//! Goal: the parser should **never panic** on any input.
//! It may return errors for malformed input, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_manifest_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = licenseguard_repo::fuzz::parse_root_manifest(text);
    }
});
