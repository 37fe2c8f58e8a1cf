//! Fuzz target for IR JSON parsing.
//!
//! This fuzzer feeds arbitrary byte sequences to the IR JSON parser and
//! validates whatever parses, checking for panics, crashes, or hangs.

#![no_main]

use artboard::ir::io_json::from_json_slice;
use artboard::validation::{validate_screen, ValidateOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    if let Ok(screen) = from_json_slice(data) {
        let _ = validate_screen(&screen, &ValidateOptions::default());
    }
});
