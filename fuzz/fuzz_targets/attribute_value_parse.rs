//! Fuzz target for attribute value conversion.
//!
//! This fuzzer feeds arbitrary strings to every attribute converter
//! (colors, numbers, font lists, alignments), checking for panics.

#![no_main]

use artboard::resolve::fuzz_convert_value;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }

    if let Ok(input) = std::str::from_utf8(data) {
        fuzz_convert_value(input);
    }
});
