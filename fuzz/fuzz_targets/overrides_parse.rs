//! Fuzz target for override document parsing.
//!
//! This fuzzer feeds arbitrary byte sequences to the override parser,
//! checking for panics, crashes, or hangs.

#![no_main]

use artboard::ir::io_overrides::from_overrides_slice;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let _ = from_overrides_slice(data);
});
