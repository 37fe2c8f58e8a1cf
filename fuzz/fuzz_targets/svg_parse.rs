//! Fuzz target for canvas SVG parsing.
//!
//! This fuzzer feeds arbitrary byte sequences through the whole pipeline
//! (walk, resolve, classify, anchor), checking for panics, crashes, or hangs.

#![no_main]

use artboard::ir::io_svg::from_svg_slice;
use artboard::ir::OverrideTable;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Cap input size to avoid excessive memory usage.
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let _ = from_svg_slice(data, &OverrideTable::new());
});
