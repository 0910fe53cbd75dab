#![no_main]

use libfuzzer_sys::fuzz_target;

use listing_enricher::table::{parse, to_csv_string};

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let text = String::from_utf8_lossy(data);

    // Parsing and re-serializing should never panic regardless of input
    let table = parse(&text);
    let _ = parse(&to_csv_string(&table));
});
