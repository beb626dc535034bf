#![no_main]

use libfuzzer_sys::fuzz_target;
use motion_error_codes::{Report, ReportStyle, MAX_FIELD_OUTPUT_LEN};

fuzz_target!(|input: (u16, String)| {
    let (raw, value) = input;
    let mut line = String::new();
    Report::new(raw)
        .with_context("value", value)
        .write_to(&mut line, ReportStyle::DECORATED)
        .unwrap();
    assert!(line.len() < MAX_FIELD_OUTPUT_LEN + 128);
});
