#![no_main]

use libfuzzer_sys::fuzz_target;
use motion_error_codes::ErrorCode;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(code) = text.parse::<ErrorCode>() {
            // Anything that parses must render and parse back to itself.
            assert_eq!(code.to_string().parse::<ErrorCode>(), Ok(code));
        }
    }
});
