#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Address validation runs on every keystroke: it must never panic,
    // whatever the input.
    if let Ok(candidate) = std::str::from_utf8(data) {
        let _ = drip_types::address::validate(candidate);
    }
});
