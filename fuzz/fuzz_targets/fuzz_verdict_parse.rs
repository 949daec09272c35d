#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The claim service body is untrusted: parsing must reject, not panic.
    let _ = serde_json::from_slice::<drip_types::ClaimResult>(data);
});
