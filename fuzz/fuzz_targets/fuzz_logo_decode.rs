#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Undecodable logos are skipped, never a panic.
    if let Some(logo) = shipdesk::invoice::logo::logo_from_bytes(data) {
        let _ = logo.to_jpeg();
        let _ = logo.to_png();
    }
});
