#![no_main]

use appportal::config::PortalConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Try to parse arbitrary bytes as JSON into PortalConfig
    // This tests for crashes, panics, and undefined behavior
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(config) = serde_json::from_str::<PortalConfig>(s) {
            // Clamping must hold for any deserialized window size
            let size = config.window_state.clamped();
            assert!(size.width >= 480 && size.height >= 400);
        }
    }
});
