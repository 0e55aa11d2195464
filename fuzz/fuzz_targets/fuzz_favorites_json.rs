#![no_main]

use appportal::storage::FavoriteSet;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Stored favorites may be anything another version wrote
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(favorites) = FavoriteSet::from_json(s) {
            // Whatever parsed must survive a write and re-read unchanged
            let reparsed = FavoriteSet::from_json(&favorites.to_json()).unwrap();
            assert_eq!(reparsed, favorites);
        }
    }
});
