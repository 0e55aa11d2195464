#![no_main]

use appportal::catalog::Catalog;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Catalog files are user-supplied through catalog_path; bad input must be
    // rejected with an error, never a panic
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(catalog) = Catalog::from_json(s) {
            // Ids are unique in any accepted catalog
            for record in catalog.records() {
                assert!(catalog.get(&record.id).is_some());
            }
        }
    }
});
