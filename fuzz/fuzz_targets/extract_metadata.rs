#![no_main]
use libfuzzer_sys::fuzz_target;

use larder::index::{extract_metadata, ExtractOptions};

fuzz_target!(|data: &str| {
    // Arbitrary markup must either yield an entry or be skipped, never panic.
    let opts = ExtractOptions::for_site("My Recipes");
    if let Some(entry) = extract_metadata(data, "fuzz", &opts) {
        assert_eq!(entry.id, "fuzz");
        assert!(!entry.categories.is_empty());
    }
});
