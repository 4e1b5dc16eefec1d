//! Fuzz target: decoding a `StudentUpdate` and applying it to the seed roster.

#![no_main]

use libfuzzer_sys::fuzz_target;
use roster_core::{sample_students, StudentUpdate};

fuzz_target!(|data: &[u8]| {
    let Ok(update) = serde_json::from_slice::<StudentUpdate>(data) else {
        return;
    };
    let Ok(students) = sample_students() else {
        return;
    };
    for student in &students {
        // Seed students are valid, so the merge fails exactly when the update does.
        assert_eq!(update.validate().is_ok(), update.apply(student).is_ok());
    }
});
