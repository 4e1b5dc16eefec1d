//! Fuzz target: JSON decoding of `Student`.
//!
//! Decoding runs field validation, so any student that decodes must satisfy
//! the schema constraints and re-encode without error.

#![no_main]

use libfuzzer_sys::fuzz_target;
use roster_core::{Student, MAX_NAME_CHARS, MIN_AGE_EXCLUSIVE, STUDENT_ID_LIMIT};

fuzz_target!(|data: &[u8]| {
    // Errors are expected; panics are not.
    if let Ok(student) = serde_json::from_slice::<Student>(data) {
        assert!(student.id() < STUDENT_ID_LIMIT);
        assert!(student.age() > MIN_AGE_EXCLUSIVE);
        assert!(student.name().chars().count() <= MAX_NAME_CHARS);
        let expected = student
            .courses()
            .iter()
            .fold(0_i64, |total, course| total.saturating_add(course.credits()));
        assert_eq!(student.total_credits(), expected);
        assert!(serde_json::to_vec(&student).is_ok());
    }
});
