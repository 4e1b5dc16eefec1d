//! Schema types for the student roster service.
//!
//! Defines the validated `Student` and `Course` records, the derived
//! total-credits accessor, partial-update shapes, the seed roster, and the
//! OpenAPI schemas describing the wire shapes.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod course;
pub mod error;
pub mod sample;
pub mod student;
pub mod update;

pub use course::Course;
pub use error::SchemaError;
pub use sample::sample_students;
pub use student::{Student, StudentSchema, MAX_NAME_CHARS, MIN_AGE_EXCLUSIVE, STUDENT_ID_LIMIT};
pub use update::{CourseUpdate, StudentUpdate};

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Vec<Student> {
        match sample_students() {
            Ok(s) => s,
            Err(e) => panic!("seed data invalid: {e}"),
        }
    }

    #[test]
    fn sample_students_all_valid() {
        let students = seeded();
        assert_eq!(students.len(), 2);

        let alice = &students[0];
        assert_eq!(alice.id(), 1);
        assert_eq!(alice.name(), "Alice");
        assert_eq!(alice.age(), 20);
        assert_eq!(alice.courses().len(), 2);
        assert_eq!(alice.total_credits(), 7);

        let bob = &students[1];
        assert_eq!(bob.id(), 2);
        assert_eq!(bob.name(), "Bob");
        assert_eq!(bob.age(), 22);
        assert_eq!(bob.courses()[0].name(), "Chemistry");
        assert_eq!(bob.total_credits(), 3);
    }

    #[test]
    fn sample_students_reencode_and_decode_to_same_records() {
        let students = seeded();
        let json = match serde_json::to_string(&students) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        let decoded: Vec<Student> = match serde_json::from_str(&json) {
            Ok(v) => v,
            Err(e) => panic!("decode failed: {e}"),
        };
        assert_eq!(decoded, students);
    }

    #[test]
    fn schema_error_display_names_field_and_constraint() {
        let err = match Student::new(150, "Zed", 40, vec![]) {
            Ok(s) => panic!("id 150 accepted: {s:?}"),
            Err(e) => e,
        };
        assert_eq!(
            err,
            SchemaError::FieldConstraint {
                field: "id",
                constraint: "must be less than 100".to_owned(),
            }
        );
        let msg = err.to_string();
        assert!(msg.contains("'id'"), "Display must include the field");
        assert!(msg.contains("less than 100"), "Display must include the constraint");
    }
}
