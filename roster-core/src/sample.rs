//! Sample roster seeded into the service at startup.
//!
//! Alice takes two courses (7 credits), Bob takes one (3 credits).

use crate::course::Course;
use crate::error::SchemaError;
use crate::student::Student;

/// Returns the seed students, in insertion order.
///
/// # Errors
/// Returns [`SchemaError`] if a seed record fails validation, which would be
/// a bug in the literals below.
pub fn sample_students() -> Result<Vec<Student>, SchemaError> {
    let alice = Student::new(
        1,
        "Alice",
        20,
        vec![Course::new(101, "Math", 3), Course::new(102, "Physics", 4)],
    )?;

    let bob = Student::new(2, "Bob", 22, vec![Course::new(103, "Chemistry", 3)])?;

    Ok(vec![alice, bob])
}
