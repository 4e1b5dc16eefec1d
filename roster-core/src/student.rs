use serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

use crate::course::Course;
use crate::error::SchemaError;

/// Student identifiers must be strictly below this value (two digits max).
pub const STUDENT_ID_LIMIT: i64 = 100;

/// Longest accepted student name, in characters.
pub const MAX_NAME_CHARS: usize = 40;

/// Students must be strictly older than this.
pub const MIN_AGE_EXCLUSIVE: i64 = 18;

/// A student on the roster together with the courses they are enrolled in.
///
/// Instances can only be obtained through [`Student::new`] or by decoding
/// JSON, both of which validate every field, so a `Student` value is always
/// valid. There are no setters.
///
/// Serialises with the derived `total_credits` appended after `courses`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "StudentFields")]
pub struct Student {
    id: i64,
    name: String,
    age: i64,
    courses: Vec<Course>,
}

impl Student {
    /// Creates a validated `Student`.
    ///
    /// Fields are checked in declaration order and the first violation wins.
    ///
    /// # Errors
    /// Returns [`SchemaError::FieldConstraint`] if `id >= 100`, `name` is
    /// longer than 40 characters, or `age <= 18`.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        age: i64,
        courses: Vec<Course>,
    ) -> Result<Self, SchemaError> {
        let name = name.into();
        check_id(id)?;
        check_name(&name)?;
        check_age(age)?;
        Ok(Self {
            id,
            name,
            age,
            courses,
        })
    }

    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn age(&self) -> i64 {
        self.age
    }

    /// Enrolled courses, in enrolment order.
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Sum of the credits of every enrolled course, computed on each call.
    ///
    /// Saturates at `i64::MAX` / `i64::MIN`.
    #[must_use]
    pub fn total_credits(&self) -> i64 {
        self.courses
            .iter()
            .fold(0_i64, |total, course| total.saturating_add(course.credits()))
    }
}

impl Serialize for Student {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Student", 5)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("age", &self.age)?;
        state.serialize_field("courses", &self.courses)?;
        state.serialize_field("total_credits", &self.total_credits())?;
        state.end()
    }
}

/// OpenAPI description of the [`Student`] wire shape.
///
/// `Student` serialises by hand to append `total_credits`, so its schema is
/// declared here and registered under the `Student` name.
#[derive(ToSchema)]
#[schema(as = Student)]
pub struct StudentSchema {
    /// Id of student - 2 digits max.
    #[schema(exclusive_maximum = 100, example = 1)]
    pub id: i64,
    /// Students full name to be stored in db.
    #[schema(max_length = 40, example = "John Smith")]
    pub name: String,
    #[schema(exclusive_minimum = 18, example = 20)]
    pub age: i64,
    pub courses: Vec<Course>,
    /// Sum of the credits of every enrolled course.
    #[schema(read_only, example = 7)]
    pub total_credits: i64,
}

/// Unvalidated wire shape of a [`Student`].
///
/// Any `total_credits` key in the input is ignored; the value is always
/// recomputed from `courses`.
#[derive(Deserialize)]
struct StudentFields {
    id: i64,
    name: String,
    age: i64,
    courses: Vec<Course>,
}

impl TryFrom<StudentFields> for Student {
    type Error = SchemaError;

    fn try_from(fields: StudentFields) -> Result<Self, Self::Error> {
        Self::new(fields.id, fields.name, fields.age, fields.courses)
    }
}

pub(crate) fn check_id(id: i64) -> Result<(), SchemaError> {
    if id >= STUDENT_ID_LIMIT {
        return Err(SchemaError::constraint(
            "id",
            format!("must be less than {STUDENT_ID_LIMIT}"),
        ));
    }
    Ok(())
}

pub(crate) fn check_name(name: &str) -> Result<(), SchemaError> {
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(SchemaError::constraint(
            "name",
            format!("must be at most {MAX_NAME_CHARS} characters"),
        ));
    }
    Ok(())
}

pub(crate) fn check_age(age: i64) -> Result<(), SchemaError> {
    if age <= MIN_AGE_EXCLUSIVE {
        return Err(SchemaError::constraint(
            "age",
            format!("must be greater than {MIN_AGE_EXCLUSIVE}"),
        ));
    }
    Ok(())
}
