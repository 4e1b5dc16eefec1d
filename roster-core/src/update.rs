//! Partial-update shapes for courses and students.
//!
//! Every field is optional; an absent field leaves the target value as is.
//! Applying an update never mutates the original record, it builds a new one.

use serde::{Deserialize, Serialize};

use crate::course::Course;
use crate::error::SchemaError;
use crate::student::{check_age, check_id, check_name, Student};

/// Replacement values for a subset of a [`Course`]'s fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<i64>,
}

impl CourseUpdate {
    /// Returns a copy of `course` with the present fields replaced.
    #[must_use]
    pub fn apply(&self, course: &Course) -> Course {
        Course::new(
            self.id.unwrap_or(course.id()),
            self.name.clone().unwrap_or_else(|| course.name().to_owned()),
            self.credits.unwrap_or(course.credits()),
        )
    }
}

/// Replacement values for a subset of a [`Student`]'s fields.
///
/// Present fields carry the same constraints as on [`Student`]. A present
/// `courses` list replaces the whole list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courses: Option<Vec<Course>>,
}

impl StudentUpdate {
    /// Checks the constraints of every present field.
    ///
    /// # Errors
    /// Returns [`SchemaError::FieldConstraint`] for the first present field
    /// that violates its constraint.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if let Some(id) = self.id {
            check_id(id)?;
        }
        if let Some(name) = &self.name {
            check_name(name)?;
        }
        if let Some(age) = self.age {
            check_age(age)?;
        }
        Ok(())
    }

    /// Builds a new [`Student`] from `student` with the present fields replaced.
    ///
    /// # Errors
    /// Returns [`SchemaError::FieldConstraint`] if the merged record is invalid.
    pub fn apply(&self, student: &Student) -> Result<Student, SchemaError> {
        self.validate()?;
        Student::new(
            self.id.unwrap_or(student.id()),
            self.name.clone().unwrap_or_else(|| student.name().to_owned()),
            self.age.unwrap_or(student.age()),
            self.courses
                .clone()
                .unwrap_or_else(|| student.courses().to_vec()),
        )
    }
}
