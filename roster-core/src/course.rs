use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A course a student is enrolled in.
///
/// Course identifiers follow a 3-digit convention (e.g. `101`) which is not
/// enforced, and nothing requires them to be unique across students.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Course {
    /// Course ID to be entered (3 digits).
    #[schema(example = 123)]
    id: i64,
    /// Course name.
    #[schema(example = "Math")]
    name: String,
    /// Credits the course has to offer (usually single digit).
    #[schema(example = 3)]
    credits: i64,
}

impl Course {
    /// Creates a new `Course`.
    pub fn new(id: i64, name: impl Into<String>, credits: i64) -> Self {
        Self {
            id,
            name: name.into(),
            credits,
        }
    }

    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Credits the course is worth, usually a single digit.
    #[must_use]
    pub fn credits(&self) -> i64 {
        self.credits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_decode_requires_every_field() {
        let err = match serde_json::from_str::<Course>(r#"{"id": 101, "name": "Math"}"#) {
            Ok(c) => panic!("decode should fail without credits, got {c:?}"),
            Err(e) => e,
        };
        assert!(err.to_string().contains("credits"), "error must name the missing field: {err}");
    }

    #[test]
    fn course_json_shape_is_flat() {
        let course = Course::new(101, "Math", 3);
        let value = match serde_json::to_value(&course) {
            Ok(v) => v,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(value, serde_json::json!({"id": 101, "name": "Math", "credits": 3}));
    }
}
