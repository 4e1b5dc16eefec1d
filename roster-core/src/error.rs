/// Errors produced by the `roster-core` crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// A record field violated one of its declared constraints.
    #[error("field '{field}' violates constraint: {constraint}")]
    FieldConstraint {
        field: &'static str,
        constraint: String,
    },
}

impl SchemaError {
    pub(crate) fn constraint(field: &'static str, constraint: impl Into<String>) -> Self {
        Self::FieldConstraint {
            field,
            constraint: constraint.into(),
        }
    }

    /// Name of the offending field.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::FieldConstraint { field, .. } => field,
        }
    }
}
