//! Error types for the gateway crate.
//!
//! Client errors are wrapped in a `detail` envelope: a fixed message for
//! not-found, a list of [`ValidationIssue`]s for rejected request input.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// One rejected piece of request input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ValidationIssue {
    /// Machine-readable failure kind, e.g. `int_parsing`.
    #[serde(rename = "type")]
    #[schema(example = "greater_than_equal")]
    pub kind: String,
    /// Where the input came from, e.g. `["path", "student_id"]`.
    pub loc: Vec<String>,
    /// Human-readable explanation.
    #[schema(example = "Input should be greater than or equal to 1")]
    pub msg: String,
    /// The raw input as received.
    pub input: String,
}

impl ValidationIssue {
    /// An issue with the path parameter `param`.
    pub fn path(
        param: &str,
        kind: impl Into<String>,
        msg: impl Into<String>,
        input: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            loc: vec!["path".to_owned(), param.to_owned()],
            msg: msg.into(),
            input: input.into(),
        }
    }
}

/// Body of a 404 response.
#[derive(Debug, Serialize, ToSchema)]
pub struct NotFoundBody {
    #[schema(example = "Student not found")]
    pub detail: String,
}

/// Body of a 422 response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorBody {
    pub detail: Vec<ValidationIssue>,
}

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// No student with the requested id exists.
    #[error("Student not found")]
    StudentNotFound(i64),

    /// A path parameter failed to parse or violated its constraint.
    #[error("{}", .0.msg)]
    InvalidPath(ValidationIssue),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            GatewayError::StudentNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(NotFoundBody { detail: message }),
            )
                .into_response(),
            GatewayError::InvalidPath(issue) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrorBody {
                    detail: vec![issue],
                }),
            )
                .into_response(),
        }
    }
}
