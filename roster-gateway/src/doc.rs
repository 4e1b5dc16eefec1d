//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the three read routes and the schemas they return.
//! The document is served at `/openapi.json` and rendered by Swagger UI under
//! `/docs`.

use roster_core::{Course, StudentSchema};
use utoipa::OpenApi;

use crate::error::{NotFoundBody, ValidationErrorBody, ValidationIssue};
use crate::routes::HealthResponse;

/// OpenAPI document for the roster API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student Courses API",
        description = "Read-only access to the student roster and enrolled courses."
    ),
    paths(
        crate::routes::health,
        crate::routes::list_students,
        crate::routes::get_student,
    ),
    components(schemas(
        Course,
        StudentSchema,
        HealthResponse,
        NotFoundBody,
        ValidationErrorBody,
        ValidationIssue
    )),
    tags(
        (name = "students", description = "Student roster lookups"),
        (name = "health", description = "Liveness check")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_json() -> serde_json::Value {
        match serde_json::to_value(ApiDoc::openapi()) {
            Ok(v) => v,
            Err(e) => panic!("OpenAPI serialization failed: {e}"),
        }
    }

    #[test]
    fn openapi_student_path_declares_min_id_and_error_responses() {
        let doc = doc_json();
        let op = &doc["paths"]["/students/{student_id}"]["get"];
        assert_eq!(op["parameters"][0]["name"], "student_id");
        assert_eq!(op["parameters"][0]["in"], "path");
        assert!(op["parameters"][0]["schema"]["minimum"].is_number());
        for status in ["200", "404", "422"] {
            assert!(op["responses"][status].is_object(), "missing {status} response");
        }
    }

    #[test]
    fn openapi_course_schema_has_field_descriptions() {
        let doc = doc_json();
        let course = &doc["components"]["schemas"]["Course"]["properties"];
        assert_eq!(course["id"]["description"], "Course ID to be entered (3 digits).");
        assert!(course["credits"]["description"].is_string());
    }
}
