//! Axum route handlers for the roster API.

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use roster_core::{Student, StudentSchema};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::debug;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    doc::ApiDoc,
    error::{GatewayError, NotFoundBody, ValidationErrorBody, ValidationIssue},
    repository::StudentRepository,
};

// ── Shared state ─────────────────────────────────────────────────────────────

type Repo = Arc<dyn StudentRepository>;

/// Smallest accepted `student_id` path parameter.
pub const MIN_STUDENT_ID: i64 = 1;

/// Path of the generated OpenAPI document.
pub const OPENAPI_PATH: &str = "/openapi.json";

/// Mount point of the Swagger UI.
pub const DOCS_PATH: &str = "/docs";

// ── Response types ───────────────────────────────────────────────────────────

/// Body returned by `GET /`.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "server is working and is loaded")]
    pub success: String,
}

// ── Router ───────────────────────────────────────────────────────────────────

/// Build the application router over the given repository.
///
/// Besides the API routes, serves the OpenAPI document at `/openapi.json`
/// and the Swagger UI under `/docs`.
pub fn create_router(repo: Repo) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/students", get(list_students))
        .route("/students/{student_id}", get(get_student))
        .with_state(repo)
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// `GET /` — liveness probe.
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse)
    )
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            success: "server is working and is loaded".to_owned(),
        }),
    )
}

/// `GET /students` — every student in insertion order.
#[utoipa::path(
    get,
    path = "/students",
    tag = "students",
    responses(
        (status = 200, description = "All students, in insertion order", body = Vec<StudentSchema>)
    )
)]
pub async fn list_students(State(repo): State<Repo>) -> Json<Vec<Student>> {
    let students = repo.list().await;
    debug!(count = students.len(), "listing students");
    Json(students)
}

/// `GET /students/{student_id}` — one student by id.
///
/// # Errors
/// Returns [`GatewayError::InvalidPath`] if `student_id` is not an integer or
/// is below 1; the repository is not consulted in that case. Returns
/// [`GatewayError::StudentNotFound`] if no student has that id.
#[utoipa::path(
    get,
    path = "/students/{student_id}",
    tag = "students",
    params(
        ("student_id" = i64, Path, description = "Id of the student to fetch", minimum = 1)
    ),
    responses(
        (status = 200, description = "The matching student", body = StudentSchema),
        (status = 404, description = "No student has this id", body = NotFoundBody),
        (status = 422, description = "student_id is not an integer >= 1", body = ValidationErrorBody)
    )
)]
pub async fn get_student(
    State(repo): State<Repo>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Student>, GatewayError> {
    let student_id = parse_student_id(raw_id)?;

    match repo.get(student_id).await {
        Some(student) => Ok(Json(student)),
        None => {
            debug!(student_id, "student not found");
            Err(GatewayError::StudentNotFound(student_id))
        }
    }
}

/// Parse and range-check the raw `student_id` segment.
///
/// Standard `i64` parsing applies, so a leading `+` is accepted.
fn parse_student_id(
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<i64, GatewayError> {
    const PARAM: &str = "student_id";

    let Path(raw) = raw_id.map_err(|rejection| {
        GatewayError::InvalidPath(ValidationIssue::path(
            PARAM,
            "path_invalid",
            rejection.body_text(),
            "",
        ))
    })?;
    let Ok(student_id) = raw.parse::<i64>() else {
        return Err(GatewayError::InvalidPath(ValidationIssue::path(
            PARAM,
            "int_parsing",
            "Input should be a valid integer, unable to parse string as an integer",
            raw,
        )));
    };
    if student_id < MIN_STUDENT_ID {
        return Err(GatewayError::InvalidPath(ValidationIssue::path(
            PARAM,
            "greater_than_equal",
            format!("Input should be greater than or equal to {MIN_STUDENT_ID}"),
            raw,
        )));
    }
    Ok(student_id)
}
