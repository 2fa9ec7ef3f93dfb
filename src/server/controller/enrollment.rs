use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        enrollment::{CreateEnrollmentDto, EnrollmentWithStudentDto},
    },
    server::{error::Error, model::app::AppState, service::enrollment::EnrollmentService},
};

pub static ENROLLMENT_TAG: &str = "enrollments";

/// Enroll a new student in a course
///
/// Registers the student and stores the enrollment with the chosen payment terms. Either
/// both are stored or neither is.
#[utoipa::path(
    post,
    path = "/enrollments",
    tag = ENROLLMENT_TAG,
    request_body = CreateEnrollmentDto,
    responses(
        (status = 201, description = "Student enrolled", body = EnrollmentWithStudentDto),
        (status = 400, description = "Invalid fields, terms not accepted or malformed body", body = ValidationErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 409, description = "CPF or e-mail already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_enrollment(
    State(state): State<AppState>,
    payload: Result<Json<CreateEnrollmentDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(enrollment) = payload?;
    let enrollment_service = EnrollmentService::new(&state.db);

    let created = enrollment_service.create_enrollment(enrollment).await?;

    Ok((StatusCode::CREATED, Json(created)))
}
