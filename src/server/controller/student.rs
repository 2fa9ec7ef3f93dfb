use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        student::{CreateStudentDto, StudentDto},
    },
    server::{error::Error, model::app::AppState, service::student::StudentService},
};

pub static STUDENT_TAG: &str = "students";

/// Register a student
///
/// CPF & phone may be sent punctuated, they are stored & returned digits-only.
#[utoipa::path(
    post,
    path = "/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Student registered", body = StudentDto),
        (status = 400, description = "Invalid fields, terms not accepted or malformed body", body = ValidationErrorDto),
        (status = 409, description = "CPF or e-mail already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<CreateStudentDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(student) = payload?;
    let student_service = StudentService::new(&state.db);

    let student = student_service.create_student(&student).await?;

    Ok((StatusCode::CREATED, Json(StudentDto::from(student))))
}
