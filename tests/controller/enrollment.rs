//! Tests for the enrollment endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use matricula::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        enrollment::EnrollmentWithStudentDto,
    },
    server::controller::enrollment::create_enrollment,
};
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Expect 201 Created with the stored student & enrollment
#[tokio::test]
async fn creates_enrollment() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .with_mock_course(1)
        .build()
        .await?;

    let result = create_enrollment(State(test.app_state()), Ok(Json(enrollment_dto(1)))).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: EnrollmentWithStudentDto = read_json(resp).await;
    assert_eq!(created.student.cpf, "63543212052");
    assert_eq!(created.enrollment.student_id, created.student.id);
    assert_eq!(created.enrollment.course_id, 1);
    assert_eq!(created.enrollment.installments, Some(12));

    Ok(())
}

/// Expect 404 Not Found with the course ID in the message & no student stored
#[tokio::test]
async fn rejects_unknown_course() -> Result<(), TestError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await?;

    let result = create_enrollment(State(test.app_state()), Ok(Json(enrollment_dto(7)))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = read_json(resp).await;
    assert_eq!(body.error, "Curso com ID 7 não encontrado");
    assert_eq!(entity::prelude::Student::find().count(&test.db).await?, 0);

    Ok(())
}

/// Expect 400 Bad Request when only some installment fields are sent
#[tokio::test]
async fn rejects_partial_installment_terms() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .with_mock_course(1)
        .build()
        .await?;

    let mut enrollment = enrollment_dto(1);
    enrollment.payment_info.installment_value = None;
    let result = create_enrollment(State(test.app_state()), Ok(Json(enrollment))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ValidationErrorDto = read_json(resp).await;
    assert_eq!(body.fields.len(), 1);
    assert_eq!(body.fields[0].field, "paymentInfo");

    Ok(())
}

/// Expect 409 Conflict & no enrollment when the e-mail is already registered
#[tokio::test]
async fn rejects_registered_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .with_mock_course(1)
        .with_mock_student(1)
        .build()
        .await?;

    let mut enrollment = enrollment_dto(1);
    enrollment.student.email = factory::email(1);
    let result = create_enrollment(State(test.app_state()), Ok(Json(enrollment))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(entity::prelude::Enrollment::find().count(&test.db).await?, 0);

    Ok(())
}
