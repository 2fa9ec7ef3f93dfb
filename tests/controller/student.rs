//! Tests for the student registration endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use matricula::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        student::{CreateStudentDto, StudentDto},
    },
    server::controller::student::create_student,
};

use super::*;

/// Expect 201 Created with CPF & phone returned digits-only
#[tokio::test]
async fn creates_student() -> Result<(), TestError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await?;

    let result = create_student(State(test.app_state()), Ok(Json(student_dto()))).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let student: StudentDto = read_json(resp).await;
    assert_eq!(student.cpf, "63543212052");
    assert_eq!(student.phone, "19990009445");
    assert!(student.agree_to_terms);
    assert!(student.receive_whatsapp_notifications);

    Ok(())
}

/// Expect 400 Bad Request with the terms message when terms are not accepted
#[tokio::test]
async fn rejects_unaccepted_terms() -> Result<(), TestError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await?;

    let student = CreateStudentDto {
        agree_to_terms: Some(false),
        ..student_dto()
    };
    let result = create_student(State(test.app_state()), Ok(Json(student))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = read_json(resp).await;
    assert_eq!(body.error, "É obrigatório concordar com os termos de uso");

    Ok(())
}

/// Expect 400 Bad Request listing every invalid field
#[tokio::test]
async fn rejects_invalid_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await?;

    let student = CreateStudentDto {
        full_name: "Marina".to_string(),
        phone: "(19) 3333-4444".to_string(),
        ..student_dto()
    };
    let result = create_student(State(test.app_state()), Ok(Json(student))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ValidationErrorDto = read_json(resp).await;
    let fields: Vec<&str> = body.fields.iter().map(|field| field.field.as_str()).collect();
    assert_eq!(fields, vec!["fullName", "phone"]);
    assert_eq!(
        body.error,
        "Nome completo deve conter pelo menos nome e sobrenome (ex: João Silva); Celular inválido (deve conter DDD + 9 dígitos)"
    );

    Ok(())
}

/// Expect 409 Conflict when the CPF is already registered
#[tokio::test]
async fn rejects_registered_cpf() -> Result<(), TestError> {
    let mut registered = factory::mock_student_model(1);
    registered.cpf = "63543212052".to_string();
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .with_student(registered)
        .build()
        .await?;

    let result = create_student(State(test.app_state()), Ok(Json(student_dto()))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: ErrorDto = read_json(resp).await;
    assert_eq!(body.error, "CPF já cadastrado");

    Ok(())
}

/// Expect 409 Conflict when the e-mail is already registered
#[tokio::test]
async fn rejects_registered_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .with_mock_student(1)
        .build()
        .await?;

    let student = CreateStudentDto {
        email: factory::email(1),
        ..student_dto()
    };
    let result = create_student(State(test.app_state()), Ok(Json(student))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: ErrorDto = read_json(resp).await;
    assert_eq!(body.error, "E-mail já cadastrado");

    Ok(())
}
