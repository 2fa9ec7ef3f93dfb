//! Tests driving requests through the full router.
//!
//! These cover behavior outside the handlers: path & body extraction, routing and the
//! OpenAPI document.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use matricula::model::{
    api::{ErrorDto, ValidationErrorDto},
    course::InstallmentPlanDto,
    enrollment::EnrollmentWithStudentDto,
};
use matricula_test_utils::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::util::*;

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Expect 400 Bad Request for a non-numeric course ID
#[tokio::test]
async fn rejects_non_integer_course_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_course_tables().build().await?;

    let resp = test
        .router()
        .oneshot(get("/courses/abc/installment-plans"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = read_json(resp).await;
    assert!(!body.error.is_empty());

    Ok(())
}

#[tokio::test]
async fn serves_installment_plans() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .with_mock_course(1)
        .with_installment_plan(1, 6, 560.0)
        .build()
        .await?;

    let resp = test
        .router()
        .oneshot(get("/courses/1/installment-plans"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let plans: Vec<InstallmentPlanDto> = read_json(resp).await;
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].total_price, 3360.0);

    Ok(())
}

/// Expect camelCase keys & a nested location object in the course listing
#[tokio::test]
async fn serializes_courses_in_camel_case() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .with_mock_course(1)
        .build()
        .await?;

    let resp = test.router().oneshot(get("/courses")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let courses: Value = read_json(resp).await;
    let course = &courses[0];
    assert_eq!(course["type"], "Presencial");
    assert_eq!(course["originalPrice"], 4752.0);
    assert_eq!(course["cashPrice"], 2613.6);
    assert_eq!(course["location"]["city"], "Campinas");

    Ok(())
}

/// Expect 201 Created for a camelCase JSON enrollment body
#[tokio::test]
async fn creates_enrollment_from_json() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .with_mock_course(1)
        .build()
        .await?;

    let body = json!({
        "student": {
            "fullName": "Marina Borges",
            "cpf": "635.432.120-52",
            "birthDate": "1998-11-03",
            "email": "marina.borges@gmail.com",
            "phone": "(19) 99000-9445",
            "highSchoolCompletionYear": 2015,
            "agreeToTerms": true
        },
        "paymentInfo": { "courseId": 1 }
    });
    let resp = test
        .router()
        .oneshot(post_json("/enrollments", &body))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = read_json(resp).await;
    assert_eq!(created["student"]["birthDate"], "1998-11-03");
    assert_eq!(created["student"]["receiveWhatsappNotifications"], false);
    // Installment fields are omitted for cash payment
    assert!(created["enrollment"].get("installments").is_none());

    let created: EnrollmentWithStudentDto = serde_json::from_value(created).unwrap();
    assert_eq!(created.enrollment.course_id, 1);

    Ok(())
}

/// Expect missing student fields to be reported by the validators rather than as malformed JSON
#[tokio::test]
async fn reports_missing_student_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await?;

    let body = json!({ "agreeToTerms": true, "fullName": "Marina Borges" });
    let resp = test
        .router()
        .oneshot(post_json("/students", &body))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ValidationErrorDto = read_json(resp).await;
    let fields: Vec<&str> = body.fields.iter().map(|field| field.field.as_str()).collect();
    assert_eq!(
        fields,
        vec!["cpf", "birthDate", "email", "phone", "highSchoolCompletionYear"]
    );

    Ok(())
}

/// Expect 400 Bad Request rather than 422 for malformed JSON
#[tokio::test]
async fn rejects_malformed_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await?;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/students")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"fullName\": "))
        .unwrap();
    let resp = test.router().oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = read_json(resp).await;
    assert!(!body.error.is_empty());

    Ok(())
}

/// Expect 400 Bad Request when a field has the wrong type
#[tokio::test]
async fn rejects_wrongly_typed_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await?;

    let body = json!({ "student": {}, "paymentInfo": { "courseId": "one" } });
    let resp = test
        .router()
        .oneshot(post_json("/enrollments", &body))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 Bad Request when the student carries a key outside the schema
#[tokio::test]
async fn rejects_unknown_student_field() -> Result<(), TestError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await?;

    let mut body = serde_json::to_value(student_dto()).unwrap();
    body["isAdmin"] = json!(true);
    let resp = test
        .router()
        .oneshot(post_json("/students", &body))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = read_json(resp).await;
    assert!(error.error.contains("isAdmin"));

    Ok(())
}

/// Expect a misspelled terms key to be rejected rather than read as unaccepted terms
#[tokio::test]
async fn rejects_misspelled_enrollment_keys() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .with_mock_course(1)
        .build()
        .await?;

    let mut body = serde_json::to_value(enrollment_dto(1)).unwrap();
    body["student"]
        .as_object_mut()
        .unwrap()
        .remove("agreeToTerms");
    body["student"]["agreeTerms"] = json!(true);
    let resp = test
        .router()
        .oneshot(post_json("/enrollments", &body))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = read_json(resp).await;
    assert!(error.error.contains("agreeTerms"));

    let mut body = serde_json::to_value(enrollment_dto(1)).unwrap();
    body["paymentInfo"]["installmentsCount"] = json!(12);
    let resp = test
        .router()
        .oneshot(post_json("/enrollments", &body))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = test
        .router()
        .oneshot(get("/api/docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: Value = read_json(resp).await;
    assert!(doc["paths"].get("/courses").is_some());
    assert!(doc["paths"].get("/courses/{id}/installment-plans").is_some());
    assert!(doc["paths"].get("/students").is_some());
    assert!(doc["paths"].get("/enrollments").is_some());

    Ok(())
}
