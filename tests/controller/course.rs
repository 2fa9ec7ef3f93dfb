//! Tests for the course catalog endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use matricula::{
    model::course::{CourseDto, CourseTypeDto, InstallmentPlanDto},
    server::controller::course::{get_courses, get_installment_plans},
};

use super::*;

/// Expect 200 OK with courses ordered by ID
#[tokio::test]
async fn lists_courses() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .with_mock_distance_course(2)
        .with_mock_course(1)
        .build()
        .await?;

    let result = get_courses(State(test.app_state())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let courses: Vec<CourseDto> = read_json(resp).await;
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].id, 1);
    assert_eq!(courses[1].course_type, CourseTypeDto::EaD);

    Ok(())
}

/// Expect 200 OK with an empty list when the catalog is empty
#[tokio::test]
async fn lists_empty_catalog() -> Result<(), TestError> {
    let test = TestBuilder::new().with_course_tables().build().await?;

    let resp = get_courses(State(test.app_state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let courses: Vec<CourseDto> = read_json(resp).await;
    assert!(courses.is_empty());

    Ok(())
}

/// Expect 500 Internal Server Error when the tables are missing
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_courses(State(test.app_state())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

/// Expect 200 OK with plans ordered by installment count
#[tokio::test]
async fn lists_installment_plans() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_course_tables()
        .with_mock_course(1)
        .with_installment_plan(1, 12, 299.9)
        .with_installment_plan(1, 1, 3200.0)
        .build()
        .await?;

    let result = get_installment_plans(State(test.app_state()), Ok(Path(1))).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let plans: Vec<InstallmentPlanDto> = read_json(resp).await;
    let installments: Vec<i32> = plans.iter().map(|plan| plan.installments).collect();
    assert_eq!(installments, vec![1, 12]);

    Ok(())
}

/// Expect 200 OK with an empty list for an unknown course
#[tokio::test]
async fn lists_no_plans_for_unknown_course() -> Result<(), TestError> {
    let test = TestBuilder::new().with_course_tables().build().await?;

    let result = get_installment_plans(State(test.app_state()), Ok(Path(42))).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let plans: Vec<InstallmentPlanDto> = read_json(resp).await;
    assert!(plans.is_empty());

    Ok(())
}
