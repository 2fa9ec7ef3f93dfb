use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        course::{CourseDto, InstallmentPlanDto},
    },
    server::{error::Error, model::app::AppState, service::course::CourseService},
};

pub static COURSE_TAG: &str = "courses";

/// List every course in the catalog
#[utoipa::path(
    get,
    path = "/courses",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "Success when listing courses", body = Vec<CourseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let course_service = CourseService::new(&state.db);

    let courses = course_service.get_courses().await?;

    Ok((StatusCode::OK, Json(courses)))
}

/// List the installment plans of a course, fewest installments first
///
/// Returns an empty list for a course without plans or that does not exist.
#[utoipa::path(
    get,
    path = "/courses/{id}/installment-plans",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Success when listing installment plans", body = Vec<InstallmentPlanDto>),
        (status = 400, description = "Course ID is not an integer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_installment_plans(
    State(state): State<AppState>,
    course_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(course_id) = course_id?;
    let course_service = CourseService::new(&state.db);

    let plans = course_service.get_installment_plans(course_id).await?;

    Ok((StatusCode::OK, Json(plans)))
}
