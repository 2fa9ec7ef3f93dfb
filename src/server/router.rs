//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::{middleware, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{self, util::log_request::log_request},
    model::app::AppState,
};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /courses` - List the course catalog
/// - `GET /courses/{id}/installment-plans` - List a course's installment plans
/// - `POST /students` - Register a student
/// - `POST /enrollments` - Register a student & enroll them in a course
///
/// The OpenAPI specification is available at `/api/docs/openapi.json` and Swagger UI is
/// served at `/api/docs`. Every request, documentation included, passes through the request
/// logging middleware.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Matrícula", description = "Course catalog & enrollment API"), tags(
        (name = controller::course::COURSE_TAG, description = "Course catalog API routes"),
        (name = controller::student::STUDENT_TAG, description = "Student registration API routes"),
        (name = controller::enrollment::ENROLLMENT_TAG, description = "Enrollment API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::course::get_courses))
        .routes(routes!(controller::course::get_installment_plans))
        .routes(routes!(controller::student::create_student))
        .routes(routes!(controller::enrollment::create_enrollment))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(middleware::from_fn(log_request))
}
