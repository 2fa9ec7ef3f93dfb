//! Error types for the enrollment server.
//!
//! Each domain has its own error enum implementing `IntoResponse` so handlers can return
//! them directly. The aggregate [`Error`] converts from every domain error and external
//! library error, delegating to the domain response or falling back to a generic
//! 500 Internal Server Error.

pub mod config;
pub mod course;
pub mod student;
pub mod validation;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, course::CourseError, student::StudentError,
        validation::ValidationError,
    },
};

/// Main error type for the enrollment server.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Client errors (invalid fields, unaccepted terms, duplicate students, unknown courses,
///   malformed request bodies)
/// - External library errors (database, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// One or more request fields failed validation.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Student could not be created (terms not accepted, CPF or e-mail already registered).
    #[error(transparent)]
    StudentError(#[from] StudentError),
    /// Requested course does not exist.
    #[error(transparent)]
    CourseError(#[from] CourseError),
    /// Request body is not valid JSON or does not match the expected shape.
    #[error("{0}")]
    InvalidRequestBody(String),
    /// Path parameter could not be parsed, such as a non-numeric ID.
    #[error("{0}")]
    InvalidRequestPath(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequestBody(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidRequestPath(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Invalid fields, unaccepted terms or malformed request
/// - 404 Not Found - Unknown course
/// - 409 Conflict - CPF or e-mail already registered
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::StudentError(err) => err.into_response(),
            Self::CourseError(err) => err.into_response(),
            Self::InvalidRequestBody(message) | Self::InvalidRequestPath(message) => {
                tracing::debug!("Rejected malformed request: {}", message);

                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
