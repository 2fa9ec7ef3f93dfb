use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CourseError {
    #[error("Curso com ID {0} não encontrado")]
    NotFound(i32),
}

impl IntoResponse for CourseError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(course_id) => {
                tracing::debug!(course_id = %course_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
