use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StudentError {
    #[error("É obrigatório concordar com os termos de uso")]
    TermsNotAccepted,
    #[error("CPF já cadastrado")]
    CpfAlreadyRegistered,
    #[error("E-mail já cadastrado")]
    EmailAlreadyRegistered,
}

impl StudentError {
    /// Maps a unique constraint violation on the student table to the matching conflict.
    ///
    /// The application checks CPF & email before inserting, but a concurrent submission can
    /// still reach the database constraint first.
    pub fn from_unique_violation(err: &DbErr) -> Option<Self> {
        let Some(SqlErr::UniqueConstraintViolation(message)) = err.sql_err() else {
            return None;
        };

        let message = message.to_lowercase();
        if message.contains("cpf") {
            Some(Self::CpfAlreadyRegistered)
        } else if message.contains("email") {
            Some(Self::EmailAlreadyRegistered)
        } else {
            None
        }
    }
}

impl IntoResponse for StudentError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::TermsNotAccepted => StatusCode::BAD_REQUEST,
            Self::CpfAlreadyRegistered | Self::EmailAlreadyRegistered => StatusCode::CONFLICT,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
