use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{FieldErrorDto, ValidationErrorDto};

/// Reason a single request field was rejected.
///
/// The display message of each variant is returned to the client as is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Nome completo é obrigatório")]
    MissingFullName,
    #[error("Nome completo deve conter pelo menos nome e sobrenome (ex: João Silva)")]
    InvalidFullName,
    #[error("CPF é obrigatório")]
    MissingCpf,
    #[error("CPF inválido")]
    InvalidCpf,
    #[error("Data de nascimento é obrigatória")]
    MissingBirthDate,
    #[error("Data de nascimento deve ser uma data válida")]
    UnparseableBirthDate,
    #[error("Data de nascimento inválida (não pode ser futura ou maior que 125 anos)")]
    BirthDateOutOfRange,
    #[error("E-mail é obrigatório")]
    MissingEmail,
    #[error("E-mail inválido")]
    InvalidEmail,
    #[error("Celular é obrigatório")]
    MissingPhone,
    #[error("Celular inválido (deve conter DDD + 9 dígitos)")]
    InvalidPhone,
    #[error("Ano de conclusão do ensino médio é obrigatório")]
    MissingHighSchoolCompletionYear,
    #[error("Ano de conclusão do ensino médio inválido (deve ter 4 dígitos e não pode ser maior que o ano atual)")]
    InvalidHighSchoolCompletionYear,
    #[error("ID do curso deve ser positivo")]
    InvalidCourseId,
    #[error("Número de parcelas deve ser positivo")]
    InvalidInstallments,
    #[error("Valor da parcela deve ser positivo")]
    InvalidInstallmentValue,
    #[error("Valor total deve ser positivo")]
    InvalidTotalPrice,
    #[error("Informações de parcelamento incompletas (informe parcelas, valor da parcela e valor total)")]
    IncompleteInstallmentTerms,
}

impl FieldError {
    /// Name of the offending field as it appears in request bodies
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingFullName | Self::InvalidFullName => "fullName",
            Self::MissingCpf | Self::InvalidCpf => "cpf",
            Self::MissingBirthDate | Self::UnparseableBirthDate | Self::BirthDateOutOfRange => {
                "birthDate"
            }
            Self::MissingEmail | Self::InvalidEmail => "email",
            Self::MissingPhone | Self::InvalidPhone => "phone",
            Self::MissingHighSchoolCompletionYear | Self::InvalidHighSchoolCompletionYear => {
                "highSchoolCompletionYear"
            }
            Self::InvalidCourseId => "courseId",
            Self::InvalidInstallments => "installments",
            Self::InvalidInstallmentValue => "installmentValue",
            Self::InvalidTotalPrice => "totalPrice",
            Self::IncompleteInstallmentTerms => "paymentInfo",
        }
    }
}

/// One or more request fields failed validation.
///
/// Holds every failure found rather than only the first.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", join_messages(.0))]
pub struct ValidationError(Vec<FieldError>);

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn contains(&self, error: FieldError) -> bool {
        self.0.contains(&error)
    }
}

impl From<FieldError> for ValidationError {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request with invalid fields: {}", self);

        let fields = self
            .0
            .iter()
            .map(|error| FieldErrorDto {
                field: error.field().to_string(),
                message: error.to_string(),
            })
            .collect();

        (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorDto {
                error: self.to_string(),
                fields,
            }),
        )
            .into_response()
    }
}
