use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when one or more request fields fail validation
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    /// Every field message joined by `; `
    pub error: String,
    /// One entry per offending field
    pub fields: Vec<FieldErrorDto>,
}

/// Validation failure attributed to a single request field
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorDto {
    /// Field name as it appears in the request body
    pub field: String,
    /// Human readable reason
    pub message: String,
}
