use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Personal data submitted by a prospective student.
///
/// Every field defaults when absent so that missing values are reported by the
/// field validators with their own messages rather than as a malformed body.
/// Unknown keys are rejected as a malformed body.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CreateStudentDto {
    /// Full name (first and last name)
    #[schema(example = "Marina Borges")]
    pub full_name: String,
    /// CPF, punctuated or digits only
    #[schema(example = "635.432.120-52")]
    pub cpf: String,
    /// ISO calendar date
    #[schema(example = "1998-11-03")]
    pub birth_date: String,
    #[schema(example = "marina.borges@gmail.com")]
    pub email: String,
    /// Mobile number with area code
    #[schema(example = "(19) 99000-9445")]
    pub phone: String,
    #[schema(example = 2015)]
    pub high_school_completion_year: Option<i32>,
    #[schema(example = true)]
    pub agree_to_terms: Option<bool>,
    #[schema(example = false)]
    pub receive_whatsapp_notifications: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    pub id: i32,
    pub full_name: String,
    /// Digits only
    #[schema(example = "63543212052")]
    pub cpf: String,
    pub birth_date: NaiveDate,
    pub email: String,
    /// Digits only
    #[schema(example = "19990009445")]
    pub phone: String,
    pub high_school_completion_year: i32,
    pub agree_to_terms: bool,
    pub receive_whatsapp_notifications: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::student::Model> for StudentDto {
    fn from(student: entity::student::Model) -> Self {
        Self {
            id: student.id,
            full_name: student.full_name,
            cpf: student.cpf,
            birth_date: student.birth_date,
            email: student.email,
            phone: student.phone,
            high_school_completion_year: student.high_school_completion_year,
            agree_to_terms: student.agree_to_terms,
            receive_whatsapp_notifications: student.receive_whatsapp_notifications,
            created_at: student.created_at,
            updated_at: student.updated_at,
        }
    }
}
