use chrono::NaiveDate;

/// Student data that passed validation, in canonical form.
///
/// CPF and phone are digits-only. Terms agreement is implied, a student can only be
/// built after agreeing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewStudent {
    pub full_name: String,
    pub cpf: String,
    pub birth_date: NaiveDate,
    pub email: String,
    pub phone: String,
    pub high_school_completion_year: i32,
    pub receive_whatsapp_notifications: bool,
}
