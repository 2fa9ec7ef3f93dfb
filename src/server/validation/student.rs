use chrono::NaiveDate;

use crate::{
    model::student::CreateStudentDto,
    server::{
        error::validation::{FieldError, ValidationError},
        model::student::NewStudent,
        util::format::digits_only,
        validation::field::{
            validate_birth_date, validate_cpf, validate_email, validate_full_name,
            validate_high_school_completion_year, validate_phone,
        },
    },
};

/// Validates every personal data field of a student submission.
///
/// All validators run, so the returned error lists one entry per invalid field. Terms
/// agreement is not checked here, see [`StudentService::create_student`].
///
/// # Arguments
/// - `student` - Submitted student data
/// - `today` - Reference date for the birth date & completion year rules
///
/// # Returns
/// - `Ok(NewStudent)` - Canonical student data with digits-only CPF & phone
/// - `Err(ValidationError)` - Every field that failed validation
///
/// [`StudentService::create_student`]: crate::server::service::student::StudentService::create_student
pub fn validate_student(
    student: &CreateStudentDto,
    today: NaiveDate,
) -> Result<NewStudent, ValidationError> {
    let mut errors = Vec::new();

    let full_name = validate_full_name(&student.full_name);
    let cpf = validate_cpf(&student.cpf);
    let birth_date = validate_birth_date(&student.birth_date, today);
    let email = validate_email(&student.email);
    let phone = validate_phone(&student.phone);
    let year = validate_high_school_completion_year(student.high_school_completion_year, today);

    collect(&mut errors, &full_name);
    collect(&mut errors, &cpf);
    collect(&mut errors, &birth_date);
    collect(&mut errors, &email);
    collect(&mut errors, &phone);
    collect(&mut errors, &year);

    match (birth_date, year) {
        (Ok(birth_date), Ok(high_school_completion_year)) if errors.is_empty() => Ok(NewStudent {
            full_name: student.full_name.trim().to_string(),
            cpf: digits_only(&student.cpf),
            birth_date,
            email: student.email.trim().to_string(),
            phone: digits_only(&student.phone),
            high_school_completion_year,
            receive_whatsapp_notifications: student
                .receive_whatsapp_notifications
                .unwrap_or(false),
        }),
        _ => Err(ValidationError::new(errors)),
    }
}

fn collect<T>(errors: &mut Vec<FieldError>, result: &Result<T, FieldError>) {
    if let Err(error) = result {
        errors.push(*error);
    }
}
