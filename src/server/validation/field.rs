//! Single-field validators.
//!
//! Validators that depend on the current date take it as `today` so callers decide
//! the reference date.

use chrono::{DateTime, Datelike, NaiveDate};

use crate::server::{
    error::validation::FieldError,
    util::format::{digits_only, PHONE_LENGTH},
    validation::cpf::is_valid_cpf,
};

/// Oldest accepted age for a student, in whole years
pub const MAX_AGE_YEARS: i32 = 125;

/// Requires at least a first and last name separated by whitespace
pub fn validate_full_name(full_name: &str) -> Result<(), FieldError> {
    if full_name.trim().is_empty() {
        return Err(FieldError::MissingFullName);
    }

    if full_name.split_whitespace().count() < 2 {
        return Err(FieldError::InvalidFullName);
    }

    Ok(())
}

pub fn validate_cpf(cpf: &str) -> Result<(), FieldError> {
    if cpf.trim().is_empty() {
        return Err(FieldError::MissingCpf);
    }

    if !is_valid_cpf(cpf) {
        return Err(FieldError::InvalidCpf);
    }

    Ok(())
}

/// Parses & validates a birth date.
///
/// Accepts an ISO calendar date (`1998-11-03`) or an RFC 3339 timestamp, in which case only
/// the date part is kept. The date must not be after `today` and the resulting age must not
/// exceed [`MAX_AGE_YEARS`].
///
/// # Returns
/// - `Ok(NaiveDate)` - The parsed birth date
/// - `Err(FieldError::MissingBirthDate)` - Empty input
/// - `Err(FieldError::UnparseableBirthDate)` - Input is not a real calendar date
/// - `Err(FieldError::BirthDateOutOfRange)` - Date is in the future or too far in the past
pub fn validate_birth_date(birth_date: &str, today: NaiveDate) -> Result<NaiveDate, FieldError> {
    let birth_date = birth_date.trim();
    if birth_date.is_empty() {
        return Err(FieldError::MissingBirthDate);
    }

    let date = NaiveDate::parse_from_str(birth_date, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(birth_date).map(|dt| dt.date_naive()))
        .map_err(|_| FieldError::UnparseableBirthDate)?;

    if date > today || age_in_years(date, today) > MAX_AGE_YEARS {
        return Err(FieldError::BirthDateOutOfRange);
    }

    Ok(date)
}

/// Whole years elapsed between `birth_date` and `today`
fn age_in_years(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }

    age
}

/// Requires a `local@domain.tld` shaped address.
///
/// Only the shape is checked: a single `@`, no whitespace, non-empty domain labels made of
/// letters, digits or hyphens, and an alphabetic top-level domain of 2 or more letters.
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(FieldError::MissingEmail);
    }

    if is_email_shaped(email) {
        Ok(())
    } else {
        Err(FieldError::InvalidEmail)
    }
}

fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let labels_valid = labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_alphanumeric() || c == '-')
    });

    let tld = labels[labels.len() - 1];
    labels_valid && tld.chars().count() >= 2 && tld.chars().all(char::is_alphabetic)
}

/// Requires a Brazilian mobile number.
///
/// Punctuation such as `(19) 99000-9445` is accepted. Once reduced to digits the number is
/// either 11 digits (2-digit area code without zeros, then `9`, then 8 digits) or 9 digits
/// starting with `9` when the area code is omitted.
pub fn validate_phone(phone: &str) -> Result<(), FieldError> {
    if phone.trim().is_empty() {
        return Err(FieldError::MissingPhone);
    }

    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '(' | ')' | '-' | ' ' | '.'))
    {
        return Err(FieldError::InvalidPhone);
    }

    let digits = digits_only(phone).into_bytes();
    let valid = match digits.len() {
        PHONE_LENGTH => {
            matches!(digits[0], b'1'..=b'9') && matches!(digits[1], b'1'..=b'9') && digits[2] == b'9'
        }
        9 => digits[0] == b'9',
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(FieldError::InvalidPhone)
    }
}

/// Requires a 4-digit year no later than the current year
pub fn validate_high_school_completion_year(
    year: Option<i32>,
    today: NaiveDate,
) -> Result<i32, FieldError> {
    let year = year.ok_or(FieldError::MissingHighSchoolCompletionYear)?;

    if !(1000..=9999).contains(&year) || year > today.year() {
        return Err(FieldError::InvalidHighSchoolCompletionYear);
    }

    Ok(year)
}
