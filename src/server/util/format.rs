//! Display formatting & canonicalization for Brazilian document and phone numbers.
//!
//! Students may submit CPF and phone numbers punctuated (`635.432.120-52`,
//! `(19) 99000-9445`) or as bare digits. Everything is stored digits-only; `format_cpf`
//! renders the canonical CPF back into its familiar layout.

use crate::server::validation::cpf::CPF_LENGTH;

/// Mobile number length including the 2-digit area code
pub const PHONE_LENGTH: usize = 11;

/// Strips every character that is not an ASCII digit.
///
/// # Example
/// ```ignore
/// assert_eq!(digits_only("635.432.120-52"), "63543212052");
/// ```
pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Renders a CPF as `000.000.000-00`.
///
/// Accepts either punctuated or digit-only input. Returns `None` if the value does not
/// contain exactly 11 digits.
pub fn format_cpf(cpf: &str) -> Option<String> {
    let digits = digits_only(cpf);
    if digits.len() != CPF_LENGTH {
        return None;
    }

    Some(format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    ))
}
