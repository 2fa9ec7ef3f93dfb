//! CPF (Cadastro de Pessoas Físicas) checksum validation.
//!
//! A CPF is 11 digits where the last two are check digits computed with modulo 11
//! arithmetic over the preceding digits.

/// Number of digits in a CPF
pub const CPF_LENGTH: usize = 11;

/// Validates a CPF's length & check digits.
///
/// Non-digit characters are ignored so both `635.432.120-52` and `63543212052` are accepted.
/// Numbers made of a single repeated digit (`111.111.111-11`) satisfy the checksum but are
/// never issued, so they are rejected.
pub fn is_valid_cpf(cpf: &str) -> bool {
    let digits: Vec<u32> = cpf.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != CPF_LENGTH {
        return false;
    }

    if digits.iter().all(|&digit| digit == digits[0]) {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

/// Computes the check digit following `digits`.
///
/// Digits are weighted from `digits.len() + 1` down to 2; a remainder below 2 yields 0,
/// otherwise the check digit is `11 - remainder`.
pub fn check_digit(digits: &[u32]) -> u32 {
    let top_weight = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .zip((2..=top_weight).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();

    match sum % 11 {
        remainder if remainder < 2 => 0,
        remainder => 11 - remainder,
    }
}
