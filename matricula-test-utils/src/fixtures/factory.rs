//! Factory functions for generating mock database models.
//!
//! Provides pure functions for creating database models with standard test values. These
//! are in-memory model instances that don't require database interaction.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::CourseType;

use crate::{
    constant::{TEST_ADDRESS, TEST_CITY, TEST_DISTANCE_UNIT, TEST_EMAIL_DOMAIN, TEST_UNIT},
    model::{CourseModel, InstallmentPlanModel, StudentModel},
};

/// Generate a checksum-valid, digits-only CPF unique to `seed`.
///
/// The seed forms the first 9 digits, zero padded, followed by the two check digits.
/// Seeds above 999,999,999 are truncated to their last 9 digits.
///
/// # Example
/// ```
/// use matricula_test_utils::fixtures::factory::valid_cpf;
///
/// assert_eq!(valid_cpf(1), "00000000191");
/// assert_eq!(valid_cpf(123456789), "12345678909");
/// ```
pub fn valid_cpf(seed: u32) -> String {
    let base = format!("{:09}", seed % 1_000_000_000);
    let mut digits: Vec<u32> = base.chars().filter_map(|c| c.to_digit(10)).collect();

    for _ in 0..2 {
        let top_weight = digits.len() as u32 + 1;
        let sum: u32 = digits
            .iter()
            .zip((2..=top_weight).rev())
            .map(|(digit, weight)| digit * weight)
            .sum();
        let check = match sum % 11 {
            remainder if remainder < 2 => 0,
            remainder => 11 - remainder,
        };
        digits.push(check);
    }

    digits.iter().map(|digit| digit.to_string()).collect()
}

/// Generate an e-mail address unique to `seed`
pub fn email(seed: u32) -> String {
    format!("student{}@{}", seed, TEST_EMAIL_DOMAIN)
}

/// Create a mock on-campus course database model with every pricing field set.
///
/// # Arguments
/// - `course_id` - The course ID
///
/// # Returns
/// - `CourseModel` - A course model with test data
pub fn mock_course_model(course_id: i32) -> CourseModel {
    let now = Utc::now().naive_utc();
    CourseModel {
        id: course_id,
        modality: "Presencial".to_string(),
        period: Some("Manhã".to_string()),
        original_price: Some(4752.0),
        installment_price: Some(169.95),
        installments: Some(18),
        cash_price: Some(2613.6),
        description: Some("Curso superior de tecnologia".to_string()),
        course_type: CourseType::Presencial,
        location_city: TEST_CITY.to_string(),
        location_unit: TEST_UNIT.to_string(),
        location_address: TEST_ADDRESS.to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock distance learning course database model without a period or pricing.
pub fn mock_distance_course_model(course_id: i32) -> CourseModel {
    CourseModel {
        modality: "EaD".to_string(),
        period: None,
        original_price: None,
        installment_price: None,
        installments: None,
        cash_price: None,
        course_type: CourseType::EaD,
        location_unit: TEST_DISTANCE_UNIT.to_string(),
        ..mock_course_model(course_id)
    }
}

/// Create a mock installment plan database model.
///
/// The total price is the installment value times the installment count.
pub fn mock_installment_plan_model(
    course_id: i32,
    installments: i32,
    installment_value: f64,
) -> InstallmentPlanModel {
    let now = Utc::now().naive_utc();
    InstallmentPlanModel {
        id: 0,
        course_id,
        installments,
        installment_value,
        total_price: installment_value * installments as f64,
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock student database model in canonical form.
///
/// CPF and e-mail are derived from `seed` so students built from different seeds never
/// conflict. The ID is the seed.
pub fn mock_student_model(seed: u32) -> StudentModel {
    let now = Utc::now().naive_utc();
    StudentModel {
        id: seed as i32,
        full_name: format!("Estudante {}", seed),
        cpf: valid_cpf(seed),
        birth_date: NaiveDate::from_ymd_opt(2000, 1, 15).unwrap_or_default(),
        email: email(seed),
        phone: "19990009445".to_string(),
        high_school_completion_year: 2018,
        agree_to_terms: true,
        receive_whatsapp_notifications: false,
        created_at: now,
        updated_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_known_cpfs() {
        assert_eq!(valid_cpf(1), "00000000191");
        assert_eq!(valid_cpf(123456789), "12345678909");
        assert_eq!(valid_cpf(100000001), "10000000108");
    }

    #[test]
    fn distance_course_has_no_pricing() {
        let course = mock_distance_course_model(2);

        assert_eq!(course.original_price, None);
        assert_eq!(course.installment_price, None);
        assert_eq!(course.installments, None);
        assert_eq!(course.cash_price, None);
    }

    #[test]
    fn generates_distinct_students() {
        let first = mock_student_model(1);
        let second = mock_student_model(2);

        assert_ne!(first.cpf, second.cpf);
        assert_ne!(first.email, second.email);
    }
}
