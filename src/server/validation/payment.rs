use crate::{
    model::enrollment::PaymentInfoDto,
    server::{
        error::validation::{FieldError, ValidationError},
        model::enrollment::{InstallmentTerms, PaymentTerms},
    },
};

/// Validates the course selection & installment terms of an enrollment.
///
/// Installment count, installment value & total price must be sent together or omitted
/// together, partial terms are rejected with [`FieldError::IncompleteInstallmentTerms`].
pub fn validate_payment_info(payment_info: &PaymentInfoDto) -> Result<PaymentTerms, ValidationError> {
    let mut errors = Vec::new();

    if payment_info.course_id <= 0 {
        errors.push(FieldError::InvalidCourseId);
    }
    if payment_info.installments.is_some_and(|installments| installments <= 0) {
        errors.push(FieldError::InvalidInstallments);
    }
    if payment_info.installment_value.is_some_and(|value| value <= 0.0) {
        errors.push(FieldError::InvalidInstallmentValue);
    }
    if payment_info.total_price.is_some_and(|price| price <= 0.0) {
        errors.push(FieldError::InvalidTotalPrice);
    }

    let installment_plan = match (
        payment_info.installments,
        payment_info.installment_value,
        payment_info.total_price,
    ) {
        (Some(installments), Some(installment_value), Some(total_price)) => {
            Some(InstallmentTerms {
                installments,
                installment_value,
                total_price,
            })
        }
        (None, None, None) => None,
        _ => {
            errors.push(FieldError::IncompleteInstallmentTerms);
            None
        }
    };

    if !errors.is_empty() {
        return Err(ValidationError::new(errors));
    }

    Ok(PaymentTerms {
        course_id: payment_info.course_id,
        installment_plan,
    })
}
