/// Validated course selection & payment terms of an enrollment
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentTerms {
    pub course_id: i32,
    /// `None` for cash payment
    pub installment_plan: Option<InstallmentTerms>,
}

/// Installment terms chosen by the student, every value is positive
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InstallmentTerms {
    pub installments: i32,
    pub installment_value: f64,
    pub total_price: f64,
}
