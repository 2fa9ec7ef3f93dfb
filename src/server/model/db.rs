//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, so services and repositories don't need to spell out paths
//! into the generated `entity` crate.

/// Type alias for the course catalog database model.
///
/// Pricing columns (`original_price`, `installment_price`, `installments`, `cash_price`) are
/// expected to be either all set or all null.
pub type CourseModel = entity::course::Model;

/// Type alias for the installment plan database model.
///
/// Each plan belongs to a single course, a course may offer many plans.
pub type InstallmentPlanModel = entity::installment_plan::Model;

/// Type alias for the student database model.
///
/// `cpf` and `phone` are stored digits-only, `cpf` and `email` are unique.
pub type StudentModel = entity::student::Model;

/// Type alias for the enrollment database model.
///
/// Links a student to a course along with the chosen installment terms, if any.
pub type EnrollmentModel = entity::enrollment::Model;
