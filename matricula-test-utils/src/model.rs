//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main matricula crate to keep test code consistent.

/// Type alias for the course database model.
pub type CourseModel = entity::course::Model;

/// Type alias for the installment plan database model.
pub type InstallmentPlanModel = entity::installment_plan::Model;

/// Type alias for the student database model.
pub type StudentModel = entity::student::Model;
