//! Input validation for student & payment data.
//!
//! Validators are plain functions over a single field returning the [`FieldError`]
//! describing why the value was rejected. [`student::validate_student`] and
//! [`payment::validate_payment_info`] compose them, collecting every failure so
//! clients can correct all fields at once.
//!
//! [`FieldError`]: crate::server::error::validation::FieldError

pub mod cpf;
pub mod field;
pub mod payment;
pub mod student;
