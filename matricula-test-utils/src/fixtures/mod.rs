//! Test fixture modules for database records.
//!
//! - `course` - Catalog courses & their installment plans
//! - `student` - Registered students
//! - `factory` - Pure functions building in-memory models with standard test values

pub mod course;
pub mod factory;
pub mod student;
