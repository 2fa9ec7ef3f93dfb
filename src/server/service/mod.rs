//! Service layer for business logic and orchestration.
//!
//! Services validate input, coordinate repositories and decide transaction boundaries.
//! The course service serves the read-only catalog, the student service registers students
//! and the enrollment service ties a new student to a course.

pub mod course;
pub mod enrollment;
pub mod student;
