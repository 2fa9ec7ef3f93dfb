//! Request & response types of the HTTP API.

pub mod api;
pub mod course;
pub mod enrollment;
pub mod student;
