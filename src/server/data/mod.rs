//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same queries run
//! against the connection pool or inside a transaction.

pub mod course;
pub mod enrollment;
pub mod installment_plan;
pub mod student;
