//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application state,
//! database model type aliases, and the validated inputs handed from the validation layer to
//! services and repositories.

pub mod app;
pub mod db;
pub mod enrollment;
pub mod student;
