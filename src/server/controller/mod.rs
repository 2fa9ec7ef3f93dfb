//! HTTP controller endpoints for the enrollment web API.
//!
//! This module contains Axum handlers for the course catalog, student registration and
//! enrollment. Controllers extract requests, delegate to services and map results to HTTP
//! responses. Endpoints are documented for OpenAPI through utoipa.

pub mod course;
pub mod enrollment;
pub mod student;
pub mod util;
