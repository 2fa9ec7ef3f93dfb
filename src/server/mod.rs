//! Server application core modules.
//!
//! This module contains all server-side functionality of the enrollment API: HTTP routing,
//! input validation, business logic, database access and startup configuration.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
pub mod validation;
