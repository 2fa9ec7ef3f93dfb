//! Course catalog and student enrollment API.
//!
//! The `model` module holds the JSON request & response types exchanged with clients,
//! `server` holds the HTTP server, business logic and data access.

pub mod model;
pub mod server;
