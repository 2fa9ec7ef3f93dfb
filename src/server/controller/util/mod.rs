//! Utility functions for controller request handling.
//!
//! This module provides middleware shared by every route, such as request logging.

pub mod log_request;
