//! Utility functions and helpers for server operations.
//!
//! This module provides reusable helpers shared across validators, services and
//! controllers, such as CPF & phone canonicalization and display formatting.

pub mod format;
