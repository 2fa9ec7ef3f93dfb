//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted arguments, verifying status codes and
//! response bodies for every API endpoint.

mod course;
mod enrollment;
mod student;

use matricula_test_utils::prelude::*;

use crate::util::*;
