//! Common test utilities for deploy-s3 CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated environment with a stub sync program and output file
//! - Assertion macros: `assert_output_contains!`, `assert_output_not_contains!`

pub mod assertions;
pub mod env;

#[allow(unused_imports)]
pub use assertions::*;
pub use env::*;
