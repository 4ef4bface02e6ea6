//! Terminal and CI output for the binary.

pub mod error;
pub mod json;
