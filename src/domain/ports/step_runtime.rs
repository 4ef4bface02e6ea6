//! Step Runtime Port
//!
//! The CI environment a step runs in: where inputs come from, where
//! notices and outputs go.

use crate::error::ConfigurationError;

/// Options for reading a single input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputOptions {
    /// Fail with `ConfigurationError` when the input is absent or empty
    pub required: bool,
    /// Strip leading and trailing whitespace
    pub trim_whitespace: bool,
}

impl InputOptions {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            required: false,
            trim_whitespace: true,
        }
    }
}

/// Trait for CI step runtimes
pub trait StepRuntime {
    /// Read an input value; optional inputs that are absent read as `""`
    fn input(&self, name: &str, options: InputOptions) -> Result<String, ConfigurationError>;

    /// Informational message surfaced in the run summary
    fn notice(&mut self, message: &str);

    /// Diagnostic message, only shown when step debugging is enabled
    fn debug(&mut self, message: &str);

    /// Publish a named output for later steps
    fn set_output(&mut self, name: &str, value: &str) -> std::io::Result<()>;
}
