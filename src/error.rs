//! Error types for deploy-s3
//!
//! Library code returns these `thiserror` enums; the binary wraps them in
//! `anyhow` at the boundary.

use thiserror::Error;

/// Result type alias for deploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// A required step input was not supplied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Input required and not supplied: {name}")]
    MissingInput { name: String },
}

/// The external sync tool could not be run or reported failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// The process could not be started at all
    #[error("unable to start '{program}': {message}")]
    Spawn { program: String, message: String },

    /// The process ran and exited unsuccessfully (`code` is `None` when killed by a signal)
    #[error("{}", non_zero_message(.program, .code))]
    NonZeroExit { program: String, code: Option<i32> },
}

fn non_zero_message(program: &str, code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("The process '{}' failed with exit code {}", program, code),
        None => format!("The process '{}' was terminated by a signal", program),
    }
}

/// Main error type for the deploy step
#[derive(Error, Debug)]
pub enum DeployError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Sync(#[from] SyncError),

    /// Writing a step output failed
    #[error("unable to set output: {0}")]
    Output(#[from] std::io::Error),
}

impl DeployError {
    /// Stable identifier used in JSON error events
    pub fn code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration",
            Self::Sync(_) => "sync",
            Self::Output(_) => "output",
        }
    }
}
