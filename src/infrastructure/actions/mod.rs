//! GitHub Actions Runtime
//!
//! Implements the StepRuntime port with the conventions of the Actions runner:
//! inputs arrive as `INPUT_*` environment variables, diagnostics are
//! `::command::` lines on stdout, and outputs are appended to `$GITHUB_OUTPUT`.

pub mod command;
mod runtime;

pub use command::{
    escape_data, escape_property, file_command_key_value, workflow_command, AnnotationLevel,
};
pub use runtime::{input_env_var, ActionsRuntime, GITHUB_ACTIONS_ENV, GITHUB_OUTPUT_ENV};
