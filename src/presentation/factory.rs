//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::io::Write;

use super::cli::Cli;
use crate::application::DeployUseCase;
use crate::infrastructure::{ActionsRuntime, AwsCliSync};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase = DeployUseCase<AwsCliSync, ActionsRuntime<Box<dyn Write>>>;

/// Build the sync tool for the parsed CLI
pub fn create_sync(cli: &Cli) -> AwsCliSync {
    let sync = AwsCliSync::new(cli.aws_cli.clone());
    if cli.json {
        sync.with_stdout_to_stderr()
    } else {
        sync
    }
}

/// Build the step runtime for the parsed CLI
///
/// Workflow commands go to stderr in `--json` mode so stdout carries only events.
pub fn create_runtime(cli: &Cli) -> ActionsRuntime<Box<dyn Write>> {
    let writer: Box<dyn Write> = if cli.json {
        Box::new(std::io::stderr())
    } else {
        Box::new(std::io::stdout())
    };

    cli.input_overrides().into_iter().fold(
        ActionsRuntime::from_env(writer),
        |runtime, (name, value)| runtime.with_override(name.as_str(), value),
    )
}

/// Create a deploy use case with all dependencies wired up
pub fn create_deploy_use_case(cli: &Cli) -> ConcreteDeployUseCase {
    DeployUseCase::new(create_sync(cli), create_runtime(cli))
}
