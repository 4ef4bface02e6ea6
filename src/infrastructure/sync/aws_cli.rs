//! AWS CLI Sync
//!
//! Runs `aws s3 sync <source> <destination> --region <region>` and reports
//! its exit status. Transfer behaviour is entirely the CLI's.

use crate::domain::ports::{ObjectSync, SyncStatus};
use crate::error::SyncError;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

/// Program used when nothing else is configured
pub const DEFAULT_AWS_CLI: &str = "aws";

/// Environment variable naming an alternative sync program
pub const AWS_CLI_ENV: &str = "DEPLOY_S3_AWS_CLI";

/// Where the child's stdout and the command echo go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
}

/// ObjectSync implementation using the AWS CLI
#[derive(Debug, Clone)]
pub struct AwsCliSync {
    program: String,
    output: OutputTarget,
}

impl Default for AwsCliSync {
    fn default() -> Self {
        Self::new(DEFAULT_AWS_CLI)
    }
}

impl AwsCliSync {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            output: OutputTarget::Stdout,
        }
    }

    /// Send the CLI's stdout to stderr, keeping our stdout machine-readable
    pub fn with_stdout_to_stderr(mut self) -> Self {
        self.output = OutputTarget::Stderr;
        self
    }

    /// Arguments passed to the program, in order
    pub fn arguments(source: &Path, destination_uri: &str, region: &str) -> Vec<OsString> {
        vec![
            OsString::from("s3"),
            OsString::from("sync"),
            source.as_os_str().to_os_string(),
            OsString::from(destination_uri),
            OsString::from("--region"),
            OsString::from(region),
        ]
    }

    /// Human-readable command line, as echoed before running
    pub fn command_line(&self, source: &Path, destination_uri: &str, region: &str) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(
            Self::arguments(source, destination_uri, region)
                .iter()
                .map(|arg| arg.to_string_lossy().into_owned()),
        );
        parts.join(" ")
    }
}

impl ObjectSync for AwsCliSync {
    fn name(&self) -> &str {
        &self.program
    }

    fn sync(
        &self,
        source: &Path,
        destination_uri: &str,
        region: &str,
    ) -> Result<SyncStatus, SyncError> {
        let echo = format!(
            "[command]{}",
            self.command_line(source, destination_uri, region)
        );

        let mut cmd = Command::new(&self.program);
        cmd.args(Self::arguments(source, destination_uri, region))
            .stdin(Stdio::null())
            .stderr(Stdio::inherit());

        match self.output {
            OutputTarget::Stdout => {
                println!("{}", echo);
                cmd.stdout(Stdio::inherit());
            }
            OutputTarget::Stderr => {
                eprintln!("{}", echo);
                cmd.stdout(Stdio::from(std::io::stderr()));
            }
        }

        let status = cmd.status().map_err(|e| SyncError::Spawn {
            program: self.program.clone(),
            message: e.to_string(),
        })?;

        Ok(status.into())
    }
}
