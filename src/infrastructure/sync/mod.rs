//! Object Sync Implementations
//!
//! Provides concrete implementations of the ObjectSync port:
//! - AwsCliSync: `aws s3 sync` subprocess

mod aws_cli;

pub use aws_cli::{AwsCliSync, AWS_CLI_ENV, DEFAULT_AWS_CLI};
