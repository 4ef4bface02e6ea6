//! deploy-s3 - static site deploy step for CI
//!
//! Syncs a local distribution folder to an S3 bucket with the AWS CLI, then
//! publishes the bucket's static website URL as the `website-url` step output.
//!
//! ## Layers
//!
//! - `domain` - inputs, derived URLs, and the sync/runtime ports
//! - `infrastructure` - AWS CLI sync and the GitHub Actions runtime
//! - `application` - the deploy use case
//! - `presentation` - CLI parsing and dependency wiring

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOutcome, DeployUseCase};
pub use domain::ports::{InputOptions, ObjectSync, StepRuntime, SyncStatus};
pub use domain::value_objects::{website_url, DeployInputs, InputName, WEBSITE_URL_OUTPUT};
pub use error::{ConfigurationError, DeployError, DeployResult, SyncError};
pub use infrastructure::{ActionsRuntime, AwsCliSync};
