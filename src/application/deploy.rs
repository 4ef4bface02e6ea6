//! Deploy Use Case
//!
//! Orchestrates the deploy step:
//! 1. Read the `bucket`, `bucket-region` and `dist-folder` inputs
//! 2. Sync the folder to `s3://<bucket>`
//! 3. Emit the upload notice
//! 4. Publish the `website-url` output
//!
//! Any failure aborts the remaining steps; the output is only set after a
//! successful sync.

use crate::domain::ports::{InputOptions, ObjectSync, StepRuntime};
use crate::domain::value_objects::{DeployInputs, InputName, WEBSITE_URL_OUTPUT};
use crate::error::{ConfigurationError, DeployResult, SyncError};

/// Result of a successful deploy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOutcome {
    pub inputs: DeployInputs,
    /// `s3://<bucket>`
    pub destination_uri: String,
    /// Value published as `website-url`
    pub website_url: String,
}

/// Deploy use case
///
/// Generic over the sync tool and the step runtime so both can be replaced
/// in tests.
pub struct DeployUseCase<S, R> {
    sync: S,
    runtime: R,
}

impl<S, R> DeployUseCase<S, R>
where
    S: ObjectSync,
    R: StepRuntime,
{
    pub fn new(sync: S, runtime: R) -> Self {
        Self { sync, runtime }
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    /// Read all required inputs, failing on the first missing one
    pub fn read_inputs(&self) -> Result<DeployInputs, ConfigurationError> {
        let read = |name: InputName| self.runtime.input(name.as_str(), InputOptions::required());

        let bucket = read(InputName::Bucket)?;
        let bucket_region = read(InputName::BucketRegion)?;
        let dist_folder = read(InputName::DistFolder)?;

        Ok(DeployInputs::new(bucket, bucket_region, dist_folder))
    }

    /// Execute the deploy step
    pub fn execute(&mut self) -> DeployResult<DeployOutcome> {
        let inputs = self.read_inputs()?;
        let destination_uri = inputs.destination_uri();

        self.runtime.debug(&format!(
            "Syncing {} to {} in {} using {}",
            inputs.dist_folder().display(),
            destination_uri,
            inputs.bucket_region(),
            self.sync.name()
        ));

        let status = self.sync.sync(
            inputs.dist_folder(),
            &destination_uri,
            inputs.bucket_region(),
        )?;

        if !status.is_success() {
            return Err(SyncError::NonZeroExit {
                program: self.sync.name().to_string(),
                code: status.code,
            }
            .into());
        }

        self.runtime.notice(&format!(
            "Uploaded {} to {}",
            inputs.dist_folder().display(),
            destination_uri
        ));

        let website_url = inputs.website_url();
        self.runtime.set_output(WEBSITE_URL_OUTPUT, &website_url)?;

        Ok(DeployOutcome {
            inputs,
            destination_uri,
            website_url,
        })
    }
}
