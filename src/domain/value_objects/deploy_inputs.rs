//! Deploy inputs value object
//!
//! The three values a deploy is parameterised by, plus the two strings
//! derived from them: the sync destination and the static website URL.

use std::path::{Path, PathBuf};

/// Name of the single output the step publishes
pub const WEBSITE_URL_OUTPUT: &str = "website-url";

/// Domain suffix of S3 static website endpoints
const PROVIDER_DOMAIN: &str = "amazonaws.com";

/// Inputs the deploy step reads from its runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputName {
    Bucket,
    BucketRegion,
    DistFolder,
}

impl InputName {
    /// All inputs, in the order the step reads them
    pub const ALL: [InputName; 3] = [
        InputName::Bucket,
        InputName::BucketRegion,
        InputName::DistFolder,
    ];

    /// The name as it appears in the action definition
    pub fn as_str(&self) -> &'static str {
        match self {
            InputName::Bucket => "bucket",
            InputName::BucketRegion => "bucket-region",
            InputName::DistFolder => "dist-folder",
        }
    }
}

impl std::fmt::Display for InputName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static website URL for a bucket hosted in `region`
pub fn website_url(bucket: &str, region: &str) -> String {
    format!(
        "http://{}.s3-website-{}.{}",
        bucket, region, PROVIDER_DOMAIN
    )
}

/// Validated-present inputs for one deploy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployInputs {
    bucket: String,
    bucket_region: String,
    dist_folder: PathBuf,
}

impl DeployInputs {
    pub fn new(
        bucket: impl Into<String>,
        bucket_region: impl Into<String>,
        dist_folder: impl Into<PathBuf>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            bucket_region: bucket_region.into(),
            dist_folder: dist_folder.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn bucket_region(&self) -> &str {
        &self.bucket_region
    }

    pub fn dist_folder(&self) -> &Path {
        &self.dist_folder
    }

    /// Sync destination, e.g. `s3://my-app`
    pub fn destination_uri(&self) -> String {
        format!("s3://{}", self.bucket)
    }

    /// Static website URL, e.g. `http://my-app.s3-website-us-east-1.amazonaws.com`
    pub fn website_url(&self) -> String {
        website_url(&self.bucket, &self.bucket_region)
    }
}
