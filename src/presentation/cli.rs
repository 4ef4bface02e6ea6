//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Inside an Actions runner every flag is optional: inputs come from
//!   `INPUT_*` variables. Flags override them for local runs.
//! - Values are handed to the runtime as given; trimming happens when the
//!   runtime reads an input.

use clap::Parser;

use crate::domain::value_objects::InputName;
use crate::infrastructure::sync::{AWS_CLI_ENV, DEFAULT_AWS_CLI};

/// deploy-s3 - sync a static site folder to S3 and report its website URL
#[derive(Parser, Debug)]
#[command(name = "deploy-s3")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target bucket (overrides INPUT_BUCKET)
    #[arg(long)]
    pub bucket: Option<String>,

    /// Bucket region (overrides INPUT_BUCKET-REGION)
    #[arg(long)]
    pub bucket_region: Option<String>,

    /// Local folder to upload (overrides INPUT_DIST-FOLDER)
    #[arg(long)]
    pub dist_folder: Option<String>,

    /// Sync program to invoke
    #[arg(long, env = AWS_CLI_ENV, default_value = DEFAULT_AWS_CLI)]
    pub aws_cli: String,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Input overrides given on the command line, by input name
    pub fn input_overrides(&self) -> Vec<(InputName, &str)> {
        [
            (InputName::Bucket, &self.bucket),
            (InputName::BucketRegion, &self.bucket_region),
            (InputName::DistFolder, &self.dist_folder),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_args() {
        let cli = Cli::try_parse_from(["deploy-s3"]).unwrap();
        assert!(cli.bucket.is_none());
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
        assert!(cli.input_overrides().is_empty());
    }

    #[test]
    fn test_cli_input_flags() {
        let cli = Cli::try_parse_from([
            "deploy-s3",
            "--bucket",
            "my-app",
            "--bucket-region",
            "us-east-1",
            "--dist-folder",
            "dist",
        ])
        .unwrap();
        assert_eq!(
            cli.input_overrides(),
            vec![
                (InputName::Bucket, "my-app"),
                (InputName::BucketRegion, "us-east-1"),
                (InputName::DistFolder, "dist"),
            ]
        );
    }

    #[test]
    fn test_cli_aws_cli_flag() {
        let cli = Cli::try_parse_from(["deploy-s3", "--aws-cli", "/usr/local/bin/aws"]).unwrap();
        assert_eq!(cli.aws_cli, "/usr/local/bin/aws");
    }

    #[test]
    fn test_cli_json_and_verbose_flags() {
        let cli = Cli::try_parse_from(["deploy-s3", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }
}
