//! Test environment for isolated deploy-s3 runs.
//!
//! Provides `TestEnv` - a temp directory holding a stub sync program, a
//! `$GITHUB_OUTPUT` file and a distribution folder, plus helpers to run the
//! CLI with a cleared environment.

#![allow(dead_code)]

use std::ffi::OsString;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Stub standing in for the AWS CLI: records its arguments, exits with $STUB_EXIT_CODE.
const STUB_SYNC: &str = r#"#!/bin/sh
echo "upload: dist/index.html to remote"
for arg in "$@"; do
  printf '%s\n' "$arg" >> "$STUB_ARGS_FILE"
done
exit "${STUB_EXIT_CODE:-0}"
"#;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }
}

/// Isolated environment for one CLI run
pub struct TestEnv {
    pub root: TempDir,
    env: Vec<(OsString, OsString)>,
    stub_exit_code: i32,
    bin: PathBuf,
}

impl TestEnv {
    /// Environment with the stub installed, an empty output file and a `dist/` folder
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");

        let stub = root.path().join("aws-stub");
        std::fs::write(&stub, STUB_SYNC).expect("Failed to write stub");
        std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod stub");

        std::fs::write(root.path().join("github_output"), "").expect("Failed to write output file");
        std::fs::create_dir_all(root.path().join("dist")).expect("Failed to create dist");
        std::fs::write(root.path().join("dist/index.html"), "<h1>hi</h1>")
            .expect("Failed to write index.html");

        Self {
            root,
            env: Vec::new(),
            stub_exit_code: 0,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_deploy-s3")),
        }
    }

    /// Set the three inputs the way the runner does
    pub fn with_inputs(self, bucket: &str, region: &str, dist_folder: &str) -> Self {
        self.with_env("INPUT_BUCKET", bucket)
            .with_env("INPUT_BUCKET-REGION", region)
            .with_env("INPUT_DIST-FOLDER", dist_folder)
    }

    pub fn with_env(self, key: &str, value: &str) -> Self {
        self.with_env_os(key, value)
    }

    /// Set a variable whose value need not be UTF-8
    pub fn with_env_os(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Point `$GITHUB_OUTPUT` at the environment's output file
    pub fn with_output_file(self) -> Self {
        let path = self.output_file_path();
        self.with_env("GITHUB_OUTPUT", path.to_str().expect("utf-8 temp path"))
    }

    pub fn with_stub_exit_code(mut self, code: i32) -> Self {
        self.stub_exit_code = code;
        self
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn output_file_path(&self) -> PathBuf {
        self.path("github_output")
    }

    fn stub_path(&self) -> PathBuf {
        self.path("aws-stub")
    }

    fn args_path(&self) -> PathBuf {
        self.path("stub-args")
    }

    /// Arguments the stub was invoked with, `None` if it never ran
    pub fn stub_args(&self) -> Option<Vec<String>> {
        std::fs::read_to_string(self.args_path())
            .ok()
            .map(|s| s.lines().map(str::to_string).collect())
    }

    pub fn read_output_file(&self) -> String {
        std::fs::read_to_string(self.output_file_path()).unwrap_or_default()
    }

    /// Run the CLI from the environment root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.root.path(), args)
    }

    /// Run the CLI from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env_clear()
            .env("PATH", std::env::var("PATH").unwrap_or_default())
            .env("DEPLOY_S3_AWS_CLI", self.stub_path())
            .env("STUB_ARGS_FILE", self.args_path())
            .env("STUB_EXIT_CODE", self.stub_exit_code.to_string());

        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute deploy-s3");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
