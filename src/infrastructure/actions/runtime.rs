//! Actions runtime - StepRuntime backed by the runner's process environment

use std::collections::HashMap;
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{Stdout, Write};
use std::path::{Path, PathBuf};

use super::command::{file_command_key_value, workflow_command, AnnotationLevel};
use crate::domain::ports::{InputOptions, StepRuntime};
use crate::error::ConfigurationError;

/// Set to `true` by the runner for every step
pub const GITHUB_ACTIONS_ENV: &str = "GITHUB_ACTIONS";

/// Path of the file step outputs are appended to
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Environment variable an input named `name` is read from
///
/// Spaces become underscores and the name is upper-cased; hyphens are kept
/// (`bucket-region` -> `INPUT_BUCKET-REGION`).
pub fn input_env_var(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// StepRuntime implementation for GitHub Actions
///
/// Workflow commands are written to `W` (stdout by default). Inputs set via
/// [`ActionsRuntime::with_override`] take precedence over `INPUT_*` variables.
pub struct ActionsRuntime<W: Write = Stdout> {
    env: HashMap<String, String>,
    overrides: HashMap<String, String>,
    writer: W,
}

impl<W: Write> ActionsRuntime<W> {
    pub fn new(env: HashMap<String, String>, writer: W) -> Self {
        Self {
            env,
            overrides: HashMap::new(),
            writer,
        }
    }

    /// Runtime reading the current process environment
    ///
    /// Variables whose name or value is not UTF-8 are skipped.
    pub fn from_env(writer: W) -> Self {
        Self::new(utf8_vars(std::env::vars_os()), writer)
    }

    /// Supply an input value directly, ahead of the environment
    pub fn with_override(mut self, name: &str, value: impl Into<String>) -> Self {
        self.overrides.insert(name.to_string(), value.into());
        self
    }

    /// Path from `$GITHUB_OUTPUT`, if set and non-empty
    pub fn output_file(&self) -> Option<PathBuf> {
        self.env
            .get(GITHUB_OUTPUT_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    fn raw_input(&self, name: &str) -> Option<&str> {
        self.overrides
            .get(name)
            .or_else(|| self.env.get(&input_env_var(name)))
            .map(String::as_str)
    }

    fn issue(&mut self, level: AnnotationLevel, message: &str) {
        let line = workflow_command(level.command(), &[], message);
        // Ignore write failures, same as the runner toolkit.
        let _ = writeln!(self.writer, "{}", line);
    }
}

fn utf8_vars(vars: impl IntoIterator<Item = (OsString, OsString)>) -> HashMap<String, String> {
    vars.into_iter()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

fn append_file_command(path: &Path, framed: &str) -> std::io::Result<()> {
    if !path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Missing file at path: {}", path.display()),
        ));
    }

    let mut file = OpenOptions::new().append(true).open(path)?;
    file.write_all(framed.as_bytes())
}

impl<W: Write> StepRuntime for ActionsRuntime<W> {
    fn input(&self, name: &str, options: InputOptions) -> Result<String, ConfigurationError> {
        let raw = self.raw_input(name).unwrap_or("");
        let value = if options.trim_whitespace {
            raw.trim()
        } else {
            raw
        };

        if options.required && value.is_empty() {
            return Err(ConfigurationError::MissingInput {
                name: name.to_string(),
            });
        }

        Ok(value.to_string())
    }

    fn notice(&mut self, message: &str) {
        self.issue(AnnotationLevel::Notice, message);
    }

    fn debug(&mut self, message: &str) {
        self.issue(AnnotationLevel::Debug, message);
    }

    fn set_output(&mut self, name: &str, value: &str) -> std::io::Result<()> {
        if let Some(path) = self.output_file() {
            let framed = file_command_key_value(name, value)?;
            return append_file_command(&path, &framed);
        }

        // Legacy stdout command for runners without `$GITHUB_OUTPUT`.
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{}",
            workflow_command("set-output", &[("name", name)], value)
        )
    }
}
