//! Workflow command formatting
//!
//! `::name key=value,key=value::message` lines on stdout, and the
//! `key<<delimiter` framing used by file commands such as `$GITHUB_OUTPUT`.

use rand::distributions::Alphanumeric;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Debug,
    Notice,
    Error,
}

impl AnnotationLevel {
    pub fn command(&self) -> &'static str {
        match self {
            AnnotationLevel::Debug => "debug",
            AnnotationLevel::Notice => "notice",
            AnnotationLevel::Error => "error",
        }
    }
}

/// Render a workflow command line (without trailing newline)
pub fn workflow_command(command: &str, properties: &[(&str, &str)], message: &str) -> String {
    let props: Vec<String> = properties
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, escape_property(value)))
        .collect();

    let prop_str = if props.is_empty() {
        String::new()
    } else {
        format!(" {}", props.join(","))
    };

    format!("::{}{}::{}", command, prop_str, escape_data(message))
}

/// Escape a command message
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

/// Escape a command property value
pub fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

fn random_delimiter() -> String {
    let token: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect();
    format!("ghadelimiter_{}", token)
}

/// Frame `key`/`value` for a file command, e.g. `$GITHUB_OUTPUT`
///
/// The result includes the trailing newline. Fails when either side
/// contains the generated delimiter.
pub fn file_command_key_value(key: &str, value: &str) -> std::io::Result<String> {
    key_value_with_delimiter(key, value, &random_delimiter())
}

fn key_value_with_delimiter(key: &str, value: &str, delimiter: &str) -> std::io::Result<String> {
    if key.contains(delimiter) {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!(
                "Unexpected input: name should not contain the delimiter \"{}\"",
                delimiter
            ),
        ));
    }
    if value.contains(delimiter) {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!(
                "Unexpected input: value should not contain the delimiter \"{}\"",
                delimiter
            ),
        ));
    }

    Ok(format!("{key}<<{delimiter}\n{value}\n{delimiter}\n"))
}
