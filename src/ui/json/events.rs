//! Shared JSON event types for `--json` output.

use serde::Serialize;

use deploy_s3::application::DeployOutcome;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted when a command finishes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            duration_ms: None,
        }
    }

    pub fn failure(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: false,
            duration_ms: None,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// Event emitted when an error occurs.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
        }
    }
}

/// Event emitted after the site was uploaded and the output set.
#[derive(Debug, Clone, Serialize)]
pub struct DeployedEvent<'a> {
    pub event: &'static str,
    pub bucket: &'a str,
    pub region: &'a str,
    pub dist_folder: String,
    pub destination: &'a str,
    pub website_url: &'a str,
}

impl<'a> DeployedEvent<'a> {
    pub fn new(outcome: &'a DeployOutcome) -> Self {
        Self {
            event: "deployed",
            bucket: outcome.inputs.bucket(),
            region: outcome.inputs.bucket_region(),
            dist_folder: outcome.inputs.dist_folder().display().to_string(),
            destination: &outcome.destination_uri,
            website_url: &outcome.website_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deploy_s3::domain::value_objects::DeployInputs;

    #[test]
    fn deployed_event_fields() {
        let inputs = DeployInputs::new("my-app", "us-east-1", "dist");
        let outcome = DeployOutcome {
            destination_uri: inputs.destination_uri(),
            website_url: inputs.website_url(),
            inputs,
        };

        let value = serde_json::to_value(DeployedEvent::new(&outcome)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "event": "deployed",
                "bucket": "my-app",
                "region": "us-east-1",
                "dist_folder": "dist",
                "destination": "s3://my-app",
                "website_url": "http://my-app.s3-website-us-east-1.amazonaws.com",
            })
        );
    }

    #[test]
    fn complete_event_omits_missing_duration() {
        let value = serde_json::to_value(CompleteEvent::failure("deploy")).unwrap();
        assert_eq!(value["success"], false);
        assert!(value.get("duration_ms").is_none());

        let value =
            serde_json::to_value(CompleteEvent::success("deploy").with_duration(12)).unwrap();
        assert_eq!(value["duration_ms"], 12);
    }
}
