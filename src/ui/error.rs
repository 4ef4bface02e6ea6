use deploy_s3::infrastructure::actions::{workflow_command, AnnotationLevel, GITHUB_ACTIONS_ENV};
use deploy_s3::DeployError;

use super::json::{emit_event, events::ErrorEvent};

/// Stable error code for an error reaching the binary boundary
pub fn error_code(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<DeployError>()
        .map(DeployError::code)
        .unwrap_or("internal")
}

pub fn format_error(err: &anyhow::Error) -> String {
    format!("[ERROR] {}\n", err)
}

fn running_in_actions() -> bool {
    std::env::var(GITHUB_ACTIONS_ENV).is_ok_and(|v| v == "true")
}

/// Report a failed step: error annotation in Actions, then stderr or a JSON event
pub fn print_error(err: &anyhow::Error, command: &str, json: bool) {
    if running_in_actions() {
        let annotation = workflow_command(AnnotationLevel::Error.command(), &[], &err.to_string());
        if json {
            eprintln!("{}", annotation);
        } else {
            println!("{}", annotation);
        }
    }

    if json {
        let _ = emit_event(&ErrorEvent::new(command, error_code(err), err.to_string()));
        return;
    }

    eprint!("{}", format_error(err));
}
