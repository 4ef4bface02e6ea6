//! deploy-s3 CLI
//!
//! Usage: deploy-s3 [--bucket <NAME>] [--bucket-region <REGION>] [--dist-folder <PATH>]
//!
//! Inside a GitHub Actions step the inputs come from `INPUT_BUCKET`,
//! `INPUT_BUCKET-REGION` and `INPUT_DIST-FOLDER`; flags override them.

mod ui;

use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use deploy_s3::presentation::{factory, Cli};
use deploy_s3::InputName;
use ui::json::emit_event;
use ui::json::events::{CompleteEvent, DeployedEvent, StartEvent};

const COMMAND: &str = "deploy";

fn main() {
    let cli = Cli::parse();
    let started = Instant::now();

    if cli.json {
        let _ = emit_event(&StartEvent::new(COMMAND));
    }

    let result = run(&cli);
    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    match result {
        Ok(()) => {
            if cli.json {
                let _ = emit_event(&CompleteEvent::success(COMMAND).with_duration(duration_ms));
            }
        }
        Err(err) => {
            ui::error::print_error(&err, COMMAND, cli.json);
            if cli.json {
                let _ = emit_event(&CompleteEvent::failure(COMMAND).with_duration(duration_ms));
            }
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.verbose > 0 {
        for (name, value) in cli.input_overrides() {
            eprintln!("Input {} from command line: {}", name, value);
        }
        for name in InputName::ALL {
            eprintln!(
                "Input {} environment variable: {}",
                name,
                deploy_s3::infrastructure::actions::input_env_var(name.as_str())
            );
        }
    }
    if cli.verbose > 1 {
        eprintln!("Sync program: {}", cli.aws_cli);
    }

    let mut use_case = factory::create_deploy_use_case(cli);
    let outcome = use_case.execute()?;

    if cli.json {
        emit_event(&DeployedEvent::new(&outcome))?;
    } else if cli.verbose > 0 {
        eprintln!("Website URL: {}", outcome.website_url);
    }

    Ok(())
}
