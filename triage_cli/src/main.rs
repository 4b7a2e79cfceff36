mod cli;
mod commands;
mod errors;
mod findings;
mod session;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use console::style;

use cli::{TriageCli, TriageCliCommand};

fn main() -> ExitCode {
    let cli = TriageCli::parse();
    initialize_logging(cli.verbose);

    let session = cli.session.clone().unwrap_or_else(default_session_path);

    let result = match &cli.command {
        TriageCliCommand::List(args) => commands::list_findings(args, &session, cli.format),
        TriageCliCommand::Filters { dataset } => {
            commands::show_filters(dataset, &session, cli.format)
        }
        TriageCliCommand::Reset => commands::reset_filters(&session),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{} {}", style("✗").red(), error);
            ExitCode::FAILURE
        }
    }
}

fn default_session_path() -> PathBuf {
    PathBuf::from(".triage_session.json")
}

fn initialize_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::from_default_env();
    builder
        .filter_level(level)
        .format_timestamp_secs()
        .target(env_logger::Target::Stderr)
        .init();
}
