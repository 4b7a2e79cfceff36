//! Command-line interface definitions

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::ui::OutputFormat;

/// Defines the top-level interface for the Triage CLI with clap.
#[derive(Parser, Debug)]
#[command(name = "triage")]
#[command(version, about = "Triage CLI: Browse security findings in the terminal.")]
pub struct TriageCli {
    /// Path to the session file holding persisted filters.
    #[arg(short, long, global = true, env = "TRIAGE_SESSION")]
    pub session: Option<PathBuf>,

    /// Enable verbose output?
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value_t = OutputFormat::default())]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: TriageCliCommand,
}

/// Defines the available subcommands of the Triage CLI.
#[derive(Subcommand, Debug)]
pub enum TriageCliCommand {
    /// List findings from a dataset, applying saved and given filters.
    List(ListArgs),
    /// Show the available filters, their saved state and their choices.
    Filters {
        /// Findings dataset (JSON array).
        dataset: PathBuf,
    },
    /// Reset all filters and clear the session.
    Reset,
}

/// Filter updates applied before listing; each one is saved in the session.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Findings dataset (JSON array).
    pub dataset: PathBuf,

    /// Keep findings whose title contains this text.
    #[arg(long)]
    pub title: Option<String>,

    /// Keep findings whose location contains this text.
    #[arg(long = "where")]
    pub location: Option<String>,

    /// Lowest severity to keep (inclusive).
    #[arg(long)]
    pub severity_min: Option<String>,

    /// Highest severity to keep (inclusive).
    #[arg(long)]
    pub severity_max: Option<String>,

    /// Keep findings reported on or after this date (YYYY-MM-DD).
    #[arg(long)]
    pub reported_after: Option<String>,

    /// Keep findings reported on or before this date (YYYY-MM-DD).
    #[arg(long)]
    pub reported_before: Option<String>,

    /// Keep findings with this status (open or closed).
    #[arg(long)]
    pub status: Option<String>,

    /// Toggle a treatment in the treatment filter (can be repeated).
    #[arg(long)]
    pub treatment: Vec<String>,

    /// Keep findings by exploitability (yes or no).
    #[arg(long)]
    pub exploitable: Option<String>,

    /// Keep findings carrying this tag.
    #[arg(long)]
    pub tag: Option<String>,

    /// Clear one saved filter by id before applying the rest (can be repeated).
    #[arg(long)]
    pub clear: Vec<String>,
}
