//! Console output helpers for the Triage CLI

use std::fmt;

use clap::ValueEnum;
use console::style;
use serde::Serialize;

use triage_core::{AppliedFilter, FilterSpec};

use crate::errors::CliError;
use crate::findings::Finding;

/// Output format of CLI results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Pretty => write!(f, "pretty"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

pub fn header(text: &str) {
    println!("{}", style(text).bold().underlined());
}

pub fn success(text: &str) {
    println!("{} {}", style("✓").green(), text);
}

/// Print the applied-filters line; prints nothing when no filter is active
pub fn applied_filters(chips: &[AppliedFilter]) {
    if chips.is_empty() {
        return;
    }

    let rendered: Vec<String> = chips.iter().map(|chip| chip.to_string()).collect();
    println!(
        "{} {}",
        style("Filters applied:").bold(),
        rendered.join("  |  ")
    );
}

/// Print findings as a fixed-width table
pub fn pretty_output_findings(findings: &[&Finding]) {
    if findings.is_empty() {
        println!("{}", style("No findings match the current filters.").dim());
        return;
    }

    println!(
        "{}",
        style(format!(
            "{:<8} {:<32} {:>8} {:>6} {:<8} {:<20} {:<12}",
            "ID", "Title", "Severity", "Open", "Status", "Treatment", "Reported"
        ))
        .bold()
    );

    for finding in findings {
        println!(
            "{:<8} {:<32} {:>8.1} {:>6} {:<8} {:<20} {:<12}",
            finding.id,
            truncate(&finding.title, 32),
            finding.severity,
            finding.open_vulnerabilities,
            finding.state,
            truncate(&finding.treatment, 20),
            finding.report_date.format("%Y-%m-%d"),
        );
    }
}

/// Print every filter with its current state and choices
pub fn pretty_output_filters(specs: &[FilterSpec<Finding>], dataset: &[Finding]) {
    let chips = triage_core::applied_filters(specs, dataset);

    for spec in specs {
        let state = chips
            .iter()
            .find(|chip| chip.id == spec.id)
            .map(|chip| chip.value.clone())
            .unwrap_or_else(|| style("not set").dim().to_string());

        println!(
            "{:<24} {:<14} {}",
            style(spec.id.as_str()).bold(),
            spec.kind.name(),
            state
        );

        let options = spec.resolved_options(dataset);
        if !options.is_empty() {
            let choices: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
            println!("{:<24} {}", "", style(choices.join(", ")).dim());
        }
    }
}

/// Print any serializable value as pretty JSON
pub fn json_output<T: Serialize>(value: &T) -> Result<(), CliError> {
    let raw = serde_json::to_string_pretty(value)
        .map_err(|error| CliError::IoError(std::io::Error::other(error)))?;
    println!("{}", raw);
    Ok(())
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let kept: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
