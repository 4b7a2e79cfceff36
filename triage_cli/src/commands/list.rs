//! The list command: apply filters and print the matching findings

use std::path::PathBuf;

use triage_core::{Bound, FilterId};

use super::{load_findings, open_filter_set};
use crate::cli::ListArgs;
use crate::errors::CliError;
use crate::ui::{self, OutputFormat};

/// Lists findings from a dataset after applying saved and given filters.
pub fn list_findings(
    args: &ListArgs,
    session_path: &PathBuf,
    output_format: OutputFormat,
) -> Result<(), CliError> {
    if output_format == OutputFormat::Pretty {
        ui::header("Listing findings");
    }

    let findings = load_findings(&args.dataset)?;
    let mut set = open_filter_set(session_path)?;

    // Flag-supplied updates go through the controller so each one is
    // mirrored into the session
    for id in &args.clear {
        set.clear_filter(&FilterId::new(id.as_str()));
    }
    if let Some(title) = &args.title {
        set.set_value(&FilterId::new("title"), title);
    }
    if let Some(location) = &args.location {
        set.set_value(&FilterId::new("where"), location);
    }
    if let Some(min) = &args.severity_min {
        set.set_range_bound(&FilterId::new("severity"), Bound::Min, min);
    }
    if let Some(max) = &args.severity_max {
        set.set_range_bound(&FilterId::new("severity"), Bound::Max, max);
    }
    if let Some(after) = &args.reported_after {
        set.set_range_bound(&FilterId::new("report_date"), Bound::Min, after);
    }
    if let Some(before) = &args.reported_before {
        set.set_range_bound(&FilterId::new("report_date"), Bound::Max, before);
    }
    if let Some(status) = &args.status {
        set.set_value(&FilterId::new("state"), status);
    }
    for treatment in &args.treatment {
        set.toggle_check_value(&FilterId::new("treatment"), treatment);
    }
    if let Some(exploitable) = &args.exploitable {
        set.set_value(&FilterId::new("exploitable"), exploitable);
    }
    if let Some(tag) = &args.tag {
        set.set_value(&FilterId::new("tags"), tag);
    }

    let kept = set.evaluate(&findings)?;

    match output_format {
        OutputFormat::Pretty => {
            ui::success(&format!(
                "Found {} of {} findings",
                kept.len(),
                findings.len()
            ));
            ui::applied_filters(&set.applied_filters(&findings));
            ui::pretty_output_findings(&kept);
        }
        OutputFormat::Json => ui::json_output(&kept)?,
    }

    Ok(())
}
