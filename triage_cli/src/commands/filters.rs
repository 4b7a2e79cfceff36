//! The filters command: show every filter and its saved state

use std::path::{Path, PathBuf};

use serde_json::json;

use super::{load_findings, open_filter_set};
use crate::errors::CliError;
use crate::ui::{self, OutputFormat};

/// Shows the available filters, their persisted state and their choices.
pub fn show_filters(
    dataset_path: &Path,
    session_path: &PathBuf,
    output_format: OutputFormat,
) -> Result<(), CliError> {
    if output_format == OutputFormat::Pretty {
        ui::header("Available filters");
    }

    let findings = load_findings(dataset_path)?;
    let set = open_filter_set(session_path)?;

    match output_format {
        OutputFormat::Pretty => {
            ui::success(&format!(
                "{} filters over {} findings",
                set.specs().len(),
                findings.len()
            ));
            ui::applied_filters(&set.applied_filters(&findings));
            ui::pretty_output_filters(set.specs(), &findings);
        }
        OutputFormat::Json => {
            let chips = set.applied_filters(&findings);
            let descriptors: Vec<serde_json::Value> = set
                .specs()
                .iter()
                .map(|spec| {
                    let applied = chips
                        .iter()
                        .find(|chip| chip.id == spec.id)
                        .map(|chip| chip.value.clone());
                    let options: Vec<String> = spec
                        .resolved_options(&findings)
                        .into_iter()
                        .map(|option| option.value)
                        .collect();
                    json!({
                        "id": spec.id.as_str(),
                        "label": spec.label,
                        "kind": spec.kind.name(),
                        "applied": applied,
                        "options": options,
                    })
                })
                .collect();
            ui::json_output(&descriptors)?;
        }
    }

    Ok(())
}
