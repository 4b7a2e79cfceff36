//! The findings dataset: record type and its built-in filter set

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use triage_core::{
    FieldId, FieldValue, FilterKind, FilterSpec, Record, SelectOption, TextMatch,
};

/// A security finding as exported by the dashboard API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub severity: f64,
    #[serde(default)]
    pub open_vulnerabilities: i64,
    pub state: String,
    #[serde(default)]
    pub treatment: String,
    #[serde(default)]
    pub exploitable: bool,
    pub report_date: NaiveDate,
    /// Affected locations, e.g. a path or endpoint
    #[serde(default, rename = "where")]
    pub locations: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Record for Finding {
    fn field(&self, id: &FieldId) -> Option<FieldValue> {
        match id.as_str() {
            "id" => Some(self.id.as_str().into()),
            "title" => Some(self.title.as_str().into()),
            "description" => Some(self.description.as_str().into()),
            "severity" => Some(FieldValue::Float(self.severity)),
            "open_vulnerabilities" => Some(FieldValue::Integer(self.open_vulnerabilities)),
            "state" => Some(self.state.as_str().into()),
            "treatment" => Some(self.treatment.as_str().into()),
            "exploitable" => Some(FieldValue::Bool(self.exploitable)),
            "report_date" => Some(FieldValue::Date(self.report_date)),
            "where" => Some(self.locations.as_str().into()),
            "tags" => Some(FieldValue::List(self.tags.clone())),
            _ => None,
        }
    }
}

/// The filter set offered over findings, one spec per dashboard column
pub fn finding_filters() -> Vec<FilterSpec<Finding>> {
    vec![
        FilterSpec::new("title", FilterKind::text()),
        FilterSpec::new("where", FilterKind::text()),
        FilterSpec::new("severity", FilterKind::number_range()),
        FilterSpec::new("open_vulnerabilities", FilterKind::number_range())
            .with_label("Open vulnerabilities"),
        FilterSpec::new("report_date", FilterKind::date_range()).with_label("Report date"),
        FilterSpec::new("state", FilterKind::select())
            .with_label("Status")
            .with_options(vec![
                SelectOption::new("Open", "open"),
                SelectOption::new("Closed", "closed"),
            ]),
        FilterSpec::new("treatment", FilterKind::check_boxes())
            .with_derived_options(treatment_options),
        FilterSpec::new("exploitable", FilterKind::select())
            .with_options(vec![
                SelectOption::new("Yes", "yes"),
                SelectOption::new("No", "no"),
            ])
            .with_predicate(|finding: &Finding, value, _bounds| match value {
                Some("yes") => finding.exploitable,
                Some("no") => !finding.exploitable,
                _ => true,
            }),
        FilterSpec::new("tags", FilterKind::text_matching(TextMatch::IncludesInArray)),
    ]
}

/// Distinct treatments present in the dataset, in first-seen order
fn treatment_options(dataset: &[Finding]) -> Vec<SelectOption> {
    let mut seen: Vec<&str> = Vec::new();
    for finding in dataset {
        if !finding.treatment.is_empty() && !seen.contains(&finding.treatment.as_str()) {
            seen.push(&finding.treatment);
        }
    }
    seen.into_iter().map(SelectOption::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_core::{FilterId, FilterSet};

    fn sample(id: &str, severity: f64, state: &str, treatment: &str) -> Finding {
        Finding {
            id: id.to_string(),
            title: format!("Finding {}", id),
            description: String::new(),
            severity,
            open_vulnerabilities: 1,
            state: state.to_string(),
            treatment: treatment.to_string(),
            exploitable: false,
            report_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            locations: String::new(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_deserialize_finding() {
        let raw = r#"{
            "id": "F-001",
            "title": "SQL injection",
            "severity": 9.1,
            "openVulnerabilities": 3,
            "state": "open",
            "treatment": "New",
            "exploitable": true,
            "reportDate": "2023-01-01",
            "where": "api/users",
            "tags": ["web"]
        }"#;

        let finding: Finding = serde_json::from_str(raw).unwrap();
        assert_eq!(finding.id, "F-001");
        assert_eq!(finding.open_vulnerabilities, 3);
        assert_eq!(finding.locations, "api/users");
        assert!(finding.exploitable);
    }

    #[test]
    fn test_optional_fields_default() {
        let raw = r#"{
            "id": "F-002",
            "title": "XSS",
            "severity": 6.3,
            "state": "open",
            "reportDate": "2023-03-10"
        }"#;

        let finding: Finding = serde_json::from_str(raw).unwrap();
        assert_eq!(finding.description, "");
        assert_eq!(finding.open_vulnerabilities, 0);
        assert!(finding.tags.is_empty());
    }

    #[test]
    fn test_record_exposes_every_filterable_field() {
        let finding = sample("F-001", 9.1, "open", "New");
        for spec in finding_filters() {
            // Predicate-backed specs don't read a field
            if spec.id == FilterId::new("exploitable") {
                continue;
            }
            let field = FieldId::new(spec.id.as_str());
            assert!(
                finding.field(&field).is_some(),
                "no field behind filter '{}'",
                spec.id
            );
        }
    }

    #[test]
    fn test_treatment_options_derived_in_first_seen_order() {
        let dataset = vec![
            sample("1", 1.0, "open", "New"),
            sample("2", 2.0, "open", "Accepted"),
            sample("3", 3.0, "open", "New"),
        ];
        let options = treatment_options(&dataset);
        assert_eq!(
            options,
            vec![SelectOption::from("New"), SelectOption::from("Accepted")]
        );
    }

    #[test]
    fn test_exploitable_predicate() {
        let mut exploitable = sample("1", 5.0, "open", "New");
        exploitable.exploitable = true;
        let safe = sample("2", 5.0, "open", "New");
        let dataset = vec![exploitable, safe];

        let mut set = FilterSet::new(finding_filters());
        set.set_value(&FilterId::new("exploitable"), "yes");
        let kept = set.evaluate(&dataset).unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "1");

        set.set_value(&FilterId::new("exploitable"), "no");
        let kept = set.evaluate(&dataset).unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "2");
    }
}
