//! Type-specific formatting of filter values for applied chips

use chrono::NaiveDate;

use crate::filter::{RangeBounds, SelectOption};

/// Format a number range as `"min - max"`, `"Min x"` or `"Max x"`
pub fn format_number_range(bounds: &RangeBounds) -> Option<String> {
    match (bounds.min(), bounds.max()) {
        (Some(min), Some(max)) => Some(format!("{} - {}", min, max)),
        (Some(min), None) => Some(format!("Min {}", min)),
        (None, Some(max)) => Some(format!("Max {}", max)),
        (None, None) => None,
    }
}

/// Format a date range, rendering each bound as a long date
///
/// A single bound reads as `"From January 1, 2023"` / `"To January 1, 2023"`.
pub fn format_date_range(bounds: &RangeBounds) -> Option<String> {
    match (bounds.min(), bounds.max()) {
        (Some(min), Some(max)) => Some(format!("{} - {}", long_date(min), long_date(max))),
        (Some(min), None) => Some(format!("From {}", long_date(min))),
        (None, Some(max)) => Some(format!("To {}", long_date(max))),
        (None, None) => None,
    }
}

/// Join the headers of the selected check-box values with `", "`
///
/// A selected value with no matching option keeps its slot in the join as an
/// empty fragment rather than being dropped.
pub fn format_check_values(values: &[String], options: &[SelectOption]) -> Option<String> {
    if values.is_empty() {
        return None;
    }

    let headers: Vec<&str> = values
        .iter()
        .map(|value| resolve_header(value, options).unwrap_or(""))
        .collect();
    Some(headers.join(", "))
}

/// Resolve a scalar value through the mapped options, else pass it through
pub fn format_value(value: &str, options: &[SelectOption]) -> Option<String> {
    Some(
        resolve_header(value, options)
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
    )
}

fn resolve_header<'a>(value: &str, options: &'a [SelectOption]) -> Option<&'a str> {
    options
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.header.as_str())
}

/// Render a bound as e.g. "January 1, 2023"; unparsable bounds pass through
fn long_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(min: &str, max: &str) -> RangeBounds {
        RangeBounds::new(min, max)
    }

    // ===== Number ranges =====

    #[test]
    fn test_number_range_both_bounds() {
        assert_eq!(
            format_number_range(&bounds("10", "20")).as_deref(),
            Some("10 - 20")
        );
    }

    #[test]
    fn test_number_range_min_only() {
        assert_eq!(
            format_number_range(&bounds("10", "")).as_deref(),
            Some("Min 10")
        );
    }

    #[test]
    fn test_number_range_max_only() {
        assert_eq!(
            format_number_range(&bounds("", "20")).as_deref(),
            Some("Max 20")
        );
    }

    #[test]
    fn test_number_range_empty_is_no_chip() {
        assert_eq!(format_number_range(&bounds("", "")), None);
    }

    // ===== Date ranges =====

    #[test]
    fn test_date_range_both_bounds() {
        assert_eq!(
            format_date_range(&bounds("2023-01-01", "2023-06-15")).as_deref(),
            Some("January 1, 2023 - June 15, 2023")
        );
    }

    #[test]
    fn test_date_range_lower_only() {
        assert_eq!(
            format_date_range(&bounds("2023-01-01", "")).as_deref(),
            Some("From January 1, 2023")
        );
    }

    #[test]
    fn test_date_range_upper_only() {
        assert_eq!(
            format_date_range(&bounds("", "2023-12-31")).as_deref(),
            Some("To December 31, 2023")
        );
    }

    #[test]
    fn test_date_range_empty_is_no_chip() {
        assert_eq!(format_date_range(&bounds("", "")), None);
    }

    #[test]
    fn test_date_range_unparsable_bound_passes_through() {
        assert_eq!(
            format_date_range(&bounds("soon", "")).as_deref(),
            Some("From soon")
        );
    }

    // ===== Check values =====

    #[test]
    fn test_check_values_join_headers() {
        let options = vec![
            SelectOption::new("Admin", "ADMIN"),
            SelectOption::new("Hacker", "HACKER"),
        ];
        let values = vec!["ADMIN".to_string(), "HACKER".to_string()];
        assert_eq!(
            format_check_values(&values, &options).as_deref(),
            Some("Admin, Hacker")
        );
    }

    #[test]
    fn test_check_values_empty_is_no_chip() {
        assert_eq!(format_check_values(&[], &[]), None);
    }

    #[test]
    fn test_check_values_unresolved_keeps_slot() {
        let options = vec![SelectOption::new("Admin", "ADMIN")];
        let values = vec!["ADMIN".to_string(), "GHOST".to_string()];
        assert_eq!(
            format_check_values(&values, &options).as_deref(),
            Some("Admin, ")
        );
    }

    // ===== Scalar values =====

    #[test]
    fn test_value_resolves_through_options() {
        let options = vec![SelectOption::new("Open", "open")];
        assert_eq!(format_value("open", &options).as_deref(), Some("Open"));
    }

    #[test]
    fn test_value_without_options_passes_through() {
        assert_eq!(format_value("johnny", &[]).as_deref(), Some("johnny"));
    }

    #[test]
    fn test_value_unresolved_passes_through() {
        let options = vec![SelectOption::new("Open", "open")];
        assert_eq!(format_value("closed", &options).as_deref(), Some("closed"));
    }
}
