//! Text and select comparison logic for filters

use super::filter_errors::FilterError;
use super::types::{FilterId, TextMatch};
use crate::record::{FieldId, FieldValue};

/// Compare a field value against a text or select filter
///
/// Every mode except `IncludesInArray` compares against the rendered text
/// form of the field. `IncludesInArray` requires the field to be a list and
/// tests membership; anything else is a configuration error.
pub fn match_text(
    filter: &FilterId,
    field: &FieldId,
    field_value: &FieldValue,
    filter_value: &str,
    mode: TextMatch,
) -> Result<bool, FilterError> {
    match mode {
        TextMatch::IncludesInArray => match field_value {
            FieldValue::List(items) => Ok(items.iter().any(|item| item == filter_value)),
            _ => Err(FilterError::NotAList {
                filter: filter.clone(),
                field: field.clone(),
                actual: field_value.type_name(),
            }),
        },
        TextMatch::CaseSensitive => Ok(field_value.render() == filter_value),
        TextMatch::CaseInsensitive => {
            Ok(field_value.render().to_lowercase() == filter_value.to_lowercase())
        }
        TextMatch::IncludesSensitive => Ok(field_value.render().contains(filter_value)),
        TextMatch::IncludesInsensitive => Ok(field_value
            .render()
            .to_lowercase()
            .contains(&filter_value.to_lowercase())),
    }
}
