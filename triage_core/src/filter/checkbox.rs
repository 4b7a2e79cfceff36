//! Check-box comparison logic for filters

use crate::record::FieldValue;

/// Compare a field value against the selected check-box values
///
/// The rendered field must equal one of the selected values exactly.
pub fn match_check_values(field_value: &FieldValue, values: &[String]) -> bool {
    let rendered = field_value.render();
    values.iter().any(|value| value == &rendered)
}
