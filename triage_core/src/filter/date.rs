//! Date comparison logic for filters

use chrono::NaiveDate;

use super::types::RangeBounds;
use crate::record::FieldValue;

/// Compare a field value against a date range filter
///
/// Bounds parse as `YYYY-MM-DD` and are inclusive on both ends. A field or
/// bound with no date reading leaves the affected bound unsatisfied,
/// silently excluding the item.
pub fn match_date_range(field_value: &FieldValue, bounds: &RangeBounds) -> bool {
    let current = field_value.as_date();

    let min_ok = match bounds.min() {
        Some(raw) => bound_holds(current, parse_bound(raw), |value, bound| value >= bound),
        None => true,
    };
    let max_ok = match bounds.max() {
        Some(raw) => bound_holds(current, parse_bound(raw), |value, bound| value <= bound),
        None => true,
    };

    min_ok && max_ok
}

fn bound_holds(
    current: Option<NaiveDate>,
    bound: Option<NaiveDate>,
    cmp: impl Fn(NaiveDate, NaiveDate) -> bool,
) -> bool {
    match (current, bound) {
        (Some(value), Some(bound)) => cmp(value, bound),
        _ => false,
    }
}

fn parse_bound(raw: &str) -> Option<NaiveDate> {
    FieldValue::from(raw).as_date()
}
