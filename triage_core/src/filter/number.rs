//! Numeric comparison logic for filters

use super::types::RangeBounds;
use crate::record::FieldValue;

/// Compare a field value against a scalar number filter
///
/// The comparison is string equality on the rendered field, not numeric
/// equality: a filter value of "07" does not match a field holding 7.
pub fn match_number(field_value: &FieldValue, filter_value: &str) -> bool {
    field_value.render() == filter_value
}

/// Compare a field value against a number range filter
///
/// Both sides are read as integers (floats truncate toward zero) and both
/// bounds are inclusive. A field or bound with no numeric reading leaves the
/// affected bound unsatisfied, silently excluding the item.
pub fn match_number_range(field_value: &FieldValue, bounds: &RangeBounds) -> bool {
    let current = field_value.as_integer();

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

fn bound_holds(current: Option<i64>, bound: Option<i64>, cmp: impl Fn(i64, i64) -> bool) -> bool {
    match (current, bound) {
        (Some(value), Some(bound)) => cmp(value, bound),
        _ => false,
    }
}

fn parse_bound(raw: &str) -> Option<i64> {
    FieldValue::from(raw).as_integer()
}
