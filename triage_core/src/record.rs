//! Typed record fields read by the filter engine

use std::fmt;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Identifies one filterable field of a record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldId(String);

impl FieldId {
    /// Create a new field id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A typed value held by a record field
///
/// Untagged serde representation so datasets read naturally from JSON:
/// booleans, numbers, ISO dates, free text and string lists map onto the
/// matching variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Date(NaiveDate),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Canonical text form, used by text-family and equality comparisons
    pub fn render(&self) -> String {
        match self {
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Integer(i) => i.to_string(),
            FieldValue::Float(f) => f.to_string(),
            FieldValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::List(items) => items.join(", "),
        }
    }

    /// Numeric view of this value
    ///
    /// Floats truncate toward zero; text parses as an integer, falling back
    /// to a truncated float. `None` means the value has no numeric reading,
    /// and an active range bound compared against it is never satisfied.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            FieldValue::Float(f) if f.is_finite() => Some(*f as i64),
            FieldValue::Text(s) => parse_integer(s),
            _ => None,
        }
    }

    /// Date view of this value
    ///
    /// Text parses as `YYYY-MM-DD`, falling back to the date part of an
    /// RFC 3339 datetime. `None` means the value has no date reading.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            FieldValue::Text(s) => parse_date(s),
            _ => None,
        }
    }

    /// Returns the type name of this value for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Bool(_) => "Bool",
            FieldValue::Integer(_) => "Integer",
            FieldValue::Float(_) => "Float",
            FieldValue::Date(_) => "Date",
            FieldValue::Text(_) => "Text",
            FieldValue::List(_) => "List",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

/// Read access the filter engine needs into a dataset item
///
/// A missing field fails any active filter targeting it; filters without an
/// effective value pass regardless.
pub trait Record {
    /// Look up a field by id, if the record carries it
    fn field(&self, id: &FieldId) -> Option<FieldValue>;
}

fn parse_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    raw.parse::<i64>().ok().or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(|f| f as i64)
    })
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Rendering =====

    #[test]
    fn test_render_text() {
        assert_eq!(FieldValue::from("hello").render(), "hello");
    }

    #[test]
    fn test_render_integer() {
        assert_eq!(FieldValue::Integer(42).render(), "42");
    }

    #[test]
    fn test_render_float() {
        assert_eq!(FieldValue::Float(7.5).render(), "7.5");
    }

    #[test]
    fn test_render_bool() {
        assert_eq!(FieldValue::Bool(true).render(), "true");
        assert_eq!(FieldValue::Bool(false).render(), "false");
    }

    #[test]
    fn test_render_date_is_iso() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 9).unwrap();
        assert_eq!(FieldValue::Date(date).render(), "2023-01-09");
    }

    #[test]
    fn test_render_list_joins() {
        let value = FieldValue::List(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(value.render(), "a, b");
    }

    // ===== Numeric view =====

    #[test]
    fn test_as_integer_from_integer() {
        assert_eq!(FieldValue::Integer(10).as_integer(), Some(10));
    }

    #[test]
    fn test_as_integer_truncates_float() {
        assert_eq!(FieldValue::Float(7.9).as_integer(), Some(7));
        assert_eq!(FieldValue::Float(-7.9).as_integer(), Some(-7));
    }

    #[test]
    fn test_as_integer_parses_text() {
        assert_eq!(FieldValue::from("15").as_integer(), Some(15));
        assert_eq!(FieldValue::from(" 15 ").as_integer(), Some(15));
        assert_eq!(FieldValue::from("7.5").as_integer(), Some(7));
    }

    #[test]
    fn test_as_integer_rejects_garbage() {
        assert_eq!(FieldValue::from("high").as_integer(), None);
        assert_eq!(FieldValue::Bool(true).as_integer(), None);
        assert_eq!(FieldValue::Float(f64::NAN).as_integer(), None);
    }

    // ===== Date view =====

    #[test]
    fn test_as_date_from_date() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        assert_eq!(FieldValue::Date(date).as_date(), Some(date));
    }

    #[test]
    fn test_as_date_parses_iso_text() {
        let date = NaiveDate::from_ymd_opt(2022, 12, 31).unwrap();
        assert_eq!(FieldValue::from("2022-12-31").as_date(), Some(date));
    }

    #[test]
    fn test_as_date_parses_rfc3339_text() {
        let date = NaiveDate::from_ymd_opt(2022, 12, 31).unwrap();
        assert_eq!(
            FieldValue::from("2022-12-31T10:15:00+02:00").as_date(),
            Some(date)
        );
    }

    #[test]
    fn test_as_date_rejects_garbage() {
        assert_eq!(FieldValue::from("not a date").as_date(), None);
        assert_eq!(FieldValue::Integer(20230101).as_date(), None);
    }

    // ===== Serde =====

    #[test]
    fn test_deserialize_untagged() {
        assert_eq!(
            serde_json::from_str::<FieldValue>("42").unwrap(),
            FieldValue::Integer(42)
        );
        assert_eq!(
            serde_json::from_str::<FieldValue>("7.5").unwrap(),
            FieldValue::Float(7.5)
        );
        assert_eq!(
            serde_json::from_str::<FieldValue>("true").unwrap(),
            FieldValue::Bool(true)
        );
        assert_eq!(
            serde_json::from_str::<FieldValue>(r#"["a","b"]"#).unwrap(),
            FieldValue::List(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_deserialize_date_string() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        assert_eq!(
            serde_json::from_str::<FieldValue>(r#""2023-01-01""#).unwrap(),
            FieldValue::Date(date)
        );
    }

    #[test]
    fn test_deserialize_plain_string() {
        assert_eq!(
            serde_json::from_str::<FieldValue>(r#""hello""#).unwrap(),
            FieldValue::from("hello")
        );
    }
}
