//! Dataset evaluation against a list of filter specifications

use log::debug;

use crate::filter::{FilterError, FilterSpec};
use crate::record::Record;

/// Keep the items that satisfy every filter specification
///
/// Filters combine with logical AND: removing any single active spec can
/// only grow or preserve the result set. The pass is pure and synchronous;
/// callers re-run it whenever the dataset or the specs change.
pub fn evaluate<'a, T: Record>(
    dataset: &'a [T],
    specs: &[FilterSpec<T>],
) -> Result<Vec<&'a T>, FilterError> {
    let mut kept = Vec::with_capacity(dataset.len());
    for item in dataset {
        if matches_all(item, specs)? {
            kept.push(item);
        }
    }

    debug!(
        "Kept {} of {} items across {} filters",
        kept.len(),
        dataset.len(),
        specs.len()
    );
    Ok(kept)
}

fn matches_all<T: Record>(item: &T, specs: &[FilterSpec<T>]) -> Result<bool, FilterError> {
    for spec in specs {
        if !spec.matches(item)? {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FilterKind, RangeBounds, TextMatch};
    use crate::record::{FieldId, FieldValue};

    #[derive(Debug, PartialEq)]
    struct Finding {
        title: &'static str,
        loc: i64,
        role: &'static str,
    }

    impl Record for Finding {
        fn field(&self, id: &FieldId) -> Option<FieldValue> {
            match id.as_str() {
                "title" => Some(self.title.into()),
                "loc" => Some(FieldValue::Integer(self.loc)),
                "role" => Some(self.role.into()),
                _ => None,
            }
        }
    }

    fn dataset() -> Vec<Finding> {
        vec![
            Finding { title: "sql injection", loc: 10, role: "ADMIN" },
            Finding { title: "xss", loc: 9, role: "HACKER" },
            Finding { title: "open redirect", loc: 25, role: "CUSTOMER" },
        ]
    }

    fn title_filter(value: &str) -> FilterSpec<Finding> {
        FilterSpec::new(
            "title",
            FilterKind::Text {
                value: Some(value.to_string()),
                mode: TextMatch::IncludesInsensitive,
            },
        )
    }

    fn loc_filter(min: &str, max: &str) -> FilterSpec<Finding> {
        FilterSpec::new(
            "loc",
            FilterKind::NumberRange {
                bounds: RangeBounds::new(min, max),
            },
        )
    }

    #[test]
    fn test_no_specs_keeps_everything() {
        let data = dataset();
        let kept = evaluate(&data, &[]).unwrap();
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn test_empty_specs_keep_everything() {
        let data = dataset();
        let specs = vec![
            FilterSpec::new("title", FilterKind::text()),
            FilterSpec::new("loc", FilterKind::number_range()),
            FilterSpec::new("role", FilterKind::check_boxes()),
        ];
        let kept = evaluate(&data, &specs).unwrap();
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn test_single_spec_filters() {
        let data = dataset();
        let kept = evaluate(&data, &[loc_filter("10", "20")]).unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].loc, 10);
    }

    #[test]
    fn test_specs_combine_with_and() {
        let data = dataset();
        let specs = vec![title_filter("s"), loc_filter("10", "")];
        // "sql injection" and "xss" contain "s", but only "sql injection"
        // (loc 10) also satisfies the range
        let kept = evaluate(&data, &specs).unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "sql injection");

        // Removing a spec can only grow the result set
        let wider = evaluate(&data, &[title_filter("s")]).unwrap();
        assert!(wider.len() >= kept.len());
    }

    #[test]
    fn test_check_box_spec() {
        let data = dataset();
        let specs = vec![FilterSpec::new(
            "role",
            FilterKind::CheckBoxes {
                values: vec!["ADMIN".to_string(), "HACKER".to_string()],
            },
        )];
        let kept = evaluate(&data, &specs).unwrap();
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_boundary_item_is_included() {
        let data = dataset();
        let kept = evaluate(&data, &[loc_filter("10", "25")]).unwrap();
        assert_eq!(kept.len(), 2); // both bounds hit items exactly
    }

    #[test]
    fn test_result_borrows_from_dataset() {
        let data = dataset();
        let kept = evaluate(&data, &[title_filter("xss")]).unwrap();
        assert!(std::ptr::eq(kept[0], &data[1]));
    }
}
