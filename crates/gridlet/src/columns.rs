//! Column derivation: ordered key union and width computation.

use std::collections::HashSet;

use crate::record::{stringify, Record};

/// A derived column: its key and total rendered width, padding included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub key: String,
    pub width: usize,
}

/// Derives the table's columns from the full record set.
///
/// Keys appear in first-seen order across the concatenation of the
/// records' own key orders, deduplicated. The order is tracked with a
/// sequence plus a membership set so it never depends on map iteration
/// quirks.
///
/// Each width is `max(key chars, widest stringified present value)
/// + 2 × padding`. Records lacking the key contribute nothing to the max;
/// an explicit `Null` counts as a present empty string. Lengths are
/// literal char counts, not display columns.
pub fn derive_columns(records: &[Record], padding: usize) -> Vec<Column> {
    let mut keys: Vec<&str> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for record in records {
        for key in record.keys() {
            if seen.insert(key) {
                keys.push(key);
            }
        }
    }

    keys.into_iter()
        .map(|key| {
            let widest = records
                .iter()
                .filter_map(|record| record.get(key))
                .map(|value| stringify(value).chars().count())
                .max()
                .unwrap_or(0);
            Column {
                key: key.to_string(),
                width: widest.max(key.chars().count()) + 2 * padding,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rec(value: serde_json::Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn empty_records_give_no_columns() {
        assert!(derive_columns(&[], 1).is_empty());
    }

    #[test]
    fn key_wider_than_values_dominates() {
        let records = [rec(json!({"name": "Foo"}))];
        let columns = derive_columns(&records, 1);
        assert_eq!(columns, [Column { key: "name".into(), width: 6 }]);
    }

    #[test]
    fn widest_value_dominates_short_key() {
        let records = [rec(json!({"id": "abcdef"}))];
        let columns = derive_columns(&records, 1);
        assert_eq!(columns[0].width, 8);
    }

    #[test]
    fn first_seen_order_across_records() {
        let records = [
            rec(json!({"b": 1})),
            rec(json!({"a": 2, "b": 3})),
            rec(json!({"c": 4, "a": 5})),
        ];
        let keys: Vec<String> = derive_columns(&records, 1)
            .into_iter()
            .map(|c| c.key)
            .collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn absent_values_do_not_count_toward_width() {
        let records = [rec(json!({"name": "Foo"})), rec(json!({"name": "Bar", "age": 15}))];
        let columns = derive_columns(&records, 1);
        assert_eq!(columns[1], Column { key: "age".into(), width: 5 });
    }

    #[test]
    fn null_counts_as_empty_present_value() {
        let records = [rec(json!({"x": null}))];
        let columns = derive_columns(&records, 1);
        // key length 1 dominates the empty value
        assert_eq!(columns[0].width, 3);
    }

    #[test]
    fn numbers_measure_by_their_display_form() {
        let records = [rec(json!({"n": 12345}))];
        assert_eq!(derive_columns(&records, 1)[0].width, 7);
    }

    #[test]
    fn padding_scales_width() {
        let records = [rec(json!({"name": "Foo"}))];
        assert_eq!(derive_columns(&records, 3)[0].width, 10);
    }

    #[test]
    fn derivation_is_deterministic() {
        let records = [
            rec(json!({"one": 1, "two": 2})),
            rec(json!({"three": 3})),
        ];
        assert_eq!(derive_columns(&records, 1), derive_columns(&records, 1));
    }
}
