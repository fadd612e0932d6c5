//! Distinct attribute values, used to populate option lists.

use std::collections::HashSet;

use super::Attribute;

/// Distinct values of an attribute, in order of first appearance.
pub fn distinct_values<R>(records: &[R], attribute: Attribute<R>) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(attribute)
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}
