//! Stability report: values that did not change between two snapshots.

use crate::diff::engine::compared_keys;
use crate::diff::model::UnchangedResult;
use crate::model::{AttributeValue, FieldValue, SnapshotCollection};
use crate::{log_op_end, log_op_start};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

/// Optional `key == value` predicate applied to both sides before comparing.
///
/// The filter is only active when both `key` and `value` are set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoolFilter {
    pub key: Option<String>,
    pub value: Option<AttributeValue>,
}

impl PoolFilter {
    /// A filter that keeps every pool
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }

    /// The predicate, if both halves are present
    pub fn active(&self) -> Option<(&str, &AttributeValue)> {
        match (&self.key, &self.value) {
            (Some(key), Some(value)) => Some((key.as_str(), value)),
            _ => None,
        }
    }
}

/// Find the values both collections agree on.
///
/// 1. With an active filter, each side is narrowed to the pools whose
///    `record[key] == value` (tag-aware).
/// 2. Only pools present on both narrowed sides are considered.
/// 3. A key is reported when both sides hold it and the values are equal; a
///    key absent from both sides does not count.
/// 4. Pools with no agreeing key are left out.
pub fn find_unchanged(
    a: &SnapshotCollection,
    b: &SnapshotCollection,
    label_a: &str,
    label_b: &str,
    filter: &PoolFilter,
    keys_to_check: Option<&BTreeSet<String>>,
) -> UnchangedResult {
    log_op_start!("find_unchanged", label_a = label_a, label_b = label_b);
    let start = std::time::Instant::now();

    let (a, b): (Cow<'_, SnapshotCollection>, Cow<'_, SnapshotCollection>) = match filter.active()
    {
        Some((key, value)) => {
            let (fa, fb) = (a.filtered(key, value), b.filtered(key, value));
            tracing::debug!(
                filter_key = key,
                filter_value = %value,
                a_before = a.len() as u64,
                a_after = fa.len() as u64,
                b_before = b.len() as u64,
                b_after = fb.len() as u64,
                "narrowed snapshots by filter"
            );
            (Cow::Owned(fa), Cow::Owned(fb))
        }
        None => (Cow::Borrowed(a), Cow::Borrowed(b)),
    };

    let mut pools = BTreeMap::new();
    for (name, ra) in a.iter() {
        let Some(rb) = b.get(name) else {
            continue;
        };

        let agreeing: BTreeMap<String, AttributeValue> = compared_keys(ra, rb, keys_to_check)
            .into_iter()
            .filter_map(|key| match (ra.field(key), rb.field(key)) {
                (FieldValue::Present(va), FieldValue::Present(vb)) if va == vb => {
                    Some((key.to_string(), va))
                }
                _ => None,
            })
            .collect();

        if !agreeing.is_empty() {
            pools.insert(name.clone(), agreeing);
        }
    }

    log_op_end!(
        "find_unchanged",
        duration_ms = start.elapsed().as_millis() as u64,
        result_pools = pools.len() as u64
    );

    UnchangedResult {
        label_a: label_a.to_string(),
        label_b: label_b.to_string(),
        pools,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PoolRecord;

    #[test]
    fn test_filter_needs_both_halves() {
        assert!(PoolFilter::none().active().is_none());
        let key_only = PoolFilter {
            key: Some("status.availability-state".to_string()),
            value: None,
        };
        assert!(key_only.active().is_none());
        let full = PoolFilter::new("status.availability-state", "available");
        assert_eq!(
            full.active(),
            Some(("status.availability-state", &AttributeValue::from("available")))
        );
    }

    #[test]
    fn test_key_only_filter_does_not_narrow() {
        let a: SnapshotCollection = vec![PoolRecord::new("p").with("k", "v")].into_iter().collect();
        let filter = PoolFilter {
            key: Some("other".to_string()),
            value: None,
        };
        let result = find_unchanged(&a, &a, "a", "b", &filter, None);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_missing_on_both_sides_is_not_unchanged() {
        let a: SnapshotCollection = vec![PoolRecord::new("p")].into_iter().collect();
        let requested: BTreeSet<String> = ["ghost".to_string()].into_iter().collect();
        let result = find_unchanged(&a, &a, "a", "b", &PoolFilter::none(), Some(&requested));
        assert!(result.is_empty());
    }

    #[test]
    fn test_only_agreeing_keys_are_reported() {
        let a: SnapshotCollection = vec![PoolRecord::new("p")
            .with("monitor", "http")
            .with("tot-conns", 10u64)]
        .into_iter()
        .collect();
        let b: SnapshotCollection = vec![PoolRecord::new("p")
            .with("monitor", "http")
            .with("tot-conns", 15u64)]
        .into_iter()
        .collect();

        let result = find_unchanged(&a, &b, "a", "b", &PoolFilter::none(), None);
        let pool = result.get("p").unwrap();
        assert_eq!(pool.get("monitor"), Some(&AttributeValue::from("http")));
        assert_eq!(pool.get("name"), Some(&AttributeValue::from("p")));
        assert!(!pool.contains_key("tot-conns"));
    }
}
