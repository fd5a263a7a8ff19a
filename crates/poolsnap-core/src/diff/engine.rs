//! Structural diff between two snapshot collections.
//!
//! The entry point is [`compare_collections`].

use crate::diff::model::{DiffResult, PoolDiff, Side, ValueChange};
use crate::model::{PoolRecord, SnapshotCollection};
use crate::{log_op_end, log_op_start};
use std::collections::{BTreeMap, BTreeSet};

/// Keys to inspect for a pool present on both sides.
///
/// Without an explicit key set this is the union of both records' keys;
/// otherwise it is exactly the requested set, present or not.
pub(crate) fn compared_keys<'a>(
    a: &'a PoolRecord,
    b: &'a PoolRecord,
    keys_to_check: Option<&'a BTreeSet<String>>,
) -> BTreeSet<&'a str> {
    match keys_to_check {
        Some(keys) => keys.iter().map(String::as_str).collect(),
        None => a.keys().chain(b.keys()).collect(),
    }
}

fn attribute_changes(
    a: &PoolRecord,
    b: &PoolRecord,
    keys_to_check: Option<&BTreeSet<String>>,
) -> BTreeMap<String, ValueChange> {
    compared_keys(a, b, keys_to_check)
        .into_iter()
        .filter_map(|key| {
            let (va, vb) = (a.field(key), b.field(key));
            (va != vb).then(|| (key.to_string(), ValueChange { a: va, b: vb }))
        })
        .collect()
}

/// Compute the structural diff between two collections.
///
/// - A pool on one side only is reported as [`PoolDiff::Missing`], naming the
///   side that lacks it.
/// - A pool on both sides is reported as [`PoolDiff::Changed`] with every
///   compared key whose values differ. An absent key is a distinct value.
/// - Pools without differences are left out.
///
/// `keys_to_check` restricts the comparison to exactly those keys.
pub fn compare_collections(
    a: &SnapshotCollection,
    b: &SnapshotCollection,
    label_a: &str,
    label_b: &str,
    keys_to_check: Option<&BTreeSet<String>>,
) -> DiffResult {
    log_op_start!("compare_collections", label_a = label_a, label_b = label_b);
    let start = std::time::Instant::now();

    let all_pools: BTreeSet<&str> = a.names().chain(b.names()).collect();
    let mut pools = BTreeMap::new();

    for name in all_pools {
        let entry = match (a.get(name), b.get(name)) {
            (None, _) => Some(PoolDiff::Missing {
                side: Side::A,
                label: label_a.to_string(),
            }),
            (_, None) => Some(PoolDiff::Missing {
                side: Side::B,
                label: label_b.to_string(),
            }),
            (Some(ra), Some(rb)) => {
                let changes = attribute_changes(ra, rb, keys_to_check);
                (!changes.is_empty()).then_some(PoolDiff::Changed(changes))
            }
        };
        if let Some(entry) = entry {
            pools.insert(name.to_string(), entry);
        }
    }

    log_op_end!(
        "compare_collections",
        duration_ms = start.elapsed().as_millis() as u64,
        result_pools = pools.len() as u64
    );

    DiffResult {
        label_a: label_a.to_string(),
        label_b: label_b.to_string(),
        pools,
    }
}
