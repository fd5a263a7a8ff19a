//! Comparison output types.
//!
//! Collections use `BTreeMap` so that iteration and serialized output are in
//! pool and key order.

use crate::model::{AttributeValue, FieldValue};
use serde::Serialize;
use std::collections::BTreeMap;

/// Which side of a comparison a snapshot was passed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    A,
    B,
}

/// The values found for one key on both sides.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueChange {
    pub a: FieldValue,
    pub b: FieldValue,
}

/// Per-pool entry of a [`DiffResult`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolDiff {
    /// The pool exists on one side only; `side`/`label` name the side lacking it
    Missing { side: Side, label: String },
    /// The pool exists on both sides and these keys differ (never empty)
    Changed(BTreeMap<String, ValueChange>),
}

impl PoolDiff {
    /// Status line for a pool missing from one side, e.g. `Missing in a.txt`
    pub fn status_message(&self) -> Option<String> {
        match self {
            PoolDiff::Missing { label, .. } => Some(format!("Missing in {}", label)),
            PoolDiff::Changed(_) => None,
        }
    }

    pub fn changes(&self) -> Option<&BTreeMap<String, ValueChange>> {
        match self {
            PoolDiff::Changed(changes) => Some(changes),
            PoolDiff::Missing { .. } => None,
        }
    }

    /// True if `key` is among this pool's changed keys
    pub fn has_change(&self, key: &str) -> bool {
        self.changes().is_some_and(|c| c.contains_key(key))
    }
}

/// Structural diff between two snapshot collections.
///
/// Holds only pools that are missing from one side or that have at least one
/// changed key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffResult {
    pub label_a: String,
    pub label_b: String,
    pub pools: BTreeMap<String, PoolDiff>,
}

impl DiffResult {
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn get(&self, pool: &str) -> Option<&PoolDiff> {
        self.pools.get(pool)
    }
}

/// Values that are identical on both sides, per pool.
///
/// Holds only pools with at least one agreeing key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnchangedResult {
    pub label_a: String,
    pub label_b: String,
    pub pools: BTreeMap<String, BTreeMap<String, AttributeValue>>,
}

impl UnchangedResult {
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn get(&self, pool: &str) -> Option<&BTreeMap<String, AttributeValue>> {
        self.pools.get(pool)
    }
}
