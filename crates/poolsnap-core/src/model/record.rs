//! Pool records and snapshot collections.

use crate::model::value::{AttributeValue, FieldValue};
use serde::Serialize;
use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};

/// Attribute key seeded with the pool name in every record.
pub const NAME_KEY: &str = "name";

/// One `ltm pool` block: the header name plus its flat attribute map.
///
/// The attribute map always starts out with `name` set to the header name.
/// A later `name ...` attribute line replaces that entry; [`PoolRecord::name`]
/// keeps returning the header name either way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoolRecord {
    name: String,
    attributes: BTreeMap<String, AttributeValue>,
}

impl PoolRecord {
    /// Create a record seeded with its `name` attribute.
    ///
    /// Callers are expected to pass a non-empty name; the parser only ever
    /// builds records from a matched header.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let mut attributes = BTreeMap::new();
        attributes.insert(NAME_KEY.to_string(), AttributeValue::String(name.clone()));
        Self { name, attributes }
    }

    /// Builder-style insert, mostly for fixtures
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert an attribute; an existing value under the same key is replaced
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// The pool name taken from the record header
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Look a key up, returning [`FieldValue::Missing`] when absent
    pub fn field(&self, key: &str) -> FieldValue {
        self.attributes.get(key).into()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    pub fn attributes(&self) -> &BTreeMap<String, AttributeValue> {
        &self.attributes
    }

    /// Number of attributes, including `name`
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Always false: every record carries at least its `name` attribute
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// Every pool parsed from one snapshot, keyed by pool name.
///
/// Pool names form a set. Iteration is in name order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SnapshotCollection {
    pools: BTreeMap<String, PoolRecord>,
}

impl SnapshotCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its header name, returning any record it replaced
    pub fn insert(&mut self, record: PoolRecord) -> Option<PoolRecord> {
        self.pools.insert(record.name().to_string(), record)
    }

    pub fn get(&self, name: &str) -> Option<&PoolRecord> {
        self.pools.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pools.keys().map(String::as_str)
    }

    pub fn name_set(&self) -> BTreeSet<&str> {
        self.names().collect()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, PoolRecord> {
        self.pools.iter()
    }

    /// A new collection holding only the pools whose `key` equals `value`.
    ///
    /// Equality is tag-aware, so an integer attribute never matches a string
    /// filter value.
    pub fn filtered(&self, key: &str, value: &AttributeValue) -> SnapshotCollection {
        self.pools
            .iter()
            .filter(|(_, record)| record.get(key) == Some(value))
            .map(|(name, record)| (name.clone(), record.clone()))
            .collect::<BTreeMap<_, _>>()
            .into()
    }
}

impl From<BTreeMap<String, PoolRecord>> for SnapshotCollection {
    fn from(pools: BTreeMap<String, PoolRecord>) -> Self {
        Self { pools }
    }
}

impl FromIterator<PoolRecord> for SnapshotCollection {
    fn from_iter<I: IntoIterator<Item = PoolRecord>>(iter: I) -> Self {
        let mut collection = SnapshotCollection::new();
        for record in iter {
            collection.insert(record);
        }
        collection
    }
}

impl<'a> IntoIterator for &'a SnapshotCollection {
    type Item = (&'a String, &'a PoolRecord);
    type IntoIter = btree_map::Iter<'a, String, PoolRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.pools.iter()
    }
}
