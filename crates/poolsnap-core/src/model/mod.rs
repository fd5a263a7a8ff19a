//! Typed model for parsed pool snapshots.
//!
//! - [`AttributeValue`]: a coerced attribute token (integer, float or string)
//! - [`FieldValue`]: the result of looking a key up, with absence as its own case
//! - [`PoolRecord`]: one `ltm pool` block
//! - [`SnapshotCollection`]: every pool parsed from one snapshot file

pub mod record;
pub mod value;

pub use record::{PoolRecord, SnapshotCollection, NAME_KEY};
pub use value::{AttributeValue, FieldValue, MISSING_DISPLAY};
