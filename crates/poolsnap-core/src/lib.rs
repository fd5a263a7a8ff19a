//! poolsnap core - load-balancer pool snapshot parsing and comparison
//!
//! This crate provides:
//! - A typed model for pool records parsed from `ltm pool` status dumps
//! - A record parser that turns snapshot text into a [`SnapshotCollection`]
//! - A comparison engine computing structural diffs and unchanged-value reports
//! - Snapshot discovery and pair selection used by the CLI
//! - Human-readable rendering of comparison results

pub mod catalog;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod parser;
pub mod selection;

#[doc(hidden)]
pub use poolsnap_core_types as core_types;

// Re-export commonly used types
pub use catalog::{discover_snapshots, load_snapshots, SnapshotCatalog};
pub use diff::{compare_collections, find_unchanged, DiffResult, PoolFilter, UnchangedResult};
pub use errors::{ExError, ExErrorKind, PoolSnapError, Result};
pub use model::{AttributeValue, FieldValue, PoolRecord, SnapshotCollection};
pub use parser::{parse_snapshot_file, parse_snapshot_str};
