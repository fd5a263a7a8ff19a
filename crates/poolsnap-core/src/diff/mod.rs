//! Snapshot comparison engine.
//!
//! Compares two parsed [`SnapshotCollection`](crate::model::SnapshotCollection)s.
//!
//! ## Entry points
//!
//! ```
//! use poolsnap_core::diff::{compare_collections, find_unchanged, render_differences, PoolFilter};
//! use poolsnap_core::parser::parse_snapshot_str;
//!
//! let a = parse_snapshot_str("ltm pool p1 {\ntot-conns 10\n}\n");
//! let b = parse_snapshot_str("ltm pool p1 {\ntot-conns 15\n}\n");
//!
//! let diff = compare_collections(&a, &b, "a.txt", "b.txt", None);
//! assert!(render_differences(&diff).contains("tot-conns: 10 -> 15"));
//!
//! let same = find_unchanged(&a, &b, "a.txt", "b.txt", &PoolFilter::none(), None);
//! assert_eq!(same.get("p1").map(|keys| keys.len()), Some(1));
//! ```
//!
//! ## Guarantees
//!
//! - **Purity**: inputs are never mutated; each call builds a fresh result.
//! - **Determinism**: results are sorted maps, so identical inputs render identically.
//! - **No empty entries**: neither result holds a pool with nothing to report.

pub mod engine;
pub mod human_summary;
pub mod model;
pub mod unchanged;

pub use engine::compare_collections;
pub use human_summary::{render_differences, render_unchanged};
pub use model::{DiffResult, PoolDiff, Side, UnchangedResult, ValueChange};
pub use unchanged::{find_unchanged, PoolFilter};
