//! Record parser for `ltm pool` snapshot dumps
//!
//! A snapshot is a sequence of blocks shaped like
//!
//! ```text
//! ltm pool web_pool {
//!     status.availability-state available
//!     active-member-cnt 2
//! }
//! ```
//!
//! Blocks are split on the literal sequence `"\n}\n"`. The split is not brace
//! aware: a line that is exactly `}` inside a block ends that block early.
//! Fragments without an `ltm pool ` header, and attribute lines without a
//! space, are skipped silently. `\r\n` and lone `\r` line endings are read
//! as `\n` before splitting.

use crate::errors::{PoolSnapError, Result};
use crate::model::{AttributeValue, PoolRecord, SnapshotCollection};
use crate::{log_op_end, log_op_error, log_op_start};
use regex::Regex;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Separator between records: a line holding only `}`.
pub const RECORD_SEPARATOR: &str = "\n}\n";

/// Substring a fragment must contain to be treated as a pool record.
pub const POOL_MARKER: &str = "ltm pool ";

static POOL_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ltm pool ([^ ]+)").expect("pool header pattern is valid"));

static FLOAT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+$").expect("float token pattern is valid"));

/// Coerce a raw attribute token.
///
/// - ASCII digits only -> integer (`"007"` is 7)
/// - `digits.digits` -> float
/// - anything else stays a string, untouched
///
/// A digits-only token that overflows `u64` stays a string.
pub fn coerce_value(raw: &str) -> AttributeValue {
    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = raw.parse::<u64>() {
            return AttributeValue::Integer(n);
        }
    } else if FLOAT_TOKEN.is_match(raw) {
        if let Ok(x) = raw.parse::<f64>() {
            return AttributeValue::Float(x);
        }
    }
    AttributeValue::String(raw.to_string())
}

/// Parse one record fragment.
///
/// Returns `None` when the fragment has no `ltm pool <name>` header.
pub fn parse_pool_record(fragment: &str) -> Option<PoolRecord> {
    let name = POOL_HEADER.captures(fragment)?.get(1)?.as_str();
    let mut record = PoolRecord::new(name);

    for line in fragment.split('\n') {
        let line = line.trim();
        if line.is_empty() || line.starts_with("ltm pool") || line == "{" {
            continue;
        }
        // First space only: the value keeps any further spaces.
        if let Some((key, value)) = line.split_once(' ') {
            record.insert(key, coerce_value(value));
        }
    }

    Some(record)
}

/// Rewrite `\r\n` and lone `\r` as `\n`; borrows when there is nothing to do.
fn normalize_line_endings(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

/// Parse the full text of one snapshot.
///
/// Never fails; malformed fragments are dropped. When a pool name repeats,
/// the later block wins.
pub fn parse_snapshot_str(content: &str) -> SnapshotCollection {
    let mut pools = SnapshotCollection::new();
    let mut skipped = 0usize;
    let content = normalize_line_endings(content);

    for fragment in content.split(RECORD_SEPARATOR) {
        if !fragment.contains(POOL_MARKER) {
            continue;
        }
        match parse_pool_record(fragment) {
            Some(record) => {
                if pools.insert(record).is_some() {
                    tracing::debug!("duplicate pool block replaced an earlier one");
                }
            }
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, "skipped pool fragments with a malformed header");
    }
    pools
}

/// Read and parse one snapshot file.
///
/// The file is read in full before parsing starts; the handle does not
/// outlive the read.
///
/// # Errors
///
/// - `SnapshotRead` - the file cannot be opened or read, or is not valid UTF-8
pub fn parse_snapshot_file(path: &Path) -> Result<SnapshotCollection> {
    log_op_start!("parse_snapshot_file", path = %path.display());
    let start = std::time::Instant::now();

    let content = fs::read_to_string(path).map_err(|e| {
        let err = PoolSnapError::SnapshotRead {
            path: path.display().to_string(),
            message: e.to_string(),
        };
        log_op_error!(
            "parse_snapshot_file",
            err.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        err
    })?;

    let pools = parse_snapshot_str(&content);

    log_op_end!(
        "parse_snapshot_file",
        duration_ms = start.elapsed().as_millis() as u64,
        pool_count = pools.len() as u64
    );

    Ok(pools)
}
