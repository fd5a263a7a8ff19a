//! Snapshot discovery and bulk loading
//!
//! Finds snapshot files by a file-name glob and parses each into a
//! [`SnapshotCollection`], labelled by its path.

use crate::errors::{PoolSnapError, Result};
use crate::model::SnapshotCollection;
use crate::parser::parse_snapshot_file;
use crate::{log_op_end, log_op_error, log_op_start};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// File-name pattern used when none is given.
pub const DEFAULT_PATTERN: &str = "pool_snapshot_*.txt";

/// Compile a file-name glob: `*` matches any run, `?` one character, the rest is literal.
fn compile_pattern(pattern: &str) -> Result<Regex> {
    let mut re = String::from("^");
    for c in pattern.chars() {
        match c {
            '*' => re.push_str(".*"),
            '?' => re.push('.'),
            other => re.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
        }
    }
    re.push('$');

    Regex::new(&re).map_err(|e| PoolSnapError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

/// List the regular files in `dir` whose file name matches `pattern`.
///
/// Not recursive. Results are sorted by path.
///
/// # Errors
///
/// - `DirectoryRead` - `dir` cannot be listed
/// - `InvalidPattern` - the pattern cannot be compiled
pub fn discover_snapshots(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    log_op_start!("discover_snapshots", path = %dir.display(), pattern = pattern);
    let start = std::time::Instant::now();

    let result = discover_impl(dir, pattern);
    match &result {
        Ok(paths) => {
            log_op_end!(
                "discover_snapshots",
                duration_ms = start.elapsed().as_millis() as u64,
                snapshot_count = paths.len() as u64
            );
        }
        Err(e) => {
            log_op_error!(
                "discover_snapshots",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
        }
    }
    result
}

fn discover_impl(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = compile_pattern(pattern)?;
    let entries = fs::read_dir(dir).map_err(|e| PoolSnapError::DirectoryRead {
        path: dir.display().to_string(),
        message: e.to_string(),
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| {
            p.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| matcher.is_match(name))
        })
        .collect();

    paths.sort();
    Ok(paths)
}

/// Parsed snapshots, labelled by path, in load order.
#[derive(Debug, Clone, Default)]
pub struct SnapshotCatalog {
    entries: Vec<(String, SnapshotCollection)>,
}

impl SnapshotCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a snapshot; a repeated label replaces the earlier entry in place
    pub fn insert(&mut self, label: impl Into<String>, pools: SnapshotCollection) {
        let label = label.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = pools,
            None => self.entries.push((label, pools)),
        }
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|(label, _)| label.clone()).collect()
    }

    pub fn get(&self, label: &str) -> Option<&SnapshotCollection> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, pools)| pools)
    }

    /// Like [`get`](Self::get) but reports an unknown label as an error
    pub fn require(&self, label: &str) -> Result<&SnapshotCollection> {
        self.get(label)
            .ok_or_else(|| PoolSnapError::SnapshotNotFound {
                label: label.to_string(),
            })
    }

    /// Entry at a 0-based position
    pub fn get_index(&self, index: usize) -> Option<(&str, &SnapshotCollection)> {
        self.entries
            .get(index)
            .map(|(label, pools)| (label.as_str(), pools))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SnapshotCollection)> {
        self.entries
            .iter()
            .map(|(label, pools)| (label.as_str(), pools))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse every path into a catalog labelled by the path's display form.
///
/// # Errors
///
/// - `SnapshotRead` - the first file that cannot be read aborts the load
pub fn load_snapshots(paths: &[PathBuf]) -> Result<SnapshotCatalog> {
    log_op_start!("load_snapshots", snapshot_count = paths.len() as u64);
    let start = std::time::Instant::now();

    let mut catalog = SnapshotCatalog::new();
    for path in paths {
        tracing::info!(path = %path.display(), "parsing snapshot");
        let pools = parse_snapshot_file(path).map_err(|e| {
            log_op_error!(
                "load_snapshots",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;
        tracing::info!(
            path = %path.display(),
            pool_count = pools.len() as u64,
            "parsed snapshot"
        );
        catalog.insert(path.display().to_string(), pools);
    }

    log_op_end!(
        "load_snapshots",
        duration_ms = start.elapsed().as_millis() as u64,
        snapshot_count = catalog.len() as u64
    );
    Ok(catalog)
}
