//! Human-readable renderers for comparison results.

use crate::diff::model::{DiffResult, PoolDiff, UnchangedResult};
use std::path::Path;

const RULE_WIDTH: usize = 60;

/// Short display form of a snapshot label: its file name when it looks like a path.
pub fn display_label(label: &str) -> &str {
    Path::new(label)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(label)
}

fn push_pool_heading(out: &mut String, pool: &str) {
    out.push_str(&format!("\nPool: {}\n", pool));
    out.push_str(&"-".repeat(pool.chars().count() + "Pool: ".len()));
    out.push('\n');
}

/// Render a [`DiffResult`] as plain text.
///
/// Missing pools render as a single status line; changed keys render as
/// `key: a -> b` with `<missing>` standing in for an absent value.
pub fn render_differences(diff: &DiffResult) -> String {
    let (a, b) = (display_label(&diff.label_a), display_label(&diff.label_b));
    let mut out = String::new();

    if diff.is_empty() {
        out.push_str(&format!("No differences found between {} and {}\n", a, b));
        return out;
    }

    out.push_str(&format!("\nDifferences between {} and {}:\n", a, b));
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');

    for (pool, entry) in &diff.pools {
        push_pool_heading(&mut out, pool);
        match entry {
            PoolDiff::Missing { label, .. } => {
                out.push_str(&format!("  Missing in {}\n", display_label(label)));
            }
            PoolDiff::Changed(changes) => {
                for (key, change) in changes {
                    out.push_str(&format!("  {}: {} -> {}\n", key, change.a, change.b));
                }
            }
        }
    }

    out
}

/// Render an [`UnchangedResult`] as plain text, one `key: value` line per agreeing key.
pub fn render_unchanged(result: &UnchangedResult) -> String {
    let (a, b) = (
        display_label(&result.label_a),
        display_label(&result.label_b),
    );
    let mut out = String::new();

    if result.is_empty() {
        out.push_str(&format!("No unchanged values found between {} and {}\n", a, b));
        return out;
    }

    out.push_str(&format!("\nUnchanged values between {} and {}:\n", a, b));
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');

    for (pool, values) in &result.pools {
        push_pool_heading(&mut out, pool);
        for (key, value) in values {
            out.push_str(&format!("  {}: {}\n", key, value));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label_strips_directories() {
        assert_eq!(display_label("snaps/pool_snapshot_1.txt"), "pool_snapshot_1.txt");
        assert_eq!(display_label("pool_snapshot_1.txt"), "pool_snapshot_1.txt");
        assert_eq!(display_label(""), "");
    }

    #[test]
    fn test_pool_heading_rule_matches_heading_width() {
        let mut out = String::new();
        push_pool_heading(&mut out, "web");
        assert_eq!(out, "\nPool: web\n---------\n");
    }
}
