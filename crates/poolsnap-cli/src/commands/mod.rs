//! Subcommands and the argument groups they share

pub mod diff;
pub mod list;
pub mod unchanged;

use clap::{Args, ValueEnum};
use poolsnap_core::catalog::{discover_snapshots, load_snapshots, SnapshotCatalog, DEFAULT_PATTERN};
use poolsnap_core::selection::{FixedSelector, PairSelector, PromptSelector};
use poolsnap_core::SnapshotCollection;
use std::collections::BTreeSet;
use std::fmt;
use std::io;
use std::path::PathBuf;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Where to look for snapshot files
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Directory containing snapshot files
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// File-name glob for snapshot files (`*` and `?` wildcards)
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,
}

/// Which two snapshots to compare; prompts when omitted
#[derive(Debug, Args)]
pub struct SelectArgs {
    /// First snapshot, 1-based position in the listing
    #[arg(long, requires = "second")]
    pub first: Option<i64>,

    /// Second snapshot, 1-based position in the listing
    #[arg(long, requires = "first")]
    pub second: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Discover and parse the snapshots, announcing each one in text mode.
///
/// Returns `None` after telling the user when nothing was found.
pub fn load_catalog(
    source: &SourceArgs,
    format: OutputFormat,
) -> Result<Option<SnapshotCatalog>, Box<dyn std::error::Error>> {
    let paths = discover_snapshots(&source.dir, &source.pattern)?;
    if paths.is_empty() {
        notify(format, "No snapshot files found");
        return Ok(None);
    }

    let catalog = load_snapshots(&paths)?;
    if format == OutputFormat::Text {
        for (label, pools) in catalog.iter() {
            println!("Found {} pools in {}", pools.len(), label);
        }
    }
    Ok(Some(catalog))
}

/// Print a notice for the user; in JSON mode it goes to stderr so stdout
/// carries only the report.
pub fn notify(format: OutputFormat, message: impl fmt::Display) {
    match format {
        OutputFormat::Text => println!("{}", message),
        OutputFormat::Json => eprintln!("{}", message),
    }
}

/// Pick two snapshots from the catalog.
///
/// The interactive menu is drawn on stderr. A failed selection is reported
/// and yields `None`; it is not an error.
pub fn select_pair<'a>(
    catalog: &'a SnapshotCatalog,
    select: &SelectArgs,
    format: OutputFormat,
) -> Option<((&'a str, &'a SnapshotCollection), (&'a str, &'a SnapshotCollection))> {
    let labels = catalog.labels();
    let picked = match (select.first, select.second) {
        (Some(first), Some(second)) => FixedSelector::new(first, second).select_pair(&labels),
        _ => PromptSelector::new(io::stdin().lock(), io::stderr()).select_pair(&labels),
    };

    match picked {
        Ok((i, j)) => Some((catalog.get_index(i)?, catalog.get_index(j)?)),
        Err(e) => {
            tracing::debug!(error = %e, "snapshot selection declined");
            notify(format, e);
            None
        }
    }
}

/// Turn the `--keys` list into the optional key set the engine expects
pub fn key_set(keys: &[String]) -> Option<BTreeSet<String>> {
    let set: BTreeSet<String> = keys
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect();
    (!set.is_empty()).then_some(set)
}
