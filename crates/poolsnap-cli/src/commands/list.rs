//! List command
//!
//! Usage: poolsnap list [--dir <DIR>] [--pattern <GLOB>]

use super::{load_catalog, CommandResult, OutputFormat, SourceArgs};
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Execute list command
pub fn execute(args: ListArgs) -> CommandResult {
    let Some(catalog) = load_catalog(&args.source, OutputFormat::Text)? else {
        return Ok(());
    };

    println!("\nAvailable files:");
    for (i, label) in catalog.labels().iter().enumerate() {
        println!("{}. {}", i + 1, label);
    }
    Ok(())
}
