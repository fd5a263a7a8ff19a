//! Diff command
//!
//! Usage: poolsnap diff [--first <N> --second <N>] [--keys <K1,K2>] [--format text|json]

use super::{
    key_set, load_catalog, select_pair, CommandResult, OutputFormat, SelectArgs, SourceArgs,
};
use clap::Args;
use poolsnap_core::diff::{compare_collections, render_differences};

#[derive(Debug, Args)]
pub struct DiffArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub select: SelectArgs,

    /// Only compare these keys (comma separated); all keys when omitted
    #[arg(long, value_delimiter = ',')]
    pub keys: Vec<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> CommandResult {
    let Some(catalog) = load_catalog(&args.source, args.format)? else {
        return Ok(());
    };
    let Some(((label_a, a), (label_b, b))) = select_pair(&catalog, &args.select, args.format)
    else {
        return Ok(());
    };

    let keys = key_set(&args.keys);
    let diff = compare_collections(a, b, label_a, label_b, keys.as_ref());

    match args.format {
        OutputFormat::Text => print!("{}", render_differences(&diff)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&diff)?),
    }
    Ok(())
}
