//! Unchanged command
//!
//! Usage: poolsnap unchanged [--first <N> --second <N>] [--filter-key <K> --filter-value <V>]
//!        [--keys <K1,K2>] [--format text|json]

use super::{
    key_set, load_catalog, select_pair, CommandResult, OutputFormat, SelectArgs, SourceArgs,
};
use clap::Args;
use poolsnap_core::diff::{find_unchanged, render_unchanged, PoolFilter};
use poolsnap_core::parser::coerce_value;

#[derive(Debug, Args)]
pub struct UnchangedArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub select: SelectArgs,

    /// Only consider pools whose attribute KEY equals --filter-value
    #[arg(long, requires = "filter_value")]
    pub filter_key: Option<String>,

    /// Value to match; coerced like snapshot values (`10` is an integer)
    #[arg(long, requires = "filter_key")]
    pub filter_value: Option<String>,

    /// Only check these keys (comma separated); all keys when omitted
    #[arg(long, value_delimiter = ',')]
    pub keys: Vec<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute unchanged command
pub fn execute(args: UnchangedArgs) -> CommandResult {
    let Some(catalog) = load_catalog(&args.source, args.format)? else {
        return Ok(());
    };
    let Some(((label_a, a), (label_b, b))) = select_pair(&catalog, &args.select, args.format)
    else {
        return Ok(());
    };

    let filter = PoolFilter {
        key: args.filter_key,
        value: args.filter_value.as_deref().map(coerce_value),
    };
    let keys = key_set(&args.keys);
    let result = find_unchanged(a, b, label_a, label_b, &filter, keys.as_ref());

    match args.format {
        OutputFormat::Text => print!("{}", render_unchanged(&result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }
    Ok(())
}
