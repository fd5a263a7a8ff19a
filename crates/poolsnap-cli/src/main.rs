//! poolsnap CLI
//!
//! Command-line interface for comparing load-balancer pool snapshots

use clap::{Parser, Subcommand, ValueEnum};
use poolsnap_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "poolsnap")]
#[command(about = "poolsnap - Compare load-balancer pool snapshots", long_about = None)]
struct Cli {
    /// Log output style (RUST_LOG overrides the level filter)
    #[arg(long, global = true, value_enum, default_value_t = LogProfile::Development)]
    log_profile: LogProfile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    Development,
    Production,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Development => Profile::Development,
            LogProfile::Production => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List discovered snapshots and their pool counts
    List(commands::list::ListArgs),
    /// Show pools and attributes that differ between two snapshots
    Diff(commands::diff::DiffArgs),
    /// Show attribute values that are identical in two snapshots
    Unchanged(commands::unchanged::UnchangedArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_profile.into());

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(args),
        Commands::Diff(args) => commands::diff::execute(args),
        Commands::Unchanged(args) => commands::unchanged::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
