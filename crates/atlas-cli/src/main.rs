//! CLI frontend for Atlas continental statistics reports.

mod commands;
mod terminal;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "atlas",
    about = "Atlas: per-continent trade, spending, and quality-of-life reports",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Which table `list` prints.
#[derive(Clone, Copy, ValueEnum)]
pub enum ListTarget {
    /// Continents with region and country counts
    Continents,
    /// Regions with their continent
    Regions,
    /// Countries with metric availability
    Countries,
}

/// Output format for `report`.
#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    /// Aligned table
    Table,
    /// One plain-text line per continent
    Text,
    /// JSON document with lines and faults
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sample snapshot file to start from
    Init {
        /// Path of the snapshot to create
        #[arg(default_value = "atlas.json")]
        path: PathBuf,
    },

    /// Load and validate a snapshot
    Check {
        /// Snapshot file
        #[arg(short, long, default_value = "atlas.json")]
        data: PathBuf,
    },

    /// List continents, regions, or countries
    List {
        /// What to list
        #[arg(value_enum, default_value = "continents")]
        target: ListTarget,

        /// Only countries or regions on this continent (id or name)
        #[arg(short, long)]
        continent: Option<String>,

        /// Only countries with no row in this metric table (countries only)
        #[arg(short, long)]
        missing: Option<String>,

        /// Only countries that have all three metrics (countries only)
        #[arg(long)]
        complete: bool,

        /// Snapshot file
        #[arg(short, long, default_value = "atlas.json")]
        data: PathBuf,
    },

    /// Show one continent's regions and countries
    Show {
        /// Continent id or name (case-insensitive)
        continent: String,

        /// Snapshot file
        #[arg(short, long, default_value = "atlas.json")]
        data: PathBuf,
    },

    /// Aggregate every continent and print the report
    Report {
        /// Average QoL at or above which a continent is labelled GOOD
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Decimal places for rendered values
        #[arg(long)]
        decimals: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: ReportFormat,

        /// Aggregate continents in parallel
        #[arg(short, long)]
        parallel: bool,

        /// Snapshot file
        #[arg(short, long, default_value = "atlas.json")]
        data: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = terminal::logging::init(cli.verbose) {
        eprintln!("warning: {e}");
    }

    let result = match cli.command {
        Commands::Init { path } => commands::init::run(&path),
        Commands::Check { data } => commands::check::run(&data),
        Commands::List {
            target,
            continent,
            missing,
            complete,
            data,
        } => commands::list::run(
            &data,
            target,
            continent.as_deref(),
            missing.as_deref(),
            complete,
        ),
        Commands::Show { continent, data } => commands::show::run(&data, &continent),
        Commands::Report {
            threshold,
            decimals,
            format,
            parallel,
            data,
        } => commands::report::run(&data, threshold, decimals, format, parallel),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
