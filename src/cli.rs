//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::render::{OutputFormat, RenderConfig};

/// flowstudy - manage annual hydrological flow records and their statistics.
#[derive(Parser, Debug)]
#[command(name = "flowstudy")]
#[command(
    author,
    version,
    about,
    long_about = r#"flowstudy keeps a small annual flow dataset in a plain-text file and
reports average/median statistics over it.

Records are `year flow` pairs (flow in billion cubic meters). The dataset is
always kept sorted ascending by flow value; statistics are reported in
million cubic meters.

Output formats for record listings:
- table: aligned year/flow columns plus the statistics summary (default)
- json: a single JSON array of records
- jsonl: one JSON object per line (best for piping into tools)

Examples:
    flowstudy show
    flowstudy --file data/annual.txt add 2024 3.75
    flowstudy remove 1998
    flowstudy shell
"#
)]
pub struct Cli {
    /// Flow data file all commands operate on.
    #[arg(
        long,
        global = true,
        default_value = "flow.txt",
        env = "FLOWSTUDY_FILE",
        value_name = "PATH",
        long_help = "Flow data file all commands operate on (defaults to flow.txt in the\n\
current directory). Also read from the FLOWSTUDY_FILE environment variable.\n\n\
The file holds whitespace-separated `year flow` pairs; this tool writes one\n\
pair per line with flows to two decimal places."
    )]
    pub file: PathBuf,

    /// Output format for record listings (table/json/jsonl).
    #[arg(
        long,
        global = true,
        default_value = "table",
        value_name = "FORMAT",
        long_help = "Select the output format for record listings.\n\n\
Supported values:\n\
- table (default)\n\
- json\n\
- jsonl\n\n\
The statistics summary is only printed with the table format, so json/jsonl\n\
output stays machine-parseable."
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(
        long,
        global = true,
        long_help = "Pretty-print JSON and JSONL output with indentation for human\n\
readability. Has no effect on the table format."
    )]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display all records, with average and median statistics.
    #[command(
        long_about = "Display every record in ascending flow order, followed by the average\n\
and median flow (table format only). An empty dataset prints\n\
insufficient-data notes instead of numbers.\n\n\
Examples:\n\
  flowstudy show\n\
  flowstudy show --format jsonl\n"
    )]
    Show,

    /// Display only the average and median statistics.
    #[command(
        long_about = "Compute and print the average and median flow in million cubic meters.\n\
Both values are scaled from the stored unit (billion cubic meters) by 1000\n\
and truncated, matching the historical reporting convention.\n\n\
Example:\n\
  flowstudy stats\n"
    )]
    Stats,

    /// Add a record for a year that is not in the dataset yet.
    #[command(
        long_about = "Insert a new `year flow` record and save the dataset. The record is\n\
placed by flow value, not by year. Adding a year that already exists is an\n\
error; remove the old record first.\n\n\
Example:\n\
  flowstudy add 2024 3.75\n"
    )]
    Add {
        /// Year of the measurement.
        #[arg(value_name = "YEAR")]
        year: i32,

        /// Measured flow in billion cubic meters.
        #[arg(value_name = "FLOW", allow_hyphen_values = true)]
        flow: f64,
    },

    /// Remove the record for a year.
    #[command(
        long_about = "Delete the record for YEAR and save the dataset. Removing a year with\n\
no record is an error.\n\n\
Example:\n\
  flowstudy remove 1998\n"
    )]
    Remove {
        /// Year whose record should be removed.
        #[arg(value_name = "YEAR")]
        year: i32,
    },

    /// Interactive menu session (display/add/save/remove/quit).
    #[command(
        long_about = "Open the interactive menu session. The dataset is loaded once, edits\n\
accumulate in memory, and the file is only written when the save option is\n\
chosen - quitting without saving discards the session's edits.\n\n\
Example:\n\
  flowstudy shell\n"
    )]
    Shell,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    // Parse output format
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    match cli.command {
        Commands::Show => crate::commands::report::run_show(&cli.file, render_config),

        Commands::Stats => crate::commands::report::run_stats(&cli.file),

        Commands::Add { year, flow } => crate::commands::edit::run_add(&cli.file, year, flow),

        Commands::Remove { year } => crate::commands::edit::run_remove(&cli.file, year),

        Commands::Shell => crate::commands::shell::run_shell(&cli.file),
    }
}
