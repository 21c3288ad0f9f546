//! flowstudy - A CLI tool for managing annual hydrological flow records
//!
//! flowstudy provides:
//! - A flow-sorted record list loaded from a plain-text data file
//! - Average and median flow statistics (in million cubic meters)
//! - Record add/remove with duplicate-year protection
//! - An interactive menu session for working through a dataset

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod core;
mod store;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
