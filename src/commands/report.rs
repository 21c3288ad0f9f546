//! Report commands - display the dataset and its statistics
//!
//! `show` renders the records in the selected output format; the table
//! format also appends the average/median summary, while the machine
//! formats (json/jsonl) stay records-only so they remain parseable.

use anyhow::Result;
use std::path::Path;

use crate::core::render::{self, OutputFormat, RenderConfig};
use crate::core::stats;
use crate::store;

/// Run the show command: all records, plus the statistics block for the
/// table format.
pub fn run_show(file: &Path, config: RenderConfig) -> Result<()> {
    let list = store::load(file)?;

    print!("{}", render::render_records(&list, config));

    if config.format == OutputFormat::Table {
        println!();
        print!(
            "{}",
            render::render_stats(stats::average(&list), stats::median(&list))
        );
    } else if !list.is_empty() {
        // json/jsonl renderers do not terminate the last line.
        println!();
    }

    Ok(())
}

/// Run the stats command: the average/median summary only.
pub fn run_stats(file: &Path) -> Result<()> {
    let list = store::load(file)?;

    print!(
        "{}",
        render::render_stats(stats::average(&list), stats::median(&list))
    );

    Ok(())
}
