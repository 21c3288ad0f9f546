//! Edit commands - add and remove records in the data file
//!
//! Both commands load the dataset, apply the edit, and write the file back.
//! The duplicate-year and absent-year checks run here, against the loaded
//! list, before any mutation; the list's own insert/remove stay total.

use anyhow::Result;
use std::path::Path;

use crate::commands::DataError;
use crate::core::model::FlowRecord;
use crate::store;

/// Run the add command: insert a new record unless the year already exists.
pub fn run_add(file: &Path, year: i32, flow: f64) -> Result<()> {
    let mut list = store::load(file)?;

    if list.contains_year(year) {
        return Err(DataError::DuplicateYear(year).into());
    }

    list.insert(FlowRecord::new(year, flow));
    store::save(file, &list)?;

    println!("New record inserted successfully.");
    Ok(())
}

/// Run the remove command: delete the record for `year` if it exists.
pub fn run_remove(file: &Path, year: i32) -> Result<()> {
    let mut list = store::load(file)?;

    if list.remove(year).is_none() {
        return Err(DataError::YearNotFound(year).into());
    }

    store::save(file, &list)?;

    println!("Record was successfully removed.");
    Ok(())
}
