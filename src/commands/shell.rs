//! Shell command - interactive menu session over a dataset
//!
//! Recreates the classic menu workflow: the dataset is loaded once, edited
//! in memory, and written back only when the user picks the save option.
//! The loop is generic over its input/output streams so scripted sessions
//! can drive it in tests.

use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::commands::DataError;
use crate::core::model::{FlowList, FlowRecord};
use crate::core::render::{self, OutputFormat, RenderConfig};
use crate::core::stats;
use crate::store;

const MENU: &str = "\
Please select one of the following options:
  1. Display the flow list with average and median values.
  2. Add a record.
  3. Save data to the file.
  4. Remove a record.
  5. Quit.
";

/// Run the shell command: load the dataset and hand control to the menu
/// loop on stdin/stdout.
pub fn run_shell(file: &Path) -> Result<()> {
    let list = store::load(file)?;
    let mut session = Session::new(file.to_path_buf(), list);

    let stdin = io::stdin();
    session.run(&mut stdin.lock(), &mut io::stdout())
}

/// One interactive session: the data file path and the in-memory list being
/// edited. Nothing touches the file between load and an explicit save.
pub struct Session {
    file: PathBuf,
    list: FlowList,
}

impl Session {
    pub fn new(file: PathBuf, list: FlowList) -> Self {
        Self { file, list }
    }

    /// Menu loop. Runs until the quit option or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<()> {
        loop {
            out.write_all(MENU.as_bytes())?;
            write!(out, "Enter your choice (1-5): ")?;
            out.flush()?;

            let Some(choice) = read_trimmed_line(input)? else {
                break;
            };
            writeln!(out)?;

            match choice.as_str() {
                "1" => self.display(out)?,
                "2" => self.add(input, out)?,
                "3" => self.save(out)?,
                "4" => self.remove(input, out)?,
                "5" => break,
                other => writeln!(out, "Unrecognized choice: {:?}. Please enter 1-5.", other)?,
            }
            writeln!(out)?;
        }

        Ok(())
    }

    fn display<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(
            render::render_records(&self.list, RenderConfig::new(OutputFormat::Table)).as_bytes(),
        )?;
        writeln!(out)?;
        out.write_all(
            render::render_stats(stats::average(&self.list), stats::median(&self.list))
                .as_bytes(),
        )?;
        Ok(())
    }

    fn add<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<()> {
        let Some(year) = prompt_parsed::<i32, _, _>(input, out, "Please enter a year: ")? else {
            return Ok(());
        };
        let Some(flow) = prompt_parsed::<f64, _, _>(
            input,
            out,
            "Please enter the flow (in billion cubic meters): ",
        )?
        else {
            return Ok(());
        };

        if self.list.contains_year(year) {
            writeln!(out, "Error: {}.", DataError::DuplicateYear(year))?;
        } else {
            self.list.insert(FlowRecord::new(year, flow));
            writeln!(out, "New record inserted successfully.")?;
        }

        Ok(())
    }

    fn save<W: Write>(&self, out: &mut W) -> Result<()> {
        store::save(&self.file, &self.list)?;
        writeln!(out, "Flow data has been saved to file.")?;
        Ok(())
    }

    fn remove<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<()> {
        let Some(year) =
            prompt_parsed::<i32, _, _>(input, out, "Please enter the year to remove: ")?
        else {
            return Ok(());
        };

        if self.list.remove(year).is_none() {
            writeln!(out, "Error: {}.", DataError::YearNotFound(year))?;
        } else {
            writeln!(out, "Record was successfully removed.")?;
        }

        Ok(())
    }
}

/// Read one line, trimmed. `None` means end of input.
fn read_trimmed_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for a value and parse it. `None` means the input ended or the
/// value did not parse; a parse failure is reported and the caller returns
/// to the menu.
fn prompt_parsed<T, R, W>(input: &mut R, out: &mut W, prompt: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    R: BufRead,
    W: Write,
{
    write!(out, "{}", prompt)?;
    out.flush()?;

    let Some(line) = read_trimmed_line(input)? else {
        return Ok(None);
    };

    match line.parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            writeln!(out, "Error: {:?} is not a valid value.", line)?;
            Ok(None)
        }
    }
}
