//! Store - Read/write the plain-text flow data file
//!
//! The on-disk format is whitespace-separated `year flow` pairs, one record
//! per line when written by this tool, though any whitespace layout loads.
//! Malformed input is a fatal error surfaced with file and token context;
//! the core never sees unparsed data.

use anyhow::{bail, Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::core::model::{FlowList, FlowRecord};

/// Load the flow data file into a fresh, flow-sorted list.
pub fn load(path: &Path) -> Result<FlowList> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read flow data file: {}", path.display()))?;

    parse_records(&content)
        .with_context(|| format!("Malformed flow data in {}", path.display()))
}

/// Parse whitespace-separated `year flow` pairs until end of input.
fn parse_records(content: &str) -> Result<FlowList> {
    let mut list = FlowList::new();
    let mut tokens = content.split_ascii_whitespace();

    while let Some(year_token) = tokens.next() {
        let year: i32 = year_token
            .parse()
            .with_context(|| format!("Invalid year value: {:?}", year_token))?;

        let Some(flow_token) = tokens.next() else {
            bail!("Year {} has no flow value", year);
        };
        let flow: f64 = flow_token
            .parse()
            .with_context(|| format!("Invalid flow value: {:?}", flow_token))?;

        list.insert(FlowRecord::new(year, flow));
    }

    Ok(list)
}

/// Write the list back out, one `year flow` pair per line in flow-sorted
/// order, flows with two decimal places.
pub fn save(path: &Path, list: &FlowList) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create flow data file: {}", path.display()))?;

    for record in list {
        writeln!(file, "{}      {:.2}", record.year, record.flow)
            .with_context(|| format!("Failed to write flow data file: {}", path.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_records_sorted_by_flow() {
        let list = parse_records("2002 3.50\n2000 1.25\n2001 2.00\n").unwrap();
        let years: Vec<_> = list.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2000, 2001, 2002]);
    }

    #[test]
    fn test_parse_records_any_whitespace_layout() {
        // The reader consumes token pairs, not lines.
        let list = parse_records("2000\n1.25 2001\t2.00").unwrap();
        assert_eq!(list.count(), 2);
    }

    #[test]
    fn test_parse_records_empty_input() {
        let list = parse_records("").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_parse_records_bad_year() {
        let err = parse_records("two-thousand 1.25").unwrap_err();
        assert!(err.to_string().contains("Invalid year value"));
    }

    #[test]
    fn test_parse_records_bad_flow() {
        let err = parse_records("2000 lots").unwrap_err();
        assert!(err.to_string().contains("Invalid flow value"));
    }

    #[test]
    fn test_parse_records_trailing_year_without_flow() {
        let err = parse_records("2000 1.25 2001").unwrap_err();
        assert!(err.to_string().contains("2001"));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let temp = tempdir().unwrap();
        let err = load(&temp.path().join("absent.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read flow data file"));
    }

    #[test]
    fn test_save_writes_two_decimals_per_line() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("flow.txt");

        let list = parse_records("2000 1.5 2001 2.1").unwrap();
        save(&path, &list).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("2000"));
        assert!(lines[0].ends_with("1.50"));
        assert!(lines[1].ends_with("2.10"));
    }

    #[test]
    fn test_round_trip_reproduces_records_in_flow_order() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("flow.txt");

        // File order deliberately differs from flow order.
        fs::write(&path, "1995 4.00\n1990 1.00\n1999 2.50\n").unwrap();

        let loaded = load(&path).unwrap();
        save(&path, &loaded).unwrap();
        let reloaded = load(&path).unwrap();

        let records: Vec<_> = reloaded.iter().copied().collect();
        assert_eq!(
            records,
            vec![
                FlowRecord::new(1990, 1.0),
                FlowRecord::new(1999, 2.5),
                FlowRecord::new(1995, 4.0),
            ]
        );
    }
}
