//! Renderer module
//!
//! Renders the record list to different output formats: table, json, jsonl.
//! The statistics summary is always plain text and only accompanies the
//! table format.

use crate::core::model::FlowList;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Jsonl,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "jsonl" => Ok(OutputFormat::Jsonl),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Render the record list in the configured format.
pub fn render_records(list: &FlowList, config: RenderConfig) -> String {
    match config.format {
        OutputFormat::Table => render_table(list),
        OutputFormat::Json => render_json(list, config.pretty),
        OutputFormat::Jsonl => render_jsonl(list, config.pretty),
    }
}

/// Two-column year/flow table, flows with two decimal places.
fn render_table(list: &FlowList) -> String {
    let mut output = String::new();
    output.push_str("Year        Flow (in billion cubic meters)\n");
    for record in list {
        output.push_str(&format!("{:<12}{:.2}\n", record.year, record.flow));
    }
    output
}

/// A single JSON array of records.
fn render_json(list: &FlowList, pretty: bool) -> String {
    let records: Vec<_> = list.iter().collect();
    if pretty {
        serde_json::to_string_pretty(&records).unwrap_or_else(|_| "[]".to_string())
    } else {
        serde_json::to_string(&records).unwrap_or_else(|_| "[]".to_string())
    }
}

/// One JSON object per line.
fn render_jsonl(list: &FlowList, pretty: bool) -> String {
    list.iter()
        .filter_map(|record| {
            if pretty {
                serde_json::to_string_pretty(record).ok()
            } else {
                serde_json::to_string(record).ok()
            }
        })
        .collect::<Vec<_>>()
        .join(if pretty { "\n\n" } else { "\n" })
}

/// Render the average/median summary, in million cubic meters.
///
/// `None` values come from an empty dataset and render as the
/// insufficient-data notes instead of numbers.
pub fn render_stats(average: Option<i64>, median: Option<i64>) -> String {
    let mut output = String::new();

    match average {
        Some(value) => output.push_str(&format!(
            "The annual average flow is: {} million cubic meters.\n",
            value
        )),
        None => output.push_str(
            "Note: the annual average flow cannot be calculated due to lack of data.\n",
        ),
    }

    match median {
        Some(value) => output.push_str(&format!(
            "The median annual flow is: {} million cubic meters.\n",
            value
        )),
        None => output
            .push_str("Note: the median annual flow cannot be calculated due to lack of data.\n"),
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::FlowRecord;

    fn sample_list() -> FlowList {
        [FlowRecord::new(2001, 2.5), FlowRecord::new(2000, 1.0)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("JSONL".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonl);
    }

    #[test]
    fn test_output_format_invalid() {
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_table_has_header_and_two_decimals() {
        let output = render_table(&sample_list());
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Year"));
        // Flow sort puts 2000 (1.0) before 2001 (2.5).
        assert!(lines[1].starts_with("2000"));
        assert!(lines[1].ends_with("1.00"));
        assert!(lines[2].starts_with("2001"));
        assert!(lines[2].ends_with("2.50"));
    }

    #[test]
    fn test_render_json_round_trips() {
        let output = render_json(&sample_list(), false);
        let records: Vec<FlowRecord> = serde_json::from_str(&output).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].year, 2000);
    }

    #[test]
    fn test_render_jsonl_one_object_per_line() {
        let output = render_jsonl(&sample_list(), false);
        let records: Vec<FlowRecord> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].flow, 2.5);
    }

    #[test]
    fn test_render_empty_table_is_header_only() {
        let output = render_table(&FlowList::new());
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_render_stats_with_values() {
        let output = render_stats(Some(2000), Some(2500));
        assert!(output.contains("average flow is: 2000 million cubic meters"));
        assert!(output.contains("median annual flow is: 2500 million cubic meters"));
    }

    #[test]
    fn test_render_stats_unavailable() {
        let output = render_stats(None, None);
        assert!(output.contains("average flow cannot be calculated"));
        assert!(output.contains("median annual flow cannot be calculated"));
    }
}
