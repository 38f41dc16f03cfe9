//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::core::{Item, display_list};
use crate::error::Error;
use serde::Serialize;
use std::fmt::Write;

/// Width of separator lines in text output.
const RULE_WIDTH: usize = 60;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Result of a single operation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    /// A flat list of items.
    Items(Vec<Item>),
    /// A list of groups.
    Groups(Vec<Vec<Item>>),
    /// A single item, or nothing.
    Single(Option<Item>),
}

/// Record of one operation: what went in and what came out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Operation name.
    pub operation: &'static str,
    /// Input sequence (single-input operations).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Vec<Item>>,
    /// First input sequence (interleave).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list1: Option<Vec<Item>>,
    /// Second input sequence (interleave).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list2: Option<Vec<Item>>,
    /// Requested group size (chunk).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_size: Option<isize>,
    /// Operation result.
    pub result: Outcome,
}

impl Report {
    fn single_input(operation: &'static str, input: Vec<Item>, result: Outcome) -> Self {
        Self {
            operation,
            input: Some(input),
            list1: None,
            list2: None,
            chunk_size: None,
            result,
        }
    }

    /// Report for `remove_duplicates`.
    #[must_use]
    pub fn remove_duplicates(input: Vec<Item>, result: Vec<Item>) -> Self {
        Self::single_input("remove_duplicates", input, Outcome::Items(result))
    }

    /// Report for `chunk`.
    #[must_use]
    pub fn chunk(input: Vec<Item>, size: isize, result: Vec<Vec<Item>>) -> Self {
        Self {
            chunk_size: Some(size),
            ..Self::single_input("chunk", input, Outcome::Groups(result))
        }
    }

    /// Report for `most_frequent`.
    #[must_use]
    pub fn most_frequent(input: Vec<Item>, result: Option<Item>) -> Self {
        Self::single_input("most_frequent", input, Outcome::Single(result))
    }

    /// Report for `interleave`.
    #[must_use]
    pub fn interleave(list1: Vec<Item>, list2: Vec<Item>, result: Vec<Item>) -> Self {
        Self {
            operation: "interleave",
            input: None,
            list1: Some(list1),
            list2: Some(list2),
            chunk_size: None,
            result: Outcome::Items(result),
        }
    }

    /// Human-readable heading for the operation.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self.operation {
            "remove_duplicates" => "Remove Duplicates",
            "chunk" => "Chunk",
            "most_frequent" => "Most Frequent",
            "interleave" => "Interleave",
            other => other,
        }
    }
}

/// Formats a single report.
#[must_use]
pub fn format_report(report: &Report, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_report_text(report),
        OutputFormat::Json => format_json(report),
    }
}

/// Formats several reports, e.g. the demo run.
#[must_use]
pub fn format_reports(reports: &[Report], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            for (i, report) in reports.iter().enumerate() {
                if i > 0 {
                    output.push('\n');
                }
                output.push_str(&format_report_text(report));
            }
            output
        }
        OutputFormat::Json => format_json(&reports),
    }
}

fn format_report_text(report: &Report) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{}:", report.title());
    if let Some(ref input) = report.input {
        let _ = writeln!(output, "  Input:  {}", display_list(input));
    }
    if let Some(ref list1) = report.list1 {
        let _ = writeln!(output, "  List 1: {}", display_list(list1));
    }
    if let Some(ref list2) = report.list2 {
        let _ = writeln!(output, "  List 2: {}", display_list(list2));
    }
    if let Some(size) = report.chunk_size {
        let _ = writeln!(output, "  Size:   {size}");
    }
    let _ = writeln!(output, "  Result: {}", format_outcome(&report.result));
    output
}

fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Items(items) => display_list(items),
        Outcome::Groups(groups) => {
            let inner: Vec<String> = groups.iter().map(|g| display_list(g)).collect();
            format!("[{}]", inner.join(", "))
        }
        Outcome::Single(Some(item)) => item.to_string(),
        Outcome::Single(None) => "(none)".to_string(),
    }
}

/// Formats a titled banner, as used by the demo.
#[must_use]
pub fn format_banner(title: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{rule}\n{title}\n{rule}\n")
}

/// Formats an error for output.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
                invalid_argument: bool,
            }
            format_json(&ErrorOutput {
                error: error.to_string(),
                invalid_argument: error.is_invalid_argument(),
            })
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
