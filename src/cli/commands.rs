//! CLI command implementations.
//!
//! Contains the logic behind each CLI command.

use crate::cli::output::{OutputFormat, Report, format_banner, format_report, format_reports};
use crate::cli::parser::{Cli, Commands, ItemsInput};
use crate::core::{Item, parse_items};
use crate::error::{CommandError, Result};
use crate::io::{read_items, read_items_from, split_tokens};
use crate::sequence::{available_operations, chunk, interleave, most_frequent, remove_duplicates};
use std::fmt::Write as FmtWrite;
use std::io;
use std::path::Path;

/// Chunk size deliberately rejected by the demo's error check.
const DEMO_INVALID_CHUNK_SIZE: isize = 0;

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::Dedup { input } => cmd_dedup(input, format),
        Commands::Chunk { input, size } => cmd_chunk(input, *size, format),
        Commands::MostFrequent { input } => cmd_most_frequent(input, format),
        Commands::Interleave { first, second } => {
            cmd_interleave(first.as_deref(), second.as_deref(), format)
        }
        Commands::Demo => cmd_demo(format),
    }
}

/// Resolves the items for a command from arguments, a file, or stdin.
fn load_items(input: &ItemsInput) -> Result<Vec<Item>> {
    match input.file.as_deref() {
        Some(path) if path == Path::new("-") => read_items_from(io::stdin().lock()),
        Some(path) => read_items(path),
        None => Ok(parse_items(
            input.items.iter().flat_map(|arg| split_tokens(arg)),
        )),
    }
}

fn cmd_dedup(input: &ItemsInput, format: OutputFormat) -> Result<String> {
    let items = load_items(input)?;
    let unique = remove_duplicates(items.iter().cloned());
    tracing::debug!(input = items.len(), output = unique.len(), "removed duplicates");
    Ok(format_report(
        &Report::remove_duplicates(items, unique),
        format,
    ))
}

fn cmd_chunk(input: &ItemsInput, size: isize, format: OutputFormat) -> Result<String> {
    let items = load_items(input)?;
    let groups = chunk(items.iter().cloned(), size)?;
    tracing::debug!(size, groups = groups.len(), "chunked items");
    Ok(format_report(&Report::chunk(items, size, groups), format))
}

fn cmd_most_frequent(input: &ItemsInput, format: OutputFormat) -> Result<String> {
    let items = load_items(input)?;
    let winner = most_frequent(items.iter().cloned());
    tracing::debug!(input = items.len(), found = winner.is_some(), "counted frequencies");
    Ok(format_report(&Report::most_frequent(items, winner), format))
}

fn cmd_interleave(
    first: Option<&str>,
    second: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    if first.is_none() && second.is_none() {
        tracing::info!("interleave called without --first or --second");
    }
    let list1 = first.map(|s| parse_items(split_tokens(s))).unwrap_or_default();
    let list2 = second.map(|s| parse_items(split_tokens(s))).unwrap_or_default();
    let merged = interleave(list1.iter().cloned(), list2.iter().cloned());
    Ok(format_report(
        &Report::interleave(list1, list2, merged),
        format,
    ))
}

/// Builds the demo reports from the built-in sample data.
///
/// # Errors
///
/// Returns an error if a sample operation unexpectedly fails.
pub fn demo_reports() -> Result<Vec<Report>> {
    let with_dupes: Vec<Item> = [1, 2, 2, 3, 3, 3, 4, 5, 5].map(Item::Int).to_vec();
    let unique = remove_duplicates(with_dupes.iter().cloned());

    let numbers: Vec<Item> = (1..=9).map(Item::Int).collect();
    let groups = chunk(numbers.iter().cloned(), 3)?;

    let words: Vec<Item> = ["apple", "banana", "apple", "cherry", "apple", "banana"]
        .map(Item::from)
        .to_vec();
    let winner = most_frequent(words.iter().cloned());

    let odds: Vec<Item> = [1, 3, 5, 7].map(Item::Int).to_vec();
    let evens: Vec<Item> = [2, 4, 6, 8].map(Item::Int).to_vec();
    let merged = interleave(odds.iter().cloned(), evens.iter().cloned());

    Ok(vec![
        Report::remove_duplicates(with_dupes, unique),
        Report::chunk(numbers, 3, groups),
        Report::most_frequent(words, winner),
        Report::interleave(odds, evens, merged),
    ])
}

/// Runs the invalid chunk size check, returning the rejection message.
///
/// # Errors
///
/// Returns [`CommandError::InvalidArgument`] if the invalid size was accepted.
fn demo_error_check() -> Result<String> {
    match chunk([1, 2, 3], DEMO_INVALID_CHUNK_SIZE) {
        Err(e) if e.is_invalid_argument() => Ok(e.to_string()),
        Err(e) => Err(e),
        Ok(_) => Err(CommandError::InvalidArgument(format!(
            "chunk size {DEMO_INVALID_CHUNK_SIZE} was accepted"
        ))
        .into()),
    }
}

fn cmd_demo(format: OutputFormat) -> Result<String> {
    tracing::info!("running demo");
    let reports = demo_reports()?;
    let rejection = demo_error_check()?;
    tracing::debug!(reports = reports.len(), %rejection, "demo complete");

    match format {
        OutputFormat::Json => Ok(format_reports(&reports, format)),
        OutputFormat::Text => {
            let mut output = format_banner(&format!(
                "seqkit {} - sequence utilities demo",
                env!("CARGO_PKG_VERSION")
            ));
            let _ = writeln!(output, "Operations: {}", available_operations().join(", "));
            output.push('\n');
            output.push_str(&format_reports(&reports, format));
            output.push('\n');
            output.push_str("Error Handling:\n");
            let _ = writeln!(output, "  Invalid chunk size rejected: {rejection}");
            Ok(output)
        }
    }
}
