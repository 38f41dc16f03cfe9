//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// seqkit: sequence helpers on the command line.
///
/// Deduplicate, chunk, count and interleave lists of integers or words.
#[derive(Parser, Debug)]
#[command(name = "seqkit")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true, env = "SEQKIT_FORMAT")]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Where a command takes its items from.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemsInput {
    /// Items, separated by spaces or commas.
    #[arg(allow_negative_numbers = true)]
    pub items: Vec<String>,

    /// Read items from a file instead (`-` for stdin).
    #[arg(short, long, conflicts_with = "items")]
    pub file: Option<PathBuf>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove duplicates, keeping first occurrences in order.
    #[command(alias = "unique")]
    Dedup {
        /// Input items.
        #[command(flatten)]
        input: ItemsInput,
    },

    /// Split items into consecutive groups of a fixed size.
    Chunk {
        /// Input items.
        #[command(flatten)]
        input: ItemsInput,

        /// Maximum group size (must be at least 1).
        #[arg(short, long, allow_negative_numbers = true)]
        size: isize,
    },

    /// Find the most frequent item.
    #[command(name = "most-frequent", alias = "mode")]
    MostFrequent {
        /// Input items.
        #[command(flatten)]
        input: ItemsInput,
    },

    /// Alternate items from two lists.
    Interleave {
        /// First list, comma separated.
        #[arg(long, allow_hyphen_values = true)]
        first: Option<String>,

        /// Second list, comma separated.
        #[arg(long, allow_hyphen_values = true)]
        second: Option<String>,
    },

    /// Run every operation on built-in sample data.
    Demo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_chunk_negative_size() {
        let cli = Cli::try_parse_from(["seqkit", "chunk", "1", "2", "--size", "-1"]).unwrap();
        match cli.command {
            Commands::Chunk { input, size } => {
                assert_eq!(size, -1);
                assert_eq!(input.items, vec!["1", "2"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_format() {
        let cli = Cli::try_parse_from(["seqkit", "demo", "--format", "json"]).unwrap();
        assert_eq!(cli.format, "json");
        assert!(matches!(cli.command, Commands::Demo));
    }

    #[test]
    fn test_file_conflicts_with_items() {
        let result = Cli::try_parse_from(["seqkit", "dedup", "1", "--file", "x.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_most_frequent_alias() {
        let cli = Cli::try_parse_from(["seqkit", "mode", "a", "b", "a"]).unwrap();
        assert!(matches!(cli.command, Commands::MostFrequent { .. }));
    }
}
