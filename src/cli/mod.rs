//! CLI layer for seqkit.
//!
//! Provides the command-line interface using clap, with one command per
//! sequence operation plus a demo run.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
