//! Binary entry point for seqkit.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::Parser;
use seqkit::cli::output::{OutputFormat, format_error};
use seqkit::cli::{Cli, execute};
use seqkit::logging::init_logging;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.format);

    let result = init_logging(cli.verbose).and_then(|()| execute(&cli));
    match result {
        Ok(output) => {
            if !output.is_empty() {
                // Broken pipes are fine (e.g. piped to `head` or `jq`)
                if let Err(e) = write!(io::stdout(), "{output}")
                    && e.kind() != io::ErrorKind::BrokenPipe
                {
                    eprintln!("Error writing to stdout: {e}");
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            let error_output = format_error(&e, format);
            match format {
                // JSON errors go to stdout for programmatic parsing
                OutputFormat::Json => println!("{error_output}"),
                OutputFormat::Text => eprintln!("Error: {error_output}"),
            }
            ExitCode::FAILURE
        }
    }
}
