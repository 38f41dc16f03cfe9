//! Logging initialization.
//!
//! Installs a `tracing-subscriber` formatter writing to stderr so that
//! stdout stays clean for text and JSON output.

use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter directive.
pub const LOG_ENV: &str = "SEQKIT_LOG";

/// Filter used when neither `SEQKIT_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "seqkit=warn";

/// Filter used with `--verbose`.
pub const VERBOSE_FILTER: &str = "seqkit=debug";

/// Builds the log filter.
///
/// `SEQKIT_LOG` wins over `RUST_LOG`; `--verbose` wins over both.
///
/// # Errors
///
/// Returns [`Error::Config`] if the directive from the environment is invalid.
pub fn build_filter(verbose: bool) -> Result<EnvFilter> {
    if verbose {
        return parse_filter(VERBOSE_FILTER);
    }
    match std::env::var(LOG_ENV).or_else(|_| std::env::var(EnvFilter::DEFAULT_ENV)) {
        Ok(directive) => parse_filter(&directive),
        Err(_) => parse_filter(DEFAULT_FILTER),
    }
}

fn parse_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive).map_err(|e| Error::Config {
        message: format!("invalid log filter '{directive}': {e}"),
    })
}

/// Initializes the global subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
///
/// # Errors
///
/// Returns [`Error::Config`] if the log filter is invalid.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = build_filter(verbose)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_filter() {
        let filter = build_filter(true).unwrap();
        assert_eq!(filter.to_string(), VERBOSE_FILTER);
    }

    #[test]
    fn test_parse_filter_invalid() {
        let err = parse_filter("seqkit=notalevel").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_init_logging_twice() {
        assert!(init_logging(true).is_ok());
        assert!(init_logging(true).is_ok());
    }
}
