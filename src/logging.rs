//! tracing subscriber setup
//!
//! Logs always go to stderr so stdout carries only the report.

use crate::constants::LOG_ENV_VAR;
use crate::warn_print;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Map the number of `-v` flags to a default filter directive
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build a filter from an optional directive, falling back to the verbosity level.
///
/// A directive that does not parse is reported on stderr (unless quiet) and
/// ignored.
pub fn filter_from(directive: Option<&str>, verbose: u8) -> EnvFilter {
    let fallback = || EnvFilter::new(level_for_verbosity(verbose));

    match directive {
        Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|e| {
            warn_print!(
                "warning: ignoring invalid {}={:?} ({}), using level '{}'",
                LOG_ENV_VAR,
                directive,
                e,
                level_for_verbosity(verbose)
            );
            fallback()
        }),
        None => fallback(),
    }
}

/// Build the filter: `HELLO_SUM_LOG` wins, otherwise the verbosity level
pub fn build_filter(verbose: u8) -> EnvFilter {
    let directive = std::env::var(LOG_ENV_VAR).ok();
    filter_from(directive.as_deref(), verbose)
}

/// Install the global subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: u8) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();

    if let Err(e) = result {
        tracing::debug!("tracing subscriber already installed: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(1), "info");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(3), "trace");
        assert_eq!(level_for_verbosity(200), "trace");
    }

    #[test]
    fn test_filter_from_directive_overrides_verbosity() {
        let filter = filter_from(Some("debug"), 0);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_filter_from_without_directive_uses_verbosity() {
        let filter = filter_from(None, 1);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_filter_from_invalid_directive_falls_back() {
        let filter = filter_from(Some("hello_sum=bogus"), 2);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(0);
        init(2);
    }
}
