//! Tracing initialization
//!
//! Logs go to stderr; stdout carries the scan output.

use tracing_subscriber::{prelude::*, EnvFilter};

/// Default filter for a given `-v` count
pub fn default_level(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Filter directive: `RUST_LOG`, then `REPO_HYGIENE_LOG`, then the verbosity level
pub fn filter_directive(verbosity: u8, quiet: bool) -> String {
    std::env::var("RUST_LOG")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(crate::utils::log_filter)
        .unwrap_or_else(|| default_level(verbosity, quiet).to_string())
}

/// Initialize tracing. Call once at process startup.
pub fn init_tracing(verbosity: u8, quiet: bool) {
    let filter = EnvFilter::new(filter_directive(verbosity, quiet));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_by_verbosity() {
        assert_eq!(default_level(0, false), "warn");
        assert_eq!(default_level(1, false), "info");
        assert_eq!(default_level(2, false), "debug");
        assert_eq!(default_level(7, false), "trace");
        assert_eq!(default_level(3, true), "error");
    }

    #[test]
    #[serial_test::serial]
    fn test_filter_directive_precedence() {
        std::env::remove_var("RUST_LOG");
        std::env::remove_var(crate::utils::env::LOG_ENV_VAR);
        assert_eq!(filter_directive(1, false), "info");

        std::env::set_var(crate::utils::env::LOG_ENV_VAR, "repo_hygiene=debug");
        assert_eq!(filter_directive(1, false), "repo_hygiene=debug");

        std::env::set_var("RUST_LOG", "trace");
        assert_eq!(filter_directive(1, false), "trace");

        std::env::remove_var("RUST_LOG");
        std::env::remove_var(crate::utils::env::LOG_ENV_VAR);
    }

    #[test]
    fn test_init_tracing_twice_does_not_panic() {
        init_tracing(0, false);
        init_tracing(2, false);
    }
}
