//! Environment variable management
//!
//! Handles loading of `.env` and the environment-backed log filter.

use anyhow::Result;
use std::env;

/// Log filter variable consulted when `RUST_LOG` is not set
pub const LOG_ENV_VAR: &str = "REPO_HYGIENE_LOG";

/// Load environment variables from .env file
///
/// Uses dotenv crate to load variables from .env file in the working directory.
/// Does not fail if .env file doesn't exist (optional configuration).
pub fn load_env() -> Result<()> {
    dotenv::dotenv().ok();
    Ok(())
}

/// Log filter from `REPO_HYGIENE_LOG`, if set and not blank
pub fn log_filter() -> Option<String> {
    env::var(LOG_ENV_VAR)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
