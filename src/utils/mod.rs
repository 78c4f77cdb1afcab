//! Utility functions for repo-hygiene
//!
//! Provides environment variable handling.

pub mod env;

pub use env::{load_env, log_filter};
