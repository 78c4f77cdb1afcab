//! Error types for scan setup
//!
//! Per-file read failures are not errors; they surface as
//! `FileOutcome::Unreadable`. Only problems that stop a scan from starting
//! end up here.

use std::path::PathBuf;

/// Errors that prevent a scan from running
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Start directory does not exist: {}", path.display())]
    MissingRoot { path: PathBuf },

    #[error("Start directory is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Failed to compile {name} pattern: {source}")]
    Pattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScanError>;
