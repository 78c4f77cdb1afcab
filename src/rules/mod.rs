//! Hygiene rule engines
//! Line-oriented checks run against every file the walker does not exclude

pub mod copyright_header;
pub mod forbidden_functions;

pub use copyright_header::CopyrightHeaderRule;
pub use forbidden_functions::ForbiddenFunctionsRule;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::models::{CheckKind, FileOutcome};

/// A check that reads a file line by line and decides its outcome
pub trait LineRule {
    fn kind(&self) -> CheckKind;

    /// Run the check over an already opened text stream
    fn check_reader(&self, reader: &mut dyn BufRead, file_path: &str) -> FileOutcome;

    /// Open `path` and run the check. The handle is dropped before returning.
    /// A file that cannot be opened is `Unreadable`.
    fn check_file(&self, path: &Path, file_path: &str) -> FileOutcome {
        match File::open(path) {
            Ok(file) => self.check_reader(&mut BufReader::new(file), file_path),
            Err(e) => FileOutcome::unreadable(e.to_string()),
        }
    }
}
