//! Copyright header presence
//!
//! A file passes when at least one of its lines contains a copyright notice
//! such as `Copyright (c) 2020-2022 Intel Corporation`. The match is
//! unanchored, so the notice may sit behind any comment marker.

use std::io::BufRead;

use regex::Regex;

use super::LineRule;
use crate::error::{Result, ScanError};
use crate::models::{CheckKind, FileOutcome};
use crate::scanner::constants::HEADER_PATTERN;

/// Copyright header rule engine
pub struct CopyrightHeaderRule {
    pattern: Regex,
}

impl CopyrightHeaderRule {
    /// Compile the built-in header pattern
    pub fn new() -> Result<Self> {
        Self::with_pattern(HEADER_PATTERN)
    }

    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| ScanError::Pattern {
            name: "copyright header",
            source,
        })?;
        Ok(Self { pattern })
    }

    /// True if a single line carries a copyright notice
    pub fn is_header_line(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

impl LineRule for CopyrightHeaderRule {
    fn kind(&self) -> CheckKind {
        CheckKind::Headers
    }

    /// Stops at the first matching line. A read or decode error before any
    /// match makes the file `Unreadable`.
    fn check_reader(&self, reader: &mut dyn BufRead, _file_path: &str) -> FileOutcome {
        for line in reader.lines() {
            match line {
                Ok(line) if self.is_header_line(&line) => return FileOutcome::Compliant,
                Ok(_) => {}
                Err(e) => return FileOutcome::unreadable(e.to_string()),
            }
        }
        FileOutcome::violation()
    }
}
