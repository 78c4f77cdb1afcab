//! Forbidden standard-library functions
//!
//! This rule detects calls to unbounded string functions (`strcpy`, `strcat`,
//! `sprintf`, ...) and legacy context-switch primitives (`setjmp`,
//! `longjmp`). A match is ignored when the trimmed line is part of the
//! exemption recorded for that file, keyed by its path relative to the
//! scanned root.

use std::io::BufRead;

use regex::Regex;

use super::LineRule;
use crate::error::{Result, ScanError};
use crate::models::{CheckKind, FileOutcome, ForbiddenCall};
use crate::scanner::constants::FORBIDDEN_FUNCTIONS_PATTERN;
use crate::scanner::exclusions::{relative_to, ExemptionTable};

/// Forbidden function rule engine
pub struct ForbiddenFunctionsRule {
    pattern: Regex,
    exemptions: ExemptionTable,
    root: String,
}

impl ForbiddenFunctionsRule {
    /// Compile the built-in pattern with the given exemptions
    pub fn new(exemptions: ExemptionTable) -> Result<Self> {
        Self::with_pattern(FORBIDDEN_FUNCTIONS_PATTERN, exemptions)
    }

    pub fn with_pattern(pattern: &str, exemptions: ExemptionTable) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| ScanError::Pattern {
            name: "forbidden functions",
            source,
        })?;
        Ok(Self {
            pattern,
            exemptions,
            root: String::new(),
        })
    }

    /// Resolve exemption keys against `root`, the directory being walked
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    /// Every forbidden token on the line, left to right
    pub fn find_calls(&self, line: &str) -> Vec<String> {
        self.pattern
            .find_iter(line)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

impl LineRule for ForbiddenFunctionsRule {
    fn kind(&self) -> CheckKind {
        CheckKind::Functions
    }

    /// Stops at the first non-exempt match. A read or decode error makes
    /// the file `Unreadable`, which never counts as a finding here.
    fn check_reader(&self, reader: &mut dyn BufRead, file_path: &str) -> FileOutcome {
        for (idx, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => return FileOutcome::unreadable(e.to_string()),
            };

            let functions = self.find_calls(&line);
            if functions.is_empty() {
                continue;
            }

            if self.exemptions.is_exempt(relative_to(&self.root, file_path), &line) {
                tracing::debug!(file = file_path, line = idx + 1, "Exempted forbidden call");
                continue;
            }

            return FileOutcome::forbidden_call(ForbiddenCall::new(
                file_path.to_string(),
                idx + 1,
                line,
                functions,
            ));
        }
        FileOutcome::Compliant
    }
}
