use serde::{Deserialize, Serialize};

use super::{CheckKind, FileOutcome, ForbiddenCall};

/// How files that could not be read or decoded are treated in the result
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UnreadablePolicy {
    /// Listed separately, does not fail the run
    #[default]
    #[serde(rename = "report")]
    Report,
    /// Counted as a failing file
    #[serde(rename = "violation")]
    Violation,
    /// Dropped from the output
    #[serde(rename = "ignore")]
    Ignore,
}

/// Everything one run of a check found
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanReport {
    pub check: CheckKind,
    pub root: String,
    pub started_at: String,
    pub completed_at: Option<String>,
    pub files_scanned: usize,
    pub files_excluded: usize,
    pub skipped_directories: Vec<String>,
    /// Paths that failed the check, in walk order
    pub violations: Vec<String>,
    pub unreadable: Vec<String>,
    pub forbidden_calls: Vec<ForbiddenCall>,
}

impl ScanReport {
    pub fn new(check: CheckKind, root: &str) -> Self {
        Self {
            check,
            root: root.to_string(),
            started_at: chrono::Utc::now().to_rfc3339(),
            completed_at: None,
            files_scanned: 0,
            files_excluded: 0,
            skipped_directories: Vec::new(),
            violations: Vec::new(),
            unreadable: Vec::new(),
            forbidden_calls: Vec::new(),
        }
    }

    /// Fold one file's outcome into the report
    pub fn record(&mut self, path: &str, outcome: FileOutcome) {
        self.files_scanned += 1;
        match outcome {
            FileOutcome::Compliant => {}
            FileOutcome::Violation { call } => {
                self.violations.push(path.to_string());
                if let Some(call) = call {
                    self.forbidden_calls.push(call);
                }
            }
            FileOutcome::Unreadable { .. } => self.unreadable.push(path.to_string()),
        }
    }

    pub fn record_excluded(&mut self) {
        self.files_excluded += 1;
    }

    pub fn record_skipped_directory(&mut self, dir: &str) {
        self.skipped_directories.push(dir.to_string());
    }

    pub fn complete(mut self) -> Self {
        self.completed_at = Some(chrono::Utc::now().to_rfc3339());
        self
    }

    /// Paths that make the run fail under the given policy
    pub fn failing_paths(&self, policy: UnreadablePolicy) -> Vec<&str> {
        let mut paths: Vec<&str> = self.violations.iter().map(String::as_str).collect();
        if policy == UnreadablePolicy::Violation {
            paths.extend(self.unreadable.iter().map(String::as_str));
        }
        paths
    }

    pub fn is_success(&self, policy: UnreadablePolicy) -> bool {
        self.failing_paths(policy).is_empty()
    }
}
