//! Scan configuration
//!
//! Exclusion data is passed into the walker explicitly. The defaults come
//! from `scanner::constants`.

use crate::models::CheckKind;
use crate::scanner::constants::{
    DEFAULT_EXEMPTIONS, FUNCTION_EXCLUDE_DIRECTORIES, FUNCTION_EXCLUDE_FILES,
    HEADER_EXCLUDE_DIRECTORIES, HEADER_EXCLUDE_FILES,
};
use crate::scanner::exclusions::{ExemptionTable, SubstringSet};

/// Exclusion data for one check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckConfig {
    /// Files whose full path contains any entry are skipped
    pub exclude_files: SubstringSet,
    /// Files whose directory path contains any entry are skipped with a warning
    pub exclude_directories: SubstringSet,
    /// Only consulted by the forbidden-function check
    pub exemptions: ExemptionTable,
}

impl CheckConfig {
    /// Built-in defaults for `check`
    pub fn defaults_for(check: CheckKind) -> Self {
        match check {
            CheckKind::Headers => Self {
                exclude_files: SubstringSet::from_static(HEADER_EXCLUDE_FILES),
                exclude_directories: SubstringSet::from_static(HEADER_EXCLUDE_DIRECTORIES),
                exemptions: ExemptionTable::new(),
            },
            CheckKind::Functions => Self {
                exclude_files: SubstringSet::from_static(FUNCTION_EXCLUDE_FILES),
                exclude_directories: SubstringSet::from_static(FUNCTION_EXCLUDE_DIRECTORIES),
                exemptions: ExemptionTable::from_static(DEFAULT_EXEMPTIONS),
            },
        }
    }

    pub fn with_exclude_file(mut self, entry: impl Into<String>) -> Self {
        self.exclude_files.insert(entry);
        self
    }

    pub fn with_exclude_directory(mut self, entry: impl Into<String>) -> Self {
        self.exclude_directories.insert(entry);
        self
    }

    pub fn with_exemption(mut self, path: &str, exempted_code: impl Into<String>) -> Self {
        self.exemptions.insert(path, exempted_code);
        self
    }
}

/// Configuration for both checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub headers: CheckConfig,
    pub functions: CheckConfig,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            headers: CheckConfig::defaults_for(CheckKind::Headers),
            functions: CheckConfig::defaults_for(CheckKind::Functions),
        }
    }
}

impl ScanConfig {
    /// Config with no exclusions or exemptions at all
    pub fn empty() -> Self {
        Self {
            headers: CheckConfig::default(),
            functions: CheckConfig::default(),
        }
    }

    pub fn for_check(&self, check: CheckKind) -> &CheckConfig {
        match check {
            CheckKind::Headers => &self.headers,
            CheckKind::Functions => &self.functions,
        }
    }
}
