use serde::{Deserialize, Serialize};

use super::violation::ForbiddenCall;

/// Result of running one check against one file
///
/// Read and decode failures get their own variant so callers can decide
/// how to report them instead of having them folded into pass or fail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum FileOutcome {
    Compliant,
    Violation {
        /// Present for the forbidden-function check only
        #[serde(skip_serializing_if = "Option::is_none")]
        call: Option<ForbiddenCall>,
    },
    Unreadable {
        reason: String,
    },
}

impl FileOutcome {
    pub fn violation() -> Self {
        FileOutcome::Violation { call: None }
    }

    pub fn forbidden_call(call: ForbiddenCall) -> Self {
        FileOutcome::Violation { call: Some(call) }
    }

    pub fn unreadable(reason: impl Into<String>) -> Self {
        FileOutcome::Unreadable {
            reason: reason.into(),
        }
    }

    pub fn is_compliant(&self) -> bool {
        matches!(self, FileOutcome::Compliant)
    }

    pub fn is_violation(&self) -> bool {
        matches!(self, FileOutcome::Violation { .. })
    }

    pub fn is_unreadable(&self) -> bool {
        matches!(self, FileOutcome::Unreadable { .. })
    }
}
