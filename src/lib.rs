// repo-hygiene - copyright header and forbidden-function checker
// Module re-exports

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;
pub mod rules;
pub mod scanner;
pub mod utils;

// Re-export commonly used types
pub use models::{CheckKind, FileOutcome, ForbiddenCall, ScanReport, UnreadablePolicy};

pub use config::{CheckConfig, ScanConfig};
pub use error::ScanError;
pub use rules::{CopyrightHeaderRule, ForbiddenFunctionsRule, LineRule};
pub use scanner::{check_functions, check_headers, run_check, NullListener, ScanEvent, ScanListener};
