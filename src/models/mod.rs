// repo-hygiene data models

pub mod check;
pub mod outcome;
pub mod scan;
pub mod violation;

// Re-exports for convenience
pub use check::CheckKind;
pub use outcome::FileOutcome;
pub use scan::{ScanReport, UnreadablePolicy};
pub use violation::ForbiddenCall;
