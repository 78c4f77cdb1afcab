//! Source tree scanning engine
//!
//! Provides the directory walker, exclusion predicates, default exclusion
//! data and scan events.

pub mod constants;
pub mod events;
pub mod exclusions;
pub mod walker;

pub use events::{NullListener, ScanEvent, ScanListener};
pub use exclusions::{ExemptionTable, SubstringSet};
pub use walker::{check_functions, check_headers, run_check, walk};
