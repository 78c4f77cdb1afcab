//! Events emitted while a scan is running
//!
//! The walker pushes these to a `ScanListener` as they happen so the CLI can
//! print diagnostics in walk order.

use serde::Serialize;

use crate::models::ForbiddenCall;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScanEvent {
    /// Files in `directory` are skipped; `file` is the first one seen
    SkippedDirectory { directory: String, file: String },
    /// A file could not be opened or decoded as text
    UnreadableFile { path: String, reason: String },
    /// A non-exempt forbidden call was found
    ForbiddenCall(ForbiddenCall),
}

/// Receives scan events
pub trait ScanListener {
    fn on_event(&mut self, event: ScanEvent);
}

/// Listener that drops every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullListener;

impl ScanListener for NullListener {
    fn on_event(&mut self, _event: ScanEvent) {}
}

/// Collects events in order
impl ScanListener for Vec<ScanEvent> {
    fn on_event(&mut self, event: ScanEvent) {
        self.push(event);
    }
}
