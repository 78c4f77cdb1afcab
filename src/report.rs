//! Human-readable and JSON output
//!
//! The wording of every line here is what CI logs and scripts grep for,
//! keep it stable.

use std::io::Write;

use anyhow::{Context, Result};

use crate::models::{CheckKind, ScanReport, UnreadablePolicy};
use crate::scanner::{ScanEvent, ScanListener};

pub const BANNER: &str = "#########################";
pub const MISSING_START_DIR: &str = "Provide start dir!";
pub const UNREADABLE_HEADING: &str = "## Unreadable files:";

/// Lines printed before the scan starts
pub fn write_start<W: Write>(out: &mut W, start_dir: &str, check: CheckKind) -> std::io::Result<()> {
    writeln!(out, "Provided start dir:{}", start_dir)?;
    writeln!(out, "{}", check.banner())
}

/// Success line, or the failure banner followed by one path per line
pub fn write_result<W: Write>(
    out: &mut W,
    report: &ScanReport,
    policy: UnreadablePolicy,
) -> std::io::Result<()> {
    let failing = report.failing_paths(policy);
    if failing.is_empty() {
        writeln!(out, "{}", report.check.success_message())?;
    } else {
        writeln!(out, "{}", BANNER)?;
        writeln!(out, "{}", report.check.failure_heading())?;
        for path in failing {
            writeln!(out, "{}", path)?;
        }
    }

    if policy == UnreadablePolicy::Report && !report.unreadable.is_empty() {
        writeln!(out, "{}", BANNER)?;
        writeln!(out, "{}", UNREADABLE_HEADING)?;
        for path in &report.unreadable {
            writeln!(out, "{}", path)?;
        }
    }
    Ok(())
}

/// Pretty-printed JSON of the whole report
pub fn write_json<W: Write>(out: &mut W, report: &ScanReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report).context("Failed to serialize scan report")?;
    writeln!(out).context("Failed to write scan report")?;
    Ok(())
}

/// Prints scan diagnostics as they happen
pub struct ConsoleListener<W: Write> {
    out: W,
    quiet: bool,
}

impl<W: Write> ConsoleListener<W> {
    pub fn new(out: W, quiet: bool) -> Self {
        Self { out, quiet }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_event(&mut self, event: &ScanEvent) -> std::io::Result<()> {
        match event {
            ScanEvent::SkippedDirectory { directory, file } => writeln!(
                self.out,
                "Warning - Skipping directory - {} for file - {}",
                directory, file
            ),
            ScanEvent::UnreadableFile { path, .. } => {
                writeln!(self.out, "ERROR: Cannot parse file:{}", path)
            }
            ScanEvent::ForbiddenCall(call) => {
                writeln!(self.out, "ERROR: Forbidden function detected in:{}", call.file_path)?;
                writeln!(self.out, "Line start:{}End", call.line)?;
                writeln!(self.out, "Function:{}", call.functions_display())
            }
        }
    }
}

impl<W: Write> ScanListener for ConsoleListener<W> {
    fn on_event(&mut self, event: ScanEvent) {
        if self.quiet {
            return;
        }
        if let Err(e) = self.write_event(&event) {
            tracing::warn!(error = %e, "Failed to write scan diagnostic");
        }
    }
}
