//! Directory walker
//!
//! Walks a tree top-down, drops excluded directories and files, and runs one
//! rule over every remaining file. Both checks share this walk; they differ
//! only in the rule and the exclusion data they are given.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::events::{ScanEvent, ScanListener};
use crate::config::{CheckConfig, ScanConfig};
use crate::error::{Result, ScanError};
use crate::models::{CheckKind, FileOutcome, ScanReport};
use crate::rules::{CopyrightHeaderRule, ForbiddenFunctionsRule, LineRule};

/// Run the header check over `root`
pub fn check_headers(
    root: &Path,
    config: &CheckConfig,
    listener: &mut dyn ScanListener,
) -> Result<ScanReport> {
    let rule = CopyrightHeaderRule::new()?;
    walk(root, &rule, config, listener)
}

/// Run the forbidden-function check over `root`
pub fn check_functions(
    root: &Path,
    config: &CheckConfig,
    listener: &mut dyn ScanListener,
) -> Result<ScanReport> {
    let rule = ForbiddenFunctionsRule::new(config.exemptions.clone())?
        .with_root(path_key(&root.to_string_lossy()));
    walk(root, &rule, config, listener)
}

/// Run `check` over `root` with the matching part of `config`
pub fn run_check(
    check: CheckKind,
    root: &Path,
    config: &ScanConfig,
    listener: &mut dyn ScanListener,
) -> Result<ScanReport> {
    match check {
        CheckKind::Headers => check_headers(root, config.for_check(check), listener),
        CheckKind::Functions => check_functions(root, config.for_check(check), listener),
    }
}

/// Walk `root` and apply `rule` to every file the config does not exclude
pub fn walk(
    root: &Path,
    rule: &dyn LineRule,
    config: &CheckConfig,
    listener: &mut dyn ScanListener,
) -> Result<ScanReport> {
    validate_root(root)?;

    let check = rule.kind();
    let mut report = ScanReport::new(check, &root.to_string_lossy());
    let mut skipped_dirs: HashSet<PathBuf> = HashSet::new();

    tracing::info!(check = check.as_str(), root = %root.display(), "Scan started");

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "Skipping entry that could not be walked");
                continue;
            }
        };

        if !is_file(&entry) {
            continue;
        }

        let path = entry.path();
        let dir = path.parent().unwrap_or(root);

        if config.exclude_directories.matches(&directory_key(dir)) {
            if skipped_dirs.insert(dir.to_path_buf()) {
                let directory = dir.to_string_lossy().to_string();
                tracing::debug!(directory = %directory, "Skipping excluded directory");
                report.record_skipped_directory(&directory);
                listener.on_event(ScanEvent::SkippedDirectory {
                    directory,
                    file: entry.file_name().to_string_lossy().to_string(),
                });
            }
            continue;
        }

        let file_path = path.to_string_lossy().to_string();

        let file_key = path_key(&file_path);
        if config.exclude_files.matches(&file_key) {
            if tracing::enabled!(tracing::Level::TRACE) {
                let matched: Vec<&str> = config.exclude_files.matching(&file_key).collect();
                tracing::trace!(file = %file_path, matched = ?matched, "Excluded file");
            }
            report.record_excluded();
            continue;
        }

        let outcome = rule.check_file(path, &file_path);
        match &outcome {
            FileOutcome::Unreadable { reason } => {
                tracing::debug!(file = %file_path, reason = %reason, "Cannot parse file");
                listener.on_event(ScanEvent::UnreadableFile {
                    path: file_path.clone(),
                    reason: reason.clone(),
                });
            }
            FileOutcome::Violation { call: Some(call) } => {
                listener.on_event(ScanEvent::ForbiddenCall(call.clone()));
            }
            _ => {}
        }
        report.record(&file_path, outcome);
    }

    let report = report.complete();
    tracing::info!(
        check = check.as_str(),
        files_scanned = report.files_scanned,
        files_excluded = report.files_excluded,
        violations = report.violations.len(),
        unreadable = report.unreadable.len(),
        "Scan finished"
    );
    Ok(report)
}

fn validate_root(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(ScanError::MissingRoot {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    Ok(())
}

/// Regular files, plus symlinks that resolve to one
fn is_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// Directory path with `/` separators. An entry like `/dist/` only matches
/// directories below `dist`, never `dist` itself.
fn directory_key(dir: &Path) -> String {
    path_key(&dir.to_string_lossy())
}

fn path_key(path: &str) -> String {
    if std::path::MAIN_SEPARATOR == '/' {
        path.to_string()
    } else {
        path.replace(std::path::MAIN_SEPARATOR, "/")
    }
}
