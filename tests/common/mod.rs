//! Common test helpers for integration tests
//!
//! Provides an isolated temporary source tree that scans can run against.

#![allow(dead_code)]

use anyhow::Result;
use repo_hygiene::ScanConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary source tree, removed when dropped
///
/// # Examples
///
/// ```ignore
/// let tree = TestTree::new().unwrap();
/// tree.write("a.cpp", "// Copyright 2021 Example Corp\n").unwrap();
/// ```
pub struct TestTree {
    temp_dir: TempDir,
    root: PathBuf,
}

impl TestTree {
    /// Create an empty tree under a fresh temporary directory
    ///
    /// The random directory name is redrawn if it happens to contain one of
    /// the default exclusion fragments (e.g. `md`), since that would exclude
    /// every file in the tree.
    pub fn new() -> Result<Self> {
        let defaults = ScanConfig::default();
        for _ in 0..100 {
            let temp_dir = tempfile::Builder::new().prefix("hygiene-").tempdir()?;
            let root = temp_dir.path().join("repo");
            let key = format!("{}/", root.to_string_lossy());
            let tripped = [&defaults.headers, &defaults.functions].iter().any(|c| {
                c.exclude_files.matches(&key) || c.exclude_directories.matches(&key)
            });
            if tripped {
                continue;
            }
            fs::create_dir_all(&root)?;
            return Ok(Self { temp_dir, root });
        }
        anyhow::bail!("temporary directory path always matches a default exclusion")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `content` to `relative`, creating parent directories
    pub fn write(&self, relative: &str, content: impl AsRef<[u8]>) -> Result<PathBuf> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Path string as the scanner reports it
    pub fn display(&self, relative: &str) -> String {
        self.root.join(relative).to_string_lossy().to_string()
    }
}

pub const HEADER: &str = "// Copyright (c) 2021 Example Corp\n";

/// Bytes that are not valid UTF-8 and contain no header
pub const BINARY: &[u8] = &[0xff, 0xfe, 0x00, 0x42, 0x0a, 0x80, 0x81];

/// Sort a list of reported paths for order-independent comparisons
pub fn sorted(mut paths: Vec<String>) -> Vec<String> {
    paths.sort();
    paths
}
