//! Substring predicates for exclusions and exemptions
//!
//! Every list here is matched by plain substring containment, so the order
//! of entries and duplicates never change the answer.

use std::collections::{BTreeSet, HashMap};

/// A set of literal substrings, any of which may occur in a path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstringSet {
    entries: BTreeSet<String>,
}

impl SubstringSet {
    /// Build a set from literal entries. Empty entries are dropped since
    /// they would match every path.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(Into::into)
                .filter(|e: &String| !e.is_empty())
                .collect(),
        }
    }

    pub fn from_static(entries: &[&str]) -> Self {
        Self::new(entries.iter().copied())
    }

    /// True if any entry occurs anywhere in `haystack`
    pub fn matches(&self, haystack: &str) -> bool {
        self.entries.iter().any(|entry| haystack.contains(entry.as_str()))
    }

    /// The entries that occur in `haystack`, useful for debug logging
    pub fn matching<'a>(&'a self, haystack: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .map(String::as_str)
            .filter(move |entry| haystack.contains(*entry))
    }

    pub fn insert(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        if !entry.is_empty() {
            self.entries.insert(entry);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-file allowlist of forbidden-function usages that were reviewed
///
/// Keys are file paths relative to the scanned root. A leading `./` is
/// ignored on both sides; otherwise a key must equal the path exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExemptionTable {
    entries: HashMap<String, String>,
}

impl ExemptionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_static(entries: &[(&str, &str)]) -> Self {
        let mut table = Self::new();
        for (path, code) in entries {
            table.insert(*path, *code);
        }
        table
    }

    pub fn insert(&mut self, path: impl AsRef<str>, exempted_code: impl Into<String>) {
        self.entries
            .insert(normalize(path.as_ref()).to_string(), exempted_code.into());
    }

    /// Exempted code for the root-relative `path`, or `None` when the file
    /// has no exemptions
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(normalize(path)).map(String::as_str)
    }

    /// True if the trimmed line is part of the exempted code for `path`
    pub fn is_exempt(&self, path: &str, line: &str) -> bool {
        match self.get(path) {
            Some(code) => code.contains(line.trim()),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `path` relative to `root`, without a leading `./` or separator.
/// Paths outside `root` are returned unchanged.
pub fn relative_to<'a>(root: &str, path: &'a str) -> &'a str {
    let relative = match path.strip_prefix(root) {
        Some(rest)
            if root.is_empty()
                || root.ends_with('/')
                || rest.is_empty()
                || rest.starts_with('/') =>
        {
            rest.trim_start_matches('/')
        }
        _ => path,
    };
    normalize(relative)
}

fn normalize(path: &str) -> &str {
    path.strip_prefix("./").unwrap_or(path)
}
