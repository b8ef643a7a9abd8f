//! Record types produced by a scan and the aggregate they collect into.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One reported occurrence of a literal at a specific file/line/column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub file: String,
    /// 1-based line number.
    pub line: usize,
    /// 0-based byte offset of the match start; report writers render it 1-based.
    pub column: usize,
    pub literal: String,
    /// Original line content, including its trailing newline when present.
    pub raw_line: String,
}

/// A path the exclusion policy rejected, with the cause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionRecord {
    pub path: String,
    pub reason: String,
}

/// Aggregated result of one scan: matches grouped by file plus the
/// exclusion records in encounter order.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    matches_by_file: HashMap<String, Vec<MatchRecord>>,
    exclusions: Vec<ExclusionRecord>,
}

impl ScanOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate a file's match records with its path. Records keep their
    /// insertion order (line order, then literal-configuration order).
    pub fn add_file_matches(&mut self, file: impl Into<String>, records: Vec<MatchRecord>) {
        if records.is_empty() {
            return;
        }
        self.matches_by_file
            .entry(file.into())
            .or_default()
            .extend(records);
    }

    pub fn record_exclusion(&mut self, path: impl Into<String>, reason: impl Into<String>) {
        self.exclusions.push(ExclusionRecord {
            path: path.into(),
            reason: reason.into(),
        });
    }

    pub fn exclusions(&self) -> &[ExclusionRecord] {
        &self.exclusions
    }

    /// File paths with at least one match, sorted lexicographically ascending.
    pub fn sorted_files(&self) -> Vec<&str> {
        let mut files: Vec<&str> = self.matches_by_file.keys().map(String::as_str).collect();
        files.sort_unstable();
        files
    }

    pub fn matches_for(&self, file: &str) -> &[MatchRecord] {
        self.matches_by_file
            .get(file)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn total_matches(&self) -> usize {
        self.matches_by_file.values().map(Vec::len).sum()
    }

    pub fn files_count(&self) -> usize {
        self.matches_by_file.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches_by_file.is_empty()
    }
}
