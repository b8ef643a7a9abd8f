//! Line-oriented file scanning: strip comments, match literals, record hits.

use crate::error::{Result, ScanError};
use crate::matcher::LiteralMatcher;
use crate::strip::{strip_line, BlockTracker};
use crate::types::MatchRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Scans one file at a time against a shared [`LiteralMatcher`].
pub struct FileScanner<'a> {
    matcher: &'a LiteralMatcher,
    track_blocks: bool,
}

impl<'a> FileScanner<'a> {
    pub fn new(matcher: &'a LiteralMatcher) -> Self {
        Self {
            matcher,
            track_blocks: false,
        }
    }

    /// Carry block-comment state across lines instead of the default
    /// line-local stripping.
    pub fn with_track_blocks(mut self, track: bool) -> Self {
        self.track_blocks = track;
        self
    }

    /// Read `path` line by line and return every non-suppressed whole-word
    /// literal occurrence. End-of-stream is normal termination; open and
    /// mid-stream read failures (including non-UTF-8 content) surface as
    /// [`ScanError::Read`].
    pub fn scan_file(&self, path: &Path) -> Result<Vec<MatchRecord>> {
        let file = File::open(path).map_err(|e| ScanError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        let mut reader = BufReader::new(file);
        let file_label = path.display().to_string();

        let mut records = Vec::new();
        let mut tracker = BlockTracker::new();
        let mut line_number = 0usize;
        let mut raw = String::new();

        loop {
            raw.clear();
            let read = reader.read_line(&mut raw).map_err(|e| ScanError::Read {
                path: file_label.clone(),
                source: e,
            })?;
            if read == 0 {
                break;
            }
            line_number += 1;
            self.check_line(&file_label, line_number, &raw, &mut tracker, &mut records);
        }

        Ok(records)
    }

    /// Scan already-loaded content under a synthetic file label. Shares the
    /// per-line pipeline with [`Self::scan_file`].
    pub fn scan_content(&self, content: &str, file_label: &str) -> Vec<MatchRecord> {
        let mut records = Vec::new();
        let mut tracker = BlockTracker::new();
        for (index, raw) in content.split_inclusive('\n').enumerate() {
            self.check_line(file_label, index + 1, raw, &mut tracker, &mut records);
        }
        records
    }

    fn check_line(
        &self,
        file: &str,
        line_number: usize,
        raw: &str,
        tracker: &mut BlockTracker,
        records: &mut Vec<MatchRecord>,
    ) {
        let stripped = if self.track_blocks {
            tracker.strip(raw)
        } else {
            strip_line(raw)
        };

        for (index, literal) in self.matcher.literals().iter().enumerate() {
            let Some(column) = self.matcher.find(&stripped, index) else {
                continue;
            };
            if self.matcher.is_suppressed(&stripped) {
                debug!(
                    file,
                    line = line_number,
                    literal = %literal,
                    "Match suppressed by exclusion phrase"
                );
                continue;
            }
            debug!(file, line = line_number, column, literal = %literal, "Literal match");
            records.push(MatchRecord {
                file: file.to_string(),
                line: line_number,
                column,
                literal: literal.clone(),
                raw_line: raw.to_string(),
            });
        }
    }
}
