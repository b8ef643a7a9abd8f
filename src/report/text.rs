//! Grouped plain-text report: exclusions, matches per file, summary.

use crate::report::Reporter;
use crate::types::ScanOutcome;
use std::fmt::Write;

/// Primary report contract. Three sections in fixed order: every exclusion
/// record in encounter order, matches grouped by lexicographically sorted
/// file path, and a per-file summary count in the same order. Contains no
/// timestamps, so identical scans render byte-identical reports.
#[derive(Debug, Default)]
pub struct TextReporter;

impl TextReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for TextReporter {
    fn report(&self, outcome: &ScanOutcome) -> String {
        let mut out = String::new();

        out.push_str("\nExcluded Files and Directories:\n");
        for record in outcome.exclusions() {
            let _ = writeln!(out, "Path: {}, Reason: {}", record.path, record.reason);
        }

        out.push_str("\nString Literal Matches:\n");
        for file in outcome.sorted_files() {
            let _ = writeln!(out, "File: {}", file);
            for m in outcome.matches_for(file) {
                // Column is stored 0-based and rendered 1-based.
                let _ = writeln!(out, "  Row: {}, Column: {}", m.line, m.column + 1);
                let _ = writeln!(out, "  Match: {}", m.literal);
                out.push_str("  Line: ");
                out.push_str(&m.raw_line);
                if !m.raw_line.ends_with('\n') {
                    out.push('\n');
                }
            }
        }

        out.push_str("\nSummary:\n");
        for file in outcome.sorted_files() {
            let _ = writeln!(
                out,
                "File: {}, Matches Found: {}",
                file,
                outcome.matches_for(file).len()
            );
        }

        out
    }
}
