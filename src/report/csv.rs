//! CSV report: one row per match. Alternate contract to the grouped text
//! report; the two formats are never merged.

use crate::report::Reporter;
use crate::types::ScanOutcome;
use std::fmt::Write;

#[derive(Debug, Default)]
pub struct CsvReporter;

impl CsvReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for CsvReporter {
    fn report(&self, outcome: &ScanOutcome) -> String {
        let mut out = String::from("Filename,LineNumber,ColumnNumber,Match\n");
        for file in outcome.sorted_files() {
            for m in outcome.matches_for(file) {
                let _ = writeln!(
                    out,
                    "{},{},{},{}",
                    escape_field(file),
                    m.line,
                    m.column + 1,
                    escape_field(&m.literal)
                );
            }
        }
        out
    }
}

/// Quote a field when it contains a comma, quote, or newline; embedded
/// quotes are doubled.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
