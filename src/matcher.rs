//! Whole-word literal matching with a per-line suppression list.

use crate::error::Result;
use regex::Regex;

/// Matches configured literals as whole words and suppresses lines that
/// contain a known false-positive phrase.
///
/// Word-boundary patterns are compiled once at construction; regex
/// metacharacters inside a literal are escaped and matched literally.
pub struct LiteralMatcher {
    literals: Vec<String>,
    patterns: Vec<Regex>,
    exclude_phrases: Vec<String>,
}

impl LiteralMatcher {
    pub fn new(literals: &[String], exclude_phrases: &[String]) -> Result<Self> {
        let patterns = literals
            .iter()
            .map(|lit| Regex::new(&format!(r"\b{}\b", regex::escape(lit))))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            literals: literals.to_vec(),
            patterns,
            exclude_phrases: exclude_phrases.to_vec(),
        })
    }

    /// Literals in configured order; indexes align with [`Self::find`].
    pub fn literals(&self) -> &[String] {
        &self.literals
    }

    /// Byte offset of the first whole-word occurrence of literal `index`
    /// in the decommented line, or None.
    pub fn find(&self, stripped_line: &str, index: usize) -> Option<usize> {
        self.patterns[index].find(stripped_line).map(|m| m.start())
    }

    /// True when the decommented line contains any exclusion phrase as a
    /// plain substring (case-sensitive). Applies per line: one phrase
    /// suppresses every literal match on that line.
    pub fn is_suppressed(&self, stripped_line: &str) -> bool {
        self.exclude_phrases
            .iter()
            .any(|phrase| stripped_line.contains(phrase))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(literals: &[&str], phrases: &[&str]) -> LiteralMatcher {
        let literals: Vec<String> = literals.iter().map(|s| s.to_string()).collect();
        let phrases: Vec<String> = phrases.iter().map(|s| s.to_string()).collect();
        LiteralMatcher::new(&literals, &phrases).unwrap()
    }

    #[test]
    fn test_find_whole_word_at_line_start() {
        let m = matcher(&["data "], &[]);
        assert_eq!(m.find("data flow", 0), Some(0));
    }

    #[test]
    fn test_find_rejects_substring_of_larger_word() {
        let m = matcher(&["data "], &[]);
        assert_eq!(m.find("metadata processing", 0), None);
    }

    #[test]
    fn test_find_reports_byte_offset() {
        let m = matcher(&["proc "], &[]);
        assert_eq!(m.find("x = 1; proc options;", 0), Some(7));
    }

    #[test]
    fn test_find_first_occurrence_only() {
        let m = matcher(&["proc "], &[]);
        assert_eq!(m.find("proc a; proc b;", 0), Some(0));
    }

    #[test]
    fn test_literal_metacharacters_are_escaped() {
        let m = matcher(&["a.b "], &[]);
        assert_eq!(m.find("a.b c", 0), Some(0));
        // The dot must not act as a wildcard.
        assert_eq!(m.find("axb c", 0), None);
    }

    #[test]
    fn test_suppression_is_plain_substring() {
        let m = matcher(&["data "], &["loads data from"]);
        assert!(m.is_suppressed("this loads data from disk"));
        assert!(!m.is_suppressed("this stores data on disk"));
    }

    #[test]
    fn test_suppression_is_case_sensitive() {
        let m = matcher(&["data "], &["loads data from"]);
        assert!(!m.is_suppressed("this Loads Data From disk"));
    }

    #[test]
    fn test_multiple_literals_in_configured_order() {
        let m = matcher(&["proc ", "data "], &[]);
        assert_eq!(m.literals(), &["proc ".to_string(), "data ".to_string()]);
        assert_eq!(m.find("data step then proc sql", 0), Some(15));
        assert_eq!(m.find("data step then proc sql", 1), Some(0));
    }

    #[test]
    fn test_empty_literal_set() {
        let m = matcher(&[], &[]);
        assert!(m.literals().is_empty());
    }
}
