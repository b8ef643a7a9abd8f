//! Comment removal applied to each line before literal matching.
//!
//! The default pass is line-local: a single regex replaces `//`-to-end-of-line
//! and non-greedy `/* ... */` spans. Block comments spanning multiple lines are
//! not tracked, and comment markers inside string literals are still treated as
//! comment starts. Both are accepted limitations of the regex approach; the
//! stateful [`BlockTracker`] covers the multi-line case when stricter behavior
//! is wanted.

use regex::Regex;
use std::sync::LazyLock;

static COMMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//.*|/\*.*?\*/").unwrap());

/// Remove comments from a single line in isolation.
pub fn strip_line(line: &str) -> String {
    COMMENT_PATTERN.replace_all(line, "").into_owned()
}

/// Comment stripper that carries open-block state across lines.
///
/// Feed lines in file order; text between an unclosed `/*` and the `*/` on a
/// later line is removed.
#[derive(Debug, Default)]
pub struct BlockTracker {
    in_block: bool,
}

impl BlockTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strip(&mut self, line: &str) -> String {
        let mut out = String::new();
        let mut rest = line;

        loop {
            if self.in_block {
                match rest.find("*/") {
                    Some(end) => {
                        rest = &rest[end + 2..];
                        self.in_block = false;
                    }
                    None => return out,
                }
            } else {
                match (rest.find("//"), rest.find("/*")) {
                    (None, None) => {
                        out.push_str(rest);
                        return out;
                    }
                    (Some(line_start), Some(block_start)) if line_start < block_start => {
                        out.push_str(&rest[..line_start]);
                        return out;
                    }
                    (Some(line_start), None) => {
                        out.push_str(&rest[..line_start]);
                        return out;
                    }
                    (_, Some(block_start)) => {
                        out.push_str(&rest[..block_start]);
                        rest = &rest[block_start + 2..];
                        self.in_block = true;
                    }
                }
            }
        }
    }
}
