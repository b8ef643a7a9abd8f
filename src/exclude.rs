//! Per-path exclusion decisions for the tree walker.

use crate::error::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Rule set determining whether a path is scanned: shell-style file name
/// patterns, extension strings (each beginning with '.'), and directory
/// path prefixes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExclusionRules {
    pub file_patterns: Vec<String>,
    pub extensions: Vec<String>,
    pub directories: Vec<PathBuf>,
}

/// Compiled exclusion policy. Immutable for the duration of one scan.
pub struct ExclusionPolicy {
    file_patterns: Vec<String>,
    glob_set: GlobSet,
    extensions: Vec<String>,
    /// (as configured, cleaned string form) pairs.
    directories: Vec<(PathBuf, String)>,
}

impl ExclusionPolicy {
    pub fn new(rules: &ExclusionRules) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &rules.file_patterns {
            builder.add(Glob::new(pattern)?);
        }

        let directories = rules
            .directories
            .iter()
            .map(|dir| (dir.clone(), clean_path(dir).to_string_lossy().into_owned()))
            .collect();

        Ok(Self {
            file_patterns: rules.file_patterns.clone(),
            glob_set: builder.build()?,
            extensions: rules.extensions.clone(),
            directories,
        })
    }

    /// Decide whether `path` is excluded. Returns the human-readable reason
    /// when it is; recording the decision is the caller's responsibility.
    pub fn classify(&self, path: &Path, is_dir: bool) -> Option<String> {
        if is_dir {
            self.classify_directory(path)
        } else {
            self.classify_file(path)
        }
    }

    /// Directory exclusion is a plain string-prefix test on cleaned paths,
    /// not segment-aware: prefix `/a/b` also excludes `/a/bc`.
    fn classify_directory(&self, path: &Path) -> Option<String> {
        let cleaned = clean_path(path).to_string_lossy().into_owned();
        self.directories
            .iter()
            .find(|(_, prefix)| cleaned.starts_with(prefix.as_str()))
            .map(|(configured, _)| format!("matched directory: {}", configured.display()))
    }

    fn classify_file(&self, path: &Path) -> Option<String> {
        let file_name = path.file_name()?.to_string_lossy().into_owned();

        let matched = self.glob_set.matches(file_name.as_str());
        if let Some(&index) = matched.first() {
            return Some(format!("matched file pattern: {}", self.file_patterns[index]));
        }

        let ext = file_ext(&file_name);
        if !ext.is_empty() {
            if let Some(found) = self.extensions.iter().find(|e| e.as_str() == ext) {
                return Some(format!("matched extension: {}", found));
            }
        }

        None
    }
}

/// Substring after the last '.' in a base name, including the dot.
/// Empty when the name has no dot.
fn file_ext(name: &str) -> &str {
    name.rfind('.').map(|i| &name[i..]).unwrap_or("")
}

/// Lexical path normalization: drops `.` components and resolves `..`
/// against the preceding component where possible.
fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !cleaned.pop() && !path.has_root() {
                    cleaned.push("..");
                }
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}
