//! Directory traversal with an exclusion gate and result aggregation.
//!
//! Tree descent and exclusion decisions are always sequential so that the
//! skip-subtree decision is made before children are visited. File scanning
//! runs either inline or fanned out across rayon tasks whose task-local
//! buffers merge after the join; in both modes the aggregated outcome is
//! identical.

use crate::exclude::ExclusionPolicy;
use crate::matcher::LiteralMatcher;
use crate::scanner::FileScanner;
use crate::types::{MatchRecord, ScanOutcome};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// How admitted files are dispatched to the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    #[default]
    Sequential,
    Parallel,
}

pub struct TreeWalker<'a> {
    policy: &'a ExclusionPolicy,
    matcher: &'a LiteralMatcher,
    mode: ScanMode,
    track_blocks: bool,
}

impl<'a> TreeWalker<'a> {
    pub fn new(policy: &'a ExclusionPolicy, matcher: &'a LiteralMatcher) -> Self {
        Self {
            policy,
            matcher,
            mode: ScanMode::Sequential,
            track_blocks: false,
        }
    }

    pub fn with_mode(mut self, mode: ScanMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_track_blocks(mut self, track: bool) -> Self {
        self.track_blocks = track;
        self
    }

    /// Visit every root in sequence, applying the exclusion policy and
    /// scanning admitted files into one shared outcome. Traversal access
    /// errors and per-file read errors are logged and skipped; only the
    /// caller's output handling can abort a scan.
    pub fn walk(&self, roots: &[PathBuf]) -> ScanOutcome {
        let mut outcome = ScanOutcome::new();
        let mut admitted: Vec<PathBuf> = Vec::new();

        for root in roots {
            self.collect_root(root, &mut outcome, &mut admitted);
        }

        let scanner = FileScanner::new(self.matcher).with_track_blocks(self.track_blocks);

        match self.mode {
            ScanMode::Sequential => {
                for path in &admitted {
                    if let Some((file, records)) = scan_one(&scanner, path) {
                        outcome.add_file_matches(file, records);
                    }
                }
            }
            ScanMode::Parallel => {
                // collect() is the join barrier: reporting never races
                // with in-flight scans.
                let buffers: Vec<(String, Vec<MatchRecord>)> = admitted
                    .par_iter()
                    .filter_map(|path| scan_one(&scanner, path))
                    .collect();
                for (file, records) in buffers {
                    outcome.add_file_matches(file, records);
                }
            }
        }

        outcome
    }

    /// Depth-first pre-order descent under one root. Excluded directories
    /// record one exclusion and are never descended into; excluded files
    /// record one exclusion; everything else is admitted for scanning.
    fn collect_root(&self, root: &Path, outcome: &mut ScanOutcome, admitted: &mut Vec<PathBuf>) {
        // Sorted traversal keeps encounter order, and with it the report,
        // stable across runs over an unchanged tree.
        let mut entries = WalkDir::new(root).sort_by_file_name().into_iter();

        loop {
            let entry = match entries.next() {
                None => break,
                Some(Ok(entry)) => entry,
                Some(Err(e)) => {
                    warn!(error = %e, "Failed to access path during walk");
                    continue;
                }
            };
            let path = entry.path();

            if entry.file_type().is_dir() {
                if let Some(reason) = self.policy.classify(path, true) {
                    info!(path = %path.display(), reason = %reason, "Skipping directory");
                    outcome.record_exclusion(path.display().to_string(), reason);
                    entries.skip_current_dir();
                }
                continue;
            }

            if let Some(reason) = self.policy.classify(path, false) {
                info!(path = %path.display(), reason = %reason, "Skipping file");
                outcome.record_exclusion(path.display().to_string(), reason);
                continue;
            }

            admitted.push(path.to_path_buf());
        }
    }
}

fn scan_one(scanner: &FileScanner<'_>, path: &Path) -> Option<(String, Vec<MatchRecord>)> {
    match scanner.scan_file(path) {
        Ok(records) if !records.is_empty() => Some((path.display().to_string(), records)),
        Ok(_) => None,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to scan file");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exclude::ExclusionRules;
    use std::fs;
    use tempfile::TempDir;

    fn matcher(literals: &[&str], phrases: &[&str]) -> LiteralMatcher {
        let literals: Vec<String> = literals.iter().map(|s| s.to_string()).collect();
        let phrases: Vec<String> = phrases.iter().map(|s| s.to_string()).collect();
        LiteralMatcher::new(&literals, &phrases).unwrap()
    }

    fn policy(rules: ExclusionRules) -> ExclusionPolicy {
        ExclusionPolicy::new(&rules).unwrap()
    }

    fn fixture_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("flow.sas"), "proc sql;\nquit;\n").unwrap();
        fs::write(dir.path().join("notes.md"), "proc notes here\n").unwrap();

        let sub = dir.path().join("steps");
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("load.sas"), "data work.load;\nrun;\n").unwrap();

        let build = dir.path().join("build");
        fs::create_dir_all(&build).unwrap();
        fs::write(build.join("gen.sas"), "proc gen;\n").unwrap();

        dir
    }

    #[test]
    fn test_walk_matches_and_exclusions() {
        let dir = fixture_tree();
        let rules = ExclusionRules {
            file_patterns: vec![],
            extensions: vec![".md".to_string()],
            directories: vec![dir.path().join("build")],
        };
        let policy = policy(rules);
        let m = matcher(&["proc ", "data "], &[]);
        let walker = TreeWalker::new(&policy, &m);

        let outcome = walker.walk(&[dir.path().to_path_buf()]);

        assert_eq!(outcome.files_count(), 2);
        assert_eq!(outcome.total_matches(), 2);
        assert_eq!(outcome.exclusions().len(), 2);
    }

    #[test]
    fn test_walk_directory_exclusion_short_circuits() {
        let dir = fixture_tree();
        let rules = ExclusionRules {
            file_patterns: vec![],
            extensions: vec![],
            directories: vec![dir.path().join("build")],
        };
        let policy = policy(rules);
        let m = matcher(&["proc "], &[]);
        let walker = TreeWalker::new(&policy, &m);

        let outcome = walker.walk(&[dir.path().to_path_buf()]);

        // Only the directory itself is recorded; nothing beneath it shows
        // up as a match or as an individual exclusion.
        let build_path = dir.path().join("build").display().to_string();
        let gen_path = dir.path().join("build").join("gen.sas").display().to_string();
        assert!(outcome.exclusions().iter().any(|r| r.path == build_path));
        assert!(!outcome.exclusions().iter().any(|r| r.path == gen_path));
        assert!(outcome.matches_for(&gen_path).is_empty());
    }

    #[test]
    fn test_walk_multiple_roots_share_one_outcome() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::write(first.path().join("a.sas"), "proc a;\n").unwrap();
        fs::write(second.path().join("b.sas"), "proc b;\n").unwrap();

        let policy = policy(ExclusionRules::default());
        let m = matcher(&["proc "], &[]);
        let walker = TreeWalker::new(&policy, &m);

        let outcome = walker.walk(&[first.path().to_path_buf(), second.path().to_path_buf()]);
        assert_eq!(outcome.files_count(), 2);
    }

    #[test]
    fn test_walk_unreadable_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("good.sas"), "proc good;\n").unwrap();
        fs::write(dir.path().join("blob.bin"), [0xff, 0xfe, 0x00]).unwrap();

        let policy = policy(ExclusionRules::default());
        let m = matcher(&["proc "], &[]);
        let walker = TreeWalker::new(&policy, &m);

        let outcome = walker.walk(&[dir.path().to_path_buf()]);
        assert_eq!(outcome.files_count(), 1);
        assert!(outcome.exclusions().is_empty());
    }

    #[test]
    fn test_walk_nonexistent_root_continues() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.sas"), "proc a;\n").unwrap();

        let policy = policy(ExclusionRules::default());
        let m = matcher(&["proc "], &[]);
        let walker = TreeWalker::new(&policy, &m);

        let outcome = walker.walk(&[PathBuf::from("/nonexistent/root"), dir.path().to_path_buf()]);
        assert_eq!(outcome.files_count(), 1);
    }

    #[test]
    fn test_parallel_mode_equals_sequential() {
        let dir = fixture_tree();
        let rules = ExclusionRules {
            file_patterns: vec![],
            extensions: vec![".md".to_string()],
            directories: vec![dir.path().join("build")],
        };
        let policy = policy(rules);
        let m = matcher(&["proc ", "data "], &["in a data set"]);

        let sequential = TreeWalker::new(&policy, &m).walk(&[dir.path().to_path_buf()]);
        let parallel = TreeWalker::new(&policy, &m)
            .with_mode(ScanMode::Parallel)
            .walk(&[dir.path().to_path_buf()]);

        assert_eq!(sequential.total_matches(), parallel.total_matches());
        assert_eq!(sequential.sorted_files(), parallel.sorted_files());
        for file in sequential.sorted_files() {
            assert_eq!(sequential.matches_for(file), parallel.matches_for(file));
        }
        assert_eq!(sequential.exclusions(), parallel.exclusions());
    }
}
