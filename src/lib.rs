pub mod cli;
pub mod config;
pub mod error;
pub mod exclude;
pub mod matcher;
pub mod report;
pub mod scanner;
pub mod strip;
pub mod types;
pub mod walker;

pub use cli::{Cli, OutputFormat};
pub use config::ScanConfig;
pub use error::{Result, ScanError};
pub use exclude::{ExclusionPolicy, ExclusionRules};
pub use matcher::LiteralMatcher;
pub use report::{CsvReporter, Reporter, TextReporter};
pub use scanner::FileScanner;
pub use types::{ExclusionRecord, MatchRecord, ScanOutcome};
pub use walker::{ScanMode, TreeWalker};
