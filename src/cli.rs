use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
}

#[derive(Parser, Debug)]
#[command(
    name = "litscan",
    version,
    about = "Repository-wide string literal scanner",
    long_about = "litscan walks one or more source trees, strips comments from each line, and \
reports whole-word occurrences of configured marker literals, suppressing lines that contain \
known false-positive phrases."
)]
pub struct Cli {
    /// Root directories to scan
    #[arg(required = true)]
    pub roots: Vec<PathBuf>,

    /// Report destination file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// YAML config file with literals, exclusion phrases, and exclusion rules
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Scan admitted files in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Track block comments across lines instead of per-line stripping
    #[arg(long)]
    pub track_block_comments: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
