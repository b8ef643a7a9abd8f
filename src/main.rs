use clap::Parser;
use colored::Colorize;
use litscan::{
    Cli, CsvReporter, ExclusionPolicy, LiteralMatcher, OutputFormat, Reporter, ScanConfig,
    ScanError, ScanMode, TextReporter, TreeWalker,
};
use std::fs;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> litscan::Result<()> {
    let config = match &cli.config {
        Some(path) => ScanConfig::load(path)?,
        None => ScanConfig::default_rules(),
    };

    let policy = ExclusionPolicy::new(&config.exclude)?;
    let matcher = LiteralMatcher::new(&config.literals, &config.exclude_phrases)?;

    let mode = if cli.parallel {
        ScanMode::Parallel
    } else {
        ScanMode::Sequential
    };
    let walker = TreeWalker::new(&policy, &matcher)
        .with_mode(mode)
        .with_track_blocks(cli.track_block_comments);

    let outcome = walker.walk(&cli.roots);

    let reporter: Box<dyn Reporter> = match cli.format {
        OutputFormat::Text => Box::new(TextReporter::new()),
        OutputFormat::Csv => Box::new(CsvReporter::new()),
    };
    let report = reporter.report(&outcome);

    fs::write(&cli.output, report).map_err(|e| ScanError::Output {
        path: cli.output.display().to_string(),
        source: e,
    })?;

    println!(
        "{} {} match(es) across {} file(s), {} path(s) excluded, report written to {}",
        "done:".green().bold(),
        outcome.total_matches(),
        outcome.files_count(),
        outcome.exclusions().len(),
        cli.output.display()
    );

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("litscan=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("litscan=info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
