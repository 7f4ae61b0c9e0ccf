use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rank_guard::{analyze_with, AnalysisReport, ScoringConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "rank-guard",
    about = "Score drafts against editorial-quality heuristics",
    version
)]
struct Cli {
    /// File paths to analyze (reads stdin if none provided)
    files: Vec<PathBuf>,

    /// Target keyword or phrase for the relevance checks
    #[arg(short, long, default_value = "")]
    keyword: String,

    /// JSON file overriding the default scoring configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print each report on a single line
    #[arg(long)]
    compact: bool,

    /// Log scoring decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => ScoringConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ScoringConfig::default(),
    };

    if cli.files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("reading stdin")?;
        emit(&analyze_with(&config, &input, &cli.keyword), cli.compact)?;
    } else {
        for path in &cli.files {
            let text = std::fs::read_to_string(path).map_err(|source| rank_guard::Error::Io {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), "analyzing");
            emit(&analyze_with(&config, &text, &cli.keyword), cli.compact)?;
        }
    }
    Ok(())
}

fn emit(report: &AnalysisReport, compact: bool) -> anyhow::Result<()> {
    for (section, result) in &report.sections {
        tracing::info!(
            section = section.title(),
            score = result.score,
            percent = result.percent(),
            "section summary"
        );
    }
    let json = if compact {
        serde_json::to_string(report)?
    } else {
        serde_json::to_string_pretty(report)?
    };
    println!("{json}");
    Ok(())
}
