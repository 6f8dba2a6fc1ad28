use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "legal-insights",
    about = "Classify contract clauses, rank legal terms, and summarize legal documents",
    version
)]
pub struct Cli {
    /// Documents to analyze (UTF-8 text); runs on a built-in sample agreement when omitted
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Config file [default: ./.legal-insights/config.toml, fallback ~/.config/legal-insights/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Number of top legal terms to report (overrides config)
    #[arg(long, value_name = "N")]
    pub top_n: Option<usize>,

    /// Parallel term-extraction workers; 0 = one per CPU (overrides config)
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,

    /// Only tag clauses; skip summaries, statistics and term ranking
    #[arg(long)]
    pub clauses_only: bool,

    /// Include document summaries and enable info-level logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
