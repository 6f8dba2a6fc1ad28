//! `legal-insights`: tag contract clauses, rank legal terms, and summarize documents.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`config::load_config`]) and apply CLI overrides.
//! 3. Build the [`processor::LegalDocumentProcessor`] (annotator, vocabulary, clause patterns).
//! 4. Compute per-document insights ([`insights`], [`clause`]).
//! 5. Rank legal terms across the whole corpus on parallel workers ([`terms`]).
//! 6. Render the requested report ([`report`]).
//!
//! Without input files the tool runs on a built-in sample agreement, using
//! three copies of it as the term-frequency corpus.

mod annotator;
mod cli;
mod clause;
mod config;
mod error;
mod insights;
mod models;
mod processor;
mod report;
mod terms;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cli::{Cli, ReportFormat};
use config::load_config;
use models::{AnalysisReport, ClauseReport, DocumentReport};
use processor::LegalDocumentProcessor;

const SAMPLE_AGREEMENT: &str = "
    This Agreement may be terminated by either party upon 30 days written notice.
    The Company shall not be liable for any indirect, special, or consequential damages.
    All confidential information shall be kept strictly confidential for a period of 5 years.
    ";

const SAMPLE_COPIES: usize = 3;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir()?;
    let mut config = load_config(&cwd, cli.config.as_deref())?;
    if let Some(top_n) = cli.top_n {
        config.analysis.top_n = top_n;
    }
    if let Some(workers) = cli.workers {
        config.analysis.workers = workers;
    }

    let processor = LegalDocumentProcessor::from_config(&config)?;
    info!(
        vocabulary = ?processor.vocabulary().terms().collect::<Vec<_>>(),
        workers = config.analysis.worker_count(),
        "processor ready"
    );
    if processor.vocabulary().is_empty() {
        warn!("vocabulary is empty; no legal terms will be ranked");
    }

    let (documents, corpus) = load_documents(&cli.files)?;

    if !cli.quiet {
        eprintln!(
            "  {} {} documents, {} in term corpus",
            "→".cyan(),
            documents.len(),
            corpus.len()
        );
    }

    if cli.clauses_only {
        let mut clause_reports = Vec::with_capacity(documents.len());
        for (path, text) in &documents {
            let key_clauses = processor
                .extract_clauses(text)
                .with_context(|| format!("tagging clauses in {}", path))?;
            clause_reports.push(ClauseReport {
                path: path.clone(),
                key_clauses,
            });
        }

        match cli.report {
            ReportFormat::Terminal => report::terminal::render_clauses(&clause_reports, cli.quiet),
            ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&clause_reports)?),
        }
        return Ok(());
    }

    let pb = if !cli.quiet {
        let pb = ProgressBar::new(documents.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut reports = Vec::with_capacity(documents.len());
    for (path, text) in &documents {
        let insights = processor
            .get_document_insights(text)
            .with_context(|| format!("analyzing {}", path))?;
        reports.push(DocumentReport {
            path: path.clone(),
            insights,
        });
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    let top_terms = processor
        .analyze_term_frequency(&corpus, config.analysis.top_n)
        .await
        .context("ranking legal terms")?;

    let report = AnalysisReport {
        documents: reports,
        top_terms,
    };

    match cli.report {
        ReportFormat::Terminal => {
            report::terminal::render(&report, cli.verbose, cli.quiet)?;
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// `(label, text)` pairs for per-document insights, plus the term-frequency corpus.
fn load_documents(files: &[PathBuf]) -> Result<(Vec<(String, String)>, Vec<String>)> {
    if files.is_empty() {
        let documents = vec![("<sample agreement>".to_string(), SAMPLE_AGREEMENT.to_string())];
        let corpus = vec![SAMPLE_AGREEMENT.to_string(); SAMPLE_COPIES];
        return Ok((documents, corpus));
    }

    let mut documents = Vec::with_capacity(files.len());
    for path in files {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        documents.push((path.display().to_string(), text));
    }
    let corpus = documents.iter().map(|(_, text)| text.clone()).collect();

    Ok((documents, corpus))
}
