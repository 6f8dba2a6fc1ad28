use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::terms::vocabulary::{Vocabulary, LEGAL_TERMS};

/// Root configuration structure, deserialized from `.legal-insights/config.toml`.
///
/// Every section is optional; missing fields fall back to the built-in defaults.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Legal terms used to filter noun chunks.
    pub vocabulary: VocabularyConfig,
    /// Term-frequency settings.
    pub analysis: AnalysisConfig,
    /// Summary heuristic settings.
    pub summary: SummaryConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Substrings a noun chunk must contain to count as a legal term.
    pub terms: Vec<String>,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            terms: LEGAL_TERMS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl VocabularyConfig {
    pub fn to_vocabulary(&self) -> Vocabulary {
        Vocabulary::new(&self.terms)
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of ranked terms to report.
    pub top_n: usize,
    /// Concurrent extraction workers. `0` means one per available CPU.
    pub workers: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            workers: 0,
        }
    }
}

impl AnalysisConfig {
    /// Effective worker count, resolving `0` to the host's available parallelism.
    pub fn worker_count(&self) -> usize {
        if self.workers > 0 {
            return self.workers;
        }
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SummaryConfig {
    /// A sentence needs strictly more noun chunks than this to be summarized.
    pub min_noun_chunks: usize,
    /// Maximum number of sentences in a summary.
    pub max_sentences: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            min_noun_chunks: 3,
            max_sentences: 3,
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override`, the path passed via `--config`
/// 2. `<base_dir>/.legal-insights/config.toml`
/// 3. `~/.config/legal-insights/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(base_dir: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = base_dir.join(".legal-insights").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("legal-insights")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
}
