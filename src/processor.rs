use std::sync::Arc;

use crate::annotator::rule_based::RuleBasedAnnotator;
use crate::annotator::Annotator;
use crate::clause::extractor;
use crate::clause::patterns::PatternMatcher;
use crate::config::{Config, SummaryConfig};
use crate::error::Result;
use crate::insights;
use crate::models::{ClauseMap, DocumentInsights, RankedTermList};
use crate::terms::frequency;
use crate::terms::vocabulary::Vocabulary;

/// Entry point for callers: owns the shared annotator, vocabulary and patterns.
///
/// Built once per process. The annotator is shared read-only with every
/// term-extraction worker.
pub struct LegalDocumentProcessor {
    annotator: Arc<dyn Annotator>,
    vocabulary: Arc<Vocabulary>,
    matcher: PatternMatcher,
    summary: SummaryConfig,
    workers: usize,
}

impl LegalDocumentProcessor {
    pub fn new(
        annotator: Arc<dyn Annotator>,
        vocabulary: Vocabulary,
        summary: SummaryConfig,
        workers: usize,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            annotator,
            vocabulary: Arc::new(vocabulary),
            matcher: PatternMatcher::new()?,
            summary,
            workers,
        })
    }

    /// Processor backed by the built-in [`RuleBasedAnnotator`].
    pub fn from_config(config: &Config) -> Result<Self, regex::Error> {
        Self::new(
            Arc::new(RuleBasedAnnotator::new()?),
            config.vocabulary.to_vocabulary(),
            config.summary.clone(),
            config.analysis.worker_count(),
        )
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn extract_clauses(&self, document: &str) -> Result<ClauseMap> {
        extractor::extract_clauses(self.annotator.as_ref(), &self.matcher, document)
    }

    pub async fn analyze_term_frequency(
        &self,
        documents: &[String],
        top_n: usize,
    ) -> Result<RankedTermList> {
        frequency::analyze_term_frequency(
            Arc::clone(&self.annotator),
            Arc::clone(&self.vocabulary),
            documents,
            top_n,
            self.workers,
        )
        .await
    }

    pub fn get_document_insights(&self, document: &str) -> Result<DocumentInsights> {
        insights::get_document_insights(
            self.annotator.as_ref(),
            &self.matcher,
            &self.summary,
            document,
        )
    }
}
