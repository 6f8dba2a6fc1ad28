use std::collections::HashMap;
use std::sync::Arc;

use futures::future::try_join_all;
use tokio::sync::Semaphore;
use tokio::task::JoinError;
use tracing::{debug, info};

use super::vocabulary::Vocabulary;
use crate::annotator::Annotator;
use crate::error::{AnalysisError, Result};
use crate::models::RankedTermList;

/// Lowercased noun chunks of `document` that contain a vocabulary entry.
///
/// Pure function of one document; this is the unit of work each worker runs.
pub fn extract_terms(
    annotator: &dyn Annotator,
    vocabulary: &Vocabulary,
    document: &str,
) -> Result<Vec<String>> {
    let doc = annotator.annotate(document)?;

    Ok(doc
        .noun_chunks
        .iter()
        .map(|chunk| chunk.text.to_lowercase())
        .filter(|text| vocabulary.matches(text))
        .collect())
}

/// Rank the most frequent legal terms across `documents`.
///
/// Each document is extracted on its own blocking worker, at most `workers`
/// at a time. Results are joined in document order. The first failing
/// document fails the whole batch and every other result is discarded.
///
/// Ties in count are broken by term so output is stable across runs.
pub async fn analyze_term_frequency(
    annotator: Arc<dyn Annotator>,
    vocabulary: Arc<Vocabulary>,
    documents: &[String],
    top_n: usize,
    workers: usize,
) -> Result<RankedTermList> {
    if documents.is_empty() {
        return Ok(Vec::new());
    }

    let permits = Arc::new(Semaphore::new(workers.max(1)));
    info!(documents = documents.len(), workers = workers.max(1), "extracting terms");

    let tasks = documents.iter().cloned().enumerate().map(|(index, document)| {
        run_worker(
            index,
            document,
            Arc::clone(&annotator),
            Arc::clone(&vocabulary),
            Arc::clone(&permits),
        )
    });

    let per_document = try_join_all(tasks).await?;

    let counts = aggregate(per_document, &vocabulary);
    info!(distinct_terms = counts.len(), "aggregated term counts");

    Ok(rank(counts, top_n))
}

/// One unit of work: wait for a permit, then extract on the blocking pool.
async fn run_worker(
    index: usize,
    document: String,
    annotator: Arc<dyn Annotator>,
    vocabulary: Arc<Vocabulary>,
    permits: Arc<Semaphore>,
) -> Result<Vec<String>> {
    let _permit = permits
        .acquire_owned()
        .await
        .map_err(|e| AnalysisError::Worker {
            index,
            reason: e.to_string(),
        })?;

    let handle = tokio::task::spawn_blocking(move || {
        extract_terms(annotator.as_ref(), &vocabulary, &document)
    });

    match handle.await {
        Ok(Ok(terms)) => {
            debug!(index, terms = terms.len(), "worker finished");
            Ok(terms)
        }
        Ok(Err(e)) => Err(AnalysisError::Worker {
            index,
            reason: e.to_string(),
        }),
        Err(e) => Err(AnalysisError::Worker {
            index,
            reason: join_failure(e),
        }),
    }
}

fn join_failure(err: JoinError) -> String {
    if !err.is_panic() {
        return err.to_string();
    }
    let payload = err.into_panic();
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("panicked: {msg}")
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("panicked: {msg}")
    } else {
        "panicked".to_string()
    }
}

/// Count each exact term across all per-document lists.
///
/// Terms are filtered by the vocabulary again here. With a single vocabulary
/// this second pass never removes anything.
pub fn aggregate(per_document: Vec<Vec<String>>, vocabulary: &Vocabulary) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for term in per_document.into_iter().flatten() {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts.retain(|term, _| vocabulary.matches(term));
    counts
}

/// Highest count first, then term ascending; at most `top_n` entries.
pub fn rank(counts: HashMap<String, usize>, top_n: usize) -> RankedTermList {
    let mut pairs: Vec<(String, usize)> = counts.into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    pairs.truncate(top_n);
    pairs
}
