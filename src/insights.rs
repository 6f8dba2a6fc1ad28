use tracing::debug;

use crate::annotator::{AnnotatedDoc, Annotator};
use crate::clause::extractor::extract_clauses;
use crate::clause::patterns::PatternMatcher;
use crate::config::SummaryConfig;
use crate::error::Result;
use crate::models::{DocumentInsights, DocumentStats, EntityMap};

/// Build the per-document report: summary, key clauses and basic statistics.
///
/// The document is annotated once for the summary and statistics; clause
/// extraction annotates it again on its own.
pub fn get_document_insights(
    annotator: &dyn Annotator,
    matcher: &PatternMatcher,
    summary: &SummaryConfig,
    document: &str,
) -> Result<DocumentInsights> {
    let doc = annotator.annotate(document)?;

    let insights = DocumentInsights {
        summary: generate_summary(&doc, summary),
        key_clauses: extract_clauses(annotator, matcher, document)?,
        document_stats: DocumentStats {
            total_words: doc.token_count,
            sentences: doc.sentences.len(),
            entities: group_entities(&doc),
        },
    };

    debug!(
        words = insights.document_stats.total_words,
        sentences = insights.document_stats.sentences,
        entity_labels = ?insights.document_stats.entities.labels().collect::<Vec<_>>(),
        "document insights ready"
    );

    Ok(insights)
}

/// Join the first few noun-dense sentences with single spaces.
///
/// A sentence qualifies when it holds strictly more than
/// `min_noun_chunks` noun chunks.
fn generate_summary(doc: &AnnotatedDoc, config: &SummaryConfig) -> String {
    doc.sentences
        .iter()
        .filter(|sentence| doc.chunks_in(sentence).count() > config.min_noun_chunks)
        .take(config.max_sentences)
        .map(|sentence| sentence.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn group_entities(doc: &AnnotatedDoc) -> EntityMap {
    let mut entities = EntityMap::new();
    for entity in &doc.entities {
        entities.push(&entity.label, &entity.span.text);
    }
    entities
}
