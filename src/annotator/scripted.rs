//! Deterministic annotator for tests.
//!
//! Markup conventions:
//! - one sentence per line (blank lines ignored);
//! - `[...]` marks a noun chunk, the bracketed text is the chunk;
//! - `{LABEL:text}` marks an entity;
//! - tokens are whitespace-separated words;
//! - a document containing `FAIL` is rejected, one containing `PANIC` panics.

use regex::Regex;

use super::{AnnotatedDoc, Annotator, Entity, Span};
use crate::error::AnnotatorError;

/// Three-clause agreement shared by the rule-based annotator tests.
pub const SAMPLE_CONTRACT: &str = "This Agreement may be terminated by either party upon 30 days written notice. \
    The Company shall not be liable for any indirect damages. \
    All confidential information shall be kept strictly confidential for a period of 5 years.";

pub struct ScriptedAnnotator {
    chunk: Regex,
    entity: Regex,
}

impl ScriptedAnnotator {
    pub fn new() -> Self {
        Self {
            chunk: Regex::new(r"\[([^\]]+)\]").unwrap(),
            entity: Regex::new(r"\{([A-Z_]+):([^}]+)\}").unwrap(),
        }
    }
}

impl Annotator for ScriptedAnnotator {
    fn annotate(&self, text: &str) -> Result<AnnotatedDoc, AnnotatorError> {
        if text.contains("PANIC") {
            panic!("scripted annotator asked to panic");
        }
        if text.contains("FAIL") {
            return Err(AnnotatorError::Malformed("scripted failure".to_string()));
        }

        let mut doc = AnnotatedDoc {
            token_count: text.split_whitespace().count(),
            ..AnnotatedDoc::default()
        };

        let mut offset = 0;
        for line in text.split_inclusive('\n') {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                let start = offset + (line.len() - line.trim_start().len());
                doc.sentences
                    .push(Span::new(trimmed, start, start + trimmed.len()));
            }
            offset += line.len();
        }

        for caps in self.chunk.captures_iter(text) {
            if let Some(m) = caps.get(1) {
                doc.noun_chunks.push(Span::new(m.as_str(), m.start(), m.end()));
            }
        }

        for caps in self.entity.captures_iter(text) {
            if let (Some(label), Some(m)) = (caps.get(1), caps.get(2)) {
                doc.entities.push(Entity {
                    span: Span::new(m.as_str(), m.start(), m.end()),
                    label: label.as_str().to_string(),
                });
            }
        }

        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_is_parsed() {
        let doc = ScriptedAnnotator::new()
            .annotate("See the [liability cap].\n\n{ORG:Acme} pays [fees].")
            .unwrap();
        assert_eq!(doc.sentences.len(), 2);
        assert_eq!(doc.sentences[1].text, "{ORG:Acme} pays [fees].");
        assert_eq!(doc.noun_chunks.len(), 2);
        assert!(doc.sentences[1].contains(&doc.noun_chunks[1]));
        assert_eq!(doc.entities[0].label, "ORG");
        assert_eq!(doc.token_count, 7);
    }
}
