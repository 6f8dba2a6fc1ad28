//! Linguistic annotation consumed by the analysis pipeline.
//!
//! - [`Annotator`]: text in, sentences / tokens / noun chunks / entities out.
//! - [`rule_based`]: in-process production adapter built on Unicode word
//!   boundaries, a closed-class lexicon and regex entity recognizers.
//! - `scripted` (tests only): deterministic canned annotations.

use crate::error::AnnotatorError;

pub mod entities;
pub mod lexicon;
pub mod rule_based;
#[cfg(test)]
pub mod scripted;

/// A byte range of the source text together with its (trimmed) text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    /// True when `other` lies entirely within this span.
    pub fn contains(&self, other: &Span) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub span: Span,
    /// Category label, e.g. `DATE`, `ORG`, `MONEY`.
    pub label: String,
}

/// Annotations for one document. All sequences are in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedDoc {
    pub sentences: Vec<Span>,
    pub token_count: usize,
    pub noun_chunks: Vec<Span>,
    pub entities: Vec<Entity>,
}

impl AnnotatedDoc {
    /// Noun chunks that fall inside `sentence`.
    pub fn chunks_in<'a>(&'a self, sentence: &'a Span) -> impl Iterator<Item = &'a Span> + 'a {
        self.noun_chunks.iter().filter(move |c| sentence.contains(c))
    }
}

/// Anything that can segment and annotate raw text.
///
/// Implementations are shared read-only across term-extraction workers, so
/// they must not rely on interior mutable state.
pub trait Annotator: Send + Sync {
    fn annotate(&self, text: &str) -> Result<AnnotatedDoc, AnnotatorError>;
}
