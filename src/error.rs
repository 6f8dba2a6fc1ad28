use thiserror::Error;

/// Failures raised by a [`crate::annotator::Annotator`].
///
/// Annotation is deterministic for a given input, so none of these are retried.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnnotatorError {
    #[error("malformed input: {0}")]
    Malformed(String),
}

/// Failures surfaced by the analysis entry points.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Annotator(#[from] AnnotatorError),

    /// A term-extraction worker for document `index` did not complete.
    #[error("worker for document {index} failed: {reason}")]
    Worker { index: usize, reason: String },
}

pub type Result<T, E = AnalysisError> = std::result::Result<T, E>;
