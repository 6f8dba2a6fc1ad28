//! Sentence-level clause tagging.
//!
//! - [`patterns`]: the fixed category → regex table and the match test.
//! - [`extractor`]: segments a document and files each sentence under every
//!   category it matches.

pub mod extractor;
pub mod patterns;
