//! Legal-term frequency across a corpus.
//!
//! - [`vocabulary`]: the fixed set of legal stems candidate terms are filtered by.
//! - [`frequency`]: per-document noun-chunk extraction fanned out over a
//!   bounded pool of blocking workers, then merged and ranked.

pub mod frequency;
pub mod vocabulary;
