//! Report renderers for analysis results.
//!
//! - [`terminal`]: colored per-document boxes, clause / entity / term tables;
//!   respects `--verbose` / `--quiet`.
//!
//! JSON output is a direct `serde_json` dump of [`crate::models::AnalysisReport`].

pub mod terminal;
