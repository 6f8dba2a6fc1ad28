use regex::Regex;

use crate::models::ClauseCategory;

/// Keyword stem for a category, followed by up to 200 characters of context.
///
/// Only match / no-match is consulted; the context window is never read.
fn pattern_for(category: ClauseCategory) -> &'static str {
    match category {
        ClauseCategory::Termination => r"(?i)(terminat(e|ion)|cancel(lation)?).{0,200}",
        ClauseCategory::Liability => r"(?i)(liab(le|ility)|indemnif(y|ication)).{0,200}",
        ClauseCategory::Confidentiality => {
            r"(?i)(confidential(ity)?|non-disclosure).{0,200}"
        }
    }
}

/// Compiled clause patterns, one per [`ClauseCategory`].
///
/// Built once and never mutated, so it can be shared freely.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    patterns: Vec<(ClauseCategory, Regex)>,
}

impl PatternMatcher {
    pub fn new() -> Result<Self, regex::Error> {
        let patterns = ClauseCategory::ALL
            .iter()
            .map(|&category| Ok((category, Regex::new(pattern_for(category))?)))
            .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self { patterns })
    }

    /// Does `sentence` match the pattern for `category`?
    pub fn matches(&self, category: ClauseCategory, sentence: &str) -> bool {
        self.patterns
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(false, |(_, re)| re.is_match(sentence))
    }
}
