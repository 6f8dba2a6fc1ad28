use std::collections::BTreeSet;

/// Built-in legal vocabulary used when no config overrides it.
pub const LEGAL_TERMS: &[&str] = &[
    "liability",
    "indemnification",
    "termination",
    "warranty",
    "confidentiality",
    "arbitration",
    "jurisdiction",
    "force majeure",
];

/// Immutable set of lowercase legal terms.
///
/// Matching is substring containment, not whole-word: `"liability"` matches
/// both `"limitation of liability"` and `"the liability clause"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    terms: BTreeSet<String>,
}

impl Vocabulary {
    /// Build a vocabulary, lowercasing and trimming each entry. Blank entries are dropped.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    /// True when `candidate` contains at least one vocabulary entry, ignoring case.
    pub fn matches(&self, candidate: &str) -> bool {
        let lower = candidate.to_lowercase();
        self.terms.iter().any(|term| lower.contains(term.as_str()))
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(LEGAL_TERMS)
    }
}
