use std::collections::BTreeMap;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// A legal concern a sentence can be tagged with.
///
/// Variant order is the order categories appear in every [`ClauseMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClauseCategory {
    Termination,
    Liability,
    Confidentiality,
}

impl ClauseCategory {
    pub const ALL: [ClauseCategory; 3] = [
        ClauseCategory::Termination,
        ClauseCategory::Liability,
        ClauseCategory::Confidentiality,
    ];
}

impl std::fmt::Display for ClauseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClauseCategory::Termination => write!(f, "termination"),
            ClauseCategory::Liability => write!(f, "liability"),
            ClauseCategory::Confidentiality => write!(f, "confidentiality"),
        }
    }
}

/// Category → matching sentences, in document order.
pub type ClauseMap = BTreeMap<ClauseCategory, Vec<String>>;

/// Entity label → entity texts.
///
/// Labels keep the order they first appear in the document, and texts keep
/// document order within each label. Serializes as a JSON object in that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityMap {
    groups: Vec<(String, Vec<String>)>,
}

impl EntityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` under `label`, opening a new group on first sight.
    pub fn push(&mut self, label: &str, text: &str) {
        match self.groups.iter_mut().find(|(l, _)| l == label) {
            Some((_, texts)) => texts.push(text.to_string()),
            None => self.groups.push((label.to_string(), vec![text.to_string()])),
        }
    }

    #[cfg(test)]
    pub fn get(&self, label: &str) -> Option<&Vec<String>> {
        self.groups.iter().find(|(l, _)| l == label).map(|(_, texts)| texts)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups.iter().map(|(l, texts)| (l.as_str(), texts.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Serialize for EntityMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (label, texts) in &self.groups {
            map.serialize_entry(label, texts)?;
        }
        map.end()
    }
}

/// `(term, count)` pairs, highest count first.
pub type RankedTermList = Vec<(String, usize)>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentStats {
    pub total_words: usize,
    pub sentences: usize,
    pub entities: EntityMap,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentInsights {
    pub summary: String,
    pub key_clauses: ClauseMap,
    pub document_stats: DocumentStats,
}

/// One analyzed input, as rendered by the reports.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub path: String,
    pub insights: DocumentInsights,
}

/// Clause tags for one input, as produced by `--clauses-only`.
#[derive(Debug, Clone, Serialize)]
pub struct ClauseReport {
    pub path: String,
    pub key_clauses: ClauseMap,
}

/// Everything a single run produces.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub documents: Vec<DocumentReport>,
    pub top_terms: RankedTermList,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_lowercase() {
        let mut map = ClauseMap::new();
        map.insert(ClauseCategory::Liability, vec!["x".to_string()]);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"liability":["x"]}"#);
    }

    #[test]
    fn test_category_order() {
        let mut map = ClauseMap::new();
        for category in ClauseCategory::ALL.iter().rev() {
            map.insert(*category, Vec::new());
        }
        let keys: Vec<_> = map.keys().map(|c| c.to_string()).collect();
        assert_eq!(keys, vec!["termination", "liability", "confidentiality"]);
    }

    #[test]
    fn test_entity_labels_keep_first_seen_order() {
        let mut entities = EntityMap::new();
        entities.push("ORG", "Acme");
        entities.push("DATE", "May 1");
        entities.push("ORG", "Globex");

        assert_eq!(entities.labels().collect::<Vec<_>>(), vec!["ORG", "DATE"]);
        assert_eq!(entities.get("ORG").unwrap(), &vec!["Acme", "Globex"]);
        assert_eq!(
            serde_json::to_string(&entities).unwrap(),
            r#"{"ORG":["Acme","Globex"],"DATE":["May 1"]}"#
        );
    }
}
