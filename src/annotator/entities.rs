use regex::Regex;

use super::{Entity, Span};

/// Regex-driven named-entity recognizer.
///
/// Recognizers run in declaration order; a later match that overlaps an
/// already accepted entity is dropped. When a pattern has a capture group,
/// group 1 is the entity text.
pub struct EntityRecognizer {
    recognizers: Vec<(&'static str, Regex)>,
}

impl EntityRecognizer {
    pub fn new() -> Result<Self, regex::Error> {
        let month = r"(?:January|February|March|April|May|June|July|August|September|October|November|December)";
        let units = r"(?:business\s+|calendar\s+)?(?:days?|weeks?|months?|years?)";
        let number_word = r"(?:one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve|fifteen|twenty|thirty|sixty|ninety)";

        let patterns: Vec<(&'static str, String)> = vec![
            (
                "MONEY",
                r"(?:\$|USD\s?|€|£)\s?\d[\d,]*(?:\.\d+)?(?:\s(?:thousand|million|billion))?|\b\d[\d,]*(?:\.\d+)?\s(?:dollars|USD|euros)\b".to_string(),
            ),
            ("PERCENT", r"\b\d+(?:\.\d+)?(?:\s?%|\s?percent\b)".to_string()),
            (
                "DATE",
                format!(r"\b{month}\s+\d{{1,2}},?\s+\d{{4}}\b|\b\d{{1,2}}/\d{{1,2}}/\d{{2,4}}\b|\b\d{{4}}-\d{{2}}-\d{{2}}\b"),
            ),
            (
                "DATE",
                format!(r"(?i)\b(?:\d+|{number_word})\s+(?:\(\d+\)\s+)?{units}\b"),
            ),
            (
                "ORG",
                r"\b(?:The\s+)?((?:[A-Z][A-Za-z&'\-]*\s+)+(?:Inc|LLC|LLP|Ltd|Corp|Corporation|GmbH|PLC)\b\.?)".to_string(),
            ),
            ("CARDINAL", r"\b\d[\d,]*(?:\.\d+)?\b".to_string()),
        ];

        let recognizers = patterns
            .into_iter()
            .map(|(label, pattern)| Ok((label, Regex::new(&pattern)?)))
            .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self { recognizers })
    }

    /// Recognize entities in `text`, returned in document order.
    pub fn recognize(&self, text: &str) -> Vec<Entity> {
        let mut accepted: Vec<Entity> = Vec::new();

        for (label, regex) in &self.recognizers {
            for caps in regex.captures_iter(text) {
                let Some(m) = caps.get(1).or_else(|| caps.get(0)) else {
                    continue;
                };
                let overlaps = accepted
                    .iter()
                    .any(|e| m.start() < e.span.end && e.span.start < m.end());
                if overlaps {
                    continue;
                }
                let text = m.as_str().trim_end();
                accepted.push(Entity {
                    span: Span::new(text, m.start(), m.start() + text.len()),
                    label: label.to_string(),
                });
            }
        }

        accepted.sort_by_key(|e| e.span.start);
        accepted
    }
}
