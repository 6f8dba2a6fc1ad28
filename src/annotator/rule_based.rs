use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

use super::entities::EntityRecognizer;
use super::lexicon::{tag_word, PosTag, ABBREVIATIONS};
use super::{AnnotatedDoc, Annotator, Span};
use crate::error::AnnotatorError;

/// Byte range of one token in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Token {
    start: usize,
    end: usize,
}

impl Token {
    fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// In-process annotator driven by Unicode word boundaries and lexical rules.
///
/// Tokens are UAX #29 word segments with whitespace dropped, so punctuation
/// counts as its own token. Hyphenated compounds ("non-disclosure") are
/// counted as three tokens but tagged and chunked as one word.
pub struct RuleBasedAnnotator {
    abbreviations: HashSet<&'static str>,
    entities: EntityRecognizer,
}

impl RuleBasedAnnotator {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            abbreviations: ABBREVIATIONS.iter().copied().collect(),
            entities: EntityRecognizer::new()?,
        })
    }

    fn tokenize(text: &str) -> Vec<Token> {
        text.split_word_bound_indices()
            .filter(|(_, segment)| !segment.trim().is_empty())
            .map(|(start, segment)| Token {
                start,
                end: start + segment.len(),
            })
            .collect()
    }

    /// Split tokens into sentences, returned as token index ranges.
    fn segment(&self, text: &str, tokens: &[Token]) -> Vec<std::ops::Range<usize>> {
        let mut sentences = Vec::new();
        let mut start: Option<usize> = None;
        let mut i = 0;

        while i < tokens.len() {
            if let Some(s) = start {
                if is_paragraph_break(&text[tokens[i - 1].end..tokens[i].start]) {
                    sentences.push(s..i);
                    start = None;
                }
            }
            if start.is_none() {
                start = Some(i);
            }

            if self.ends_sentence(text, tokens, i) {
                let mut end = i + 1;
                // Absorb "?!", ellipses and closing quotes / brackets
                while end < tokens.len() && is_sentence_trailer(tokens[end].text(text)) {
                    end += 1;
                }
                if let Some(s) = start.take() {
                    sentences.push(s..end);
                }
                i = end;
                continue;
            }
            i += 1;
        }

        if let Some(s) = start {
            sentences.push(s..tokens.len());
        }
        sentences
    }

    fn ends_sentence(&self, text: &str, tokens: &[Token], i: usize) -> bool {
        match tokens[i].text(text) {
            "!" | "?" => true,
            "." => {
                let Some(prev) = i.checked_sub(1).map(|p| tokens[p]) else {
                    return true;
                };
                // "Inc." / "e.g." only count when glued to the word before
                if prev.end != tokens[i].start {
                    return true;
                }
                let word = prev.text(text);
                if self.abbreviations.contains(word.to_lowercase().as_str()) {
                    return false;
                }
                !(is_initial(text, tokens, i - 1) && continues_name(text, tokens, i))
            }
            _ => false,
        }
    }
}

/// A lone capital letter glued to the period after it.
fn is_initial(text: &str, tokens: &[Token], at: usize) -> bool {
    let word = tokens[at].text(text);
    word.chars().count() == 1
        && word.chars().all(char::is_uppercase)
        && tokens
            .get(at + 1)
            .map_or(false, |dot| dot.text(text) == "." && dot.start == tokens[at].end)
}

/// Whether the text around the initial ending at `dot` reads as one name.
///
/// "J. R. Smith" and "B. of" continue; "Party B. Either" starts a new sentence.
fn continues_name(text: &str, tokens: &[Token], dot: usize) -> bool {
    let follows_initial = dot >= 3 && is_initial(text, tokens, dot - 3);
    let Some(next) = tokens.get(dot + 1) else {
        return false;
    };
    let next_word = next.text(text);
    follows_initial
        || next_word.chars().next().map_or(false, char::is_lowercase)
        || is_initial(text, tokens, dot + 1)
}

fn is_paragraph_break(gap: &str) -> bool {
    gap.matches('\n').count() >= 2
}

fn is_sentence_trailer(token: &str) -> bool {
    matches!(
        token,
        "." | "!" | "?" | "\"" | "'" | ")" | "]" | "\u{201d}" | "\u{2019}"
    )
}

fn is_wordlike(token: &str) -> bool {
    token.chars().any(char::is_alphanumeric)
}

/// Join `word - word` sequences written without spaces into a single span.
fn merge_hyphenated(text: &str, tokens: &[Token]) -> Vec<Token> {
    let mut words: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i];
        let joinable = token.text(text) == "-"
            && i + 1 < tokens.len()
            && tokens[i + 1].start == token.end
            && is_wordlike(tokens[i + 1].text(text));

        let glue = joinable
            && words
                .last()
                .map_or(false, |last| last.end == token.start && is_wordlike(last.text(text)));

        match words.last_mut() {
            Some(last) if glue => {
                last.end = tokens[i + 1].end;
                i += 2;
            }
            _ => {
                words.push(token);
                i += 1;
            }
        }
    }
    words
}

/// Noun chunks of one tagged sentence: `(DET)? (ADJ|NUM)* (NOUN|PROPN)+`.
fn chunk_sentence(text: &str, words: &[Token], tags: &[PosTag]) -> Vec<Span> {
    let mut chunks = Vec::new();
    let mut i = 0;

    while i < words.len() {
        let mut end = i;
        if tags[end] == PosTag::Determiner {
            end += 1;
        }
        while end < words.len() && tags[end].is_modifier() {
            end += 1;
        }
        let noun_start = end;
        while end < words.len() && tags[end].is_noun() {
            end += 1;
        }

        if end > noun_start {
            let (start, stop) = (words[i].start, words[end - 1].end);
            chunks.push(Span::new(&text[start..stop], start, stop));
            i = end;
        } else {
            i += 1;
        }
    }
    chunks
}

impl Annotator for RuleBasedAnnotator {
    fn annotate(&self, text: &str) -> Result<AnnotatedDoc, AnnotatorError> {
        if text.contains('\0') {
            return Err(AnnotatorError::Malformed(
                "input contains a NUL byte".to_string(),
            ));
        }

        let tokens = Self::tokenize(text);
        let mut doc = AnnotatedDoc {
            token_count: tokens.len(),
            ..AnnotatedDoc::default()
        };

        for range in self.segment(text, &tokens) {
            let sentence_tokens = &tokens[range];
            let (Some(first), Some(last)) = (sentence_tokens.first(), sentence_tokens.last()) else {
                continue;
            };
            doc.sentences
                .push(Span::new(&text[first.start..last.end], first.start, last.end));

            let words = merge_hyphenated(text, sentence_tokens);
            let mut tags = Vec::with_capacity(words.len());
            let mut prev: Option<PosTag> = None;
            for (idx, word) in words.iter().enumerate() {
                let tag = tag_word(word.text(text), prev, idx == 0);
                tags.push(tag);
                // "not" between auxiliary and verb keeps the auxiliary context
                if !(tag == PosTag::Adverb && prev == Some(PosTag::Auxiliary)) {
                    prev = Some(tag);
                }
            }
            doc.noun_chunks.extend(chunk_sentence(text, &words, &tags));
        }

        doc.entities = self.entities.recognize(text);
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotator::scripted::SAMPLE_CONTRACT;
    use pretty_assertions::assert_eq;

    fn annotator() -> RuleBasedAnnotator {
        RuleBasedAnnotator::new().unwrap()
    }

    trait SentenceTexts {
        fn sentences(&self, text: &str) -> Result<Vec<String>, AnnotatorError>;
    }

    impl SentenceTexts for RuleBasedAnnotator {
        fn sentences(&self, text: &str) -> Result<Vec<String>, AnnotatorError> {
            Ok(self.annotate(text)?.sentences.into_iter().map(|s| s.text).collect())
        }
    }

    #[test]
    fn test_sentence_segmentation() {
        let sentences = annotator().sentences(SAMPLE_CONTRACT).unwrap();
        assert_eq!(
            sentences,
            vec![
                "This Agreement may be terminated by either party upon 30 days written notice.",
                "The Company shall not be liable for any indirect damages.",
                "All confidential information shall be kept strictly confidential for a period of 5 years.",
            ]
        );
    }

    #[test]
    fn test_token_count_includes_punctuation() {
        let doc = annotator().annotate(SAMPLE_CONTRACT).unwrap();
        assert_eq!(doc.token_count, 40);
    }

    #[test]
    fn test_noun_chunks() {
        let doc = annotator().annotate(SAMPLE_CONTRACT).unwrap();
        let chunks: Vec<_> = doc.noun_chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(
            chunks,
            vec![
                "This Agreement",
                "either party",
                "30 days written notice",
                "The Company",
                "any indirect damages",
                "All confidential information",
                "a period",
                "5 years",
            ]
        );
    }

    #[test]
    fn test_entities_in_sample() {
        let doc = annotator().annotate(SAMPLE_CONTRACT).unwrap();
        let entities: Vec<_> = doc
            .entities
            .iter()
            .map(|e| (e.label.as_str(), e.span.text.as_str()))
            .collect();
        assert_eq!(entities, vec![("DATE", "30 days"), ("DATE", "5 years")]);
    }

    #[test]
    fn test_abbreviations_do_not_split() {
        let text = "Services are provided by Acme Inc. under this Agreement. Payment is due monthly.";
        assert_eq!(annotator().sentences(text).unwrap().len(), 2);
    }

    #[test]
    fn test_capital_letter_ends_sentence_before_capitalized_word() {
        let text = "Notices go to Party B. Either party may terminate this Agreement.";
        assert_eq!(
            annotator().sentences(text).unwrap(),
            vec!["Notices go to Party B.", "Either party may terminate this Agreement."]
        );
    }

    #[test]
    fn test_chained_initials_do_not_split() {
        let text = "Signed by J. R. Smith on behalf of the Company. Payment is due monthly.";
        assert_eq!(annotator().sentences(text).unwrap().len(), 2);

        let text = "Terms in Exhibit A. as amended apply. Payment is due monthly.";
        assert_eq!(annotator().sentences(text).unwrap().len(), 2);
    }

    #[test]
    fn test_paragraph_break_splits_heading() {
        let text = "ARTICLE 7\n\nEither party may terminate this Agreement.";
        assert_eq!(
            annotator().sentences(text).unwrap(),
            vec!["ARTICLE 7", "Either party may terminate this Agreement."]
        );
    }

    #[test]
    fn test_closing_quote_stays_with_sentence() {
        let text = "The term \"Affiliate\" means any controlled entity.\" Next sentence here.";
        let sentences = annotator().sentences(text).unwrap();
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].ends_with(".\""));
    }

    #[test]
    fn test_hyphenated_compound_is_one_chunk() {
        let doc = annotator().annotate("Each party signed the non-disclosure agreement.").unwrap();
        let chunks: Vec<_> = doc.noun_chunks.iter().map(|c| c.text.as_str()).collect();
        assert!(chunks.contains(&"the non-disclosure agreement"));
        // "non", "-", "disclosure" still count separately
        assert_eq!(doc.token_count, 9);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        let doc = annotator().annotate("   \n ").unwrap();
        assert_eq!(doc, AnnotatedDoc::default());
    }

    #[test]
    fn test_nul_byte_is_malformed() {
        let err = annotator().annotate("bad\0input").unwrap_err();
        assert!(matches!(err, AnnotatorError::Malformed(_)));
    }
}
