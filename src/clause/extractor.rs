use tracing::debug;

use super::patterns::PatternMatcher;
use crate::annotator::Annotator;
use crate::error::Result;
use crate::models::{ClauseCategory, ClauseMap};

/// Tag every sentence of `document` with the clause categories it matches.
///
/// The result always holds all three categories, in category order; each
/// list keeps document order. A sentence matching several categories is
/// listed under each of them.
pub fn extract_clauses(
    annotator: &dyn Annotator,
    matcher: &PatternMatcher,
    document: &str,
) -> Result<ClauseMap> {
    let doc = annotator.annotate(document)?;

    let mut clauses: ClauseMap = ClauseCategory::ALL
        .iter()
        .map(|&category| (category, Vec::new()))
        .collect();

    for (category, matches) in clauses.iter_mut() {
        matches.extend(
            doc.sentences
                .iter()
                .filter(|sentence| matcher.matches(*category, &sentence.text))
                .map(|sentence| sentence.text.clone()),
        );
    }

    debug!(
        sentences = doc.sentences.len(),
        termination = clauses[&ClauseCategory::Termination].len(),
        liability = clauses[&ClauseCategory::Liability].len(),
        confidentiality = clauses[&ClauseCategory::Confidentiality].len(),
        "extracted clauses"
    );

    Ok(clauses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotator::rule_based::RuleBasedAnnotator;
    use crate::annotator::scripted::{ScriptedAnnotator, SAMPLE_CONTRACT};
    use crate::error::AnalysisError;
    use pretty_assertions::assert_eq;

    fn matcher() -> PatternMatcher {
        PatternMatcher::new().unwrap()
    }

    #[test]
    fn test_sample_agreement_no_cross_contamination() {
        let annotator = RuleBasedAnnotator::new().unwrap();
        let clauses = extract_clauses(&annotator, &matcher(), SAMPLE_CONTRACT).unwrap();

        assert_eq!(
            clauses[&ClauseCategory::Termination],
            vec!["This Agreement may be terminated by either party upon 30 days written notice."]
        );
        assert_eq!(
            clauses[&ClauseCategory::Liability],
            vec!["The Company shall not be liable for any indirect damages."]
        );
        assert_eq!(
            clauses[&ClauseCategory::Confidentiality],
            vec!["All confidential information shall be kept strictly confidential for a period of 5 years."]
        );
    }

    #[test]
    fn test_empty_document_has_all_categories() {
        let annotator = RuleBasedAnnotator::new().unwrap();
        let clauses = extract_clauses(&annotator, &matcher(), "").unwrap();

        let keys: Vec<_> = clauses.keys().copied().collect();
        assert_eq!(keys, ClauseCategory::ALL.to_vec());
        assert!(clauses.values().all(Vec::is_empty));
    }

    #[test]
    fn test_multi_category_sentence_and_order() {
        let document = "Termination is allowed for convenience.\n\
            Confidentiality and indemnification survive termination.\n\
            Payment is due monthly.\n\
            Cancellation requires notice.";
        let clauses = extract_clauses(&ScriptedAnnotator::new(), &matcher(), document).unwrap();

        assert_eq!(
            clauses[&ClauseCategory::Termination],
            vec![
                "Termination is allowed for convenience.",
                "Confidentiality and indemnification survive termination.",
                "Cancellation requires notice.",
            ]
        );
        assert_eq!(
            clauses[&ClauseCategory::Liability],
            vec!["Confidentiality and indemnification survive termination."]
        );
        assert_eq!(
            clauses[&ClauseCategory::Confidentiality],
            vec!["Confidentiality and indemnification survive termination."]
        );
    }

    #[test]
    fn test_annotator_failure_propagates() {
        let err = extract_clauses(&ScriptedAnnotator::new(), &matcher(), "FAIL").unwrap_err();
        assert!(matches!(err, AnalysisError::Annotator(_)));
    }
}
