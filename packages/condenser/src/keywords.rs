//! Keyword filtering - the first condensation stage.
//!
//! Builds a deterministic keyword set from the business context and keeps
//! only paragraphs that mention at least one keyword. Matching is
//! case-insensitive substring containment, not word-boundary matching:
//! "tax" retains a paragraph containing "taxation".

use std::collections::BTreeSet;

use tracing::debug;

use crate::types::{context::BusinessContext, document::ScrapedDocument};

/// Fixed base vocabulary of political-risk terms.
const BASE_KEYWORDS: [&str; 19] = [
    "policy",
    "regulation",
    "government",
    "law",
    "compliance",
    "tax",
    "tariff",
    "trade",
    "subsidy",
    "political risk",
    "election",
    "sanctions",
    "stability",
    "legislation",
    "framework",
    "jurisdiction",
    "fines",
    "penalty",
    "prohibition",
];

/// Auxiliary phrases added alongside the industry term.
const INDUSTRY_PHRASES: [&str; 2] = ["market regulation", "business law"];

/// Auxiliary phrases added alongside the geography term.
const GEO_PHRASES: [&str; 2] = ["local government", "regional policies"];

/// Build the keyword set for a context.
///
/// Pure and deterministic: the same context always yields the same set.
/// All terms are lower-cased; duplicates collapse.
pub fn build_keywords(context: &BusinessContext) -> BTreeSet<String> {
    let mut keywords: BTreeSet<String> =
        BASE_KEYWORDS.iter().map(|k| k.to_string()).collect();

    keywords.insert(context.industry.to_lowercase());
    keywords.extend(INDUSTRY_PHRASES.iter().map(|k| k.to_string()));

    keywords.insert(context.geographical_focus.to_lowercase());
    keywords.extend(GEO_PHRASES.iter().map(|k| k.to_string()));

    keywords.insert(context.business_name.to_lowercase());

    keywords
}

/// Filter a document collection down to keyword-matching paragraphs.
///
/// Scans every paragraph of every document in document order and retains a
/// paragraph iff its lower-cased form contains at least one keyword.
/// Retained paragraphs are joined with single spaces in encounter order;
/// they are never split or reordered relative to their source. When
/// `max_paragraphs` is set, retention stops once the cap is reached.
///
/// Documents without paragraphs (failed fetches included) contribute
/// nothing; that is not an error.
pub fn filter_documents(
    documents: &[ScrapedDocument],
    keywords: &BTreeSet<String>,
    max_paragraphs: Option<usize>,
) -> String {
    let mut retained: Vec<&str> = Vec::new();

    'documents: for document in documents {
        for paragraph in &document.paragraphs {
            let lowered = paragraph.to_lowercase();
            if keywords.iter().any(|k| lowered.contains(k.as_str())) {
                retained.push(paragraph.as_str());
                if let Some(max) = max_paragraphs {
                    if retained.len() >= max {
                        break 'documents;
                    }
                }
            }
        }
    }

    debug!(
        documents = documents.len(),
        retained = retained.len(),
        "keyword filter complete"
    );

    retained.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_context() -> BusinessContext {
        BusinessContext::new("Acme")
            .with_industry("Retail")
            .with_geography("Europe")
    }

    #[test]
    fn test_build_keywords_is_deterministic() {
        let context = test_context();
        assert_eq!(build_keywords(&context), build_keywords(&context));
    }

    #[test]
    fn test_build_keywords_contains_context_terms() {
        let keywords = build_keywords(&test_context());
        assert!(keywords.contains("retail"));
        assert!(keywords.contains("europe"));
        assert!(keywords.contains("acme"));
        assert!(keywords.contains("tariff"));
        assert!(keywords.contains("market regulation"));
        assert!(keywords.contains("local government"));
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let keywords = build_keywords(&test_context());
        let documents = vec![ScrapedDocument::new(
            "a",
            ["New TAXATION rules announced.", "Sports scores last night."],
        )];

        let filtered = filter_documents(&documents, &keywords, None);
        assert_eq!(filtered, "New TAXATION rules announced.");
    }

    #[test]
    fn test_filter_preserves_encounter_order() {
        let keywords = build_keywords(&test_context());
        let documents = vec![
            ScrapedDocument::new("a", ["First tariff news.", "Nothing relevant."]),
            ScrapedDocument::new("b", ["Second election story."]),
        ];

        let filtered = filter_documents(&documents, &keywords, None);
        assert_eq!(filtered, "First tariff news. Second election story.");
    }

    #[test]
    fn test_filter_respects_paragraph_cap() {
        let keywords = build_keywords(&test_context());
        let documents = vec![ScrapedDocument::new(
            "a",
            ["tariff one", "tariff two", "tariff three"],
        )];

        let filtered = filter_documents(&documents, &keywords, Some(2));
        assert_eq!(filtered, "tariff one tariff two");
    }

    #[test]
    fn test_empty_and_failed_documents_contribute_nothing() {
        let keywords = build_keywords(&test_context());
        let documents = vec![
            ScrapedDocument::failed("a", "blocked"),
            ScrapedDocument::new("b", Vec::<String>::new()),
        ];

        assert_eq!(filter_documents(&documents, &keywords, None), "");
    }

    proptest! {
        /// Every retained unit traces back to some source paragraph, and
        /// no keyword-bearing paragraph is dropped (absent a cap).
        #[test]
        fn prop_filter_is_faithful(paragraphs in prop::collection::vec("[a-z ]{0,40}", 0..20)) {
            let keywords = build_keywords(&test_context());
            let documents = vec![ScrapedDocument::new("a", paragraphs.clone())];

            let filtered = filter_documents(&documents, &keywords, None);

            for paragraph in &paragraphs {
                let matches = {
                    let lowered = paragraph.to_lowercase();
                    keywords.iter().any(|k| lowered.contains(k.as_str()))
                };
                if matches && !paragraph.is_empty() {
                    prop_assert!(filtered.contains(paragraph.as_str()));
                }
            }
        }
    }
}
