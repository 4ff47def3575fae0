//! Scraped document types - read-only input to the pipeline.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One structured table extracted from a page: header -> cell per row.
pub type Table = Vec<IndexMap<String, String>>;

/// A scraped web page, one per fetched URL.
///
/// Produced by the upstream fetching layer; the pipeline only reads it.
/// A document with an `error` or without paragraphs contributes no text
/// and is not itself an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapedDocument {
    /// Source URL of the page
    pub url: String,

    /// Page title if the scraper found one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Extracted paragraph text, in page order
    #[serde(default)]
    pub paragraphs: Vec<String>,

    /// Structured tables, if any
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<Table>,

    /// Total word count reported by the scraper
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,

    /// Set when the fetch failed; such documents carry no content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScrapedDocument {
    /// Create a document with paragraph content.
    pub fn new(
        url: impl Into<String>,
        paragraphs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            url: url.into(),
            title: None,
            paragraphs: paragraphs.into_iter().map(Into::into).collect(),
            tables: Vec::new(),
            word_count: None,
            error: None,
        }
    }

    /// Create a failed-fetch placeholder.
    pub fn failed(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            paragraphs: Vec::new(),
            tables: Vec::new(),
            word_count: None,
            error: Some(error.into()),
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add a structured table.
    pub fn with_table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    /// Whether the fetch for this URL failed.
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Whether the document carries any paragraph text.
    pub fn has_content(&self) -> bool {
        !self.is_failed() && !self.paragraphs.is_empty()
    }

    /// Word count across paragraphs (computed, ignoring the scraper's).
    pub fn computed_word_count(&self) -> usize {
        self.paragraphs
            .iter()
            .map(|p| p.split_whitespace().count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_paragraphs_is_valid() {
        let doc: ScrapedDocument =
            serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();
        assert!(doc.paragraphs.is_empty());
        assert!(!doc.has_content());
        assert!(!doc.is_failed());
    }

    #[test]
    fn test_wrong_typed_paragraphs_is_rejected() {
        let result: std::result::Result<ScrapedDocument, _> =
            serde_json::from_str(r#"{"url": "a", "paragraphs": "not a list"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_failed_document_has_no_content() {
        let doc = ScrapedDocument::failed("https://example.com", "blocked");
        assert!(doc.is_failed());
        assert!(!doc.has_content());
    }

    #[test]
    fn test_computed_word_count() {
        let doc = ScrapedDocument::new("a", ["one two", "three"]);
        assert_eq!(doc.computed_word_count(), 3);
    }
}
