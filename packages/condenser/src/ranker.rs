//! TF-IDF relevance ranking - the final condensation stage.
//!
//! Treats each sentence of the filtered text as a document, weights terms
//! by smoothed TF-IDF with L2-normalized rows, scores a sentence as its
//! row sum, and selects the top-N sentences. The digest keeps sentences in
//! SCORE order, not source order - downstream consumers want the densest
//! evidence first.
//!
//! Candidate sentences and vocabulary size are capped so ranking cost
//! stays bounded regardless of input volume.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::types::evidence::RankedDigest;

// Word tokens of at least two characters, the reference vectorizer's
// token pattern.
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern must compile"));

/// Split text into sentences at `.`, `!`, or `?` followed by whitespace.
///
/// The terminator stays with its sentence. Empty segments are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    let bytes = text.as_bytes();
    for (idx, c) in text.char_indices() {
        if matches!(c, '.' | '!' | '?') {
            let boundary = idx + c.len_utf8();
            let next_is_space = bytes
                .get(boundary)
                .is_some_and(|b| (*b as char).is_ascii_whitespace());
            if next_is_space {
                let sentence = text[start..boundary].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence);
                }
                start = boundary;
            }
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}

/// TF-IDF sentence ranker.
///
/// Construct once per process and share by reference; the stop-word set
/// is built at construction time.
pub struct RelevanceRanker {
    stopwords: HashSet<String>,
}

impl Default for RelevanceRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl RelevanceRanker {
    /// Create a ranker with the standard English stop-word list.
    pub fn new() -> Self {
        let stopwords = stop_words::get(stop_words::LANGUAGE::English)
            .into_iter()
            .collect();
        Self { stopwords }
    }

    /// Create a ranker with a custom stop-word list.
    pub fn with_stopwords(words: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            stopwords: words.into_iter().map(Into::into).collect(),
        }
    }

    fn tokenize(&self, sentence: &str) -> Vec<String> {
        TOKEN
            .find_iter(&sentence.to_lowercase())
            .map(|m| m.as_str().to_string())
            .filter(|t| !self.stopwords.contains(t))
            .collect()
    }

    /// Rank sentences and return the top `top_n` as a digest.
    ///
    /// `max_candidates` bounds the sentences considered and `max_vocab`
    /// bounds the TF-IDF vocabulary. Ties in score keep original sentence
    /// order (the sort is stable); fewer candidates than `top_n` returns
    /// all of them.
    pub fn rank(
        &self,
        text: &str,
        top_n: usize,
        max_candidates: usize,
        max_vocab: usize,
    ) -> RankedDigest {
        let mut sentences = split_sentences(text);
        sentences.truncate(max_candidates);

        if sentences.is_empty() || top_n == 0 {
            return RankedDigest::empty();
        }

        let tokenized: Vec<Vec<String>> =
            sentences.iter().map(|s| self.tokenize(s)).collect();

        let vocabulary = self.select_vocabulary(&tokenized, max_vocab);
        let idf = compute_idf(&tokenized, &vocabulary);
        let scores: Vec<f64> = tokenized
            .iter()
            .map(|tokens| sentence_score(tokens, &idf))
            .collect();

        let mut order: Vec<usize> = (0..sentences.len()).collect();
        // sort_by is stable: equal scores keep original sentence order
        order.sort_by(|&a, &b| {
            scores[b]
                .partial_cmp(&scores[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let selected: Vec<String> = order
            .into_iter()
            .take(top_n)
            .map(|i| sentences[i].to_string())
            .collect();

        debug!(
            candidates = sentences.len(),
            vocabulary = vocabulary.len(),
            selected = selected.len(),
            "relevance ranking complete"
        );

        RankedDigest::new(selected)
    }

    /// Retain at most `max_vocab` terms, by descending corpus frequency
    /// with alphabetic tie-break so selection is deterministic.
    fn select_vocabulary(&self, tokenized: &[Vec<String>], max_vocab: usize) -> HashSet<String> {
        let mut corpus_freq: HashMap<&str, usize> = HashMap::new();
        for tokens in tokenized {
            for token in tokens {
                *corpus_freq.entry(token.as_str()).or_insert(0) += 1;
            }
        }

        if corpus_freq.len() <= max_vocab {
            return corpus_freq.keys().map(|t| t.to_string()).collect();
        }

        let mut terms: Vec<(&str, usize)> = corpus_freq.into_iter().collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        terms
            .into_iter()
            .take(max_vocab)
            .map(|(t, _)| t.to_string())
            .collect()
    }
}

/// Smoothed inverse document frequency: `ln((1+n)/(1+df)) + 1`.
fn compute_idf(tokenized: &[Vec<String>], vocabulary: &HashSet<String>) -> HashMap<String, f64> {
    let n = tokenized.len() as f64;
    let mut df: HashMap<&str, usize> = HashMap::new();

    for tokens in tokenized {
        let distinct: HashSet<&str> = tokens
            .iter()
            .map(|t| t.as_str())
            .filter(|t| vocabulary.contains(*t))
            .collect();
        for token in distinct {
            *df.entry(token).or_insert(0) += 1;
        }
    }

    df.into_iter()
        .map(|(term, count)| {
            let idf = ((1.0 + n) / (1.0 + count as f64)).ln() + 1.0;
            (term.to_string(), idf)
        })
        .collect()
}

/// Sum of the sentence's L2-normalized TF-IDF weights.
fn sentence_score(tokens: &[String], idf: &HashMap<String, f64>) -> f64 {
    let mut tf: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        if idf.contains_key(token.as_str()) {
            *tf.entry(token.as_str()).or_insert(0) += 1;
        }
    }

    if tf.is_empty() {
        return 0.0;
    }

    let weights: Vec<f64> = tf
        .iter()
        .map(|(term, count)| *count as f64 * idf[*term])
        .collect();
    let norm = weights.iter().map(|w| w * w).sum::<f64>().sqrt();

    weights.iter().sum::<f64>() / norm
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_split_sentences_on_terminators() {
        let sentences = split_sentences("One here. Two there! Three? Tail without end");
        assert_eq!(
            sentences,
            vec!["One here.", "Two there!", "Three?", "Tail without end"]
        );
    }

    #[test]
    fn test_split_ignores_terminator_without_whitespace() {
        let sentences = split_sentences("Version 2.5 shipped. Done.");
        assert_eq!(sentences, vec!["Version 2.5 shipped.", "Done."]);
    }

    #[test]
    fn test_rank_empty_input() {
        let ranker = RelevanceRanker::new();
        assert!(ranker.rank("", 15, 500, 500).is_empty());
        assert!(ranker.rank("   ", 15, 500, 500).is_empty());
    }

    #[test]
    fn test_rank_returns_at_most_top_n_substrings() {
        let ranker = RelevanceRanker::new();
        let text = "Tariff policy shifted. Sanctions expanded rapidly. Elections loom.";

        let digest = ranker.rank(text, 2, 500, 500);
        assert_eq!(digest.len(), 2);
        for sentence in &digest.sentences {
            assert!(text.contains(sentence.as_str()));
        }
    }

    #[test]
    fn test_rank_returns_all_when_fewer_than_top_n() {
        let ranker = RelevanceRanker::new();
        let digest = ranker.rank("Only sentence here.", 15, 500, 500);
        assert_eq!(digest.len(), 1);
    }

    #[test]
    fn test_rank_orders_by_score_not_position() {
        let ranker = RelevanceRanker::new();
        // The second sentence carries more distinct informative terms, so
        // it outranks the first despite its position.
        let text = "Brief note. Tariff sanctions embargo legislation compliance penalties.";

        let digest = ranker.rank(text, 2, 500, 500);
        assert_eq!(
            digest.sentences[0],
            "Tariff sanctions embargo legislation compliance penalties."
        );
        assert_eq!(digest.sentences[1], "Brief note.");
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let ranker = RelevanceRanker::new();
        // Symmetric sentences: every term occurs once in one sentence, so
        // both score identically and must keep source order.
        let text = "Alpha beta gamma. Delta epsilon zeta.";

        let digest = ranker.rank(text, 2, 500, 500);
        assert_eq!(digest.sentences[0], "Alpha beta gamma.");
        assert_eq!(digest.sentences[1], "Delta epsilon zeta.");
    }

    #[test]
    fn test_candidate_cap_limits_pool() {
        let ranker = RelevanceRanker::new();
        let text = "First tariff. Second sanctions embargo legislation compliance story.";

        let digest = ranker.rank(text, 5, 1, 500);
        assert_eq!(digest.sentences, vec!["First tariff.".to_string()]);
    }

    #[test]
    fn test_vocabulary_cap_is_deterministic() {
        let ranker = RelevanceRanker::new();
        let text = "Tariff tariff tariff rules. Sanctions rules. Elections rules.";

        let a = ranker.rank(text, 3, 500, 2);
        let b = ranker.rank(text, 3, 500, 2);
        assert_eq!(a.sentences, b.sentences);
    }

    proptest! {
        /// Digest sentences are always exact substrings of the input and
        /// never exceed the requested count.
        #[test]
        fn prop_digest_is_faithful(text in "[A-Za-z,\\. ]{0,200}", top_n in 0usize..10) {
            let ranker = RelevanceRanker::new();
            let digest = ranker.rank(&text, top_n, 500, 500);

            prop_assert!(digest.len() <= top_n);
            for sentence in &digest.sentences {
                prop_assert!(text.contains(sentence.as_str()));
            }
        }
    }
}
