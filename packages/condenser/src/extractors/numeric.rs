//! Numeric fact mining.
//!
//! Quantitative evidence (percentages, currency amounts, large-number
//! phrases, bare decimals) is mined with an ordered set of patterns, each
//! applied independently over the full raw text. Matches are unioned and
//! deduplicated; patterns never operate on one another's residue.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::traits::extract::FactExtractor;

static FACT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\d+%",                                // percentages (25%)
        r"\$\d+[\d,]*",                         // dollar amounts ($5,000)
        r"€\d+[\d,]*",                          // euro amounts (€1,200)
        r"₹\d+[\d,]*",                          // rupee amounts (₹10,000)
        r"\d+\s?(?:billion|million|trillion)",  // magnitudes (5 billion)
        r"\d+\.\d+",                            // bare decimals (3.5)
    ]
    .iter()
    .map(|p| Regex::new(p).expect("fact pattern must compile"))
    .collect()
});

/// Pattern-matching fact extractor, the default [`FactExtractor`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexFactExtractor;

impl RegexFactExtractor {
    /// Create the extractor.
    pub fn new() -> Self {
        Self
    }
}

impl FactExtractor for RegexFactExtractor {
    fn extract_facts(&self, text: &str) -> BTreeSet<String> {
        let mut facts = BTreeSet::new();
        for pattern in FACT_PATTERNS.iter() {
            for m in pattern.find_iter(text) {
                facts.insert(m.as_str().to_string());
            }
        }
        facts
    }
}
