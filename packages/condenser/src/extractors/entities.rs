//! Rule-based named entity recognition.
//!
//! Provides the default [`EntityRecognizer`] backend: regex patterns plus
//! gazetteers tuned for political-risk text. Only the legal, geopolitical,
//! and organizational categories are retained; anything else a backend
//! recognizes (people, dates, standalone money mentions) is discarded -
//! monetary evidence is the fact extractor's job.
//!
//! A model-backed recognizer can implement [`EntityRecognizer`] and be
//! swapped in without orchestrator changes.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::traits::extract::EntityRecognizer;

/// Classification of recognized entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityCategory {
    /// Statutes, regulations, treaties, and citations thereof
    Law,
    /// Countries, blocs, and other geopolitical units
    GeopoliticalEntity,
    /// Companies, agencies, and institutional bodies
    Organization,
}

impl EntityCategory {
    /// Categories the pipeline keeps; all others are dropped.
    pub const RETAINED: [EntityCategory; 3] = [
        EntityCategory::Law,
        EntityCategory::GeopoliticalEntity,
        EntityCategory::Organization,
    ];
}

/// A single recognized entity with its category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecognizedEntity {
    /// Surface string as it appears in the text
    pub text: String,
    /// Assigned category
    pub category: EntityCategory,
}

// Named statutes and instruments: "Clean Air Act of 1990",
// "Digital Markets Regulation", "Kyoto Protocol".
static LAW_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:[A-Z][A-Za-z&'-]+\s+){1,4}(?:Act|Regulation|Directive|Treaty|Accord|Protocol|Amendment|Bill|Code|Statute)(?:\s+of\s+\d{4})?\b",
    )
    .expect("law pattern must compile")
});

// Statute citations: "Section 232", "Article 50".
static LAW_CITATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:Section|Article|Chapter|Title)\s+\d+[A-Za-z]?\b")
        .expect("citation pattern must compile")
});

// Well-known legal frameworks that carry no generic law noun.
static KNOWN_LAWS: LazyLock<Regex> = LazyLock::new(|| {
    let names = [
        "GDPR",
        "NAFTA",
        "USMCA",
        "HIPAA",
        "CCPA",
        "DMCA",
        "TRIPS",
        "Dodd-Frank",
        "Sarbanes-Oxley",
        "Basel III",
        "MiFID II",
        "Brexit",
    ];
    Regex::new(&format!(r"\b(?:{})\b", names.join("|"))).expect("known-law pattern must compile")
});

// Countries and blocs, longest alternatives first so multi-word names win.
static GEOPOLITICAL: LazyLock<Regex> = LazyLock::new(|| {
    let names = [
        "United States of America",
        "United Arab Emirates",
        "United States",
        "United Kingdom",
        "European Union",
        "South Korea",
        "North Korea",
        "Saudi Arabia",
        "South Africa",
        "New Zealand",
        "Hong Kong",
        "Argentina",
        "Australia",
        "Bangladesh",
        "Brazil",
        "Canada",
        "China",
        "Colombia",
        "Egypt",
        "France",
        "Germany",
        "Greece",
        "India",
        "Indonesia",
        "Ireland",
        "Israel",
        "Italy",
        "Japan",
        "Kenya",
        "Malaysia",
        "Mexico",
        "Netherlands",
        "Nigeria",
        "Norway",
        "Pakistan",
        "Philippines",
        "Poland",
        "Portugal",
        "Russia",
        "Singapore",
        "Spain",
        "Sweden",
        "Switzerland",
        "Taiwan",
        "Thailand",
        "Turkey",
        "Ukraine",
        "Vietnam",
        "Africa",
        "Asia",
        "Europe",
        "Washington",
        "Brussels",
        "Beijing",
        "London",
        "Delhi",
    ];
    Regex::new(&format!(r"\b(?:{})\b", names.join("|")))
        .expect("geopolitical pattern must compile")
});

// Institutional bodies known by name or acronym.
static KNOWN_BODIES: LazyLock<Regex> = LazyLock::new(|| {
    let names = [
        "World Trade Organization",
        "International Monetary Fund",
        "European Commission",
        "European Parliament",
        "European Central Bank",
        "Federal Reserve",
        "World Bank",
        "United Nations",
        "Department of Justice",
        "Department of Commerce",
        "Department of the Treasury",
        "Securities and Exchange Commission",
        "Federal Trade Commission",
        "Reserve Bank of India",
        "Bank of England",
        "WTO",
        "IMF",
        "OECD",
        "NATO",
        "OPEC",
        "ASEAN",
        "WHO",
        "ILO",
        "SEC",
        "FTC",
        "FDA",
        "EPA",
        "IRS",
        "ECB",
        "G7",
        "G20",
    ];
    Regex::new(&format!(r"\b(?:{})\b", names.join("|")))
        .expect("known-body pattern must compile")
});

// Organizations by institutional or corporate suffix:
// "Acme Holdings", "Election Commission", "Ministry of Finance".
static ORG_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:[A-Z][A-Za-z&'-]+\s+){1,3}(?:Inc|Corp|Corporation|Ltd|Limited|LLC|PLC|Group|Holdings|Authority|Agency|Commission|Ministry|Council|Association|Bureau|Administration|Committee)\b",
    )
    .expect("org-suffix pattern must compile")
});

// "Ministry of Finance" / "Department of Energy" style bodies.
static ORG_OF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:Ministry|Department|Bureau|Office)\s+of\s+(?:[A-Z][A-Za-z&'-]+\s*){1,3}\b",
    )
    .expect("org-of pattern must compile")
});

/// Slice to the first `max_chars` characters without splitting a char.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Drop a leading determiner that capitalized-word patterns pick up at
/// sentence starts ("The Clean Air Act" -> "Clean Air Act").
fn strip_determiner(text: &str) -> &str {
    for det in ["The ", "A ", "An "] {
        if let Some(rest) = text.strip_prefix(det) {
            return rest;
        }
    }
    text
}

/// Bare generic nouns left over after determiner stripping ("Ministry",
/// "Act") name nothing and are dropped.
fn is_generic(text: &str) -> bool {
    const GENERIC: [&str; 12] = [
        "Act",
        "Regulation",
        "Directive",
        "Treaty",
        "Bill",
        "Code",
        "Statute",
        "Ministry",
        "Commission",
        "Agency",
        "Authority",
        "Committee",
    ];
    GENERIC.contains(&text)
}

/// Regex-and-gazetteer entity recognizer, the default
/// [`EntityRecognizer`] backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedRecognizer;

impl RuleBasedRecognizer {
    /// Create the recognizer.
    pub fn new() -> Self {
        Self
    }

    /// Recognize entities with their categories, without the window cap.
    pub fn recognize(&self, text: &str) -> Vec<RecognizedEntity> {
        let mut entities = Vec::new();

        for pattern in [&*LAW_NAME, &*LAW_CITATION, &*KNOWN_LAWS] {
            for m in pattern.find_iter(text) {
                entities.push(RecognizedEntity {
                    text: strip_determiner(m.as_str().trim_end()).to_string(),
                    category: EntityCategory::Law,
                });
            }
        }

        for m in GEOPOLITICAL.find_iter(text) {
            entities.push(RecognizedEntity {
                text: m.as_str().to_string(),
                category: EntityCategory::GeopoliticalEntity,
            });
        }

        for pattern in [&*KNOWN_BODIES, &*ORG_SUFFIX, &*ORG_OF] {
            for m in pattern.find_iter(text) {
                entities.push(RecognizedEntity {
                    text: strip_determiner(m.as_str().trim_end()).to_string(),
                    category: EntityCategory::Organization,
                });
            }
        }

        entities
    }
}

impl EntityRecognizer for RuleBasedRecognizer {
    fn extract_entities(&self, text: &str, max_chars: usize) -> BTreeSet<String> {
        let window = truncate_chars(text, max_chars);

        self.recognize(window)
            .into_iter()
            .filter(|e| EntityCategory::RETAINED.contains(&e.category))
            .map(|e| e.text)
            .filter(|text| !is_generic(text))
            .collect()
    }
}
