//! Political-Risk Evidence Condensation Library
//!
//! Condenses a heterogeneous bag of scraped documents into a small,
//! fact-preserving payload for a text-generation service: a ranked
//! sentence digest plus structured evidence (numeric facts, named
//! entities), all under strict size budgets.
//!
//! # Pipeline
//!
//! Data flows strictly forward:
//!
//! 1. Keyword filtering keeps paragraphs that mention the business, its
//!    industry or geography, or a fixed political-risk vocabulary.
//! 2. Fact mining, entity recognition, and TF-IDF relevance ranking run
//!    as three independent projections of the same filtered text.
//! 3. The results assemble into a [`GenerationRequest`], which the
//!    [`Analyst`] formats into a brief for the generation collaborator.
//!
//! # Usage
//!
//! ```rust,ignore
//! use condenser::{Analyst, BusinessContext, MemoryStore, ScrapedDocument};
//! use condenser::testing::MockGenerator;
//!
//! let context = BusinessContext::new("Acme")
//!     .with_industry("Retail")
//!     .with_factor("tariffs", true);
//!
//! let analyst = Analyst::new(MemoryStore::new(), MockGenerator::new());
//! let record = analyst.analyze(&context, &documents).await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Capability abstractions (extractors, generator, stores)
//! - [`types`] - Context, document, evidence, and config types
//! - [`keywords`] - Keyword set construction and document filtering
//! - [`extractors`] - Rule-based fact and entity extraction backends
//! - [`ranker`] - TF-IDF sentence ranking
//! - [`pipeline`] - Orchestration and brief assembly
//! - [`stores`] - Storage implementations
//! - [`testing`] - Mock implementations for testing

pub mod analyst;
pub mod error;
pub mod extractors;
pub mod generate;
pub mod keywords;
pub mod pipeline;
pub mod ranker;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{CondenseError, Result};
pub use traits::{
    extract::{EntityRecognizer, FactExtractor},
    generate::Generator,
    store::{DocumentStore, SummaryStore},
};
pub use types::{
    config::CondenseConfig,
    context::BusinessContext,
    document::{ScrapedDocument, Table},
    evidence::{GenerationRequest, RankedDigest},
    summary::SummaryRecord,
};

// Re-export pipeline components
pub use analyst::Analyst;
pub use keywords::{build_keywords, filter_documents};
pub use pipeline::{format_summary_prompt, summary_prompt_hash, Condenser, SUMMARY_PROMPT};
pub use ranker::{split_sentences, RelevanceRanker};

// Re-export extraction backends
pub use extractors::{RegexFactExtractor, RuleBasedRecognizer};

// Re-export stores
pub use stores::MemoryStore;

#[cfg(feature = "openai")]
pub use generate::OpenAiGenerator;
