//! The condensation pipeline - the core of the library.
//!
//! The pipeline sequences:
//! - Keyword filtering (documents -> filtered text)
//! - Numeric fact mining, entity recognition, and relevance ranking as
//!   three independent projections of the same filtered text
//! - Assembly of the generation request
//! - Brief formatting for the generation collaborator

pub mod condense;
pub mod prompts;

pub use condense::Condenser;
pub use prompts::{format_summary_prompt, summary_prompt_hash, SUMMARY_PROMPT};
