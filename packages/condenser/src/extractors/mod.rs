//! Rule-based implementations of the extraction capability traits.

pub mod entities;
pub mod numeric;

pub use entities::{EntityCategory, RecognizedEntity, RuleBasedRecognizer};
pub use numeric::RegexFactExtractor;
