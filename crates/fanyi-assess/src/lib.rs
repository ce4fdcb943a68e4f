//! Answer assessment for Chinese → English translation practice.
//!
//! This crate scores how close a learner's free-text translation is to a
//! reference translation, tolerating synonyms, paraphrase, word reordering,
//! typos and Mandarin pronoun homophony (他/她/它 all sound like *tā*). It also
//! flags which words of each sentence matched, for highlighting.
//!
//! Everything here is pure and deterministic. The only shared state is the
//! read-only [`EquivalenceTables`], so every function can be called from any
//! thread without synchronization.
//!
//! # Example
//!
//! ```
//! use fanyi_assess::{Strictness, check_similarity, compare_word_by_word};
//!
//! let score = check_similarity("He likes apples", "She likes apples", Strictness::Moderate);
//! assert!(score > 0.9);
//!
//! let comparison = compare_word_by_word("I eat rice today", "today I eat rice");
//! assert!(comparison.reference_word_elements.iter().all(|w| w.matched));
//! ```

pub mod alignment;
pub mod assessor;
pub mod config;
pub mod content;
pub mod equivalence;
pub mod error;
pub mod feedback;
pub mod levenshtein;
pub mod normalization;
pub mod semantic;
pub mod similarity;
pub mod strictness;
pub mod tables;

pub use alignment::{WordComparison, WordMatch};
pub use assessor::Assessor;
pub use config::{AssessConfig, Environment};
pub use error::AssessError;
pub use feedback::{Feedback, FeedbackThresholds};
pub use normalization::normalize;
pub use strictness::{Strictness, Weights};
pub use tables::{EquivalenceTables, EquivalenceTablesBuilder};

/// Score `candidate` against `reference` using the standard tables.
///
/// See [`Assessor::check_similarity`].
pub fn check_similarity(reference: &str, candidate: &str, strictness: Strictness) -> f64 {
    Assessor::standard().check_similarity(reference, candidate, strictness)
}

/// Per-token match flags using the standard tables.
///
/// See [`Assessor::compare_word_by_word`].
pub fn compare_word_by_word(reference: &str, candidate: &str) -> WordComparison {
    Assessor::standard().compare_word_by_word(reference, candidate)
}

/// Word equivalence under the standard tables.
///
/// See [`Assessor::are_words_equivalent`].
pub fn are_words_equivalent(w1: &str, w2: &str) -> bool {
    Assessor::standard().are_words_equivalent(w1, w2)
}

/// Phrase equivalence under the standard tables.
///
/// See [`Assessor::are_phrases_equivalent`].
pub fn are_phrases_equivalent(p1: &str, p2: &str) -> bool {
    Assessor::standard().are_phrases_equivalent(p1, p2)
}

/// Content words of `sentence` under the standard tables.
///
/// See [`Assessor::extract_content_words`].
pub fn extract_content_words(sentence: &str) -> Vec<String> {
    Assessor::standard().extract_content_words(sentence)
}

/// Semantic similarity under the standard tables.
///
/// See [`Assessor::assess_semantic_similarity`].
pub fn assess_semantic_similarity(reference: &str, candidate: &str) -> f64 {
    Assessor::standard().assess_semantic_similarity(reference, candidate)
}
