//! Top-level answer scoring.
//!
//! Combines three views of how close the answer is to the reference:
//!   - character-level edit similarity of the normalized sentences
//!   - word alignment: average share of matched tokens on both sides
//!   - semantic similarity over content words
//!
//! The [`Strictness`] level picks the weights and a final multiplier.

use crate::{
    assessor::Assessor,
    levenshtein,
    normalization::{char_len, normalize},
    strictness::Strictness,
};

/// Below this normalized length only an exact match scores.
const MIN_FUZZY_LEN: usize = 5;

impl Assessor<'_> {
    /// Score `candidate` against `reference`, in `[0, 1]`.
    ///
    /// Empty or punctuation-only input scores `0.0`. Identical normalized
    /// sentences score `1.0` at every strictness level.
    pub fn check_similarity(&self, reference: &str, candidate: &str, strictness: Strictness) -> f64 {
        let reference_norm = normalize(reference);
        let candidate_norm = normalize(candidate);

        if reference_norm.is_empty() || candidate_norm.is_empty() {
            return 0.0;
        }

        if char_len(&reference_norm) < MIN_FUZZY_LEN || char_len(&candidate_norm) < MIN_FUZZY_LEN {
            return if reference_norm == candidate_norm { 1.0 } else { 0.0 };
        }

        if reference_norm == candidate_norm {
            return 1.0;
        }

        let edit = levenshtein::similarity(&reference_norm, &candidate_norm);
        let word = self
            .compare_word_by_word(reference, candidate)
            .word_based_similarity();
        let semantic = self.assess_semantic_similarity(&reference_norm, &candidate_norm);

        let weights = strictness.weights();
        let weighted = weights.semantic * semantic + weights.word * word + weights.edit * edit;
        let score = (weighted * strictness.factor()).clamp(0.0, 1.0);

        tracing::debug!(
            %strictness,
            edit,
            word,
            semantic,
            score,
            "scored answer"
        );

        score
    }
}
