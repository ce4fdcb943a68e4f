//! Meaning-level similarity over content words.
//!
//! Scores the fraction of the reference's content words that the candidate
//! covers, exactly or through an equivalence, then adds a bonus for coverage
//! spread across the beginning, middle and end of the reference.

use crate::{assessor::Assessor, levenshtein::distance_ratio, normalization::char_len};

/// Bonus awarded when every third of the reference is represented.
const DISTRIBUTION_BONUS: f64 = 0.2;

/// Minimum content words before the distribution bonus applies.
const MIN_WORDS_FOR_BONUS: usize = 3;

/// Fuzzy coverage only applies to words longer than this.
const FUZZY_MIN_LEN: usize = 3;

/// Fuzzy coverage requires an edit-distance ratio below this.
const FUZZY_MAX_RATIO: f64 = 0.3;

impl Assessor<'_> {
    /// Semantic similarity of `candidate` to `reference`, in `[0, 1]`.
    ///
    /// Returns `0.0` when either side has no content words.
    pub fn assess_semantic_similarity(&self, reference: &str, candidate: &str) -> f64 {
        let reference = self.extract_content_words(reference);
        let candidate = self.extract_content_words(candidate);

        if reference.is_empty() || candidate.is_empty() {
            return 0.0;
        }

        let covered = reference
            .iter()
            .filter(|word| self.is_covered(word, &candidate))
            .count();
        let score = covered as f64 / reference.len() as f64;

        if reference.len() < MIN_WORDS_FOR_BONUS {
            return score;
        }

        let len = reference.len();
        let third = len.div_ceil(3);
        let matched_thirds = [(0, third), (third, 2 * third), (2 * third, len)]
            .into_iter()
            .map(|(start, end)| &reference[start.min(len)..end.min(len)])
            .filter(|section| self.section_matches(section, &candidate))
            .count();

        let bonus = matched_thirds as f64 / 3.0 * DISTRIBUTION_BONUS;
        (score + bonus).min(1.0)
    }

    fn is_covered(&self, word: &str, candidate: &[String]) -> bool {
        candidate.iter().any(|other| {
            word == other
                || self.are_phrases_equivalent(word, other)
                || self.are_words_equivalent(word, other)
                || is_near_miss(word, other)
        })
    }

    // Only exact and phrase-level matches count here, no fuzzy matching.
    fn section_matches(&self, section: &[String], candidate: &[String]) -> bool {
        section.iter().any(|word| {
            candidate
                .iter()
                .any(|other| word == other || self.are_phrases_equivalent(word, other))
        })
    }
}

fn is_near_miss(a: &str, b: &str) -> bool {
    char_len(a) > FUZZY_MIN_LEN
        && char_len(b) > FUZZY_MIN_LEN
        && (a.contains(b) || b.contains(a) || distance_ratio(a, b) < FUZZY_MAX_RATIO)
}
