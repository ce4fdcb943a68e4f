//! Word-by-word alignment for highlighting.
//!
//! Flags each token of the reference and of the learner's answer as matched or
//! unmatched using three greedy passes, first match wins, no backtracking:
//!
//! 1. **Positional**: tokens at the same index that are equal or equivalent.
//! 2. **Any position**: remaining answer tokens against the first remaining
//!    equal or equivalent reference token, so reordered sentences still match.
//! 3. **Fuzzy**: remaining tokens of two or more characters whose edit
//!    similarity clears a threshold, stricter for short words so typos match
//!    but function words do not.
//!
//! The greedy result is not an optimal assignment, and the flags it produces
//! are what the rendering layer shows, so the pass order must stay as is.

use serde::{Deserialize, Serialize};

use crate::{
    assessor::Assessor,
    levenshtein,
    normalization::{char_len, normalize, tokenize},
};

/// Similarity a fuzzy pair must exceed when either token is short.
const SHORT_WORD_THRESHOLD: f64 = 0.85;

/// Similarity a fuzzy pair must exceed otherwise.
const LONG_WORD_THRESHOLD: f64 = 0.75;

/// Tokens up to this length use [`SHORT_WORD_THRESHOLD`].
const SHORT_WORD_MAX_LEN: usize = 3;

/// Tokens shorter than this never take part in fuzzy matching.
const FUZZY_MIN_LEN: usize = 2;

/// A token in its original casing and whether it found a counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMatch {
    /// Token as it appeared in the input.
    pub word: String,
    /// Whether any pass paired it with a token from the other sentence.
    pub matched: bool,
}

/// Per-token match flags for both sentences, in original token order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordComparison {
    /// Flags for the reference tokens.
    pub reference_word_elements: Vec<WordMatch>,
    /// Flags for the candidate tokens.
    pub candidate_word_elements: Vec<WordMatch>,
}

impl WordComparison {
    /// Fraction of reference tokens that matched.
    pub fn reference_match_ratio(&self) -> f64 {
        match_ratio(&self.reference_word_elements)
    }

    /// Fraction of candidate tokens that matched.
    pub fn candidate_match_ratio(&self) -> f64 {
        match_ratio(&self.candidate_word_elements)
    }

    /// Average of the reference and candidate match ratios.
    pub fn word_based_similarity(&self) -> f64 {
        (self.reference_match_ratio() + self.candidate_match_ratio()) / 2.0
    }
}

fn match_ratio(words: &[WordMatch]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    words.iter().filter(|w| w.matched).count() as f64 / words.len() as f64
}

/// One side of the alignment: display tokens, comparison forms and flags.
struct Side<'a> {
    words: Vec<&'a str>,
    normalized: Vec<String>,
    matched: Vec<bool>,
}

impl<'a> Side<'a> {
    fn new(sentence: &'a str) -> Self {
        let words = tokenize(sentence);
        let normalized = words.iter().map(|w| normalize(w)).collect();
        let matched = vec![false; words.len()];
        Self {
            words,
            normalized,
            matched,
        }
    }

    fn len(&self) -> usize {
        self.words.len()
    }

    fn matched_count(&self) -> usize {
        self.matched.iter().filter(|&&m| m).count()
    }

    fn into_elements(self) -> Vec<WordMatch> {
        self.words
            .into_iter()
            .zip(self.matched)
            .map(|(word, matched)| WordMatch {
                word: word.to_string(),
                matched,
            })
            .collect()
    }
}

impl Assessor<'_> {
    /// Align two sentences token by token and flag what matched.
    pub fn compare_word_by_word(&self, reference: &str, candidate: &str) -> WordComparison {
        let mut reference = Side::new(reference);
        let mut candidate = Side::new(candidate);

        self.match_positional(&mut reference, &mut candidate);
        tracing::trace!(
            pass = 1,
            reference_matched = reference.matched_count(),
            candidate_matched = candidate.matched_count(),
            "word alignment"
        );

        self.match_any_position(&mut reference, &mut candidate);
        tracing::trace!(
            pass = 2,
            reference_matched = reference.matched_count(),
            candidate_matched = candidate.matched_count(),
            "word alignment"
        );

        match_fuzzy(&mut reference, &mut candidate);
        tracing::trace!(
            pass = 3,
            reference_matched = reference.matched_count(),
            candidate_matched = candidate.matched_count(),
            "word alignment"
        );

        WordComparison {
            reference_word_elements: reference.into_elements(),
            candidate_word_elements: candidate.into_elements(),
        }
    }

    fn is_same_word(&self, reference: &Side<'_>, i: usize, candidate: &Side<'_>, j: usize) -> bool {
        reference.normalized[i] == candidate.normalized[j]
            || self.are_words_equivalent(reference.words[i], candidate.words[j])
    }

    fn match_positional(&self, reference: &mut Side<'_>, candidate: &mut Side<'_>) {
        for i in 0..reference.len().min(candidate.len()) {
            if self.is_same_word(reference, i, candidate, i) {
                reference.matched[i] = true;
                candidate.matched[i] = true;
            }
        }
    }

    fn match_any_position(&self, reference: &mut Side<'_>, candidate: &mut Side<'_>) {
        for j in 0..candidate.len() {
            if candidate.matched[j] || candidate.normalized[j].is_empty() {
                continue;
            }

            let hit = (0..reference.len())
                .find(|&i| !reference.matched[i] && self.is_same_word(reference, i, candidate, j));

            if let Some(i) = hit {
                reference.matched[i] = true;
                candidate.matched[j] = true;
            }
        }
    }
}

fn match_fuzzy(reference: &mut Side<'_>, candidate: &mut Side<'_>) {
    for j in 0..candidate.len() {
        if candidate.matched[j] || char_len(&candidate.normalized[j]) < FUZZY_MIN_LEN {
            continue;
        }

        let hit = (0..reference.len()).find(|&i| {
            !reference.matched[i]
                && char_len(&reference.normalized[i]) >= FUZZY_MIN_LEN
                && is_fuzzy_match(&reference.normalized[i], &candidate.normalized[j])
        });

        if let Some(i) = hit {
            reference.matched[i] = true;
            candidate.matched[j] = true;
        }
    }
}

fn is_fuzzy_match(a: &str, b: &str) -> bool {
    let threshold = if char_len(a) <= SHORT_WORD_MAX_LEN || char_len(b) <= SHORT_WORD_MAX_LEN {
        SHORT_WORD_THRESHOLD
    } else {
        LONG_WORD_THRESHOLD
    };
    levenshtein::similarity(a, b) > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compare(reference: &str, candidate: &str) -> WordComparison {
        Assessor::standard().compare_word_by_word(reference, candidate)
    }

    fn flags(words: &[WordMatch]) -> Vec<bool> {
        words.iter().map(|w| w.matched).collect()
    }

    #[test]
    fn test_identical_sentences_fully_match() {
        let result = compare("I like apples", "I like apples");
        assert_eq!(flags(&result.reference_word_elements), vec![true; 3]);
        assert_eq!(flags(&result.candidate_word_elements), vec![true; 3]);
    }

    #[test]
    fn test_original_case_and_punctuation_kept_for_display() {
        let result = compare("Hello, World!", "hello world");
        let words: Vec<&str> = result
            .reference_word_elements
            .iter()
            .map(|w| w.word.as_str())
            .collect();
        assert_eq!(words, vec!["Hello,", "World!"]);
        assert_eq!(flags(&result.reference_word_elements), vec![true, true]);
    }

    #[test]
    fn test_homophone_pronouns_match() {
        let result = compare("he likes apples", "she likes apples");
        assert_eq!(flags(&result.reference_word_elements), vec![true; 3]);
        assert_eq!(flags(&result.candidate_word_elements), vec![true; 3]);
    }

    #[test]
    fn test_reordered_words_match() {
        let result = compare("I eat rice today", "today I eat rice");
        assert_eq!(flags(&result.reference_word_elements), vec![true; 4]);
        assert_eq!(flags(&result.candidate_word_elements), vec![true; 4]);
    }

    #[test]
    fn test_typo_matches_in_fuzzy_pass() {
        // "beautifull" vs "beautiful": similarity 0.9 > 0.75
        let result = compare("a beautiful garden", "a garden beautifull");
        assert_eq!(flags(&result.reference_word_elements), vec![true; 3]);
    }

    #[test]
    fn test_short_words_need_stricter_similarity() {
        // "cat" vs "cap": similarity 0.67, below the 0.85 short-word threshold.
        let result = compare("the cat", "the cap");
        assert_eq!(flags(&result.reference_word_elements), vec![true, false]);
        assert_eq!(flags(&result.candidate_word_elements), vec![true, false]);
    }

    #[test]
    fn test_extra_and_missing_words() {
        let result = compare("I like green tea", "I really like tea");
        assert_eq!(flags(&result.reference_word_elements), vec![true, true, false, true]);
        assert_eq!(flags(&result.candidate_word_elements), vec![true, false, true, true]);
    }

    #[test]
    fn test_first_match_wins_on_duplicates() {
        // The single "tea" in the answer claims the first unmatched "tea".
        let result = compare("tea or tea", "coffee tea");
        assert_eq!(flags(&result.reference_word_elements), vec![true, false, false]);
        assert_eq!(flags(&result.candidate_word_elements), vec![false, true]);
    }

    #[test]
    fn test_empty_inputs() {
        let result = compare("", "something");
        assert!(result.reference_word_elements.is_empty());
        assert_eq!(flags(&result.candidate_word_elements), vec![false]);
        assert!((result.word_based_similarity() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_punctuation_only_answer_token_is_skipped() {
        let result = compare("tea time", "- tea");
        assert_eq!(flags(&result.candidate_word_elements), vec![false, true]);
        assert_eq!(flags(&result.reference_word_elements), vec![true, false]);
    }

    #[test]
    fn test_word_based_similarity() {
        let result = compare("I like green tea", "I really like tea");
        assert!((result.word_based_similarity() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_serializes_camel_case() {
        let result = compare("he runs", "she runs");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["referenceWordElements"][0]["word"], "he");
        assert_eq!(json["candidateWordElements"][0]["matched"], true);
    }

    #[test]
    fn test_fuzzy_thresholds() {
        assert!(is_fuzzy_match("beautiful", "beautifull"));
        assert!(!is_fuzzy_match("cat", "cap"));
        // 1 - 1/5 = 0.8, above the long-word threshold.
        assert!(is_fuzzy_match("apple", "appla"));
        // 1 - 1/4 = 0.75 does not exceed 0.75.
        assert!(!is_fuzzy_match("rice", "rica"));
    }
}
