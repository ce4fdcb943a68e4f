//! Word- and phrase-level equivalence predicates.

use crate::{assessor::Assessor, normalization::normalize};

impl Assessor<'_> {
    /// Whether two tokens count as the same word.
    ///
    /// True on a case-insensitive exact match, when either word lists the other
    /// as an English homophone alternative, or when any character of one word
    /// has a Chinese homophone contained anywhere in the other word.
    ///
    /// The Chinese rule tests containment rather than whole-token equality, so
    /// `他喜欢` and `她喜欢` are equivalent, and so is any longer token that merely
    /// embeds a homophone character.
    pub fn are_words_equivalent(&self, w1: &str, w2: &str) -> bool {
        if w1.to_lowercase() == w2.to_lowercase() {
            return true;
        }

        if self.is_english_alternative(w1, w2) || self.is_english_alternative(w2, w1) {
            return true;
        }

        self.shares_homophone(w1, w2) || self.shares_homophone(w2, w1)
    }

    /// Whether two phrases mean the same thing.
    ///
    /// True when their normalized forms are identical, or when both belong to a
    /// common phrase group.
    pub fn are_phrases_equivalent(&self, p1: &str, p2: &str) -> bool {
        let p1 = normalize(p1);
        let p2 = normalize(p2);

        if p1 == p2 {
            return true;
        }

        self.tables()
            .phrase_groups()
            .iter()
            .any(|group| belongs_to(group, &p1) && belongs_to(group, &p2))
    }

    fn is_english_alternative(&self, word: &str, other: &str) -> bool {
        let other = other.to_lowercase();
        self.tables()
            .english_alternatives(word)
            .iter()
            .any(|alt| *alt == other)
    }

    fn shares_homophone(&self, w1: &str, w2: &str) -> bool {
        w1.chars().any(|c| {
            self.tables()
                .homophones(c)
                .iter()
                .any(|&h| w2.contains(h))
        })
    }
}

// Membership is exact or by substring, so "learning" joins the group holding "learn".
fn belongs_to(group: &[String], phrase: &str) -> bool {
    group
        .iter()
        .any(|element| phrase == element || phrase.contains(element.as_str()))
}
