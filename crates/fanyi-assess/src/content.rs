//! Content-word extraction.

use crate::{
    assessor::Assessor,
    normalization::{char_len, normalize},
};

impl Assessor<'_> {
    /// Reduce a sentence to its content words.
    ///
    /// Normalizes, splits on whitespace and drops closed-class words and
    /// single-character tokens. Order and duplicates are preserved.
    pub fn extract_content_words(&self, sentence: &str) -> Vec<String> {
        normalize(sentence)
            .split_whitespace()
            .filter(|word| char_len(word) > 1 && !self.tables().is_non_critical(word))
            .map(str::to_string)
            .collect()
    }
}
