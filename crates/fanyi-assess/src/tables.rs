//! Equivalence tables used by the scoring predicates.
//!
//! Three hand-curated tables drive the notion of "same word" beyond exact
//! spelling:
//!   - closed-class English words ignored by content scoring
//!   - groups of interchangeable phrases ("see" ↔ "look at" ↔ "watching")
//!   - homophone clusters: Mandarin 他/她/它 sound identical, so a learner
//!     cannot tell from audio which English pronoun is meant
//!
//! The standard set is built once per process and shared read-only. Tests and
//! embedders can assemble their own set with [`EquivalenceTables::builder`].

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Closed-class English words excluded from content-word scoring.
pub static NON_CRITICAL_WORDS: &[&str] = &[
    // Articles
    "a", "an", "the",
    // Copulas and auxiliaries
    "is", "am", "are", "was", "were", "be", "been", "do", "does", "did", "has", "have", "had",
    "will", "would", "can",
    // Prepositions
    "to", "of", "in", "on", "at", "for", "with", "from",
    // Conjunctions
    "and", "or", "but", "so",
    // Intensifiers
    "very",
];

/// Groups of phrases that count as the same meaning.
///
/// A phrase belongs to a group when it equals or contains one of the group's
/// elements, so short elements match inflected forms too.
pub static PHRASE_GROUPS: &[&[&str]] = &[
    // Verbs
    &["see", "look at", "looking at", "viewing", "watching", "watch"],
    &["study", "studying", "studies", "learn", "learning", "learned"],
    &["eat", "eating", "ate", "have a meal", "dine"],
    &["drink", "drinking", "have a drink"],
    &["like", "love", "enjoy", "be fond of"],
    &["want", "would like", "wish", "hope"],
    &["buy", "purchase", "shop for"],
    &["say", "tell", "speak", "talk"],
    &["go to", "going to", "went to", "head to"],
    &["finish", "finished", "done", "complete", "completed"],
    // Adjectives
    &["big", "large", "huge"],
    &["small", "little", "tiny"],
    &["happy", "glad", "pleased"],
    // Time expressions
    &["today", "this day"],
    &["tomorrow", "the next day"],
    &["yesterday", "the day before"],
    &["now", "right now", "currently", "at the moment"],
    &["every day", "daily", "each day"],
    // Locations
    &["home", "house"],
    &["shop", "store"],
    &["school", "campus"],
    &["restaurant", "diner"],
    // Contracted pronoun forms
    &["i am", "i'm"],
    &["you are", "you're"],
    &["we are", "we're"],
    &["they are", "they're"],
    // Tense and aspect markers
    &["do not", "don't"],
    &["cannot", "can't", "can not"],
    &["will", "going to", "'ll"],
    &["have been", "has been", "had been"],
];

/// English pronoun forms a listener cannot disambiguate from spoken Mandarin.
pub static ENGLISH_PRONOUN_CLUSTERS: &[&[&str]] = &[
    &["he", "she", "it"],
    &["him", "her", "it"],
    &["his", "her", "hers", "its"],
    &["himself", "herself", "itself"],
    &["he's", "she's", "it's"],
];

/// Mandarin third-person pronouns, all pronounced *tā*.
pub static CHINESE_PRONOUN_CLUSTERS: &[&[char]] = &[&['他', '她', '它', '牠']];

static STANDARD: LazyLock<EquivalenceTables> = LazyLock::new(|| {
    let mut builder = EquivalenceTables::builder().non_critical_words(NON_CRITICAL_WORDS.iter());
    for group in PHRASE_GROUPS {
        builder = builder.phrase_group(group.iter());
    }
    for cluster in ENGLISH_PRONOUN_CLUSTERS {
        builder = builder.english_cluster(cluster.iter());
    }
    for cluster in CHINESE_PRONOUN_CLUSTERS {
        builder = builder.chinese_cluster(cluster.iter().copied());
    }
    builder.build()
});

/// Immutable lookup tables consulted by the equivalence predicates.
#[derive(Debug, Clone, Default)]
pub struct EquivalenceTables {
    non_critical: HashSet<String>,
    phrase_groups: Vec<Vec<String>>,
    english_alternatives: HashMap<String, Vec<String>>,
    chinese_homophones: HashMap<char, Vec<char>>,
}

impl EquivalenceTables {
    /// The process-wide standard tables.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Empty builder, for custom or fixture tables.
    pub fn builder() -> EquivalenceTablesBuilder {
        EquivalenceTablesBuilder::default()
    }

    /// Whether `word` is a closed-class word (case-insensitive).
    pub fn is_non_critical(&self, word: &str) -> bool {
        self.non_critical.contains(&word.to_lowercase())
    }

    /// Phrase groups, lowercased.
    pub fn phrase_groups(&self) -> &[Vec<String>] {
        &self.phrase_groups
    }

    /// Other members of `word`'s English homophone cluster (case-insensitive).
    pub fn english_alternatives(&self, word: &str) -> &[String] {
        self.english_alternatives
            .get(&word.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Other members of `c`'s Chinese homophone cluster.
    pub fn homophones(&self, c: char) -> &[char] {
        self.chinese_homophones
            .get(&c)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Assembles an [`EquivalenceTables`] set.
///
/// Homophone clusters are expanded so every member lists every other member of
/// every cluster it appears in, which keeps the relation symmetric.
#[derive(Debug, Default)]
pub struct EquivalenceTablesBuilder {
    tables: EquivalenceTables,
}

impl EquivalenceTablesBuilder {
    /// Add words ignored by content-word extraction.
    pub fn non_critical_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tables
            .non_critical
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Add one group of interchangeable phrases. Empty entries are dropped.
    pub fn phrase_group<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let group: Vec<String> = phrases
            .into_iter()
            .map(|p| p.as_ref().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        if !group.is_empty() {
            self.tables.phrase_groups.push(group);
        }
        self
    }

    /// Add an English homophone cluster; every member maps to all the others.
    pub fn english_cluster<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let members: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        link_cluster(&mut self.tables.english_alternatives, &members);
        self
    }

    /// Add a cluster of Chinese characters sharing a pronunciation.
    pub fn chinese_cluster<I>(mut self, chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let members: Vec<char> = chars.into_iter().collect();
        link_cluster(&mut self.tables.chinese_homophones, &members);
        self
    }

    /// Finish the table set.
    pub fn build(self) -> EquivalenceTables {
        self.tables
    }
}

fn link_cluster<K>(map: &mut HashMap<K, Vec<K>>, members: &[K])
where
    K: Clone + Eq + std::hash::Hash,
{
    for member in members {
        let others = map.entry(member.clone()).or_default();
        for other in members {
            if other != member && !others.contains(other) {
                others.push(other.clone());
            }
        }
    }
}
