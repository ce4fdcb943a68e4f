//! Levenshtein edit distance.
//!
//! Insertions, deletions and substitutions all cost 1. The engine uses the
//! character-level form for whole sentences and single tokens, but the
//! recurrence works over any sequence of comparable items.

/// Edit distance between two sequences.
///
/// Builds the full `(b.len() + 1) x (a.len() + 1)` table whose first row and
/// column are index ramps. Runs in `O(|a| * |b|)` time and space.
pub fn distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let mut table = vec![vec![0usize; a.len() + 1]; b.len() + 1];

    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=b.len() {
        for j in 1..=a.len() {
            table[i][j] = if b[i - 1] == a[j - 1] {
                table[i - 1][j - 1]
            } else {
                1 + table[i - 1][j - 1]
                    .min(table[i][j - 1])
                    .min(table[i - 1][j])
            };
        }
    }

    table[b.len()][a.len()]
}

/// Character-level edit distance between two strings.
pub fn str_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    distance(&a, &b)
}

/// Normalized similarity: `1 - distance / max_len`.
///
/// Two empty strings are identical and score `1.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - str_distance(a, b) as f64 / max_len as f64
}

/// Distance as a fraction of the longer string: `distance / max_len`.
pub(crate) fn distance_ratio(a: &str, b: &str) -> f64 {
    1.0 - similarity(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_basics() {
        assert_eq!(str_distance("", ""), 0);
        assert_eq!(str_distance("abc", ""), 3);
        assert_eq!(str_distance("", "xyz"), 3);
        assert_eq!(str_distance("hello", "hello"), 0);

        assert_eq!(str_distance("cat", "hat"), 1); // substitution
        assert_eq!(str_distance("cat", "cats"), 1); // insertion
        assert_eq!(str_distance("cats", "cat"), 1); // deletion

        assert_eq!(str_distance("kitten", "sitting"), 3);
        assert_eq!(str_distance("saturday", "sunday"), 3);
    }

    #[test]
    fn test_distance_over_tokens() {
        let a = ["i", "eat", "rice"];
        let b = ["i", "ate", "rice", "today"];
        assert_eq!(distance(&a, &b), 2);
    }

    #[test]
    fn test_distance_counts_chars_not_bytes() {
        assert_eq!(str_distance("他", "她"), 1);
        assert_eq!(str_distance("他喜欢", "她喜欢"), 1);
    }

    #[test]
    fn test_similarity() {
        assert!((similarity("hello", "hello") - 1.0).abs() < f64::EPSILON);
        assert!((similarity("", "") - 1.0).abs() < f64::EPSILON);
        assert!((similarity("abc", "xyz")).abs() < f64::EPSILON);
        assert!((similarity("apple", "appel") - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_distance_ratio() {
        assert!((distance_ratio("teacher", "teachers") - 0.125).abs() < 1e-9);
    }
}
