use fanyi_assess::{
    Strictness, are_words_equivalent, check_similarity, compare_word_by_word,
    levenshtein::str_distance, normalize,
};
use proptest::prelude::*;

fn arb_strictness() -> impl Strategy<Value = Strictness> {
    prop_oneof![
        Just(Strictness::Lenient),
        Just(Strictness::Moderate),
        Just(Strictness::Strict),
    ]
}

fn arb_word() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec!["he", "she", "it", "him", "her", "his", "its", "他", "她", "它"])
            .prop_map(str::to_string),
        "[a-zA-Z他她它你我]{1,6}",
    ]
}

proptest! {
    #[test]
    fn distance_to_self_is_zero(a in "[a-z ]{0,16}") {
        prop_assert_eq!(str_distance(&a, &a), 0);
    }

    #[test]
    fn distance_is_symmetric(a in "[a-z ]{0,16}", b in "[a-z ]{0,16}") {
        prop_assert_eq!(str_distance(&a, &b), str_distance(&b, &a));
    }

    #[test]
    fn distance_satisfies_triangle_inequality(
        a in "[a-e]{0,10}",
        b in "[a-e]{0,10}",
        c in "[a-e]{0,10}",
    ) {
        prop_assert!(str_distance(&a, &c) <= str_distance(&a, &b) + str_distance(&b, &c));
    }

    #[test]
    fn identical_answer_scores_one(s in "[a-zA-Z ,.!']{0,40}", level in arb_strictness()) {
        prop_assume!(normalize(&s).chars().count() >= 5);
        prop_assert_eq!(check_similarity(&s, &s, level), 1.0);
    }

    #[test]
    fn empty_side_scores_zero(x in "\\PC{0,30}", level in arb_strictness()) {
        prop_assert_eq!(check_similarity("", &x, level), 0.0);
        prop_assert_eq!(check_similarity(&x, "", level), 0.0);
    }

    #[test]
    fn score_is_bounded(a in "\\PC{0,40}", b in "\\PC{0,40}", level in arb_strictness()) {
        let score = check_similarity(&a, &b, level);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn word_equivalence_is_symmetric(a in arb_word(), b in arb_word()) {
        prop_assert_eq!(are_words_equivalent(&a, &b), are_words_equivalent(&b, &a));
    }

    #[test]
    fn alignment_preserves_tokens(a in "[a-z ]{0,30}", b in "[a-z ]{0,30}") {
        let result = compare_word_by_word(&a, &b);
        let reference: Vec<&str> = result.reference_word_elements.iter().map(|w| w.word.as_str()).collect();
        let candidate: Vec<&str> = result.candidate_word_elements.iter().map(|w| w.word.as_str()).collect();
        prop_assert_eq!(reference, a.split_whitespace().collect::<Vec<_>>());
        prop_assert_eq!(candidate, b.split_whitespace().collect::<Vec<_>>());

        let ref_matched = result.reference_word_elements.iter().filter(|w| w.matched).count();
        let cand_matched = result.candidate_word_elements.iter().filter(|w| w.matched).count();
        prop_assert_eq!(ref_matched, cand_matched);
    }
}
