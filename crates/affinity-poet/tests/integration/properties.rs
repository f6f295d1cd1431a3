//! Property-based tests for poem generation.

use crate::common::NURSERY;
use affinity_poet::text::{is_delimiter, DELIMITERS};
use affinity_poet::AffinityPoet;
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("twinkle".to_string()),
        Just("star".to_string()),
        Just("how".to_string()),
        Just("wonder".to_string()),
        Just("the".to_string()),
        Just("sky".to_string()),
        "[A-Za-z]{1,6}",
    ]
}

fn sentence() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(word(), 1..6),
        prop::sample::select(DELIMITERS.to_vec()),
    )
        .prop_map(|(words, delimiter)| format!("{}{delimiter}", words.join(" ")))
}

fn input() -> impl Strategy<Value = String> {
    prop::collection::vec(sentence(), 0..5).prop_map(|sentences| sentences.join(" "))
}

proptest! {
    #[test]
    fn test_empty_graph_is_identity(input in input()) {
        let poet: AffinityPoet = AffinityPoet::from_corpus("");
        prop_assert_eq!(poet.poem(&input), input);
    }

    #[test]
    fn test_delimiters_survive_in_order(input in input()) {
        let poet: AffinityPoet = AffinityPoet::from_corpus(NURSERY);
        let poem = poet.poem(&input);
        let before: Vec<char> = input.chars().filter(|c| is_delimiter(*c)).collect();
        let after: Vec<char> = poem.chars().filter(|c| is_delimiter(*c)).collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn test_input_words_survive_in_order(input in input()) {
        let poet: AffinityPoet = AffinityPoet::from_corpus(NURSERY);
        let poem = poet.poem(&input);
        // Removing the inserted lower-case bridges leaves the input words.
        let split = |c: char| c == ' ' || is_delimiter(c);
        let mut poem_words = poem.split(split).filter(|w| !w.is_empty());
        for word in input.split(split).filter(|w| !w.is_empty()) {
            prop_assert!(poem_words.any(|w| w == word), "lost {:?} in {:?}", word, poem);
        }
    }

    #[test]
    fn test_poem_is_deterministic(input in input()) {
        let poet: AffinityPoet = AffinityPoet::from_corpus(NURSERY);
        prop_assert_eq!(poet.poem(&input), poet.poem(&input));
    }
}
