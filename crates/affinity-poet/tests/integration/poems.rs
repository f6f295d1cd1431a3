//! End-to-end poem generation.

use crate::common::{MUGAR, NURSERY};
use affinity_poet::{AffinityPoet, PoetOptions, TrailingText};

#[test]
fn test_mugar_example() {
    let poet: AffinityPoet = AffinityPoet::from_corpus(MUGAR);
    assert_eq!(poet.poem("Test the system."), "Test of the system.");
}

#[test]
fn test_empty_corpus_changes_nothing() {
    let poet: AffinityPoet = AffinityPoet::from_corpus("");
    assert_eq!(poet.poem("Hello world."), "Hello world.");
    assert_eq!(poet.stats().edges, 0);
}

#[test]
fn test_multiline_corpus() {
    let poet: AffinityPoet = AffinityPoet::from_corpus(NURSERY);
    assert_eq!(
        poet.poem("How wonder what are. Up the world! Diamond the sky?"),
        "How i wonder what you are. Up above the world! Diamond in the sky?"
    );
}

#[test]
fn test_input_case_is_preserved() {
    let poet: AffinityPoet = AffinityPoet::from_corpus(NURSERY);
    assert_eq!(poet.poem("HOW WONDER."), "HOW i WONDER.");
}

#[test]
fn test_repeated_phrases_raise_weights() {
    let poet: AffinityPoet = AffinityPoet::from_corpus(NURSERY);
    // twinkle -> little -> star was seen twice.
    assert_eq!(poet.bridge("twinkle", "star"), Some("little".to_string()));
}

#[test]
fn test_trailing_fragment_policies() {
    let keep: AffinityPoet = AffinityPoet::from_corpus(NURSERY);
    assert_eq!(keep.poem("Up the world. Twinkle star"), "Up above the world. Twinkle little star");

    let drop = keep.with_options(PoetOptions::default().with_trailing_text(TrailingText::Drop));
    assert_eq!(drop.poem("Up the world. Twinkle star"), "Up above the world.");
}

#[test]
fn test_delimiters_keep_order_and_position() {
    let poet: AffinityPoet = AffinityPoet::from_corpus(NURSERY);
    assert_eq!(
        poet.poem("Twinkle star; how wonder: up the!"),
        "Twinkle little star; how i wonder: up above the!"
    );
}
