//! Public segmentation helpers.

use affinity_poet::text::{corpus_words, fragments, poem_words, segments, Segment};

#[test]
fn test_corpus_and_poem_agree_on_fragments() {
    let line = "Up above the world so high, like a diamond in the sky.";
    let corpus: Vec<&str> = fragments(line).collect();
    let poem: Vec<&str> = segments(line).iter().map(|s| s.text).collect();
    assert_eq!(corpus, poem);
}

#[test]
fn test_corpus_words_vs_poem_words() {
    let fragment = " like  a diamond ";
    assert_eq!(corpus_words(fragment).collect::<Vec<_>>(), vec!["like", "a", "diamond"]);
    assert_eq!(poem_words(fragment), vec!["", "like", "", "a", "diamond"]);
}

#[test]
fn test_segments_leading_delimiter() {
    assert_eq!(
        segments("!go"),
        vec![
            Segment {
                text: "",
                delimiter: Some('!'),
            },
            Segment {
                text: "go",
                delimiter: None,
            },
        ]
    );
}
