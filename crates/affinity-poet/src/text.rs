//! Text segmentation shared by corpus ingestion and poem generation.
//!
//! Text is cut into *fragments* at sentence-delimiting punctuation, and
//! fragments are cut into words at single spaces. Word adjacency, and so
//! bridge search, never crosses a fragment boundary.

/// Characters that end a fragment.
pub const DELIMITERS: [char; 6] = ['.', ',', '?', '!', ':', ';'];

/// Whether `c` ends a fragment.
pub fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}

/// Case-folds a word for use as a graph key.
pub fn fold_case(word: &str) -> String {
    word.to_lowercase()
}

/// Splits one corpus line into fragments, delimiters removed.
pub fn fragments(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_delimiter)
}

/// Non-empty words of a corpus fragment, in order.
pub fn corpus_words(fragment: &str) -> impl Iterator<Item = &str> {
    fragment.split(' ').filter(|w| !w.is_empty())
}

/// A fragment of poem input and the delimiter that closed it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Text between the previous delimiter (or the start) and this one.
    pub text: &'a str,
    /// The closing delimiter; `None` for text after the last delimiter.
    pub delimiter: Option<char>,
}

/// Splits poem input into segments.
///
/// Always yields one more segment than there are delimiters: the last one
/// holds whatever follows the final delimiter, possibly nothing.
pub fn segments(input: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (i, c) in input.char_indices() {
        if is_delimiter(c) {
            segments.push(Segment {
                text: &input[start..i],
                delimiter: Some(c),
            });
            start = i + c.len_utf8();
        }
    }
    segments.push(Segment {
        text: &input[start..],
        delimiter: None,
    });
    segments
}

/// Words of a poem fragment, split on single spaces.
///
/// Empty words at the end are dropped so no space lands before a
/// delimiter. Leading and interior empty words stay, which keeps the
/// space that usually follows a delimiter.
pub fn poem_words(fragment: &str) -> Vec<&str> {
    let mut words: Vec<&str> = fragment.split(' ').collect();
    while words.last().is_some_and(|w| w.is_empty()) {
        words.pop();
    }
    words
}
