//! Poem generation options.

use serde::{Deserialize, Serialize};

/// What to do with input text after the last delimiter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingText {
    /// Bridge it like any other fragment and emit it without a delimiter.
    #[default]
    Keep,
    /// Leave it out of the poem entirely.
    Drop,
}

/// Options controlling [`AffinityPoet::poem`](crate::AffinityPoet::poem).
///
/// Deserializes from a table such as:
///
/// ```toml
/// trailing_text = "drop"
/// ```
///
/// Missing keys take their defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoetOptions {
    /// Handling of text after the last delimiter.
    pub trailing_text: TrailingText,
}

impl PoetOptions {
    /// Sets the trailing-text policy.
    pub fn with_trailing_text(mut self, trailing_text: TrailingText) -> Self {
        self.trailing_text = trailing_text;
        self
    }
}
