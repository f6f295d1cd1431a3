//! Error types for the affinity poet.

/// Errors that can occur while building a poet.
///
/// Poem generation itself never fails; only corpus loading can.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The corpus could not be opened or read.
    #[error("Corpus unreadable: {origin}: {source}")]
    CorpusUnreadable {
        /// Where the corpus was being read from (a path, or `<reader>`)
        origin: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

/// Convenience `Result` type alias for poet operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a corpus-unreadable error.
    pub fn corpus_unreadable<S: Into<String>>(origin: S, source: std::io::Error) -> Self {
        Error::CorpusUnreadable {
            origin: origin.into(),
            source,
        }
    }

    /// The I/O error kind behind this error.
    pub fn io_kind(&self) -> std::io::ErrorKind {
        match self {
            Error::CorpusUnreadable { source, .. } => source.kind(),
        }
    }
}
