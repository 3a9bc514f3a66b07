//! Error types for article-digest.
//!
//! Structural failures raised by the extractor, state-machine violations raised
//! by the summarizer session, and pass-through failures from the fetch and
//! storage collaborators all share one enum.

/// Error type for extraction, summarization and storage operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Neither literal text nor a URL was supplied to the session.
    #[error("no text or URL was supplied to summarize")]
    MissingInput,

    /// Summary info or storage was requested before summarizing.
    #[error("the text has not been summarized yet")]
    NotSummarized,

    /// The parsed document lacks an element the extractor requires.
    #[error("document structure error: {0}")]
    Structure(String),

    /// Line-break normalization could not make progress.
    #[error("malformed markup: {0}")]
    MalformedMarkup(String),

    /// The storage path's extension is neither `txt` nor `pdf`.
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// Fetching a URL failed.
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Reading or writing a file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Rendering the PDF document failed.
    #[error("PDF rendering failed: {0}")]
    Pdf(String),

    /// Decoding a downloaded image failed.
    #[error("image decoding failed: {0}")]
    Image(String),
}

/// Result type alias for article-digest operations.
pub type Result<T> = std::result::Result<T, Error>;
