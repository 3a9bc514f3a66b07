//! # article-digest
//!
//! Main-article extraction from HTML pages and one-sentence-per-paragraph
//! extractive summaries.
//!
//! The extractor scores every container of `<p>` elements by its class/id
//! keywords and paragraph lengths, keeps the best container(s) and returns
//! their text, images and a cleaned-up title. The summarizer ranks every
//! sentence by word overlap with the rest of the text and keeps the best
//! sentence of each paragraph.
//!
//! ## Quick Start
//!
//! ```rust
//! use article_digest::{extract, summarize};
//!
//! let html = r#"<html><head><title>Launch day</title></head>
//! <body><article class="post"><p>The rocket launched at dawn. Crowds cheered.</p>
//! <p>The rocket reached orbit. The crew waved.</p></article></body></html>"#;
//!
//! let result = extract(html)?;
//! println!("Title: {}", result.title);
//! println!("Summary: {}", summarize(&result.main_text));
//! # Ok::<(), article_digest::Error>(())
//! ```
//!
//! ## Sessions
//!
//! [`Summarizer`] wraps the whole flow for a text or a URL, caches the
//! summary and can store it as `.txt` or `.pdf`.

mod error;
mod options;
mod patterns;
mod result;

/// Tree query utilities over the parsed document.
pub mod dom;

/// Main-article extraction (cleaning, container scoring, title).
pub mod extractor;

/// Sentence ranking by lexical overlap.
pub mod ranking;

/// Extractive summary builder.
pub mod summary;

/// Cached text-or-URL summarization session.
pub mod session;

/// Page and image retrieval.
pub mod fetch;

/// Summary storage as text or PDF.
pub mod storage;

/// Character encoding detection and transcoding.
pub mod encoding;

/// URL classification and resolution.
pub mod url_utils;

/// Interactive console prompts.
pub mod console;

// Public API - re-exports
pub use error::{Error, Result};
pub use fetch::{Fetcher, HttpFetcher};
pub use options::Options;
pub use ranking::{rank_sentences, sentences_intersected_words_count, RankTable};
pub use result::{ExtractResult, SummaryInfo};
pub use session::Summarizer;
pub use summary::summarize;

/// Extracts the main article from an HTML document using default options.
///
/// # Errors
///
/// [`Error::Structure`] when the document has no `<body>`, and
/// [`Error::MalformedMarkup`] when line breaks cannot be normalized.
///
/// # Example
///
/// ```rust
/// use article_digest::extract;
///
/// let html = "<html><body><div class=\"content\"><p>Main content here.</p></div></body></html>";
/// let result = extract(html)?;
/// assert_eq!(result.main_text, "Main content here.");
/// # Ok::<(), article_digest::Error>(())
/// ```
pub fn extract(html: &str) -> Result<ExtractResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts the main article from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use article_digest::{extract_with_options, Options};
///
/// let html = "<html><body><div><p>Short</p></div></body></html>";
/// let options = Options {
///     min_paragraph_len: 3,
///     ..Options::default()
/// };
/// let result = extract_with_options(html, &options)?;
/// assert_eq!(result.main_text, "Short");
/// # Ok::<(), article_digest::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractResult> {
    extractor::extract_content(html, options)
}

/// Extracts the main article from HTML bytes, decoding them with the
/// charset the page declares.
///
/// Invalid characters are replaced with U+FFFD rather than causing errors.
///
/// # Example
///
/// ```rust
/// use article_digest::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9 au lait</p></body></html>";
/// let result = extract_bytes(html)?;
/// assert!(result.main_text.contains("Café"));
/// # Ok::<(), article_digest::Error>(())
/// ```
pub fn extract_bytes(html: &[u8]) -> Result<ExtractResult> {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts the main article from HTML bytes with custom options.
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<ExtractResult> {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, options)
}
