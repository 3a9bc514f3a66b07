//! Summarizer session.
//!
//! A [`Summarizer`] is built from either literal text or a page URL. The
//! first successful [`Summarizer::summarize`] call resolves the text (fetching
//! and extracting the page when needed) and caches the summary; later calls
//! return the cached value without touching the network again.

use tracing::{debug, info, instrument};
use url::Url;

use crate::error::{Error, Result};
use crate::extractor;
use crate::fetch::{Fetcher, HttpFetcher};
use crate::options::Options;
use crate::result::SummaryInfo;
use crate::storage::{self, StoredSummary};
use crate::summary;
use crate::url_utils;

#[derive(Debug, Clone)]
enum Input {
    Text(String),
    Url(String),
}

/// A text-or-URL summarization session with a cached result.
///
/// ```rust
/// use article_digest::Summarizer;
///
/// let mut session = Summarizer::from_text(
///     "SpaceX launched a rocket.\n\nThe launch was successful. It was historic.",
/// );
/// assert!(!session.is_summarized());
/// assert_eq!(session.summarize()?, "The launch was successful");
/// assert!(session.is_summarized());
/// # Ok::<(), article_digest::Error>(())
/// ```
#[derive(Debug)]
pub struct Summarizer<F = HttpFetcher> {
    input: Input,
    fetcher: F,
    options: Options,
    full_text: String,
    title: String,
    images: Vec<String>,
    summary: Option<String>,
}

impl Summarizer<HttpFetcher> {
    /// Session over literal text.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::with_input(Input::Text(text.into()))
    }

    /// Session over the main article of the page at `url`.
    #[must_use]
    pub fn from_url(url: impl Into<String>) -> Self {
        Self::with_input(Input::Url(url.into()))
    }

    fn with_input(input: Input) -> Self {
        Self {
            input,
            fetcher: HttpFetcher::default(),
            options: Options::default(),
            full_text: String::new(),
            title: String::new(),
            images: Vec::new(),
            summary: None,
        }
    }
}

/// An empty session; summarizing it fails with [`Error::MissingInput`].
impl Default for Summarizer<HttpFetcher> {
    fn default() -> Self {
        Self::from_text(String::new())
    }
}

impl<F: Fetcher> Summarizer<F> {
    /// Replace the page and image fetcher.
    #[must_use]
    pub fn with_fetcher<G: Fetcher>(self, fetcher: G) -> Summarizer<G> {
        Summarizer {
            input: self.input,
            fetcher,
            options: self.options,
            full_text: self.full_text,
            title: self.title,
            images: self.images,
            summary: self.summary,
        }
    }

    /// Replace the extraction and storage options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Summarize the input, computing the summary at most once.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingInput`] when the session holds neither text nor a URL
    /// - fetch and extraction failures for URL sessions, unchanged
    #[instrument(skip(self))]
    pub fn summarize(&mut self) -> Result<&str> {
        if self.summary.is_none() {
            self.resolve_text()?;
            let summary = summary::summarize(&self.full_text);
            info!(
                original_len = self.full_text.chars().count(),
                summary_len = summary.chars().count(),
                "summarized text"
            );
            self.summary = Some(summary);
        }

        self.summary.as_deref().ok_or(Error::NotSummarized)
    }

    fn resolve_text(&mut self) -> Result<()> {
        match &self.input {
            Input::Text(text) if text.trim().is_empty() => Err(Error::MissingInput),
            Input::Url(url) if url.trim().is_empty() => Err(Error::MissingInput),
            Input::Text(text) => {
                self.full_text = text.clone();
                Ok(())
            }
            Input::Url(url) => {
                let url = url.trim().to_string();
                debug!(%url, "resolving page text");
                let html = self.fetcher.fetch_html(&url)?;
                let extracted = extractor::extract_content(&html, &self.options)?;

                let base = Url::parse(&url).ok();
                self.images = extracted
                    .images
                    .iter()
                    .map(|src| match &base {
                        Some(base) => url_utils::create_absolute_url(src, base),
                        None => src.clone(),
                    })
                    .collect();
                self.title = extracted.title;
                self.full_text = extracted.main_text;
                Ok(())
            }
        }
    }

    /// Whether [`Summarizer::summarize`] has succeeded.
    #[must_use]
    pub fn is_summarized(&self) -> bool {
        self.summary.is_some()
    }

    /// Length statistics of the cached summary.
    ///
    /// # Errors
    ///
    /// [`Error::NotSummarized`] before the first successful summarize call.
    pub fn summary_info(&self) -> Result<SummaryInfo> {
        let summary = self.summary.as_deref().ok_or(Error::NotSummarized)?;
        Ok(SummaryInfo::new(&self.full_text, summary, self.images.len()))
    }

    /// Write the cached summary to `path` (`.txt` or `.pdf`).
    ///
    /// # Errors
    ///
    /// - [`Error::NotSummarized`] before the first successful summarize call
    /// - [`Error::UnsupportedFileType`] for any other extension
    /// - I/O and PDF rendering failures, unchanged
    pub fn store_to_file(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let summary = self.summary.as_deref().ok_or(Error::NotSummarized)?;
        let stored = StoredSummary {
            title: &self.title,
            body: summary,
            images: &self.images,
        };
        storage::store(path.as_ref(), &stored, &self.fetcher, &self.options)
    }

    /// Extracted article title; empty for text sessions.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Absolute image URLs found next to the article; empty for text sessions.
    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// The text that was summarized; empty until summarized.
    #[must_use]
    pub fn full_text(&self) -> &str {
        &self.full_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingFetcher {
        html: &'static str,
        calls: Cell<usize>,
    }

    impl CountingFetcher {
        fn new(html: &'static str) -> Self {
            Self {
                html,
                calls: Cell::new(0),
            }
        }
    }

    impl Fetcher for CountingFetcher {
        fn fetch_bytes(&self, _url: &str) -> Result<Vec<u8>> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.html.as_bytes().to_vec())
        }
    }

    const PAGE: &str = r#"<html><head><title>Launch Report: Rocket Reaches Orbit Today</title></head>
        <body><div class="sidebar"><p>Subscribe to the newsletter today.</p></div>
        <article><img src="/img/rocket.jpg"><p>The rocket launched at dawn. The crowd cheered loudly.</p>
        <p>The rocket reached orbit. Engineers celebrated the rocket.</p></article></body></html>"#;

    #[test]
    fn empty_session_is_missing_input() {
        let mut session = Summarizer::default();
        assert!(matches!(session.summarize(), Err(Error::MissingInput)));
        assert!(!session.is_summarized());
    }

    #[test]
    fn blank_url_is_missing_input() {
        let mut session = Summarizer::from_url("  ").with_fetcher(CountingFetcher::new(PAGE));
        assert!(matches!(session.summarize(), Err(Error::MissingInput)));
    }

    #[test]
    fn info_and_store_require_summary() {
        let session = Summarizer::from_text("Some text. More text.");
        assert!(matches!(session.summary_info(), Err(Error::NotSummarized)));
        assert!(matches!(
            session.store_to_file("out.txt"),
            Err(Error::NotSummarized)
        ));
    }

    #[test]
    fn text_session_summarizes_once() {
        let mut session =
            Summarizer::from_text("SpaceX launched a rocket.\n\nThe launch was successful. It was historic.");
        let first = session.summarize().unwrap().to_string();
        let second = session.summarize().unwrap().to_string();

        assert_eq!(first, "The launch was successful");
        assert_eq!(first, second);
        assert!(session.is_summarized());
    }

    #[test]
    fn url_session_fetches_exactly_once() {
        let fetcher = CountingFetcher::new(PAGE);
        let mut session = Summarizer::from_url("https://news.example.com/launch").with_fetcher(&fetcher);

        let first = session.summarize().unwrap().to_string();
        let second = session.summarize().unwrap().to_string();

        assert_eq!(first, second);
        assert_eq!(fetcher.calls.get(), 1);
    }

    #[test]
    fn url_session_keeps_title_and_absolute_images() {
        let mut session =
            Summarizer::from_url("https://news.example.com/launch").with_fetcher(CountingFetcher::new(PAGE));
        session.summarize().unwrap();

        assert_eq!(session.title(), "Rocket Reaches Orbit Today");
        assert_eq!(session.images(), ["https://news.example.com/img/rocket.jpg"]);
        assert!(!session.full_text().contains("newsletter"));
    }

    #[test]
    fn summary_info_reports_full_reduction_for_empty_summary() {
        let mut session = Summarizer::from_text("test");
        assert_eq!(session.summarize().unwrap(), "");

        let info = session.summary_info().unwrap();
        assert_eq!(info.original_length, 4);
        assert_eq!(info.summary_length, 0);
        assert_eq!(info.reduction_percent, 100);
    }
}
