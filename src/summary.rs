//! Extractive summary: the best-ranked sentence of every paragraph.

use tracing::debug;

use crate::ranking::{self, RankTable};

/// Separator between the chosen sentences of a summary.
pub const SUMMARY_SEPARATOR: &str = "\n";

/// Paragraphs with fewer sentences than this contribute nothing.
const MIN_PARAGRAPH_SENTENCES: usize = 2;

/// Summarize `content` with one sentence per paragraph.
///
/// Sentences are ranked against the whole text, then the top sentence of
/// every paragraph holding at least two sentences is kept, in paragraph
/// order. Text written one sentence per paragraph would yield nothing, so
/// it is retried once with its paragraphs merged into one.
///
/// ```rust
/// use article_digest::summarize;
///
/// let text = "SpaceX launched a rocket.\n\nThe launch was successful. It was historic.";
/// assert_eq!(summarize(text), "The launch was successful");
/// ```
#[must_use]
pub fn summarize(content: &str) -> String {
    let content = content.replace("\r\n", "\n");
    let draft = Draft::build(&content);

    if draft.needs_flattening() {
        debug!(
            paragraphs = draft.paragraphs,
            "one sentence per paragraph, retrying as a single paragraph"
        );
        let flattened = ranking::split_paragraphs(&content)
            .iter()
            .map(|paragraph| paragraph.trim())
            .collect::<Vec<_>>()
            .join(" ");
        return Draft::build(&flattened).summary;
    }

    draft.summary
}

/// The top-ranked sentence of `paragraph`, or `None` when the paragraph has
/// fewer than two sentences.
///
/// Ties keep the earliest sentence.
#[must_use]
pub fn best_sentence(paragraph: &str, ranks: &RankTable) -> Option<String> {
    let sentences = ranking::split_sentences(paragraph);
    if sentences.len() < MIN_PARAGRAPH_SENTENCES {
        return None;
    }

    let mut best = None;
    let mut best_rank = -1.0_f64;
    for sentence in sentences {
        let rank = ranks.rank_of(&sentence);
        if rank > best_rank {
            best_rank = rank;
            best = Some(sentence);
        }
    }

    best
}

/// One summarization pass and the counts the fallback decision needs.
struct Draft {
    summary: String,
    ranked_sentences: usize,
    paragraphs: usize,
}

impl Draft {
    fn build(content: &str) -> Self {
        let ranks = ranking::rank_sentences(content);
        let paragraphs = ranking::split_paragraphs(content);

        let summary = paragraphs
            .iter()
            .filter_map(|paragraph| best_sentence(paragraph, &ranks))
            .map(|sentence| sentence.trim().to_string())
            .filter(|sentence| !sentence.is_empty())
            .collect::<Vec<_>>()
            .join(SUMMARY_SEPARATOR);

        Self {
            summary,
            ranked_sentences: ranks.len(),
            paragraphs: paragraphs.len(),
        }
    }

    fn needs_flattening(&self) -> bool {
        self.summary.is_empty() && self.paragraphs > 1 && self.ranked_sentences == self.paragraphs
    }
}
