//! Sentence ranking by lexical overlap.
//!
//! Every sentence is compared with every other sentence of the whole text;
//! its rank is the sum of those pairwise similarity scores. Ranks are stored
//! under the sentence's canonical key (letters only), so the table can be
//! queried with sentences split out of a single paragraph later on.

use std::collections::{HashMap, HashSet};

use tracing::debug;

/// Delimiter that ends a sentence. Newlines are rewritten to it first.
pub const SENTENCE_DELIMITER: &str = ". ";

/// Delimiter between paragraphs.
pub const PARAGRAPH_DELIMITER: &str = "\n\n";

/// Split `content` into non-blank sentence candidates.
///
/// Newlines are treated as sentence ends, so line-broken and
/// period-delimited text share one rule. Candidates keep their original
/// spelling (including a final period at the very end of the text).
#[must_use]
pub fn split_sentences(content: &str) -> Vec<String> {
    content
        .replace('\n', SENTENCE_DELIMITER)
        .split(SENTENCE_DELIMITER)
        .filter(|sentence| !sentence.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Split `content` into non-blank paragraphs.
#[must_use]
pub fn split_paragraphs(content: &str) -> Vec<&str> {
    content
        .split(PARAGRAPH_DELIMITER)
        .filter(|paragraph| !paragraph.trim().is_empty())
        .collect()
}

/// Reduce a sentence to its letters, preserving case.
#[must_use]
pub fn canonical_key(sentence: &str) -> String {
    sentence.chars().filter(|c| c.is_alphabetic()).collect()
}

/// Lexical overlap of two sentences.
///
/// The number of distinct words present in both sentences, divided by the
/// average distinct-word count of the two. The average uses integer
/// division, so odd totals round the denominator down and short sentences
/// score slightly higher than an exact mean would give.
#[must_use]
pub fn sentences_intersected_words_count(first: &str, second: &str) -> f64 {
    let first: HashSet<&str> = first.split_whitespace().collect();
    let second: HashSet<&str> = second.split_whitespace().collect();

    let denominator = (first.len() + second.len()) / 2;
    if denominator == 0 {
        return 0.0;
    }

    first.intersection(&second).count() as f64 / denominator as f64
}

/// Document-wide sentence ranks, keyed by canonical sentence key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankTable {
    ranks: HashMap<String, f64>,
}

impl RankTable {
    /// Rank of the sentence with the same canonical key as `sentence`,
    /// zero if no such sentence was ranked.
    #[must_use]
    pub fn rank_of(&self, sentence: &str) -> f64 {
        self.get(&canonical_key(sentence)).unwrap_or_default()
    }

    /// Rank stored under an already canonical key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.ranks.get(key).copied()
    }

    /// Number of distinct canonical keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// True when the text held no sentences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Iterate over `(canonical key, rank)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.ranks.iter().map(|(key, rank)| (key.as_str(), *rank))
    }
}

/// Rank every sentence of `content` against all the others.
///
/// Sentences sharing a canonical key overwrite each other; the last one
/// in text order keeps its rank.
#[must_use]
pub fn rank_sentences(content: &str) -> RankTable {
    let sentences = split_sentences(content);
    let count = sentences.len();
    let mut totals = vec![0.0_f64; count];

    for i in 0..count {
        for j in (i + 1)..count {
            let score = sentences_intersected_words_count(&sentences[i], &sentences[j]);
            totals[i] += score;
            totals[j] += score;
        }
    }

    let ranks = sentences
        .iter()
        .zip(totals)
        .map(|(sentence, total)| (canonical_key(sentence), total))
        .collect::<HashMap<_, _>>();

    debug!(sentences = count, keys = ranks.len(), "ranked sentences");
    RankTable { ranks }
}
