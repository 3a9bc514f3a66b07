//! Article title derivation.
//!
//! Starts from the `<title>` element and refines it with the page headings:
//! a heading that repeats the page title verbatim is the article title, a
//! "Site: Article" title keeps only its last segment, and an implausibly
//! short or long title defers to a lone `<h1>`.

use crate::dom::{self, NodeRef};

/// Titles shorter or longer than this (in characters) are considered
/// unreliable when they carry no colon.
const PLAUSIBLE_TITLE_LEN: std::ops::RangeInclusive<usize> = 15..=150;

/// Minimum words in the segment after the last colon for it to replace the
/// full title.
const MIN_SEGMENT_WORDS: usize = 3;

/// Derive the article title from the document rooted at `root`.
#[must_use]
pub fn page_title(root: &NodeRef) -> String {
    let title = dom::find_first(root, "title")
        .map(|node| dom::node_text(&node))
        .unwrap_or_default();

    if !title.is_empty() {
        let mut headings = dom::find_all(root, "h1");
        headings.extend(dom::find_all(root, "h2"));
        if let Some(heading) = headings
            .iter()
            .map(dom::node_text)
            .find(|text| *text == title)
        {
            return heading;
        }
    }

    let chosen = if let Some((_, segment)) = title.rsplit_once(':') {
        if segment.split_whitespace().count() < MIN_SEGMENT_WORDS {
            title.as_str()
        } else {
            segment
        }
    } else if PLAUSIBLE_TITLE_LEN.contains(&title.chars().count()) {
        title.as_str()
    } else {
        match dom::find_all(root, "h1").as_slice() {
            [only] => return dom::node_text(only),
            _ => title.as_str(),
        }
    };

    chosen.trim().to_string()
}
