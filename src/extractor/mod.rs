//! Main-article extraction.
//!
//! # Module Structure
//!
//! - `cleaning`: noise stripping, `<br><br>` normalization, div flattening
//! - `scoring`: container scores keyed by node identity
//! - `title`: article title derivation
//!
//! The pipeline mutates the parsed tree in place; the tree is dropped when
//! extraction returns.

pub mod cleaning;
pub mod scoring;
pub mod title;

use std::collections::HashSet;

use tracing::debug;

use crate::dom::{self, Document, NodeRef};
use crate::error::{Error, Result};
use crate::options::Options;
use crate::result::ExtractResult;

/// Separator placed between paragraphs of the extracted text.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Parse `html` and extract its main article.
pub(crate) fn extract_content(html: &str, options: &Options) -> Result<ExtractResult> {
    debug!(html_len = html.len(), "starting content extraction");
    let document = dom::parse(html);
    extract_from_document(&document, options)
}

/// Extract the main article from an already parsed document.
///
/// The document's `<body>` is modified in place.
pub fn extract_from_document(document: &Document, options: &Options) -> Result<ExtractResult> {
    let root = document.root();
    let body = dom::find_first(&root, "body")
        .ok_or_else(|| Error::Structure("missing <body> in the node tree".to_string()))?;

    cleaning::strip_noise(&body);
    cleaning::normalize_breaks(document, &body)?;
    cleaning::flatten_divs(document, &body);

    let scores = scoring::score_containers(&body, options);
    let winners = scores.winners();
    debug!(winners = winners.len(), "selected winning containers");

    if winners.is_empty() {
        return Ok(ExtractResult::default());
    }

    Ok(ExtractResult {
        title: title::page_title(&root),
        main_text: paragraph_text(&winners),
        images: image_sources(&winners),
    })
}

/// Text of every distinct paragraph inside `containers`, blank-line separated.
fn paragraph_text(containers: &[NodeRef]) -> String {
    let mut seen = HashSet::new();

    dom::find_all_in(containers, "p")
        .iter()
        .filter(|p| seen.insert(p.id))
        .map(dom::node_text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR)
}

/// `src` of every distinct image inside `containers`.
fn image_sources(containers: &[NodeRef]) -> Vec<String> {
    let mut seen = HashSet::new();

    dom::find_all_in(containers, "img")
        .iter()
        .filter(|img| seen.insert(img.id))
        .filter_map(|img| dom::get_attribute(img, "src"))
        .collect()
}
