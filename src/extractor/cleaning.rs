//! Tree normalization run before scoring.
//!
//! Three in-place passes over the `<body>` subtree:
//! - noise stripping (`script`, `style`, `form`)
//! - conversion of `<br><br>`-separated text into real `<p>` elements
//! - flattening of wrapper `<div>`s that hold a single text node or paragraph

use tracing::debug;

use crate::dom::{self, Document, NodeRef};
use crate::error::{Error, Result};

/// Elements removed from the tree before any scoring happens.
pub const NOISE_TAGS: &[&str] = &["script", "style", "form"];

/// Remove every noise element under `body`.
pub fn strip_noise(body: &NodeRef) {
    for tag in NOISE_TAGS {
        let removed = dom::remove_all(body, tag);
        if removed > 0 {
            debug!(tag, removed, "stripped noise elements");
        }
    }
}

/// Rewrite forced line breaks into paragraph elements.
///
/// A run of two or more `<br>` siblings (whitespace-only text between them
/// is ignored) becomes a new `<p>` at the run's position, adopting every
/// following sibling up to the next such run or the end of the parent.
/// A lone `<br>` is deleted. Every pass removes at least one `<br>`, so the
/// loop is bounded by the initial break count.
pub fn normalize_breaks(document: &Document, body: &NodeRef) -> Result<()> {
    let budget = dom::find_all(body, "br").len();
    let mut paragraphs = 0usize;

    for _ in 0..=budget {
        let Some(br) = dom::find_first(body, "br") else {
            debug!(paragraphs, "normalized line breaks");
            return Ok(());
        };

        let run = following_breaks(&br);
        if run.is_empty() {
            br.remove_from_parent();
            continue;
        }

        for node in &run {
            node.remove_from_parent();
        }

        let paragraph = document.tree.new_element("p");
        br.insert_before(&paragraph);
        br.remove_from_parent();
        adopt_until_double_break(&paragraph);
        paragraphs += 1;
    }

    Err(Error::MalformedMarkup(format!(
        "line breaks remain after {} normalization passes",
        budget + 1
    )))
}

/// Replace wrapper `<div>`s with their only child.
///
/// A div whose sole child is a text node becomes a `<p>` holding that text;
/// a div whose sole child is a `<p>` is replaced by that paragraph. Either
/// way the result takes the div's former position.
pub fn flatten_divs(document: &Document, body: &NodeRef) {
    let mut flattened = 0usize;

    for div in dom::find_all(body, "div") {
        if div.parent().is_none() {
            continue;
        }
        let Some(child) = div.first_child() else {
            continue;
        };
        if child.next_sibling().is_some() {
            continue;
        }

        if child.is_text() {
            let paragraph = document.tree.new_element("p");
            div.insert_before(&paragraph);
            dom::move_into(&child, &paragraph);
        } else if dom::is_tag(&child, "p") {
            dom::move_before(&child, &div);
        } else {
            continue;
        }

        div.remove_from_parent();
        flattened += 1;
    }

    debug!(flattened, "flattened wrapper divs");
}

/// The `<br>` siblings directly following `br`, plus any whitespace-only
/// text between them. Empty when `br` stands alone.
fn following_breaks<'a>(br: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut run = Vec::new();
    let mut pending = Vec::new();
    let mut next = br.next_sibling();

    while let Some(node) = next {
        next = node.next_sibling();
        if dom::is_tag(&node, "br") {
            run.append(&mut pending);
            run.push(node);
        } else if dom::is_blank_text(&node) {
            pending.push(node);
        } else {
            break;
        }
    }

    run
}

fn starts_double_break(node: &NodeRef) -> bool {
    dom::is_tag(node, "br") && !following_breaks(node).is_empty()
}

fn adopt_until_double_break(paragraph: &NodeRef) {
    let mut next = paragraph.next_sibling();

    while let Some(node) = next {
        if starts_double_break(&node) {
            break;
        }
        next = node.next_sibling();
        dom::move_into(&node, paragraph);
    }
}
