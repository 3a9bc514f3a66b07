//! Tree query utilities.
//!
//! Thin helpers over `dom_query`'s arena tree. Nodes are addressed by
//! `NodeRef` (a `NodeId` plus a borrow of the tree), so removing or moving a
//! node never invalidates the identity of any other node.

pub use dom_query::{Document, NodeId, NodeRef};

// === Parsing ===

/// Parse an HTML string into a document.
///
/// Malformed input yields a best-effort tree; parsing never fails.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Node Information ===

/// Get the lowercase tag name of an element node.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|name| name.to_string())
}

/// Check whether `node` is an element with the given tag name.
#[must_use]
pub fn is_tag(node: &NodeRef, tag: &str) -> bool {
    node.is_element() && node.node_name().is_some_and(|name| &*name == tag)
}

/// Check whether `node` is a text node holding only whitespace.
#[must_use]
pub fn is_blank_text(node: &NodeRef) -> bool {
    node.is_text() && node.text().trim().is_empty()
}

/// Read an attribute value, or `None` if it is absent.
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|value| value.to_string())
}

// === Querying ===

/// Collect every element with tag `tag` under `root` (including `root`
/// itself), in document order.
#[must_use]
pub fn find_all<'a>(root: &NodeRef<'a>, tag: &str) -> Vec<NodeRef<'a>> {
    let mut found = Vec::new();
    let mut stack = vec![root.clone()];

    while let Some(node) = stack.pop() {
        if is_tag(&node, tag) {
            found.push(node.clone());
        }
        let mut children = node.children();
        children.reverse();
        stack.extend(children);
    }

    found
}

/// Collect every element with tag `tag` under any of `roots`.
#[must_use]
pub fn find_all_in<'a>(roots: &[NodeRef<'a>], tag: &str) -> Vec<NodeRef<'a>> {
    roots.iter().flat_map(|root| find_all(root, tag)).collect()
}

/// Find the first element with tag `tag` under `root` in document order.
#[must_use]
pub fn find_first<'a>(root: &NodeRef<'a>, tag: &str) -> Option<NodeRef<'a>> {
    let mut stack = vec![root.clone()];

    while let Some(node) = stack.pop() {
        if is_tag(&node, tag) {
            return Some(node);
        }
        let mut children = node.children();
        children.reverse();
        stack.extend(children);
    }

    None
}

// === Tree Manipulation ===

/// Detach every element with tag `tag` under `root`, returning how many
/// were removed.
pub fn remove_all(root: &NodeRef, tag: &str) -> usize {
    let doomed = find_all(root, tag);
    for node in &doomed {
        node.remove_from_parent();
    }
    doomed.len()
}

/// Move `node` so that it sits immediately before `anchor`.
pub fn move_before(node: &NodeRef, anchor: &NodeRef) {
    node.remove_from_parent();
    anchor.insert_before(node);
}

/// Move `node` so that it becomes the last child of `parent`.
pub fn move_into(node: &NodeRef, parent: &NodeRef) {
    node.remove_from_parent();
    parent.append_child(node);
}

// === Text Content ===

/// Concatenate the text under `node`, rendering `<br>` elements as newlines,
/// and trim the result.
#[must_use]
pub fn node_text(node: &NodeRef) -> String {
    let mut text = String::new();
    let mut stack = if node.is_text() {
        vec![node.clone()]
    } else {
        let mut children = node.children();
        children.reverse();
        children
    };

    while let Some(current) = stack.pop() {
        if current.is_text() {
            text.push_str(&current.text());
        } else if is_tag(&current, "br") {
            text.push('\n');
        } else {
            let mut children = current.children();
            children.reverse();
            stack.extend(children);
        }
    }

    text.trim().to_string()
}
