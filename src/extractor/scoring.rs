//! Container scoring.
//!
//! Every parent of a `<p>` is a candidate container. Scores are keyed by
//! `NodeId`, so two identical-looking containers at different positions are
//! scored independently.

use std::collections::HashMap;

use tracing::debug;

use crate::dom::{self, NodeId, NodeRef};
use crate::options::Options;
use crate::patterns::{NEGATIVE_CLASS, POSITIVE_CLASS};

/// Attributes whose whitespace-separated tokens are matched against the
/// keyword patterns.
const SCORED_ATTRIBUTES: &[&str] = &["class", "id"];

/// Running scores for candidate containers of one extraction call.
///
/// Containers are remembered in the order they were first seen so that
/// winners come back in document order.
#[derive(Default)]
pub struct ContainerScores<'a> {
    order: Vec<NodeRef<'a>>,
    scores: HashMap<NodeId, f64>,
}

impl<'a> ContainerScores<'a> {
    fn entry(&mut self, node: &NodeRef<'a>) -> &mut f64 {
        if !self.scores.contains_key(&node.id) {
            self.order.push(node.clone());
        }
        self.scores.entry(node.id).or_insert(0.0)
    }

    /// Score of a container, zero if it was never seen.
    #[must_use]
    pub fn score(&self, id: NodeId) -> f64 {
        self.scores.get(&id).copied().unwrap_or_default()
    }

    /// Number of scored containers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no paragraph had a parent to score.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Every container sharing the highest score, in document order.
    ///
    /// The bar starts at zero: containers that ended up negative never win,
    /// and when nothing is positive every zero-scored container ties.
    #[must_use]
    pub fn winners(&self) -> Vec<NodeRef<'a>> {
        let best = self
            .order
            .iter()
            .map(|node| self.score(node.id))
            .fold(0.0_f64, f64::max);

        self.order
            .iter()
            .filter(|node| self.score(node.id) == best)
            .cloned()
            .collect()
    }
}

/// Score the parent of every paragraph under `body`.
#[must_use]
pub fn score_containers<'a>(body: &NodeRef<'a>, options: &Options) -> ContainerScores<'a> {
    let mut scores = ContainerScores::default();

    for paragraph in dom::find_all(body, "p") {
        let Some(parent) = paragraph.parent() else {
            continue;
        };

        let mut delta = SCORED_ATTRIBUTES
            .iter()
            .map(|attr| attribute_score(&parent, attr, options))
            .sum::<f64>();

        if dom::node_text(&paragraph).chars().count() > options.min_paragraph_len {
            delta += 1.0;
        }

        *scores.entry(&parent) += delta;
    }

    debug!(containers = scores.len(), "scored candidate containers");
    scores
}

/// Sum of keyword weights over the tokens of one attribute.
///
/// A token matching the negative pattern is not also checked against the
/// positive one.
fn attribute_score(node: &NodeRef, attr: &str, options: &Options) -> f64 {
    let Some(value) = dom::get_attribute(node, attr) else {
        return 0.0;
    };

    value
        .split_whitespace()
        .map(|token| {
            if NEGATIVE_CLASS.is_match(token) {
                -options.negative_weight
            } else if POSITIVE_CLASS.is_match(token) {
                options.positive_weight
            } else {
                0.0
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    fn score_of(doc: &Document, selector: &str) -> f64 {
        let body = dom::find_first(&doc.root(), "body").unwrap();
        let scores = score_containers(&body, &Options::default());
        let node = doc.select(selector).nodes().first().unwrap().id;
        scores.score(node)
    }

    #[test]
    fn positive_class_adds_weight_per_paragraph() {
        let doc = dom::parse(r#"<body><div id="x" class="post"><p>short</p><p>tiny</p></div></body>"#);
        assert_eq!(score_of(&doc, "#x"), 50.0);
    }

    #[test]
    fn negative_class_subtracts_weight() {
        let doc = dom::parse(r#"<body><div id="x" class="sidebar"><p>short</p></div></body>"#);
        assert_eq!(score_of(&doc, "#x"), -50.0);
    }

    #[test]
    fn negative_token_wins_over_positive_match() {
        let doc = dom::parse(r#"<body><div id="x" class="comment-content"><p>short</p></div></body>"#);
        assert_eq!(score_of(&doc, "#x"), -50.0);
    }

    #[test]
    fn id_and_class_both_count() {
        let doc = dom::parse(r#"<body><div id="main" class="story"><p>short</p></div></body>"#);
        assert_eq!(score_of(&doc, "#main"), 50.0);
    }

    #[test]
    fn long_paragraph_adds_one_point() {
        let doc = dom::parse(r#"<body><section id="x"><p>This paragraph is long enough.</p><p>ten chars!</p></section></body>"#);
        assert_eq!(score_of(&doc, "#x"), 1.0);
    }

    #[test]
    fn ties_keep_every_winner_in_document_order() {
        let doc = dom::parse(
            r#"<body><div id="a" class="post"><p>First article paragraph.</p></div><div id="b" class="post"><p>Second article paragraph.</p></div></body>"#,
        );
        let body = dom::find_first(&doc.root(), "body").unwrap();
        let scores = score_containers(&body, &Options::default());
        let winners: Vec<_> = scores
            .winners()
            .iter()
            .filter_map(|node| dom::get_attribute(node, "id"))
            .collect();

        assert_eq!(winners, vec!["a", "b"]);
    }

    #[test]
    fn negative_only_containers_never_win() {
        let doc = dom::parse(r#"<body><div class="footer"><p>Copyright notice text.</p></div></body>"#);
        let body = dom::find_first(&doc.root(), "body").unwrap();
        let scores = score_containers(&body, &Options::default());

        assert_eq!(scores.len(), 1);
        assert!(scores.winners().is_empty());
    }

    #[test]
    fn lone_unscored_container_wins_by_default() {
        let doc = dom::parse(r#"<body><section><p>tiny</p></section></body>"#);
        let body = dom::find_first(&doc.root(), "body").unwrap();
        let scores = score_containers(&body, &Options::default());

        assert_eq!(scores.winners().len(), 1);
    }

    #[test]
    fn unseen_node_scores_zero() {
        let doc = dom::parse("<body><p>x</p></body>");
        let body = dom::find_first(&doc.root(), "body").unwrap();
        let scores = ContainerScores::default();

        assert_eq!(scores.score(body.id), 0.0);
        assert!(scores.is_empty());
    }
}
