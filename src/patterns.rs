//! Compiled regex patterns used by the extractor and the CLI.
//!
//! All patterns are compiled once on first use via `LazyLock` and shared
//! for the lifetime of the process.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Container Scoring Patterns
// =============================================================================

/// Matches class/id tokens signalling navigation or boilerplate.
///
/// The `hid` alternatives only match the bare token so that words such as
/// "hide-and-seek" or "hidden" are handled by their own alternatives.
pub static NEGATIVE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(hidden|^hid$| hid$| hid |^hid |banner|combx|comment|com-|contact|foot|footer|footnote|masthead|media|meta|modal|outbrain|promo|related|scroll|share|shoutbox|sidebar|skyscraper|sponsor|shopping|tags|tool|widget)",
    )
    .expect("NEGATIVE_CLASS regex")
});

/// Matches class/id tokens likely to name the article body.
pub static POSITIVE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(article|body|content|entry|hentry|h-entry|main|page|pagination|post|text|blog|story)")
        .expect("POSITIVE_CLASS regex")
});

// =============================================================================
// Input Classification Patterns
// =============================================================================

/// Matches a bare web address such as `example.com/news/1`, with or without scheme.
pub static URL_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?[-a-zA-Z0-9@:%._+~#=]{2,256}\.[a-z]{2,6}\b([-a-zA-Z0-9@:%_+.~#?&/=]*)$")
        .expect("URL_LIKE regex")
});

/// Matches a declared charset in `<meta charset>` or `http-equiv` content.
pub static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("META_CHARSET regex")
});
