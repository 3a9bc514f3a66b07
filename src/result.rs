//! Result types for extraction and summarization output.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of main-content extraction from an HTML document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResult {
    /// Derived article title (empty when no winning container was found).
    pub title: String,

    /// Text of every paragraph in the winning container(s), separated by a
    /// blank line.
    pub main_text: String,

    /// `src` attribute of every image inside the winning container(s), in
    /// document order.
    pub images: Vec<String>,
}

impl ExtractResult {
    /// True when extraction produced no title, text or images.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.main_text.is_empty() && self.images.is_empty()
    }
}

/// Length and ratio statistics of a finished summary.
///
/// The `Display` form is the human-readable report printed by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryInfo {
    /// Character count of the summarized text.
    pub original_length: usize,
    /// Character count of the summary.
    pub summary_length: usize,
    /// How much shorter the summary is, as a whole percentage.
    pub reduction_percent: usize,
    /// Number of images extracted alongside the text.
    pub image_count: usize,
}

impl SummaryInfo {
    /// Compute statistics for an original text and its summary.
    #[must_use]
    pub fn new(original: &str, summary: &str, image_count: usize) -> Self {
        let original_length = original.chars().count();
        let summary_length = summary.chars().count();
        let reduction_percent = if original_length == 0 {
            0
        } else {
            100usize.saturating_sub(summary_length * 100 / original_length)
        };

        Self {
            original_length,
            summary_length,
            reduction_percent,
            image_count,
        }
    }
}

impl fmt::Display for SummaryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary info:")?;
        writeln!(f, " - Original length: {}", self.original_length)?;
        writeln!(f, " - Summary length:  {}", self.summary_length)?;
        writeln!(f, " - Summary ratio:   {}", self.reduction_percent)?;
        writeln!(f, " - Images:          {}", self.image_count)
    }
}
