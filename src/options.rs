//! Configuration options for extraction and storage.
//!
//! The `Options` struct carries the heuristic weights used to score candidate
//! containers and the layout limits used when rendering a summary to PDF.

use std::path::PathBuf;

/// Configuration options for content extraction and summary storage.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use article_digest::Options;
///
/// let options = Options {
///     positive_weight: 40.0,
///     ..Options::default()
/// };
/// assert_eq!(options.negative_weight, 50.0);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Paragraphs whose text is longer than this many characters add one
    /// point to their parent container.
    ///
    /// Default: `10`
    pub min_paragraph_len: usize,

    /// Points added to a container for every class/id token matching the
    /// positive keyword pattern, once per paragraph it holds.
    ///
    /// Default: `25.0`
    pub positive_weight: f64,

    /// Points subtracted from a container for every class/id token matching
    /// the negative keyword pattern, once per paragraph it holds.
    ///
    /// Default: `50.0`
    pub negative_weight: f64,

    /// Maximum number of images placed above the body in PDF output.
    ///
    /// Default: `2`
    pub max_inline_images: usize,

    /// Images whose width plus height (pixels) is at or below this value are
    /// treated as icons and left out of PDF output.
    ///
    /// Default: `50`
    pub min_image_extent: u32,

    /// Directory for the temporary files holding downloaded images. `None`
    /// uses the system temporary directory.
    ///
    /// Default: `None`
    pub scratch_dir: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_paragraph_len: 10,
            positive_weight: 25.0,
            negative_weight: 50.0,
            max_inline_images: 2,
            min_image_extent: 50,
            scratch_dir: None,
        }
    }
}
