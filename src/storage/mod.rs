//! Summary storage.
//!
//! # Module Structure
//!
//! - `text`: plain text, body only
//! - `pdf`: paginated document with title and inline images
//! - `layout`: page geometry and word wrapping used by `pdf`
//!
//! The output kind is chosen from the path extension.

pub mod layout;
mod pdf;
mod text;

use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::fetch::Fetcher;
use crate::options::Options;

/// Output format of a stored summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// `.txt`
    Text,
    /// `.pdf`
    Pdf,
}

impl FileKind {
    /// Output kind for `path`, by case-insensitive extension.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedFileType`] for anything other than `txt` or `pdf`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("txt") => Ok(Self::Text),
            Some("pdf") => Ok(Self::Pdf),
            _ => Err(Error::UnsupportedFileType(path.display().to_string())),
        }
    }
}

/// What gets written: a summary and the article it came from.
#[derive(Debug, Clone, Copy)]
pub struct StoredSummary<'a> {
    /// Article title, used as the PDF heading.
    pub title: &'a str,
    /// Summary text.
    pub body: &'a str,
    /// Absolute image URLs; only the PDF output uses them.
    pub images: &'a [String],
}

/// Write `summary` to `path`, fetching images through `fetcher` for PDF
/// output.
///
/// # Errors
///
/// - [`Error::UnsupportedFileType`] for an unrecognized extension
/// - I/O and PDF rendering failures
pub fn store<F: Fetcher + ?Sized>(
    path: &Path,
    summary: &StoredSummary<'_>,
    fetcher: &F,
    options: &Options,
) -> Result<()> {
    let kind = FileKind::from_path(path)?;
    match kind {
        FileKind::Text => text::write_text(path, summary.body)?,
        FileKind::Pdf => pdf::write_pdf(path, summary, fetcher, options)?,
    }

    info!(path = %path.display(), ?kind, "stored summary");
    Ok(())
}
