//! PDF rendering of a stored summary.
//!
//! Layout runs top-down: the title, up to `max_inline_images` pictures, then
//! the wrapped body. A new page starts whenever the next item would cross
//! the bottom margin.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use printpdf::image_crate::{self, DynamicImage, GenericImageView};
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference,
};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::layout::{self, LINE_SPACING, MARGIN, PAGE_HEIGHT, PAGE_WIDTH};
use super::StoredSummary;
use crate::error::{Error, Result};
use crate::fetch::Fetcher;
use crate::options::Options;
use crate::url_utils;

const TITLE_FONT_SIZE: f32 = 16.0;
const BODY_FONT_SIZE: f32 = 12.0;
/// Gap between the image block and the body.
const SECTION_GAP: f32 = 5.0;
const LAYER_NAME: &str = "Layer 1";
/// Name prefix of downloaded image scratch files.
const SCRATCH_PREFIX: &str = "article-digest-";
/// Images are placed at one pixel per point.
const IMAGE_DPI: f32 = 72.0;

fn pdf_error(err: impl std::fmt::Debug) -> Error {
    Error::Pdf(format!("{err:?}"))
}

/// Tracks the current layer and how far down the page content has reached.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    used: f32,
}

impl<'a> PageWriter<'a> {
    fn new(doc: &'a PdfDocumentReference, layer: PdfLayerReference) -> Self {
        Self {
            doc,
            layer,
            used: MARGIN,
        }
    }

    /// Start a new page unless `height` more points fit on the current one.
    fn reserve(&mut self, height: f32) {
        if self.used + height > PAGE_HEIGHT - MARGIN && self.used > MARGIN {
            let (page, layer) = self
                .doc
                .add_page(Mm(layout::pt_to_mm(PAGE_WIDTH)), Mm(layout::pt_to_mm(PAGE_HEIGHT)), LAYER_NAME);
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.used = MARGIN;
        }
    }

    fn write_lines(&mut self, text: &str, font_size: f32, font: &IndirectFontRef) {
        let line_height = font_size * LINE_SPACING;
        for line in layout::wrap_lines(text, font_size, layout::CONTENT_WIDTH) {
            self.reserve(line_height);
            self.used += line_height;
            if !line.is_empty() {
                self.layer.use_text(
                    line,
                    font_size,
                    Mm(layout::pt_to_mm(MARGIN)),
                    Mm(layout::pt_to_mm(PAGE_HEIGHT - self.used)),
                    font,
                );
            }
        }
    }

    fn place_image(&mut self, image: &DynamicImage) {
        let (width, height) = GenericImageView::dimensions(image);
        let scale = layout::fit_scale(width as f32);
        let placed_height = height as f32 * scale;

        self.reserve(placed_height);
        self.used += placed_height;

        let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
        Image::from_dynamic_image(&rgb).add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(layout::pt_to_mm(MARGIN))),
                translate_y: Some(Mm(layout::pt_to_mm(PAGE_HEIGHT - self.used))),
                scale_x: Some(scale),
                scale_y: Some(scale),
                dpi: Some(IMAGE_DPI),
                ..Default::default()
            },
        );
    }
}

/// Render `summary` as a PDF document at `path`.
pub(crate) fn write_pdf<F: Fetcher + ?Sized>(
    path: &Path,
    summary: &StoredSummary<'_>,
    fetcher: &F,
    options: &Options,
) -> Result<()> {
    let (doc, page, layer) = PdfDocument::new(
        summary.title,
        Mm(layout::pt_to_mm(PAGE_WIDTH)),
        Mm(layout::pt_to_mm(PAGE_HEIGHT)),
        LAYER_NAME,
    );
    let font = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_error)?;

    let first_layer = doc.get_page(page).get_layer(layer);
    let mut writer = PageWriter::new(&doc, first_layer);
    writer.write_lines(summary.title, TITLE_FONT_SIZE, &font);

    // Scratch files must outlive the save below.
    let mut scratch = Vec::new();
    let mut placed = 0;
    for url in summary.images {
        if placed >= options.max_inline_images {
            break;
        }
        let Some(extension) = url_utils::image_extension(url) else {
            continue;
        };

        match download_image(url, extension, fetcher, options) {
            Ok((file, image)) => {
                scratch.push(file);
                let (width, height) = GenericImageView::dimensions(&image);
                if width + height <= options.min_image_extent {
                    debug!(%url, width, height, "skipping icon-sized image");
                    continue;
                }
                writer.place_image(&image);
                placed += 1;
            }
            Err(err) => warn!(%url, error = %err, "skipping image"),
        }
    }

    writer.used += SECTION_GAP;
    writer.write_lines(summary.body, BODY_FONT_SIZE, &font);

    let mut out = BufWriter::new(File::create(path)?);
    doc.save(&mut out).map_err(pdf_error)?;
    out.flush()?;

    debug!(images = placed, scratch = scratch.len(), "saved PDF");
    drop(scratch);
    Ok(())
}

/// Fetch an image into a random-named temporary file and decode it.
fn download_image<F: Fetcher + ?Sized>(
    url: &str,
    extension: &str,
    fetcher: &F,
    options: &Options,
) -> Result<(NamedTempFile, DynamicImage)> {
    let bytes = fetcher.fetch_bytes(url)?;

    let suffix = format!(".{extension}");
    let mut builder = tempfile::Builder::new();
    builder.prefix(SCRATCH_PREFIX).suffix(&suffix);
    let mut file = match &options.scratch_dir {
        Some(dir) => builder.tempfile_in(dir)?,
        None => builder.tempfile()?,
    };
    file.write_all(&bytes)?;
    file.flush()?;

    let image = image_crate::open(file.path()).map_err(|err| Error::Image(err.to_string()))?;
    Ok((file, image))
}
