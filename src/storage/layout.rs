//! Page geometry and line wrapping for PDF output.
//!
//! All lengths are PDF points (1/72 inch).

/// A4 width.
pub const PAGE_WIDTH: f32 = 595.28;
/// A4 height.
pub const PAGE_HEIGHT: f32 = 841.89;
/// Margin on every side of the page.
pub const MARGIN: f32 = 40.0;
/// Usable width between the left and right margins.
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

/// Line height as a multiple of the font size.
pub const LINE_SPACING: f32 = 1.4;

/// Average Helvetica glyph width as a fraction of the font size.
const AVERAGE_GLYPH_WIDTH: f32 = 0.5;

/// Convert points to millimetres.
#[must_use]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt * 25.4 / 72.0
}

/// Estimated rendered width of `text` at `font_size`.
#[must_use]
pub fn text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * AVERAGE_GLYPH_WIDTH
}

/// Break `text` into lines no wider than `max_width` at `font_size`.
///
/// Explicit newlines always end a line and blank source lines are kept.
/// A single word wider than the line is placed on a line of its own.
#[must_use]
pub fn wrap_lines(text: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for source_line in text.lines() {
        let mut current = String::new();
        for word in source_line.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }

            let candidate_width = text_width(&current, font_size) + text_width(" ", font_size) + text_width(word, font_size);
            if candidate_width > max_width {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            } else {
                current.push(' ');
                current.push_str(word);
            }
        }
        lines.push(current);
    }

    lines
}

/// Scale factor that fits an image of `width` points into the content area.
///
/// Images narrower than the content area keep their size.
#[must_use]
pub fn fit_scale(width: f32) -> f32 {
    if width <= CONTENT_WIDTH || width <= 0.0 {
        1.0
    } else {
        CONTENT_WIDTH / width
    }
}
