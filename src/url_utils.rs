//! URL helpers for input classification and image resolution.

use url::Url;

use crate::patterns::URL_LIKE;

/// Image extensions the PDF renderer can embed.
const EMBEDDABLE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Check if a string is an absolute `http(s)` URL with a host.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => (true, Some(url)),
        _ => (false, None),
    }
}

/// Resolve an image `src` against the page it was found on.
///
/// Inline `data:` payloads and script or mail links are returned unchanged,
/// as is anything the base cannot resolve.
#[must_use]
pub fn create_absolute_url(url_str: &str, base: &Url) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty()
        || url_str.starts_with("data:")
        || url_str.starts_with("javascript:")
        || url_str.starts_with("mailto:")
    {
        return url_str.to_string();
    }

    if is_absolute_url(url_str).0 {
        return url_str.to_string();
    }

    base.join(url_str)
        .map_or_else(|_| url_str.to_string(), |resolved| resolved.to_string())
}

/// Lowercase extension of an embeddable image URL (`jpg`, `jpeg` or `png`).
///
/// Query strings and fragments are ignored.
#[must_use]
pub fn image_extension(url: &str) -> Option<&'static str> {
    let path = Url::parse(url)
        .map(|parsed| parsed.path().to_string())
        .unwrap_or_else(|_| {
            url.split(['?', '#'])
                .next()
                .unwrap_or_default()
                .to_string()
        });

    let (_, extension) = path.rsplit_once('.')?;
    let extension = extension.to_ascii_lowercase();
    EMBEDDABLE_EXTENSIONS
        .into_iter()
        .find(|candidate| *candidate == extension)
}

/// Whether user input names a web page rather than literal text.
#[must_use]
pub fn looks_like_url(input: &str) -> bool {
    let input = input.trim();
    is_absolute_url(input).0 || URL_LIKE.is_match(input)
}

/// Prefix `https://` to a bare domain; absolute URLs pass through.
#[must_use]
pub fn normalize_input_url(input: &str) -> String {
    let input = input.trim();
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{input}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("https://example.com/page").0);
        assert!(is_absolute_url("http://example.com").0);
        assert!(!is_absolute_url("/relative/path").0);
        assert!(!is_absolute_url("ftp://example.com").0);
        assert!(!is_absolute_url("").0);
    }

    #[test]
    fn test_create_absolute_url_resolves_relative() {
        let base = Url::parse("https://example.com/blog/post.html").unwrap();

        assert_eq!(
            create_absolute_url("/img/a.png", &base),
            "https://example.com/img/a.png"
        );
        assert_eq!(
            create_absolute_url("b.jpg", &base),
            "https://example.com/blog/b.jpg"
        );
        assert_eq!(
            create_absolute_url("//cdn.example.net/c.png", &base),
            "https://cdn.example.net/c.png"
        );
    }

    #[test]
    fn test_create_absolute_url_keeps_special_schemes() {
        let base = Url::parse("https://example.com/").unwrap();

        assert_eq!(
            create_absolute_url("data:image/png;base64,AAAA", &base),
            "data:image/png;base64,AAAA"
        );
        assert_eq!(
            create_absolute_url("https://other.org/x.jpg", &base),
            "https://other.org/x.jpg"
        );
    }

    #[test]
    fn test_image_extension() {
        assert_eq!(image_extension("https://a.com/photo.JPG"), Some("jpg"));
        assert_eq!(image_extension("https://a.com/photo.jpeg?w=300"), Some("jpeg"));
        assert_eq!(image_extension("/static/logo.png#top"), Some("png"));
        assert_eq!(image_extension("https://a.com/anim.gif"), None);
        assert_eq!(image_extension("https://a.com/no-extension"), None);
    }

    #[test]
    fn test_looks_like_url() {
        assert!(looks_like_url("https://example.com/article"));
        assert!(looks_like_url("example.com"));
        assert!(looks_like_url("  news.example.org/2024/story  "));
        assert!(!looks_like_url("This is some text. Not a link"));
    }

    #[test]
    fn test_normalize_input_url() {
        assert_eq!(normalize_input_url("example.com"), "https://example.com");
        assert_eq!(normalize_input_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_input_url(" https://a.org/x "), "https://a.org/x");
    }
}
