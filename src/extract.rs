//! Article record extraction from raw listing-page HTML.
//!
//! The listing page is treated as a flat string, not a DOM: one forward
//! pass locates `<article>` blocks and, inside each block, the image
//! attribute and the card heading. The link for a card is the `href` of
//! the nearest anchor whose open tag ends before the block starts,
//! tracked by a running pointer as the scan advances.
//!
//! Tag names match case-insensitively; attribute values and class names
//! are compared exactly and captured verbatim, with no entity decoding.
//! Malformed structure never errors, it just yields fewer records.

use crate::models::Article;
use tracing::debug;

const CLOSE_ARTICLE: &str = "</article>";
const CLOSE_FIGURE: &str = "</figure>";
const IMAGE_ATTR: &str = "data-original=\"";
const CARD_HEADING_CLASS: &str = "article-name";

/// Extract all complete article records from a listing page body.
///
/// A block contributes a record only when the title, image URL, and
/// link URL are all non-empty; incomplete blocks are skipped without
/// error. Records appear in document order.
///
/// Blocks do not nest: the first `</article>` after an open tag closes
/// the block, so an inner open tag truncates the outer block there.
pub fn extract(document: &str) -> Vec<Article> {
    let mut records = Vec::new();
    let mut cursor = 0usize;
    let mut anchor_cursor = 0usize;
    let mut last_href = String::new();

    while let Some((block_start, body_start)) = next_open_tag(document, "article", cursor) {
        let Some(close) = find_ci(document, CLOSE_ARTICLE, body_start) else {
            break;
        };

        // Advance the running anchor pointer. Only anchors whose open
        // tag ends at or before the block's start offset count as
        // preceding; anything later is left for the next block.
        while let Some((_, after_open, href)) = next_anchor(document, anchor_cursor) {
            if after_open > block_start {
                break;
            }
            anchor_cursor = after_open;
            if let Some(href) = href {
                last_href = href;
            }
        }

        let body = &document[body_start..close];
        let title = card_title(body);
        let image_url = card_image(body);
        let link_url = last_href.clone();

        if !title.is_empty() && !image_url.is_empty() && !link_url.is_empty() {
            records.push(Article {
                title,
                image_url,
                link_url,
            });
        } else {
            debug!(
                offset = block_start,
                has_title = !title.is_empty(),
                has_image = !image_url.is_empty(),
                has_link = !link_url.is_empty(),
                "Skipping incomplete article block"
            );
        }

        cursor = close + CLOSE_ARTICLE.len();
    }

    records
}

/// Inner text of the first well-formed `<title>` element, verbatim.
pub fn page_title(document: &str) -> Option<&str> {
    let mut at = 0;
    while let Some((_, after_open)) = next_open_tag(document, "title", at) {
        if let Some(lt) = document[after_open..].find('<') {
            if lt > 0 && starts_with_ci(&document[after_open + lt..], "</title>") {
                return Some(&document[after_open..after_open + lt]);
            }
        }
        at = after_open;
    }
    None
}

/// Trimmed text of the first `<h3 class="article-name">` heading whose
/// content runs without markup straight to the closing tag. The class
/// value must match exactly; an all-whitespace heading trims to empty.
fn card_title(body: &str) -> String {
    let mut at = 0;
    while let Some((start, after_open)) = next_open_tag(body, "h3", at) {
        let tag = &body[start..after_open];
        if attr_value(tag, "class").is_some_and(|class| class == CARD_HEADING_CLASS) {
            if let Some(lt) = body[after_open..].find('<') {
                if lt > 0 && starts_with_ci(&body[after_open + lt..], "</h3>") {
                    return body[after_open..after_open + lt].trim().to_string();
                }
            }
        }
        at = after_open;
    }
    String::new()
}

/// `data-original` value from the first `<figure>` container carrying
/// one. The attribute may sit anywhere in the container's span, the
/// open tag included.
fn card_image(body: &str) -> String {
    let mut at = 0;
    while let Some((fig_start, fig_body)) = next_open_tag(body, "figure", at) {
        let Some(close) = find_ci(body, CLOSE_FIGURE, fig_body) else {
            break;
        };
        let container = &body[fig_start..close];
        if let Some(found) = find_ci(container, IMAGE_ATTR, 0) {
            let value = &container[found + IMAGE_ATTR.len()..];
            if let Some(end) = value.find('"') {
                return value[..end].to_string();
            }
        }
        at = close + CLOSE_FIGURE.len();
    }
    String::new()
}

/// Next anchor open tag at or after `from`. Returns the tag's start
/// offset, the offset just past its `>`, and its `href` value if any.
/// Anchors without an `href` are still consumed by the scan but carry
/// no link.
fn next_anchor(document: &str, from: usize) -> Option<(usize, usize, Option<String>)> {
    let (start, after_open) = next_open_tag(document, "a", from)?;
    let href = attr_value(&document[start..after_open], "href");
    Some((start, after_open, href))
}

/// Locate the next `<name` open tag at or after `from`. The tag name
/// matches case-insensitively and must be followed by whitespace, `/`,
/// or `>`, so `<a>` never matches `<article>`. Returns the tag's start
/// offset and the offset just past its closing `>`.
fn next_open_tag(document: &str, name: &str, from: usize) -> Option<(usize, usize)> {
    let probe = format!("<{name}");
    let bytes = document.as_bytes();
    let mut at = from;
    while let Some(start) = find_ci(document, &probe, at) {
        let rest = start + probe.len();
        match bytes.get(rest) {
            Some(b'>') => return Some((start, rest + 1)),
            Some(c) if c.is_ascii_whitespace() || *c == b'/' => {
                // attributes run to the tag's closing `>`; if none
                // exists the document holds no further complete tag
                return document[rest..]
                    .find('>')
                    .map(|gt| (start, rest + gt + 1));
            }
            _ => at = start + 1,
        }
    }
    None
}

/// Value of a `name="…"` attribute inside an open tag, verbatim. The
/// attribute name matches case-insensitively.
fn attr_value(tag: &str, name: &str) -> Option<String> {
    let probe = format!("{name}=\"");
    let at = find_ci(tag, &probe, 0)?;
    let value = &tag[at + probe.len()..];
    value.find('"').map(|end| value[..end].to_string())
}

/// Byte offset of the first ASCII case-insensitive occurrence of
/// `needle` at or after `from`.
fn find_ci(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    if from > haystack.len() || haystack.len() - from < needle.len() {
        return None;
    }
    (from..=haystack.len() - needle.len())
        .find(|&i| haystack[i..i + needle.len()].eq_ignore_ascii_case(needle))
}

fn starts_with_ci(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}
