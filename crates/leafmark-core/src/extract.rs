//! Image and link reference extraction.
//!
//! Uses SIMD-accelerated scanning for `[` and borrows directly from input.
//! Greedy, left-to-right, no backtracking: the first `]` closes a label and the
//! first `)` closes a url. Nested brackets, escapes and titles are not
//! recognised.
//!
//! Images are matched first, on their own. Links are then matched around
//! them: a `[label](url)` candidate that overlaps an image is dropped, so an
//! image inside a link label (`[![badge](img)](url)`) is still found and a
//! span is never attributed to both extractors.

use memchr::memchr;

use crate::span::Span;

/// Which form a reference was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// `![alt](src)`
    Image,
    /// `[label](url)`
    Link,
}

/// One `[label](url)` or `![label](url)` match, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference<'a> {
    pub kind: ReferenceKind,
    pub label: &'a str,
    pub url: &'a str,
    /// Covers the whole reference, including a leading `!`.
    pub span: Span,
}

/// Scan `text` for every image and link reference, in source order.
pub fn scan_references(text: &str) -> Vec<Reference<'_>> {
    find_references(text)
        .into_iter()
        .map(Match::into_reference)
        .collect()
}

/// `(alt, src)` for every `![alt](src)` in `text`, in order.
///
/// ```rust
/// use leafmark_core::extract_markdown_images;
///
/// let text = "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png)";
/// assert_eq!(
///     extract_markdown_images(text),
///     vec![("image", "https://i.imgur.com/zjjcJKZ.png")]
/// );
/// ```
pub fn extract_markdown_images(text: &str) -> Vec<(&str, &str)> {
    find_images(text).into_iter().map(Match::pair).collect()
}

/// `(label, url)` for every `[label](url)` in `text` that is not an image
/// and does not overlap one.
pub fn extract_markdown_links(text: &str) -> Vec<(&str, &str)> {
    find_links(text, &find_images(text))
        .into_iter()
        .map(Match::pair)
        .collect()
}

/// A reference with plain byte offsets into the scanned text.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Match<'a> {
    pub kind: ReferenceKind,
    pub label: &'a str,
    pub url: &'a str,
    pub start: usize,
    pub end: usize,
}

impl<'a> Match<'a> {
    #[inline]
    fn pair(self) -> (&'a str, &'a str) {
        (self.label, self.url)
    }

    fn into_reference(self) -> Reference<'a> {
        Reference {
            kind: self.kind,
            label: self.label,
            url: self.url,
            span: Span::from_usize(self.start, self.end),
        }
    }
}

/// Match `[label](url)` with the `[` at `open`.
///
/// Returns the label, the url and the offset just past the closing `)`.
fn match_brackets(text: &str, open: usize) -> Option<(&str, &str, usize)> {
    let bytes = text.as_bytes();
    let label_start = open + 1;
    let close = label_start + memchr(b']', &bytes[label_start..])?;

    if bytes.get(close + 1) != Some(&b'(') {
        return None;
    }

    let url_start = close + 2;
    let url_end = url_start + memchr(b')', &bytes[url_start..])?;

    Some((
        &text[label_start..close],
        &text[url_start..url_end],
        url_end + 1,
    ))
}

#[inline(always)]
fn preceded_by_bang(bytes: &[u8], open: usize) -> bool {
    open > 0 && bytes[open - 1] == b'!'
}

/// Every `![alt](src)`, in order.
pub(crate) fn find_images(text: &str) -> Vec<Match<'_>> {
    let bytes = text.as_bytes();
    let mut images = Vec::new();
    let mut pos = 0;

    while let Some(offset) = memchr(b'[', &bytes[pos..]) {
        let open = pos + offset;

        // A matched image ends in `)`, so the `!` here is never part of an
        // earlier match.
        if preceded_by_bang(bytes, open) {
            if let Some((label, url, end)) = match_brackets(text, open) {
                images.push(Match {
                    kind: ReferenceKind::Image,
                    label,
                    url,
                    start: open - 1,
                    end,
                });
                pos = end;
                continue;
            }
        }
        pos = open + 1;
    }

    images
}

/// Every `[label](url)` not preceded by `!` and not overlapping any of
/// `images`, which must be in source order.
pub(crate) fn find_links<'a>(text: &'a str, images: &[Match<'_>]) -> Vec<Match<'a>> {
    let bytes = text.as_bytes();
    let mut links = Vec::new();
    let mut pos = 0;
    let mut next_image = 0;

    while let Some(offset) = memchr(b'[', &bytes[pos..]) {
        let open = pos + offset;
        pos = open + 1;

        if preceded_by_bang(bytes, open) {
            continue;
        }
        let Some((label, url, end)) = match_brackets(text, open) else {
            continue;
        };

        while next_image < images.len() && images[next_image].end <= open {
            next_image += 1;
        }
        if images
            .get(next_image)
            .is_some_and(|image| image.start < end)
        {
            continue;
        }

        links.push(Match {
            kind: ReferenceKind::Link,
            label,
            url,
            start: open,
            end,
        });
        pos = end;
    }

    links
}

/// Images and links merged in source order.
pub(crate) fn find_references(text: &str) -> Vec<Match<'_>> {
    let images = find_images(text);
    let mut all = find_links(text, &images);
    all.extend(images);
    all.sort_by_key(|m| m.start);
    all
}
