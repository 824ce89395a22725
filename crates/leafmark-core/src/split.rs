//! Splitting plain text nodes into styled runs.
//!
//! Each function here takes a node sequence and returns a new one. Only
//! [`TextType::Plain`] nodes are split; every other node is copied through
//! unchanged and keeps its position.

use log::trace;
use memchr::memmem;

use crate::error::{Error, Result};
use crate::extract::{find_images, find_links, ReferenceKind};
use crate::span::Span;
use crate::text_node::{TextNode, TextType};

/// Split every plain node on `delimiter`, styling the delimited runs as
/// `text_type`.
///
/// Delimiters must come in pairs. A plain node with an odd number of them
/// fails the whole call with
/// [`ErrorKind::UnbalancedDelimiter`](crate::error::ErrorKind::UnbalancedDelimiter);
/// nothing is returned for the nodes that did split.
///
/// Empty runs are dropped, so `"a****b"` split on `**` gives `a` and `b` and
/// no empty bold node between them.
///
/// ```rust
/// use leafmark_core::{split_nodes_delimiter, TextNode, TextType};
///
/// let nodes = vec![TextNode::plain("This is text with a `code block` word")];
/// let out = split_nodes_delimiter(&nodes, "`", TextType::Code).unwrap();
/// assert_eq!(
///     out,
///     vec![
///         TextNode::plain("This is text with a "),
///         TextNode::new("code block", TextType::Code),
///         TextNode::plain(" word"),
///     ]
/// );
/// ```
pub fn split_nodes_delimiter(
    nodes: &[TextNode],
    delimiter: &str,
    text_type: TextType,
) -> Result<Vec<TextNode>> {
    if delimiter.is_empty() {
        return Err(Error::empty_delimiter());
    }

    let finder = memmem::Finder::new(delimiter);
    let mut out = Vec::with_capacity(nodes.len());

    for node in nodes {
        if !node.is_plain() {
            out.push(node.clone());
            continue;
        }

        let text = node.text.as_str();
        let hits: Vec<usize> = finder.find_iter(text.as_bytes()).collect();

        if hits.len() % 2 == 1 {
            let last = hits[hits.len() - 1];
            let span = Span::from_usize(last, last + delimiter.len());
            return Err(Error::unbalanced_delimiter(delimiter, Some(span)));
        }

        let mut start = 0;
        for (i, fragment_end) in hits.iter().copied().chain([text.len()]).enumerate() {
            let fragment = &text[start..fragment_end];
            start = fragment_end + delimiter.len();

            if fragment.is_empty() {
                continue;
            }
            let fragment_type = if i % 2 == 0 { TextType::Plain } else { text_type };
            out.push(TextNode::new(fragment, fragment_type));
        }
    }

    trace!(
        "split on {:?}: {} nodes in, {} nodes out",
        delimiter,
        nodes.len(),
        out.len()
    );
    Ok(out)
}

/// Replace every `![alt](src)` inside plain nodes with an image node.
pub fn split_nodes_image(nodes: &[TextNode]) -> Vec<TextNode> {
    split_references(nodes, ReferenceKind::Image)
}

/// Replace every `[label](url)` inside plain nodes with a link node.
///
/// Image syntax is left alone, so run [`split_nodes_image`] first if both
/// kinds should become nodes.
pub fn split_nodes_link(nodes: &[TextNode]) -> Vec<TextNode> {
    split_references(nodes, ReferenceKind::Link)
}

fn split_references(nodes: &[TextNode], kind: ReferenceKind) -> Vec<TextNode> {
    let mut out = Vec::with_capacity(nodes.len());

    for node in nodes {
        if !node.is_plain() {
            out.push(node.clone());
            continue;
        }

        let text = node.text.as_str();
        let images = find_images(text);
        let matches = match kind {
            ReferenceKind::Image => images,
            ReferenceKind::Link => find_links(text, &images),
        };

        let mut start = 0usize;
        for m in matches {
            if m.start > start {
                out.push(TextNode::plain(&text[start..m.start]));
            }
            out.push(match kind {
                ReferenceKind::Image => TextNode::image(m.label, m.url),
                ReferenceKind::Link => TextNode::link(m.label, m.url),
            });
            start = m.end;
        }

        if start < text.len() {
            out.push(TextNode::plain(&text[start..]));
        }
    }

    out
}
