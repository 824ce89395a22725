//! Lowering of text nodes into markup leaves.

use crate::error::{Error, Result};
use crate::node::Leaf;
use crate::text_node::{TextNode, TextType};

/// Map a [`TextNode`] to the [`Leaf`] that renders it.
///
/// | type | leaf |
/// |---|---|
/// | plain | raw text |
/// | bold | `<b>` |
/// | italic | `<i>` |
/// | link | `<a href="url">`, the url must be non-empty |
///
/// Code, image and underline have no mapping and fail with
/// [`ErrorKind::UnsupportedTextType`](crate::error::ErrorKind::UnsupportedTextType).
pub fn text_node_to_leaf(node: &TextNode) -> Result<Leaf> {
    let text = node.text.as_str();

    match node.text_type {
        TextType::Plain => Ok(Leaf::raw(text)),
        TextType::Bold => Ok(Leaf::element("b", text)),
        TextType::Italic => Ok(Leaf::element("i", text)),
        TextType::Link => match node.url.as_deref() {
            Some(url) if !url.is_empty() => Ok(Leaf::element("a", text).with_prop("href", url)),
            _ => Err(Error::missing_url(text)),
        },
        TextType::Code | TextType::Image | TextType::Underline => {
            Err(Error::unsupported_text_type(node.text_type.as_str()))
        }
    }
}
