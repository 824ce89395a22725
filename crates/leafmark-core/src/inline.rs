//! Raw text to text nodes, and text nodes to markup.
//!
//! The passes run in a fixed order. References go first so that delimiter
//! characters inside urls (`_` is common) are never split, and code goes
//! before bold and italic so their delimiters are literal inside code spans.

use log::debug;

use crate::error::Result;
use crate::lower::text_node_to_leaf;
use crate::node::{Node, Parent};
use crate::split::{split_nodes_delimiter, split_nodes_image, split_nodes_link};
use crate::text_node::{TextNode, TextType};

/// Delimiter passes applied after reference splitting, in order.
pub const DELIMITERS: [(&str, TextType); 3] = [
    ("`", TextType::Code),
    ("**", TextType::Bold),
    ("_", TextType::Italic),
];

/// Turn one line of inline markdown into a flat node sequence.
///
/// ```rust
/// use leafmark_core::{text_to_text_nodes, TextNode, TextType};
///
/// let nodes = text_to_text_nodes("a **b** [c](https://d.io)").unwrap();
/// assert_eq!(
///     nodes,
///     vec![
///         TextNode::plain("a "),
///         TextNode::new("b", TextType::Bold),
///         TextNode::plain(" "),
///         TextNode::link("c", "https://d.io"),
///     ]
/// );
/// ```
pub fn text_to_text_nodes(text: &str) -> Result<Vec<TextNode>> {
    let nodes = vec![TextNode::plain(text)];
    let nodes = split_nodes_image(&nodes);
    let mut nodes = split_nodes_link(&nodes);

    for (delimiter, text_type) in DELIMITERS {
        nodes = split_nodes_delimiter(&nodes, delimiter, text_type)?;
    }

    debug!("{} bytes of inline text -> {} text nodes", text.len(), nodes.len());
    Ok(nodes)
}

/// Lower a node sequence into a single parent element.
pub fn text_nodes_to_parent(tag: &str, nodes: &[TextNode]) -> Result<Parent> {
    let children = nodes
        .iter()
        .map(|node| text_node_to_leaf(node).map(Node::from))
        .collect::<Result<Vec<_>>>()?;
    Parent::new(tag, children)
}

/// Render inline markdown as one `<p>` element.
///
/// Fails for empty input (a paragraph needs at least one child) and for any
/// node type lowering cannot express, such as code or images.
pub fn render_inline(text: &str) -> Result<String> {
    let nodes = text_to_text_nodes(text)?;
    text_nodes_to_parent("p", &nodes)?.serialize()
}
