//! # Leafmark Core
//!
//! Inline markdown to markup in two stages.
//!
//! 1. Raw text becomes a flat sequence of [`TextNode`]s: plain runs are split
//!    on paired delimiters (`` ` ``, `**`, `_`) and `[label](url)` /
//!    `![alt](src)` references are extracted.
//! 2. Text nodes are lowered into a small [`Node`] tree which serializes to
//!    markup.
//!
//! ## Quick Start
//!
//! ```rust
//! use leafmark_core::render_inline;
//!
//! let html = render_inline("**Bold** and _italic_").unwrap();
//! assert_eq!(html, "<p><b>Bold</b> and <i>italic</i></p>");
//! ```
//!
//! ## Building blocks
//!
//! ```rust
//! use leafmark_core::{split_nodes_delimiter, text_node_to_leaf, TextNode, TextType};
//!
//! let nodes = vec![TextNode::plain("plain **loud** plain")];
//! let nodes = split_nodes_delimiter(&nodes, "**", TextType::Bold).unwrap();
//! let html: String = nodes
//!     .iter()
//!     .map(|n| text_node_to_leaf(n).and_then(|leaf| leaf.serialize()))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(html, "plain <b>loud</b> plain");
//! ```
//!
//! Nothing is escaped. Every operation is pure and fails fast: an error
//! aborts the whole call with no partial output.

pub mod error;
pub mod extract;
pub mod inline;
pub mod lower;
pub mod node;
pub mod span;
pub mod split;
pub mod text_node;

pub use error::{Error, ErrorKind, Result};
pub use extract::{extract_markdown_images, extract_markdown_links, scan_references, Reference};
pub use inline::{render_inline, text_nodes_to_parent, text_to_text_nodes};
pub use lower::text_node_to_leaf;
pub use node::{Leaf, Node, Parent};
pub use split::{split_nodes_delimiter, split_nodes_image, split_nodes_link};
pub use text_node::{TextNode, TextType};
