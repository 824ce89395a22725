//! Markup node tree.
//!
//! A tree is built bottom-up from [`Leaf`] and [`Parent`] values and rendered
//! once with [`Node::serialize`]. Nothing is escaped: values, tags and
//! attributes are written exactly as given.
//!
//! ```rust
//! use leafmark_core::node::{Leaf, Parent};
//!
//! let p = Parent::new(
//!     "p",
//!     vec![
//!         Leaf::element("b", "Bold").into(),
//!         Leaf::raw(" and ").into(),
//!         Leaf::element("i", "italic").into(),
//!     ],
//! )
//! .unwrap();
//! assert_eq!(p.serialize().unwrap(), "<p><b>Bold</b> and <i>italic</i></p>");
//! ```

use crate::error::{Error, Result};

/// Attribute list, rendered in insertion order.
pub type Props = Vec<(String, String)>;

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(Leaf),
    Parent(Parent),
}

/// A node without children: raw text, or a single element wrapping a value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Leaf {
    /// Element name; `None` renders the value as raw text.
    pub tag: Option<String>,
    /// Required at serialization time.
    pub value: Option<String>,
    pub props: Props,
}

/// An element with one or more children and no value of its own.
///
/// Only constructible through [`Parent::new`], which rejects a missing tag or
/// an empty child list, so every `Parent` is well formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parent {
    tag: String,
    children: Vec<Node>,
    props: Props,
}

/// Render props as ` key="value"` pairs in order. Empty props render as `""`.
pub fn props_to_markup_attributes(props: &[(String, String)]) -> String {
    let mut out = String::new();
    for (key, value) in props {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out
}

impl Node {
    /// Render this node and its subtree to markup.
    pub fn serialize(&self) -> Result<String> {
        match self {
            Node::Leaf(leaf) => leaf.serialize(),
            Node::Parent(parent) => parent.serialize(),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.tag.as_deref(),
            Node::Parent(parent) => Some(&parent.tag),
        }
    }

    /// Children in order; always empty for a leaf.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf(_) => &[],
            Node::Parent(parent) => &parent.children,
        }
    }

    pub fn props(&self) -> &[(String, String)] {
        match self {
            Node::Leaf(leaf) => &leaf.props,
            Node::Parent(parent) => &parent.props,
        }
    }

    pub fn props_to_markup_attributes(&self) -> String {
        props_to_markup_attributes(self.props())
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<Parent> for Node {
    fn from(parent: Parent) -> Self {
        Node::Parent(parent)
    }
}

impl Leaf {
    /// Raw text with no surrounding element.
    pub fn raw(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: Some(value.into()),
            props: Props::new(),
        }
    }

    /// A `<tag>value</tag>` element.
    pub fn element(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: Some(value.into()),
            props: Props::new(),
        }
    }

    /// Append an attribute.
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.push((key.into(), value.into()));
        self
    }

    pub fn props_to_markup_attributes(&self) -> String {
        props_to_markup_attributes(&self.props)
    }

    pub fn serialize(&self) -> Result<String> {
        let value = self
            .value
            .as_deref()
            .ok_or_else(|| Error::missing_value(self.tag.as_deref()))?;

        match &self.tag {
            None => Ok(value.to_string()),
            Some(tag) => Ok(format!(
                "<{tag}{}>{value}</{tag}>",
                self.props_to_markup_attributes()
            )),
        }
    }
}

impl Parent {
    /// Build a parent element.
    ///
    /// Fails with [`ErrorKind::InvalidShape`](crate::error::ErrorKind::InvalidShape)
    /// when `tag` is empty or `children` is empty.
    pub fn new(tag: impl Into<String>, children: Vec<Node>) -> Result<Self> {
        Self::with_props(tag, children, Props::new())
    }

    pub fn with_props(tag: impl Into<String>, children: Vec<Node>, props: Props) -> Result<Self> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(Error::invalid_shape("missing tag"));
        }
        if children.is_empty() {
            return Err(Error::invalid_shape("missing children"));
        }
        Ok(Self {
            tag,
            children,
            props,
        })
    }

    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    #[inline]
    pub fn props(&self) -> &[(String, String)] {
        &self.props
    }

    pub fn props_to_markup_attributes(&self) -> String {
        props_to_markup_attributes(&self.props)
    }

    pub fn serialize(&self) -> Result<String> {
        let mut out = format!("<{}{}>", self.tag, self.props_to_markup_attributes());
        for child in &self.children {
            out.push_str(&child.serialize()?);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
        Ok(out)
    }
}
