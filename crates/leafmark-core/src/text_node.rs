//! Flat, typed units of inline content.
//!
//! A [`TextNode`] is what the splitter and extractor produce and what lowering
//! consumes. It carries no position or identity; two nodes with the same
//! text, type and url are the same node.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The inline style a [`TextNode`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextType {
    /// Unstyled text.
    Plain,
    Bold,
    Italic,
    /// Inline code span.
    Code,
    /// Hyperlink; the node's url is the target.
    Link,
    /// Image; the node's text is the alt text and the url the source.
    Image,
    Underline,
}

impl TextType {
    /// Every variant, in declaration order.
    pub const ALL: [TextType; 7] = [
        TextType::Plain,
        TextType::Bold,
        TextType::Italic,
        TextType::Code,
        TextType::Link,
        TextType::Image,
        TextType::Underline,
    ];

    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            TextType::Plain => "plain",
            TextType::Bold => "bold",
            TextType::Italic => "italic",
            TextType::Code => "code",
            TextType::Link => "link",
            TextType::Image => "image",
            TextType::Underline => "underline",
        }
    }
}

impl fmt::Display for TextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextType {
    type Err = Error;

    /// Parse a type name. Unknown names are foreign type tags and fail with
    /// [`ErrorKind::UnsupportedTextType`](crate::error::ErrorKind::UnsupportedTextType).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::unsupported_text_type(s))
    }
}

/// A run of inline text with a single style.
///
/// # Example
///
/// ```rust
/// use leafmark_core::{TextNode, TextType};
///
/// let a = TextNode::new("click", TextType::Link).with_url("https://a.com");
/// let b = TextNode::link("click", "https://a.com");
/// assert_eq!(a, b);
/// assert_eq!(TextNode::new("x", TextType::Plain).url, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextNode {
    pub text: String,
    pub text_type: TextType,
    /// Link target or image source; unset for every other type.
    pub url: Option<String>,
}

impl TextNode {
    /// Create a node with no url.
    pub fn new(text: impl Into<String>, text_type: TextType) -> Self {
        Self {
            text: text.into(),
            text_type,
            url: None,
        }
    }

    #[inline]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextType::Plain)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(text, TextType::Link).with_url(url)
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(alt, TextType::Image).with_url(url)
    }

    /// Set the url.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[inline]
    pub fn is_plain(&self) -> bool {
        self.text_type == TextType::Plain
    }
}

/// Renders as `TextNode('click', TextType.LINK, 'https://example.com')`,
/// with `None` for an unset url. Strings are quoted the way a Python repr
/// quotes them.
impl fmt::Display for TextNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TextNode(")?;
        write_quoted(f, &self.text)?;
        write!(f, ", TextType.{}, ", self.text_type.as_str().to_ascii_uppercase())?;
        match &self.url {
            Some(url) => write_quoted(f, url)?,
            None => f.write_str("None")?,
        }
        f.write_str(")")
    }
}

/// Single quotes unless the text holds a `'` and no `"`.
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    write!(f, "{}", quote)?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => write!(f, "\\{}", c)?,
            c => write!(f, "{}", c)?,
        }
    }
    write!(f, "{}", quote)
}
