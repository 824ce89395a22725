use crate::span::Span;
use std::fmt;

/// Error kinds for categorizing failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A plain node holds an odd number of delimiters
    UnbalancedDelimiter,
    /// The delimiter string itself is unusable (empty)
    InvalidDelimiter,
    /// A leaf was serialized without a value
    MissingValue,
    /// A parent was built without a tag or without children
    InvalidShape,
    /// A text type with no markup mapping, or an unknown type name
    UnsupportedTextType,
    /// A link node without a usable url
    MissingUrl,
}

/// An error raised by splitting, lowering or serialization.
///
/// Every failure aborts the enclosing operation; there is no partial result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// Human-readable error message
    pub message: String,
    /// Source location inside the offending text, when one exists
    pub span: Option<Span>,
    /// Error categorization
    pub kind: ErrorKind,
}

impl Error {
    /// Create an error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: None,
            kind,
        }
    }

    /// Create an error for an unmatched delimiter.
    pub fn unbalanced_delimiter(delimiter: &str, span: Option<Span>) -> Self {
        Self {
            message: format!("unbalanced delimiter '{}': missing closing delimiter", delimiter),
            span,
            kind: ErrorKind::UnbalancedDelimiter,
        }
    }

    /// Create an error for an empty delimiter string.
    pub fn empty_delimiter() -> Self {
        Self::new(ErrorKind::InvalidDelimiter, "delimiter must not be empty")
    }

    /// Create an error for a leaf that has nothing to render.
    pub fn missing_value(tag: Option<&str>) -> Self {
        let message = match tag {
            Some(tag) => format!("leaf node <{}> has no value", tag),
            None => "leaf node has no value".to_string(),
        };
        Self::new(ErrorKind::MissingValue, message)
    }

    /// Create an error for a malformed parent node.
    pub fn invalid_shape(reason: &str) -> Self {
        Self::new(ErrorKind::InvalidShape, format!("invalid parent node: {}", reason))
    }

    /// Create an error for a text type lowering cannot express.
    pub fn unsupported_text_type(name: &str) -> Self {
        Self::new(
            ErrorKind::UnsupportedTextType,
            format!("unsupported text type: {}", name),
        )
    }

    /// Create an error for a link node with no url, or an empty one.
    pub fn missing_url(text: &str) -> Self {
        Self::new(
            ErrorKind::MissingUrl,
            format!("link node '{}' requires a url", text),
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(span) = self.span {
            write!(f, " at bytes {}..{}", span.start, span.end)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
