//! Byte ranges into the text being scanned.
//!
//! Extractor matches and splitter errors carry a `Span` so callers can point
//! back at the exact source bytes.

/// A byte range in the source text, `[start, end)`.
///
/// # Example
///
/// ```rust
/// use leafmark_core::span::Span;
///
/// let span = Span::new(4, 10);
/// assert_eq!(span.slice("say ![hi](x) ok"), "![hi](");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    /// Starting byte offset (inclusive).
    pub start: u32,
    /// Ending byte offset (exclusive).
    pub end: u32,
}

impl Span {
    /// Create a new span from byte offsets.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Offsets past `u32::MAX` saturate. Spans are for reporting only; the
    /// crate never slices text through a saturated span.
    #[inline]
    pub(crate) fn from_usize(start: usize, end: usize) -> Self {
        Self::new(saturate(start), saturate(end))
    }

    /// Borrow the covered bytes from `source`.
    ///
    /// The span must lie on char boundaries of `source`, which holds for every
    /// span produced by this crate since they only ever cut at ASCII bytes.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start as usize..self.end as usize]
    }
}

#[inline]
fn saturate(offset: usize) -> u32 {
    u32::try_from(offset).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn from_usize_saturates_instead_of_wrapping() {
        let span = Span::from_usize(3, u32::MAX as usize + 5);
        assert_eq!(span, Span::new(3, u32::MAX));
    }
}
