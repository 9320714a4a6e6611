//! Source spans for mapping declarations back to the declaration file

use crate::error::ErrorLocation;

/// A span of source text between two source locations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    start: SourceLocation,
    end: SourceLocation,
}

impl Span {
    /// Creates a new span from a start and end source location
    ///
    /// If `end` lies before `start`, the span is empty at `start`.
    #[must_use]
    pub const fn new(start: SourceLocation, end: SourceLocation) -> Self {
        if end.offset < start.offset {
            Self { start, end: start }
        } else {
            Self { start, end }
        }
    }

    /// Returns the start source location
    #[must_use]
    pub const fn start(&self) -> &SourceLocation {
        &self.start
    }

    /// Returns the end source location
    #[must_use]
    pub const fn end(&self) -> &SourceLocation {
        &self.end
    }

    /// Returns the length of the span in bytes
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    /// Returns whether the span covers no text
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the smallest span covering both `self` and `other`
    #[must_use]
    pub const fn merge(&self, other: &Self) -> Self {
        let start = if other.start.offset < self.start.offset {
            other.start
        } else {
            self.start
        };
        let end = if other.end.offset > self.end.offset {
            other.end
        } else {
            self.end
        };
        Self { start, end }
    }

    /// Converts the span into an [`ErrorLocation`] within `source`
    #[must_use]
    pub fn to_error_location(&self, source: &str) -> ErrorLocation {
        if self.is_empty() {
            ErrorLocation::from_source_and_offset(source, self.start.offset)
        } else {
            ErrorLocation::from_source_and_span(source, self.start.offset, self.len())
        }
    }
}

/// A position in the source text
///
/// The offset is assumed to correspond to the line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// The byte offset from the beginning of the source (0-indexed)
    pub offset: usize,
    /// The line number (1-indexed)
    pub line: usize,
    /// The column number (1-indexed)
    pub column: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn location(offset: usize, column: usize) -> SourceLocation {
        SourceLocation {
            offset,
            line: 1,
            column,
        }
    }

    #[test]
    fn merge_covers_both_spans() {
        let name = Span::new(location(0, 1), location(1, 2));
        let flag = Span::new(location(12, 13), location(20, 21));

        let merged = name.merge(&flag);

        assert_eq!(merged.start().offset, 0);
        assert_eq!(merged.end().offset, 20);
        assert_eq!(merged.len(), 20);
    }

    #[test]
    fn reversed_span_is_empty() {
        let span = Span::new(location(5, 6), location(2, 3));

        assert!(span.is_empty());
        assert_eq!(span.start().offset, 5);
    }

    #[test]
    fn to_error_location_uses_length() {
        let source = "L : length @scaling";
        let span = Span::new(location(11, 12), location(19, 20));

        let error_location = span.to_error_location(source);

        assert_eq!(error_location.column(), 12);
        assert_eq!(error_location.length(), 8);
    }
}
