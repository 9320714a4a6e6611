/// Source location information for error reporting
///
/// Line and column numbers are 1-indexed. Tabs count as four columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLocation {
    offset: usize,
    line: usize,
    column: usize,
    length: Option<usize>,
    line_source: String,
}

impl ErrorLocation {
    fn new(source: &str, offset: usize, length: Option<usize>) -> Self {
        // an offset may point just past the last character, e.g. for an
        // unexpected end of input
        let offset = floor_char_boundary(source, offset.min(source.len()));

        let line_start = source[..offset]
            .rfind('\n')
            .map_or(0, |newline_idx| newline_idx + 1);
        let line_end = source[offset..]
            .find('\n')
            .map_or(source.len(), |newline_idx| offset + newline_idx);

        // highlighted ranges never extend past the end of the line
        let length = length.map(|length| length.clamp(1, (line_end - offset).max(1)));

        let num_tabs = source[line_start..offset]
            .chars()
            .filter(|c| *c == '\t')
            .count();
        let column = source[line_start..offset].chars().count() + 1 + num_tabs * 3;

        let line = source[..offset].matches('\n').count() + 1;

        let line_source = source[line_start..line_end]
            .trim_end_matches('\r')
            .replace('\t', "    ");

        Self {
            offset,
            line,
            column,
            length,
            line_source,
        }
    }

    /// Creates a new error location from source content and offset
    #[must_use]
    pub fn from_source_and_offset(source: &str, offset: usize) -> Self {
        Self::new(source, offset, None)
    }

    /// Creates a new error location from source content and a highlighted range
    #[must_use]
    pub fn from_source_and_span(source: &str, offset: usize, length: usize) -> Self {
        Self::new(source, offset, Some(length))
    }

    /// Returns the byte offset from the beginning of the source
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the line number (1-indexed)
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the column number (1-indexed)
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Returns the length of the highlighted range, one character if none
    #[must_use]
    pub fn length(&self) -> usize {
        self.length.unwrap_or(1)
    }

    /// Returns the full source line containing the error
    #[must_use]
    pub fn line_source(&self) -> &str {
        &self.line_source
    }
}

fn floor_char_boundary(source: &str, mut offset: usize) -> usize {
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_on_first_line() {
        let location = ErrorLocation::from_source_and_offset("g : length/time^2", 4);

        assert_eq!(location.line(), 1);
        assert_eq!(location.column(), 5);
        assert_eq!(location.length(), 1);
        assert_eq!(location.line_source(), "g : length/time^2");
    }

    #[test]
    fn offset_on_later_line() {
        let source = "T : time\nL : length\nm : mass\n";
        let location = ErrorLocation::from_source_and_span(source, 13, 6);

        assert_eq!(location.line(), 2);
        assert_eq!(location.column(), 5);
        assert_eq!(location.length(), 6);
        assert_eq!(location.line_source(), "L : length");
    }

    #[test]
    fn offset_at_end_of_source() {
        let source = "T : time";
        let location = ErrorLocation::from_source_and_offset(source, source.len());

        assert_eq!(location.line(), 1);
        assert_eq!(location.column(), 9);
    }

    #[test]
    fn offset_past_end_is_clamped() {
        let location = ErrorLocation::from_source_and_offset("abc", 10);

        assert_eq!(location.offset(), 3);
    }

    #[test]
    fn tabs_expand_to_four_columns() {
        let location = ErrorLocation::from_source_and_offset("\tT : time", 1);

        assert_eq!(location.column(), 5);
        assert_eq!(location.line_source(), "    T : time");
    }

    #[test]
    fn span_is_clamped_to_line() {
        let location = ErrorLocation::from_source_and_span("ab\ncd", 1, 10);

        assert_eq!(location.length(), 1);
    }
}
