//! Line endings and comments

use nom::{
    Parser as _,
    character::complete::{char, line_ending, not_line_ending},
    combinator::{eof, opt, recognize},
    multi::many0,
};

use crate::token::{
    InputSpan, Result,
    error::{ErrorHandlingParser, TokenError},
    util::{Token, inline_whitespace},
};

fn linebreak(input: InputSpan<'_>) -> Result<'_, InputSpan<'_>, TokenError> {
    line_ending.parse(input)
}

fn end_of_file(input: InputSpan<'_>) -> Result<'_, InputSpan<'_>, TokenError> {
    eof.parse(input)
}

/// Parses a comment from `#` up to and including the line break.
fn comment(input: InputSpan<'_>) -> Result<'_, InputSpan<'_>, TokenError> {
    recognize((char('#'), not_line_ending, line_ending.or(eof))).parse(input)
}

/// Parses the end of a line: a line break, a comment or the end of the file.
///
/// Blank lines, comment lines and the indentation of the next line are
/// consumed as the token's trailing whitespace.
pub fn end_of_line(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    let (rest, first_line_break) = linebreak
        .or(comment)
        .or(end_of_file)
        .convert_error_to(TokenError::expected_end_of_line)
        .parse(input)?;

    let (rest, rest_whitespace) = recognize((
        inline_whitespace,
        many0((linebreak.or(comment), inline_whitespace)),
        opt(end_of_file),
    ))
    .parse(rest)?;

    Ok((rest, Token::new(first_line_break, rest_whitespace, rest)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        token::error::{ExpectKind, TokenErrorKind},
        util::test::input,
    };

    #[test]
    fn newline() {
        let (rest, matched) = end_of_line(input("\nnext")).expect("should parse newline");
        assert_eq!(matched.lexeme(), "\n");
        assert_eq!(rest.fragment(), &"next");
    }

    #[test]
    fn comment_blank_lines_and_indentation() {
        let source = "# trailing comment\n\n   # another\n  next";
        let (rest, matched) = end_of_line(input(source)).expect("should parse comments");
        assert_eq!(matched.lexeme(), "# trailing comment\n");
        assert_eq!(rest.fragment(), &"next");
    }

    #[test]
    fn end_of_input() {
        let (rest, _) = end_of_line(input("")).expect("should parse end of input");
        assert_eq!(rest.fragment(), &"");
    }

    #[test]
    fn comment_without_newline_at_end() {
        let (rest, _) = end_of_line(input("# last line")).expect("should parse comment");
        assert_eq!(rest.fragment(), &"");
    }

    #[test]
    fn other_characters_are_rejected() {
        let Err(nom::Err::Error(error)) = end_of_line(input("x")) else {
            panic!("expected a recoverable error");
        };
        assert_eq!(error.kind, TokenErrorKind::Expect(ExpectKind::EndOfLine));
    }
}
