use dimless_shared::span::Span;
use nom::{Parser as NomParser, character::complete::space0, combinator::recognize};

use crate::{
    token::{
        InputSpan, Parser, Result,
        error::{ErrorHandlingParser, TokenError},
    },
    util::span_from,
};

/// A lexical element of a declaration file.
///
/// A token is its lexeme plus the inline whitespace that follows it. Keeping
/// both spans lets later stages point at exactly the lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub lexeme_str: &'a str,
    pub lexeme_span: Span,
    pub whitespace_span: Span,
}

impl<'a> Token<'a> {
    /// Creates a token from the lexeme, the whitespace after it and the
    /// input that follows the whitespace
    pub fn new(lexeme: InputSpan<'a>, whitespace: InputSpan<'a>, rest: InputSpan<'a>) -> Self {
        Self {
            lexeme_str: *lexeme.fragment(),
            lexeme_span: span_from(lexeme, whitespace),
            whitespace_span: span_from(whitespace, rest),
        }
    }

    pub const fn lexeme(&self) -> &'a str {
        self.lexeme_str
    }
}

/// Parses inline whitespace (spaces and tabs). Always succeeds.
pub fn inline_whitespace(input: InputSpan<'_>) -> Result<'_, InputSpan<'_>, TokenError> {
    space0.parse(input)
}

/// Wraps a parser so that it produces a [`Token`] and consumes the
/// whitespace that follows.
pub fn token<'a, O>(
    mut f: impl Parser<'a, O, TokenError>,
    convert_error: impl Fn(TokenError) -> TokenError,
) -> impl Parser<'a, Token<'a>, TokenError> {
    move |input| {
        let f = |input| (&mut f).parse(input);
        let convert_error = |error| (&convert_error)(error);

        let (rest, lexeme) = recognize(f).convert_error_to(convert_error).parse(input)?;
        let (rest, whitespace) = inline_whitespace.parse(rest)?;

        Ok((rest, Token::new(lexeme, whitespace, rest)))
    }
}
