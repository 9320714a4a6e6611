//! Errors produced while reading tokens

use std::fmt;

use nom::error::ParseError;

use super::InputSpan;

pub use crate::error::ErrorHandlingParser;

/// An error that occurred while reading a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenError {
    /// The kind of error that occurred
    pub kind: TokenErrorKind,
    /// The offset in the source where the error occurred
    pub offset: usize,
}

/// The different kinds of token errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenErrorKind {
    /// Expected a specific token
    Expect(ExpectKind),
    /// A low-level nom parsing error
    NomError(nom::error::ErrorKind),
}

/// The tokens that could have been expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectKind {
    /// Expected an end of line, a comment or the end of the file
    EndOfLine,
    /// Expected an exponent
    Exponent,
    /// Expected an identifier
    Identifier,
    /// Expected `1`
    One,
    /// Expected a symbol
    Symbol(ExpectSymbol),
}

/// The symbols that could have been expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectSymbol {
    /// `@`
    At,
    /// `^`
    Caret,
    /// `:`
    Colon,
    /// `(`
    ParenLeft,
    /// `)`
    ParenRight,
    /// `/`
    Slash,
    /// `*`
    Star,
}

impl TokenError {
    /// Replaces a nom error with a more specific kind.
    ///
    /// Errors that already have a specific kind keep it.
    const fn update_kind(self, kind: TokenErrorKind) -> Self {
        match self.kind {
            TokenErrorKind::NomError(_) => Self { kind, ..self },
            TokenErrorKind::Expect(_) => self,
        }
    }

    pub const fn expected_end_of_line(error: Self) -> Self {
        error.update_kind(TokenErrorKind::Expect(ExpectKind::EndOfLine))
    }

    pub const fn expected_exponent(error: Self) -> Self {
        error.update_kind(TokenErrorKind::Expect(ExpectKind::Exponent))
    }

    pub const fn expected_identifier(error: Self) -> Self {
        error.update_kind(TokenErrorKind::Expect(ExpectKind::Identifier))
    }

    pub const fn expected_one(error: Self) -> Self {
        error.update_kind(TokenErrorKind::Expect(ExpectKind::One))
    }

    pub fn expected_symbol(symbol: ExpectSymbol) -> impl Fn(Self) -> Self {
        move |error: Self| error.update_kind(TokenErrorKind::Expect(ExpectKind::Symbol(symbol)))
    }
}

impl fmt::Display for ExpectSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::At => "@",
            Self::Caret => "^",
            Self::Colon => ":",
            Self::ParenLeft => "(",
            Self::ParenRight => ")",
            Self::Slash => "/",
            Self::Star => "*",
        };
        write!(f, "`{symbol}`")
    }
}

impl fmt::Display for TokenErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expect(ExpectKind::EndOfLine) => write!(f, "unexpected character"),
            Self::Expect(ExpectKind::Exponent) => write!(f, "expected exponent"),
            Self::Expect(ExpectKind::Identifier) => write!(f, "expected name"),
            Self::Expect(ExpectKind::One) => write!(f, "expected `1`"),
            Self::Expect(ExpectKind::Symbol(symbol)) => write!(f, "expected {symbol}"),
            Self::NomError(kind) => write!(f, "parser error ({})", kind.description()),
        }
    }
}

impl ParseError<InputSpan<'_>> for TokenError {
    fn from_error_kind(input: InputSpan<'_>, kind: nom::error::ErrorKind) -> Self {
        Self {
            kind: TokenErrorKind::NomError(kind),
            offset: input.location_offset(),
        }
    }

    fn append(_input: InputSpan<'_>, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> From<nom::error::Error<InputSpan<'a>>> for TokenError {
    fn from(e: nom::error::Error<InputSpan<'a>>) -> Self {
        Self::from_error_kind(e.input, e.code)
    }
}
