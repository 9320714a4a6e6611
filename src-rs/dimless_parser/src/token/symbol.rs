//! Symbol tokens

use nom::{Parser as _, character::complete::char};

use crate::token::{
    InputSpan, Result,
    error::{ExpectSymbol, TokenError},
    util::{Token, token},
};

/// Parses the `@` symbol token.
pub fn at(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(char('@'), TokenError::expected_symbol(ExpectSymbol::At)).parse(input)
}

/// Parses the `^` symbol token.
pub fn caret(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(char('^'), TokenError::expected_symbol(ExpectSymbol::Caret)).parse(input)
}

/// Parses the `:` symbol token.
pub fn colon(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(char(':'), TokenError::expected_symbol(ExpectSymbol::Colon)).parse(input)
}

/// Parses the `(` symbol token.
pub fn paren_left(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(
        char('('),
        TokenError::expected_symbol(ExpectSymbol::ParenLeft),
    )
    .parse(input)
}

/// Parses the `)` symbol token.
pub fn paren_right(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(
        char(')'),
        TokenError::expected_symbol(ExpectSymbol::ParenRight),
    )
    .parse(input)
}

/// Parses the `/` symbol token.
pub fn slash(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(char('/'), TokenError::expected_symbol(ExpectSymbol::Slash)).parse(input)
}

/// Parses the `*` symbol token.
pub fn star(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(char('*'), TokenError::expected_symbol(ExpectSymbol::Star)).parse(input)
}
