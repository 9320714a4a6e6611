//! Names of quantities, dimensions and flags

use nom::{
    Parser as _,
    bytes::complete::take_while,
    character::complete::satisfy,
};

use crate::token::{
    InputSpan, Result,
    error::TokenError,
    util::{Token, token},
};

/// Parses an identifier: a letter or underscore followed by letters,
/// digits or underscores.
///
/// Letters include non-ASCII letters, so `θ0` is an identifier.
pub fn identifier(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(
        |input| {
            let (rest, _) = satisfy(|c: char| c.is_alphabetic() || c == '_').parse(input)?;
            let (rest, _) = take_while(|c: char| c.is_alphanumeric() || c == '_').parse(rest)?;
            Ok((rest, ()))
        },
        TokenError::expected_identifier,
    )
    .parse(input)
}
