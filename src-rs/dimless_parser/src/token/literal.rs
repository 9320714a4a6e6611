//! Literal tokens: the dimensionless `1` and exponents

use nom::{
    Parser as _,
    character::complete::{char, digit1, one_of, satisfy, space0},
    combinator::{not, opt, recognize},
};

use crate::token::{
    InputSpan, Result,
    error::TokenError,
    util::{Token, token},
};

/// Parses `1`, the dimension of a dimensionless quantity.
///
/// The `1` must not be the start of a longer number.
pub fn one(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(
        |input| {
            let (rest, _) = char('1').parse(input)?;
            let (rest, ()) = not(satisfy(|c: char| c.is_ascii_digit() || c == '.')).parse(rest)?;
            Ok((rest, ()))
        },
        TokenError::expected_one,
    )
    .parse(input)
}

fn unsigned_number(input: InputSpan<'_>) -> Result<'_, InputSpan<'_>, TokenError> {
    recognize((digit1, opt((char('.'), digit1)))).parse(input)
}

fn signed_number(input: InputSpan<'_>) -> Result<'_, InputSpan<'_>, TokenError> {
    recognize((opt(one_of("+-")), unsigned_number)).parse(input)
}

fn parenthesized_fraction(input: InputSpan<'_>) -> Result<'_, InputSpan<'_>, TokenError> {
    recognize((
        opt(one_of("+-")),
        char('('),
        space0,
        signed_number,
        space0,
        opt((char('/'), space0, signed_number, space0)),
        char(')'),
    ))
    .parse(input)
}

/// Parses an exponent: `2`, `-2`, `0.5`, `(1/2)` or `-(3/2)`.
///
/// Only the shape is checked here. The value is read by the caller so that
/// it can report invalid values such as `(1/0)` with their span.
pub fn exponent(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(
        parenthesized_fraction.or(signed_number),
        TokenError::expected_exponent,
    )
    .parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        token::error::{ExpectKind, TokenErrorKind},
        util::test::input,
    };

    #[test]
    fn one_alone() {
        let (rest, matched) = one(input("1 @dependent")).expect("should parse one");
        assert_eq!(matched.lexeme(), "1");
        assert_eq!(rest.fragment(), &"@dependent");
    }

    #[test]
    fn one_at_end_of_input() {
        let (rest, matched) = one(input("1")).expect("should parse one");
        assert_eq!(matched.lexeme(), "1");
        assert_eq!(rest.fragment(), &"");
    }

    #[test]
    fn one_rejects_longer_numbers() {
        let Err(nom::Err::Error(error)) = one(input("10")) else {
            panic!("expected a recoverable error");
        };
        assert_eq!(error.kind, TokenErrorKind::Expect(ExpectKind::One));
    }

    #[test]
    fn integer_exponents() {
        for source in ["2", "-2", "+3", "10"] {
            let (rest, matched) = exponent(input(source)).expect("should parse exponent");
            assert_eq!(matched.lexeme(), source);
            assert_eq!(rest.fragment(), &"");
        }
    }

    #[test]
    fn decimal_exponent() {
        let (rest, matched) = exponent(input("0.5 *")).expect("should parse exponent");
        assert_eq!(matched.lexeme(), "0.5");
        assert_eq!(rest.fragment(), &"*");
    }

    #[test]
    fn fraction_exponents() {
        for source in ["(1/2)", "( -3 / 2 )", "-(1/2)", "(2)"] {
            let (rest, matched) = exponent(input(source)).expect("should parse exponent");
            assert_eq!(matched.lexeme(), source);
            assert_eq!(rest.fragment(), &"");
        }
    }

    #[test]
    fn missing_exponent() {
        let Err(nom::Err::Error(error)) = exponent(input("*T")) else {
            panic!("expected a recoverable error");
        };
        assert_eq!(error.kind, TokenErrorKind::Expect(ExpectKind::Exponent));
    }
}
