//! Dimension expression parsing.

use dimless_quantity::Exponent;
use nom::{
    Parser as _,
    branch::alt,
    combinator::{all_consuming, map, opt},
    multi::many0,
};

use crate::{
    Config,
    ast::{DimensionExpr, DimensionExprNode, DimensionOp, ExponentNode, Node},
    error::{ErrorHandlingParser, ParserError},
    token::{
        Token,
        literal::{self, one},
        naming::identifier,
        symbol::{caret, paren_left, paren_right, slash, star},
    },
    util::{InputSpan, Result},
};

/// Parses a dimension expression
///
/// This function **may not consume the complete input**.
pub fn parse(input: InputSpan<'_>) -> Result<'_, DimensionExprNode, ParserError> {
    dimension_expr(input)
}

/// Parses a dimension expression
///
/// This function **fails if the complete input is not consumed**.
pub fn parse_complete(input: InputSpan<'_>) -> Result<'_, DimensionExprNode, ParserError> {
    all_consuming(dimension_expr).parse(input)
}

/// Parses terms joined by `*` and `/`, left-associative.
///
/// - `length*mass` → `(length * mass)`
/// - `length/time^2` → `(length / time^2)`
/// - `mass*length/time^2` → `((mass * length) / time^2)`
fn dimension_expr(input: InputSpan<'_>) -> Result<'_, DimensionExprNode, ParserError> {
    let (rest, first_term) = dimension_term
        .convert_error_to(ParserError::expect_dimension)
        .parse(input)?;

    let (rest, rest_terms) = many0(|input| {
        let op = alt((
            map(star, |token| Node::new(DimensionOp::Multiply, token.lexeme_span)),
            map(slash, |token| Node::new(DimensionOp::Divide, token.lexeme_span)),
        ));

        let (rest, op) = op.convert_errors().parse(input)?;
        let (rest, term) = dimension_term
            .or_fail_with(ParserError::missing_second_term(&op))
            .parse(rest)?;
        Ok((rest, (op, term)))
    })
    .parse(rest)?;

    let expr = rest_terms.into_iter().fold(first_term, |left, (op, right)| {
        let span = left.span().merge(&right.span());
        Node::new(DimensionExpr::binary_op(op, left, right), span)
    });

    Ok((rest, expr))
}

/// Parses a base dimension with an optional exponent, `1`, or a
/// parenthesized expression.
fn dimension_term(input: InputSpan<'_>) -> Result<'_, DimensionExprNode, ParserError> {
    let config = input.extra;

    let parse_base = |input| {
        let (rest, name_token) = identifier.convert_errors().parse(input)?;
        let name = Node::new(name_token.lexeme().to_string(), name_token.lexeme_span);

        let (rest, exponent) = opt(|input| {
            let (rest, caret_token) = caret.convert_errors().parse(input)?;
            let (rest, exponent_token) = literal::exponent
                .or_fail_with(ParserError::missing_exponent(&caret_token))
                .parse(rest)?;
            let exponent = exponent_node(&exponent_token, config)?;
            Ok((rest, exponent))
        })
        .parse(rest)?;

        let span = match &exponent {
            Some(exponent) => name.span().merge(&exponent.span()),
            None => name.span(),
        };

        Ok((rest, Node::new(DimensionExpr::base(name, exponent), span)))
    };

    let parse_one = |input| {
        let (rest, one_token) = one.convert_errors().parse(input)?;
        Ok((rest, Node::new(DimensionExpr::One, one_token.lexeme_span)))
    };

    let parse_parenthesized = |input| {
        let (rest, paren_left_token) = paren_left.convert_errors().parse(input)?;

        let (rest, expr) = dimension_expr
            .or_fail_with(ParserError::paren_missing_dimension(&paren_left_token))
            .parse(rest)?;

        let (rest, paren_right_token) = paren_right
            .or_fail_with(ParserError::unclosed_paren(&paren_left_token))
            .parse(rest)?;

        // the parenthesized node keeps the parens inside the span
        let span = paren_left_token
            .lexeme_span
            .merge(&paren_right_token.lexeme_span);

        Ok((rest, Node::new(DimensionExpr::Parenthesized(expr), span)))
    };

    parse_base
        .or(parse_one)
        .or(parse_parenthesized)
        .parse(input)
}

/// Reads the value of an exponent token.
///
/// `-(3/2)` negates the fraction inside the parentheses.
fn exponent_node(
    token: &Token<'_>,
    config: Config,
) -> std::result::Result<ExponentNode, nom::Err<ParserError>> {
    let lexeme = token.lexeme();

    if !config.allow_decimal_exponents && lexeme.contains('.') {
        return Err(nom::Err::Failure(ParserError::decimal_exponent(token)));
    }

    let (negate, body) = if let Some(inner) = lexeme.strip_prefix("-(") {
        (true, inner)
    } else if let Some(inner) = lexeme.strip_prefix("+(") {
        (false, inner)
    } else {
        (false, lexeme.strip_prefix('(').unwrap_or(lexeme))
    };
    let body = body.strip_suffix(')').unwrap_or(body);

    let exponent = body
        .parse::<Exponent>()
        .map_err(|_| nom::Err::Failure(ParserError::invalid_exponent(token)))?;
    let exponent = if negate { -exponent } else { exponent };

    Ok(Node::new(exponent, token.lexeme_span))
}
