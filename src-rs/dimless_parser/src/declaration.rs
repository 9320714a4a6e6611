//! Quantity declaration parsing.

use nom::{
    Parser as _,
    combinator::{all_consuming, opt},
    multi::many0,
};

use crate::{
    ast::{Declaration, DeclarationNode, Flag, FlagNode, Node},
    dimension,
    error::{ErrorHandlingParser, ParserError},
    token::{
        naming::identifier,
        structure::end_of_line,
        symbol::{at, colon},
    },
    util::{InputSpan, Result},
};

/// Parses a declaration followed by the end of its line
///
/// This function **may not consume the complete input**.
pub fn parse(input: InputSpan<'_>) -> Result<'_, DeclarationNode, ParserError> {
    declaration_line(input)
}

/// Parses a declaration followed by the end of its line
///
/// This function **fails if the complete input is not consumed**.
pub fn parse_complete(input: InputSpan<'_>) -> Result<'_, DeclarationNode, ParserError> {
    all_consuming(declaration_line).parse(input)
}

fn declaration_line(input: InputSpan<'_>) -> Result<'_, DeclarationNode, ParserError> {
    let (rest, declaration) = declaration(input)?;

    let (rest, _) = end_of_line
        .or_fail_with(ParserError::missing_end_of_line(declaration.span()))
        .parse(rest)?;

    Ok((rest, declaration))
}

/// Parses `name [: dimension] [@flag...]`.
fn declaration(input: InputSpan<'_>) -> Result<'_, DeclarationNode, ParserError> {
    let (rest, name_token) = identifier
        .convert_errors()
        .convert_error_to(ParserError::expect_declaration)
        .parse(input)?;
    let name = Node::new(name_token.lexeme().to_string(), name_token.lexeme_span);

    let (rest, dimension) = opt(|input| {
        let (rest, colon_token) = colon.convert_errors().parse(input)?;
        let (rest, dimension) = dimension::parse
            .or_fail_with(ParserError::missing_dimension(&colon_token))
            .parse(rest)?;
        Ok((rest, dimension))
    })
    .parse(rest)?;

    let (rest, flags) = many0(flag).parse(rest)?;

    let end = flags
        .last()
        .map(Node::span)
        .or_else(|| dimension.as_ref().map(Node::span))
        .unwrap_or_else(|| name.span());
    let span = name.span().merge(&end);

    Ok((rest, Node::new(Declaration::new(name, dimension, flags), span)))
}

/// Parses `@dependent` or `@scaling`.
fn flag(input: InputSpan<'_>) -> Result<'_, FlagNode, ParserError> {
    let (rest, at_token) = at.convert_errors().parse(input)?;
    let (rest, name_token) = identifier
        .or_fail_with(ParserError::missing_flag_name(&at_token))
        .parse(rest)?;

    let Some(flag) = Flag::from_name(name_token.lexeme()) else {
        return Err(nom::Err::Failure(ParserError::unknown_flag(
            &at_token,
            &name_token,
        )));
    };

    let span = at_token.lexeme_span.merge(&name_token.lexeme_span);
    Ok((rest, Node::new(flag, span)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::DimensionExpr,
        error::{ExpectKind, IncompleteKind, ParserErrorReason},
        util::test::input,
    };

    fn failure(source: &str) -> ParserError {
        match parse_complete(input(source)) {
            Err(nom::Err::Failure(error)) => error,
            other => panic!("expected a failure, got {other:?}"),
        }
    }

    mod success_tests {
        use super::*;

        #[test]
        fn name_only() {
            let (_, declaration) = parse_complete(input("theta0")).expect("should parse");

            assert_eq!(declaration.name().as_str(), "theta0");
            assert_eq!(declaration.dimension(), None);
            assert!(declaration.flags().is_empty());
            assert_eq!(declaration.span().end().offset, 6);
        }

        #[test]
        fn dimension_and_flag() {
            let source = "g : length / time^2   @scaling\n";
            let (rest, declaration) = parse(input(source)).expect("should parse");

            assert_eq!(rest.fragment(), &"");
            assert_eq!(declaration.name().as_str(), "g");
            let dimension = declaration.dimension().expect("dimension should be present");
            assert_eq!(dimension.to_string(), "length / time^2");

            let flags: Vec<Flag> = declaration.flags().iter().map(|flag| **flag).collect();
            assert_eq!(flags, vec![Flag::Scaling]);
            assert_eq!(declaration.flags()[0].span().start().offset, 22);
            assert_eq!(declaration.span().end().offset, 30);
        }

        #[test]
        fn dimensionless_with_one() {
            let (_, declaration) = parse_complete(input("Re: 1")).expect("should parse");

            let dimension = declaration.dimension().expect("dimension should be present");
            assert_eq!(**dimension, DimensionExpr::One);
        }

        #[test]
        fn several_flags_are_kept_in_order() {
            let (_, declaration) =
                parse_complete(input("x: L @scaling @dependent # comment")).expect("should parse");

            let flags: Vec<Flag> = declaration.flags().iter().map(|flag| **flag).collect();
            assert_eq!(flags, vec![Flag::Scaling, Flag::Dependent]);
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn not_a_declaration() {
            let Err(nom::Err::Error(error)) = parse(input("3x: L")) else {
                panic!("expected a recoverable error");
            };

            assert_eq!(error.error_offset, 0);
            assert_eq!(error.reason, ParserErrorReason::Expect(ExpectKind::Declaration));
        }

        #[test]
        fn missing_dimension_after_colon() {
            let error = failure("x: @dependent");

            let ParserErrorReason::Incomplete { cause, kind } = error.reason else {
                panic!("expected an incomplete error, got {error:?}");
            };
            assert_eq!(kind, IncompleteKind::MissingDimension);
            assert_eq!(cause.start().offset, 1);
            assert_eq!(error.error_offset, 3);
        }

        #[test]
        fn unknown_flag() {
            let error = failure("x: L @constant");

            assert_eq!(error.error_offset, 5);
            assert_eq!(
                error.reason,
                ParserErrorReason::UnknownFlag {
                    name: "constant".to_string()
                }
            );
        }

        #[test]
        fn missing_flag_name() {
            let error = failure("x: L @");

            assert!(matches!(
                error.reason,
                ParserErrorReason::Incomplete {
                    kind: IncompleteKind::MissingFlagName,
                    ..
                }
            ));
        }

        #[test]
        fn trailing_text() {
            let error = failure("m : mass kg");

            assert_eq!(error.error_offset, 9);
            assert!(matches!(
                error.reason,
                ParserErrorReason::Incomplete {
                    kind: IncompleteKind::MissingEndOfLine,
                    ..
                }
            ));
        }
    }
}
