//! Declaration file parsing.

use nom::{
    Parser as _,
    character::complete::space0,
    combinator::{eof, opt},
    multi::many0,
};

use crate::{
    ast::DeclFile,
    declaration,
    error::{ErrorHandlingParser, ParserError},
    token::structure::end_of_line,
    util::{InputSpan, Result},
};

/// Parses a complete declaration file
///
/// Leading blank lines and comments are skipped. Every remaining line must
/// be a declaration, a comment or blank.
pub fn parse_complete(input: InputSpan<'_>) -> Result<'_, DeclFile, ParserError> {
    let (rest, _) = space0::<_, ParserError>(input)?;
    let (rest, _) = opt(end_of_line.convert_errors::<ParserError>()).parse(rest)?;

    let (rest, declarations) = many0(declaration::parse).parse(rest)?;

    let (rest, _) = eof
        .convert_error_to(ParserError::expect_declaration)
        .parse(rest)?;

    Ok((rest, DeclFile::new(declarations)))
}
