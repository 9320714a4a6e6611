#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! Parser for quantity declaration files

use ast::{DeclFile, DeclarationNode, DimensionExprNode};

pub mod ast;
mod config;
pub mod error;
mod token;

mod util;
use util::{InputSpan, Result as InternalResult};

mod declaration;
mod dimension;
mod file;
mod lower;

pub use config::Config;
pub use lower::{LowerError, LowerErrorKind, lower_declaration, lower_file};

/// Parses a complete declaration file.
///
/// # Errors
///
/// Returns the first syntax error in the file.
pub fn parse_file(input: &str, config: Option<Config>) -> Result<DeclFile, error::ParserError> {
    parse(input, config, file::parse_complete)
}

/// Parses a single quantity declaration.
///
/// # Errors
///
/// Returns an error if the input is not exactly one valid declaration.
pub fn parse_declaration(
    input: &str,
    config: Option<Config>,
) -> Result<DeclarationNode, error::ParserError> {
    parse(input, config, declaration::parse_complete)
}

/// Parses a dimension expression such as `mass * length / time^2`.
///
/// # Errors
///
/// Returns an error if the input is not a valid dimension expression.
pub fn parse_dimension(
    input: &str,
    config: Option<Config>,
) -> Result<DimensionExprNode, error::ParserError> {
    parse(input, config, dimension::parse_complete)
}

fn parse<T>(
    input: &str,
    config: Option<Config>,
    parser: impl Fn(InputSpan<'_>) -> InternalResult<'_, T, error::ParserError>,
) -> Result<T, error::ParserError> {
    let config = config.unwrap_or_default();
    let input = InputSpan::new_extra(input, config);

    match parser(input) {
        Ok((_rest, ast)) => Ok(ast),
        // only `complete` combinators are used, so this means the input ended early
        Err(nom::Err::Incomplete(_needed)) => Err(error::ParserError {
            error_offset: input.fragment().len(),
            reason: error::ParserErrorReason::UnexpectedToken,
        }),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(e),
    }
}
