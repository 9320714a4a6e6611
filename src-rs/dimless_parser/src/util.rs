use nom::{IResult, Parser as NomParser, error::Error};
use nom_locate::LocatedSpan;
use dimless_shared::span::{SourceLocation, Span};

use super::config::Config;

/// A span of text in the input string.
///
/// The span carries the parser configuration along with the text, so that
/// any parser can consult it.
pub type InputSpan<'a> = LocatedSpan<&'a str, Config>;

pub fn source_location_from(input_span: InputSpan<'_>) -> SourceLocation {
    SourceLocation {
        offset: input_span.location_offset(),
        line: usize::try_from(input_span.location_line()).unwrap_or(usize::MAX),
        column: input_span.get_column(),
    }
}

pub fn span_from(start_input_span: InputSpan<'_>, end_input_span: InputSpan<'_>) -> Span {
    Span::new(
        source_location_from(start_input_span),
        source_location_from(end_input_span),
    )
}

/// A result type for parser operations.
pub type Result<'a, O, E = Error<InputSpan<'a>>> = IResult<InputSpan<'a>, O, E>;

/// A parser over [`InputSpan`].
///
/// Implemented for every nom parser over [`InputSpan`], so that parser
/// signatures stay short.
pub trait Parser<'a, O, E = Error<InputSpan<'a>>>:
    NomParser<InputSpan<'a>, Output = O, Error = E>
{
}

impl<'a, O, E, P> Parser<'a, O, E> for P where P: NomParser<InputSpan<'a>, Output = O, Error = E> {}
