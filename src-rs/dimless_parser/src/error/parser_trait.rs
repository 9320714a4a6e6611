use nom::{Parser, error::ParseError};

/// Error conversion helpers for nom parsers.
///
/// Recoverable errors (`nom::Err::Error`) let an alternative parser be tried.
/// Once enough input has been seen to know what is being parsed, a missing
/// piece becomes an unrecoverable error (`nom::Err::Failure`) with a reason
/// that says what was missing.
pub trait ErrorHandlingParser<I, O, E>: Parser<I, Output = O, Error = E>
where
    E: ParseError<I>,
{
    /// Converts recoverable errors with `convert_error`, and unrecoverable
    /// errors with `From`.
    fn convert_error_to<E2>(
        mut self,
        convert_error: impl Fn(E) -> E2,
    ) -> impl Parser<I, Output = O, Error = E2>
    where
        Self: Sized,
        E2: ParseError<I> + From<E>,
    {
        move |input| {
            self.parse(input).map_err(|e| match e {
                nom::Err::Error(e) => nom::Err::Error(convert_error(e)),
                nom::Err::Failure(e) => nom::Err::Failure(e.into()),
                nom::Err::Incomplete(e) => nom::Err::Incomplete(e),
            })
        }
    }

    /// Turns recoverable errors into unrecoverable ones, converting them
    /// with `convert_error`.
    ///
    /// ```ignore
    /// let (rest, exponent) = exponent
    ///     .or_fail_with(ParserError::missing_exponent(&caret_token))
    ///     .parse(rest)?;
    /// ```
    fn or_fail_with<E2>(
        mut self,
        convert_error: impl Fn(E) -> E2,
    ) -> impl Parser<I, Output = O, Error = E2>
    where
        Self: Sized,
        E2: ParseError<I> + From<E>,
    {
        move |input| {
            self.parse(input).map_err(|e| match e {
                nom::Err::Error(e) => nom::Err::Failure(convert_error(e)),
                nom::Err::Failure(e) => nom::Err::Failure(e.into()),
                nom::Err::Incomplete(e) => nom::Err::Incomplete(e),
            })
        }
    }

    /// Converts both kinds of errors with `From`.
    fn convert_errors<E2>(mut self) -> impl Parser<I, Output = O, Error = E2>
    where
        Self: Sized,
        E2: ParseError<I> + From<E>,
    {
        move |input| {
            self.parse(input).map_err(|e| match e {
                nom::Err::Error(e) => nom::Err::Error(e.into()),
                nom::Err::Failure(e) => nom::Err::Failure(e.into()),
                nom::Err::Incomplete(e) => nom::Err::Incomplete(e),
            })
        }
    }
}

impl<I, O, E, P> ErrorHandlingParser<I, O, E> for P
where
    P: Parser<I, Output = O, Error = E>,
    E: ParseError<I>,
{
}
