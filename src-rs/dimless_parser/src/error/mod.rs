//! Errors produced while parsing declaration files.

use std::fmt;

use dimless_shared::{
    error::{AsDimlessError, Context, ErrorLocation},
    span::Span,
};

use crate::{
    ast::{DimensionOp, DimensionOpNode},
    token::{
        Token,
        error::{TokenError, TokenErrorKind},
    },
    util::InputSpan,
};

mod parser_trait;
pub use parser_trait::ErrorHandlingParser;

/// An error that occurred during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserError {
    /// The offset in the source where the error occurred
    pub error_offset: usize,
    /// The reason for the error
    pub reason: ParserErrorReason,
}

/// The different kinds of errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErrorReason {
    /// Expected a syntax element but found something else
    Expect(ExpectKind),
    /// A syntax element was started but not finished
    Incomplete {
        /// The span of the text that started the element
        cause: Span,
        /// What was missing
        kind: IncompleteKind,
    },
    /// An exponent has the right shape but no valid value, such as `(1/0)`
    InvalidExponent {
        /// The exponent as written
        input: String,
    },
    /// A decimal exponent was written while decimal exponents are disabled
    DecimalExponent {
        /// The exponent as written
        input: String,
    },
    /// A flag other than `@dependent` and `@scaling`
    UnknownFlag {
        /// The flag name, without the `@`
        name: String,
    },
    /// Found text where the declaration file should have ended
    UnexpectedToken,
    /// A token-level error occurred
    TokenError(TokenErrorKind),
    /// A low-level nom parsing error
    NomError(nom::error::ErrorKind),
}

/// Syntax elements that could have been expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectKind {
    /// A quantity declaration
    Declaration,
    /// A dimension expression
    Dimension,
}

/// The ways a syntax element can be incomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncompleteKind {
    /// `:` with no dimension after it
    MissingDimension,
    /// `*` or `/` with no dimension after it
    MissingSecondTerm {
        /// The operator
        operator: DimensionOp,
    },
    /// `^` with no exponent after it
    MissingExponent,
    /// `@` with no flag name after it
    MissingFlagName,
    /// `(` with no dimension after it
    ParenMissingDimension,
    /// `(` with no matching `)`
    UnclosedParen,
    /// A declaration followed by more text on the same line
    MissingEndOfLine,
}

impl ParserError {
    fn with_reason(self, reason: ParserErrorReason) -> Self {
        Self {
            error_offset: self.error_offset,
            reason,
        }
    }

    const fn from_token_error(error: TokenError, reason: ParserErrorReason) -> Self {
        Self {
            error_offset: error.offset,
            reason,
        }
    }

    const fn incomplete(cause: Span, kind: IncompleteKind) -> ParserErrorReason {
        ParserErrorReason::Incomplete { cause, kind }
    }

    pub(crate) fn expect_declaration(error: Self) -> Self {
        error.with_reason(ParserErrorReason::Expect(ExpectKind::Declaration))
    }

    pub(crate) fn expect_dimension(error: Self) -> Self {
        error.with_reason(ParserErrorReason::Expect(ExpectKind::Dimension))
    }

    pub(crate) fn missing_dimension(colon_token: &Token<'_>) -> impl Fn(Self) -> Self {
        let cause = colon_token.lexeme_span;
        move |error| error.with_reason(Self::incomplete(cause, IncompleteKind::MissingDimension))
    }

    pub(crate) fn missing_second_term(operator: &DimensionOpNode) -> impl Fn(Self) -> Self {
        let cause = operator.span();
        let kind = IncompleteKind::MissingSecondTerm {
            operator: **operator,
        };
        move |error| error.with_reason(Self::incomplete(cause, kind))
    }

    pub(crate) fn missing_exponent(caret_token: &Token<'_>) -> impl Fn(TokenError) -> Self {
        let cause = caret_token.lexeme_span;
        move |error| {
            Self::from_token_error(error, Self::incomplete(cause, IncompleteKind::MissingExponent))
        }
    }

    pub(crate) fn missing_flag_name(at_token: &Token<'_>) -> impl Fn(TokenError) -> Self {
        let cause = at_token.lexeme_span;
        move |error| {
            Self::from_token_error(error, Self::incomplete(cause, IncompleteKind::MissingFlagName))
        }
    }

    pub(crate) fn paren_missing_dimension(paren_left_token: &Token<'_>) -> impl Fn(Self) -> Self {
        let cause = paren_left_token.lexeme_span;
        move |error| {
            error.with_reason(Self::incomplete(
                cause,
                IncompleteKind::ParenMissingDimension,
            ))
        }
    }

    pub(crate) fn unclosed_paren(paren_left_token: &Token<'_>) -> impl Fn(TokenError) -> Self {
        let cause = paren_left_token.lexeme_span;
        move |error| {
            Self::from_token_error(error, Self::incomplete(cause, IncompleteKind::UnclosedParen))
        }
    }

    pub(crate) fn missing_end_of_line(declaration_span: Span) -> impl Fn(TokenError) -> Self {
        move |error| {
            Self::from_token_error(
                error,
                Self::incomplete(declaration_span, IncompleteKind::MissingEndOfLine),
            )
        }
    }

    pub(crate) fn invalid_exponent(exponent_token: &Token<'_>) -> Self {
        Self {
            error_offset: exponent_token.lexeme_span.start().offset,
            reason: ParserErrorReason::InvalidExponent {
                input: exponent_token.lexeme().to_string(),
            },
        }
    }

    pub(crate) fn decimal_exponent(exponent_token: &Token<'_>) -> Self {
        Self {
            error_offset: exponent_token.lexeme_span.start().offset,
            reason: ParserErrorReason::DecimalExponent {
                input: exponent_token.lexeme().to_string(),
            },
        }
    }

    pub(crate) fn unknown_flag(at_token: &Token<'_>, name_token: &Token<'_>) -> Self {
        Self {
            error_offset: at_token.lexeme_span.start().offset,
            reason: ParserErrorReason::UnknownFlag {
                name: name_token.lexeme().to_string(),
            },
        }
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl fmt::Display for ParserErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expect(ExpectKind::Declaration) => write!(f, "expected quantity declaration"),
            Self::Expect(ExpectKind::Dimension) => write!(f, "expected dimension"),
            Self::Incomplete { cause: _, kind } => match kind {
                IncompleteKind::MissingDimension => write!(f, "expected dimension after `:`"),
                IncompleteKind::MissingSecondTerm { operator } => {
                    write!(f, "expected dimension after `{operator}`")
                }
                IncompleteKind::MissingExponent => write!(f, "expected exponent after `^`"),
                IncompleteKind::MissingFlagName => write!(f, "expected flag name after `@`"),
                IncompleteKind::ParenMissingDimension => {
                    write!(f, "expected dimension inside parentheses")
                }
                IncompleteKind::UnclosedParen => write!(f, "unclosed parenthesis"),
                IncompleteKind::MissingEndOfLine => write!(f, "unexpected character"),
            },
            Self::InvalidExponent { input } => write!(f, "invalid exponent `{input}`"),
            Self::DecimalExponent { input } => {
                write!(f, "decimal exponent `{input}` is not allowed")
            }
            Self::UnknownFlag { name } => write!(f, "unknown flag `@{name}`"),
            Self::UnexpectedToken => write!(f, "unexpected character"),
            Self::TokenError(kind) => write!(f, "{kind}"),
            Self::NomError(kind) => write!(f, "parser error ({})", kind.description()),
        }
    }
}

impl std::error::Error for ParserError {}

impl<'a> nom::error::ParseError<InputSpan<'a>> for ParserError {
    fn from_error_kind(input: InputSpan<'a>, kind: nom::error::ErrorKind) -> Self {
        #[expect(
            clippy::wildcard_enum_match_arm,
            reason = "only the EOF error kind gets a dedicated reason"
        )]
        let reason = match kind {
            // `all_consuming` reports leftover input as an EOF error
            nom::error::ErrorKind::Eof => ParserErrorReason::UnexpectedToken,
            _ => ParserErrorReason::NomError(kind),
        };

        Self {
            error_offset: input.location_offset(),
            reason,
        }
    }

    fn append(_input: InputSpan<'a>, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}

impl From<TokenError> for ParserError {
    fn from(e: TokenError) -> Self {
        Self {
            error_offset: e.offset,
            reason: ParserErrorReason::TokenError(e.kind),
        }
    }
}

impl AsDimlessError for ParserError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match &self.reason {
            ParserErrorReason::Expect(ExpectKind::Declaration) => vec![Context::Note(
                "a declaration is a name, an optional `: dimension` and optional flags"
                    .to_string(),
            )],
            ParserErrorReason::InvalidExponent { .. } => vec![Context::Help(
                "exponents are integers like `-2`, decimals like `0.5` or fractions like `(1/2)`"
                    .to_string(),
            )],
            ParserErrorReason::DecimalExponent { .. } => vec![Context::Help(
                "write the exponent as a fraction, for example `(1/2)`".to_string(),
            )],
            ParserErrorReason::UnknownFlag { .. } => vec![Context::Help(
                "the available flags are `@dependent` and `@scaling`".to_string(),
            )],
            ParserErrorReason::Expect(ExpectKind::Dimension)
            | ParserErrorReason::Incomplete { .. }
            | ParserErrorReason::UnexpectedToken
            | ParserErrorReason::TokenError(_)
            | ParserErrorReason::NomError(_) => vec![],
        }
    }

    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        Some(ErrorLocation::from_source_and_offset(
            source,
            self.error_offset,
        ))
    }

    fn context_with_source(&self, source: &str) -> Vec<(Context, Option<ErrorLocation>)> {
        match &self.reason {
            ParserErrorReason::Incomplete {
                cause,
                kind: IncompleteKind::UnclosedParen | IncompleteKind::ParenMissingDimension,
            } => vec![(
                Context::Note("parenthesis opened here".to_string()),
                Some(cause.to_error_location(source)),
            )],
            ParserErrorReason::Expect(_)
            | ParserErrorReason::Incomplete { .. }
            | ParserErrorReason::InvalidExponent { .. }
            | ParserErrorReason::DecimalExponent { .. }
            | ParserErrorReason::UnknownFlag { .. }
            | ParserErrorReason::UnexpectedToken
            | ParserErrorReason::TokenError(_)
            | ParserErrorReason::NomError(_) => vec![],
        }
    }
}
