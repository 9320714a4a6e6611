//! Lowering of parsed declarations into quantities.

use std::fmt;

use dimless_quantity::{Dimension, Exponent, Quantity, QuantityError, Role};
use dimless_shared::{
    error::{AsDimlessError, Context, ErrorLocation},
    span::Span,
};
use indexmap::IndexMap;

use crate::ast::{DeclFile, DeclarationNode, DimensionExpr, DimensionExprNode, DimensionOp, Flag, FlagNode};

/// An error found while turning a declaration into a [`Quantity`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowerError {
    kind: LowerErrorKind,
    span: Span,
}

/// The different kinds of lowering errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LowerErrorKind {
    /// Both `@dependent` and `@scaling` were given
    ConflictingFlags {
        /// The span of the flag given first
        first: Span,
    },
    /// The same flag was given twice
    RepeatedFlag {
        /// The repeated flag
        flag: Flag,
        /// The span of the first occurrence
        first: Span,
    },
    /// A dimension appears more than once in one dimension expression
    RepeatedDimension {
        /// The dimension name
        name: String,
        /// The span of the first occurrence
        first: Span,
    },
    /// The quantity itself is invalid
    InvalidQuantity(QuantityError),
}

impl LowerError {
    const fn new(kind: LowerErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the kind of error
    #[must_use]
    pub const fn kind(&self) -> &LowerErrorKind {
        &self.kind
    }

    /// Returns the span of the offending text
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }
}

/// Lowers every declaration of a file, in file order.
///
/// # Errors
///
/// Returns every error found in any declaration.
pub fn lower_file(file: &DeclFile) -> Result<Vec<Quantity>, Vec<LowerError>> {
    let mut quantities = Vec::with_capacity(file.declarations().len());
    let mut errors = Vec::new();

    for declaration in file.declarations() {
        match lower_declaration(declaration) {
            Ok(quantity) => quantities.push(quantity),
            Err(declaration_errors) => errors.extend(declaration_errors),
        }
    }

    if errors.is_empty() {
        Ok(quantities)
    } else {
        Err(errors)
    }
}

/// Lowers one declaration.
///
/// A declaration without a dimension is dimensionless. A declaration
/// without flags is a plain quantity.
///
/// # Errors
///
/// Returns an error for conflicting or repeated flags, for a dimension
/// named twice in the dimension expression, or if the quantity is invalid.
pub fn lower_declaration(declaration: &DeclarationNode) -> Result<Quantity, Vec<LowerError>> {
    let mut errors = Vec::new();

    let (role, role_span) = lower_flags(declaration.flags(), &mut errors);
    let dimension = declaration
        .dimension()
        .map_or_else(Dimension::dimensionless, |expr| {
            lower_dimension(expr, &mut errors)
        });

    if !errors.is_empty() {
        return Err(errors);
    }

    let name = declaration.name();
    Quantity::with_role(name.as_str(), dimension, role).map_err(|error| {
        let span = match &error {
            QuantityError::DimensionlessScaling { .. } => role_span.unwrap_or_else(|| name.span()),
            QuantityError::EmptyName => name.span(),
        };
        vec![LowerError::new(LowerErrorKind::InvalidQuantity(error), span)]
    })
}

/// Returns the role given by the flags and the span of the flag that gave
/// it.
fn lower_flags(flags: &[FlagNode], errors: &mut Vec<LowerError>) -> (Role, Option<Span>) {
    let mut accepted: Option<&FlagNode> = None;

    for flag in flags {
        match accepted {
            None => accepted = Some(flag),
            Some(first) if **first == **flag => errors.push(LowerError::new(
                LowerErrorKind::RepeatedFlag {
                    flag: **flag,
                    first: first.span(),
                },
                flag.span(),
            )),
            Some(first) => errors.push(LowerError::new(
                LowerErrorKind::ConflictingFlags {
                    first: first.span(),
                },
                flag.span(),
            )),
        }
    }

    match accepted {
        None => (Role::Plain, None),
        Some(flag) => {
            let role = match **flag {
                Flag::Dependent => Role::Dependent,
                Flag::Scaling => Role::Scaling,
            };
            (role, Some(flag.span()))
        }
    }
}

fn lower_dimension(expr: &DimensionExprNode, errors: &mut Vec<LowerError>) -> Dimension {
    let mut terms = IndexMap::new();
    collect_terms(expr, &Exponent::one(), &mut terms, errors);

    terms
        .into_iter()
        .map(|(name, (exponent, _))| (name, exponent))
        .collect()
}

/// Collects `name -> (exponent, span)`, with `sign` applied to every
/// exponent below `expr`.
fn collect_terms<'a>(
    expr: &'a DimensionExprNode,
    sign: &Exponent,
    terms: &mut IndexMap<&'a str, (Exponent, Span)>,
    errors: &mut Vec<LowerError>,
) {
    match &**expr {
        DimensionExpr::One => {}
        DimensionExpr::Base { name, exponent } => {
            let value = exponent
                .as_ref()
                .map_or_else(Exponent::one, |exponent| (**exponent).clone());

            if let Some((_, first)) = terms.get(name.as_str()) {
                errors.push(LowerError::new(
                    LowerErrorKind::RepeatedDimension {
                        name: name.as_str().to_string(),
                        first: *first,
                    },
                    name.span(),
                ));
            } else {
                terms.insert(name.as_str(), (&value * sign, name.span()));
            }
        }
        DimensionExpr::BinaryOp { op, left, right } => {
            collect_terms(left, sign, terms, errors);
            let right_sign = match **op {
                DimensionOp::Multiply => sign.clone(),
                DimensionOp::Divide => -sign,
            };
            collect_terms(right, &right_sign, terms, errors);
        }
        DimensionExpr::Parenthesized(inner) => collect_terms(inner, sign, terms, errors),
    }
}

impl fmt::Display for LowerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LowerErrorKind::ConflictingFlags { .. } => write!(
                f,
                "a quantity cannot be both `{}` and `{}`",
                Flag::Dependent,
                Flag::Scaling
            ),
            LowerErrorKind::RepeatedFlag { flag, .. } => write!(f, "repeated flag `{flag}`"),
            LowerErrorKind::RepeatedDimension { name, .. } => {
                write!(f, "dimension `{name}` appears more than once")
            }
            LowerErrorKind::InvalidQuantity(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for LowerError {}

impl AsDimlessError for LowerError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match &self.kind {
            LowerErrorKind::ConflictingFlags { .. } => vec![Context::Help(
                "the dependent quantity is never used for scaling".to_string(),
            )],
            LowerErrorKind::RepeatedDimension { .. } => vec![Context::Help(
                "combine the exponents into a single term".to_string(),
            )],
            LowerErrorKind::InvalidQuantity(error) => error.context(),
            LowerErrorKind::RepeatedFlag { .. } => vec![],
        }
    }

    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        Some(self.span.to_error_location(source))
    }

    fn context_with_source(&self, source: &str) -> Vec<(Context, Option<ErrorLocation>)> {
        match &self.kind {
            LowerErrorKind::ConflictingFlags { first }
            | LowerErrorKind::RepeatedFlag { first, .. }
            | LowerErrorKind::RepeatedDimension { first, .. } => vec![(
                Context::Note("first given here".to_string()),
                Some(first.to_error_location(source)),
            )],
            LowerErrorKind::InvalidQuantity(_) => vec![],
        }
    }
}
