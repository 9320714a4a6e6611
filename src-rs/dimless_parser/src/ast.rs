//! Syntax tree of declaration files
//!
//! Every element is wrapped in a [`Node`] that remembers where in the file it
//! came from, so that lowering errors can point at the offending text.

use std::{fmt, ops::Deref};

use dimless_quantity::Exponent;
use dimless_shared::span::Span;

/// A syntax tree element together with its source span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    value: Box<T>,
    span: Span,
}

impl<T> Node<T> {
    /// Creates a new node with the given value and span
    #[must_use]
    pub fn new(value: T, span: Span) -> Self {
        Self {
            value: Box::new(value),
            span,
        }
    }

    /// Returns the span of the node
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Consumes the node and returns its value
    #[must_use]
    pub fn take_value(self) -> T {
        *self.value
    }
}

impl<T> Deref for Node<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

/// A name node
pub type NameNode = Node<String>;

/// An exponent node
pub type ExponentNode = Node<Exponent>;

/// A flag node
pub type FlagNode = Node<Flag>;

/// A dimension operator node
pub type DimensionOpNode = Node<DimensionOp>;

/// A dimension expression node
pub type DimensionExprNode = Node<DimensionExpr>;

/// A declaration node
pub type DeclarationNode = Node<Declaration>;

/// A parsed declaration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclFile {
    declarations: Vec<DeclarationNode>,
}

impl DeclFile {
    /// Creates a file from its declarations
    #[must_use]
    pub const fn new(declarations: Vec<DeclarationNode>) -> Self {
        Self { declarations }
    }

    /// Returns the declarations in file order
    #[must_use]
    pub fn declarations(&self) -> &[DeclarationNode] {
        &self.declarations
    }
}

/// One quantity declaration: `name [: dimension] [@flag...]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    name: NameNode,
    dimension: Option<DimensionExprNode>,
    flags: Vec<FlagNode>,
}

impl Declaration {
    /// Creates a declaration
    #[must_use]
    pub const fn new(
        name: NameNode,
        dimension: Option<DimensionExprNode>,
        flags: Vec<FlagNode>,
    ) -> Self {
        Self {
            name,
            dimension,
            flags,
        }
    }

    /// Returns the name of the declared quantity
    #[must_use]
    pub const fn name(&self) -> &NameNode {
        &self.name
    }

    /// Returns the dimension expression, if one was written
    #[must_use]
    pub const fn dimension(&self) -> Option<&DimensionExprNode> {
        self.dimension.as_ref()
    }

    /// Returns the flags in the order they were written
    #[must_use]
    pub fn flags(&self) -> &[FlagNode] {
        &self.flags
    }
}

/// A flag on a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    /// `@dependent`
    Dependent,
    /// `@scaling`
    Scaling,
}

impl Flag {
    /// Looks up a flag by its name, without the `@`
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dependent" => Some(Self::Dependent),
            "scaling" => Some(Self::Scaling),
            _ => None,
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dependent => write!(f, "@dependent"),
            Self::Scaling => write!(f, "@scaling"),
        }
    }
}

/// A binary operator in a dimension expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionOp {
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl fmt::Display for DimensionOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Multiply => write!(f, "*"),
            Self::Divide => write!(f, "/"),
        }
    }
}

/// A dimension expression such as `length / time^2`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimensionExpr {
    /// `1`, no dimension
    One,
    /// A base dimension with an optional exponent
    Base {
        /// The dimension name
        name: NameNode,
        /// The exponent, `1` when absent
        exponent: Option<ExponentNode>,
    },
    /// Two expressions joined by `*` or `/`
    BinaryOp {
        /// The operator
        op: DimensionOpNode,
        /// The left operand
        left: DimensionExprNode,
        /// The right operand
        right: DimensionExprNode,
    },
    /// An expression in parentheses
    Parenthesized(DimensionExprNode),
}

impl DimensionExpr {
    /// Creates a base dimension expression
    #[must_use]
    pub const fn base(name: NameNode, exponent: Option<ExponentNode>) -> Self {
        Self::Base { name, exponent }
    }

    /// Creates a binary operation expression
    #[must_use]
    pub const fn binary_op(
        op: DimensionOpNode,
        left: DimensionExprNode,
        right: DimensionExprNode,
    ) -> Self {
        Self::BinaryOp { op, left, right }
    }
}

impl fmt::Display for DimensionExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => write!(f, "1"),
            Self::Base {
                name,
                exponent: None,
            } => write!(f, "{}", **name),
            Self::Base {
                name,
                exponent: Some(exponent),
            } if exponent.is_integer() => write!(f, "{}^{}", **name, **exponent),
            Self::Base {
                name,
                exponent: Some(exponent),
            } => write!(f, "{}^({})", **name, **exponent),
            Self::BinaryOp { op, left, right } => write!(f, "{} {} {}", **left, **op, **right),
            Self::Parenthesized(inner) => write!(f, "({})", **inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use dimless_shared::span::SourceLocation;

    use super::*;

    fn span(start: usize, end: usize) -> Span {
        let location = |offset| SourceLocation {
            offset,
            line: 1,
            column: offset + 1,
        };
        Span::new(location(start), location(end))
    }

    #[test]
    fn node_derefs_to_value() {
        let node = Node::new("length".to_string(), span(2, 8));

        assert_eq!(node.len(), 6);
        assert_eq!(node.span().start().offset, 2);
        assert_eq!(node.take_value(), "length");
    }

    #[test]
    fn flag_names() {
        assert_eq!(Flag::from_name("dependent"), Some(Flag::Dependent));
        assert_eq!(Flag::from_name("scaling"), Some(Flag::Scaling));
        assert_eq!(Flag::from_name("constant"), None);
        assert_eq!(Flag::Scaling.to_string(), "@scaling");
    }

    #[test]
    fn display_dimension_expr() {
        let length = Node::new(
            DimensionExpr::base(Node::new("length".to_string(), span(0, 6)), None),
            span(0, 6),
        );
        let time = Node::new(
            DimensionExpr::base(
                Node::new("time".to_string(), span(9, 13)),
                Some(Node::new(Exponent::new(-1, 2), span(14, 20))),
            ),
            span(9, 20),
        );
        let expr = DimensionExpr::binary_op(
            Node::new(DimensionOp::Divide, span(7, 8)),
            length,
            time,
        );

        assert_eq!(expr.to_string(), "length / time^(-1/2)");
    }
}
