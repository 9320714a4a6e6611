use std::fmt;

use dimless_shared::error::{AsDimlessError, Context};

/// Errors raised when constructing a [`Quantity`](crate::Quantity)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// The quantity name is empty or only whitespace
    EmptyName,
    /// A dimensionless quantity was marked as scaling
    DimensionlessScaling {
        /// The name of the quantity
        name: String,
    },
}

impl QuantityError {
    /// Creates a new error indicating that a quantity name is empty
    #[must_use]
    pub const fn empty_name() -> Self {
        Self::EmptyName
    }

    /// Creates a new error indicating that a dimensionless quantity was
    /// marked as scaling
    #[must_use]
    pub const fn dimensionless_scaling(name: String) -> Self {
        Self::DimensionlessScaling { name }
    }
}

impl fmt::Display for QuantityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "quantity name must not be empty"),
            Self::DimensionlessScaling { name } => {
                write!(f, "scaling quantity `{name}` must not be dimensionless")
            }
        }
    }
}

impl std::error::Error for QuantityError {}

impl AsDimlessError for QuantityError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::EmptyName => vec![],
            Self::DimensionlessScaling { .. } => vec![Context::Note(
                "a dimensionless quantity cannot make other quantities dimensionless".to_string(),
            )],
        }
    }
}
