use std::fmt;

use crate::{Dimension, Exponent, Product, QuantityError};

/// The part a quantity plays in a dimensional model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Role {
    /// An ordinary quantity
    #[default]
    Plain,
    /// The quantity the model expresses as a function of the others
    Dependent,
    /// A quantity used to make the others dimensionless
    Scaling,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Dependent => write!(f, "dependent"),
            Self::Scaling => write!(f, "scaling"),
        }
    }
}

/// A named physical quantity with a dimension and a role.
///
/// A quantity is never both dependent and scaling, and a scaling quantity is
/// never dimensionless.
///
/// # Examples
///
/// ```rust
/// use dimless_quantity::{Dimension, Quantity};
///
/// let gravity = Quantity::scaling("g", Dimension::from_iter([("L", 1), ("T", -2)]))
///     .expect("g should be a valid scaling quantity");
/// assert!(gravity.is_scaling());
/// assert_eq!(gravity.to_string(), "g");
///
/// let angle = Quantity::scaling("theta0", Dimension::dimensionless());
/// assert!(angle.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantity {
    name: String,
    dimension: Dimension,
    role: Role,
}

impl Quantity {
    /// Creates a quantity with the given role.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank, or if the quantity is scaling
    /// and dimensionless.
    pub fn with_role(
        name: impl Into<String>,
        dimension: Dimension,
        role: Role,
    ) -> Result<Self, QuantityError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(QuantityError::empty_name());
        }

        if role == Role::Scaling && dimension.is_dimensionless() {
            return Err(QuantityError::dimensionless_scaling(name));
        }

        Ok(Self {
            name,
            dimension,
            role,
        })
    }

    /// Creates a plain quantity.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank.
    pub fn new(name: impl Into<String>, dimension: Dimension) -> Result<Self, QuantityError> {
        Self::with_role(name, dimension, Role::Plain)
    }

    /// Creates a dependent quantity.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank.
    pub fn dependent(name: impl Into<String>, dimension: Dimension) -> Result<Self, QuantityError> {
        Self::with_role(name, dimension, Role::Dependent)
    }

    /// Creates a scaling quantity.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the dimension is
    /// dimensionless.
    pub fn scaling(name: impl Into<String>, dimension: Dimension) -> Result<Self, QuantityError> {
        Self::with_role(name, dimension, Role::Scaling)
    }

    /// Returns a copy of the quantity with a different role.
    ///
    /// # Errors
    ///
    /// Returns an error if the new role is scaling and the quantity is
    /// dimensionless.
    pub fn into_role(self, role: Role) -> Result<Self, QuantityError> {
        Self::with_role(self.name, self.dimension, role)
    }

    /// Returns the name of the quantity
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the dimension of the quantity
    #[must_use]
    pub const fn dimension(&self) -> &Dimension {
        &self.dimension
    }

    /// Returns the role of the quantity
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns whether the quantity is the dependent quantity
    #[must_use]
    pub fn is_dependent(&self) -> bool {
        self.role == Role::Dependent
    }

    /// Returns whether the quantity is marked as scaling
    #[must_use]
    pub fn is_scaling(&self) -> bool {
        self.role == Role::Scaling
    }

    /// Returns whether all exponents of the quantity are zero
    #[must_use]
    pub fn is_dimensionless(&self) -> bool {
        self.dimension.is_dimensionless()
    }

    /// Returns the exponent of the quantity in the given dimension
    #[must_use]
    pub fn exponent(&self, dimension: &str) -> Exponent {
        self.dimension.exponent(dimension)
    }

    /// Raises the quantity to a power, producing a single-factor product
    #[must_use]
    pub fn pow(&self, exponent: impl Into<Exponent>) -> Product {
        Product::from_factors([(self.clone(), exponent.into())])
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
