use std::fmt;

use dimless_quantity::{Product, Quantity};

use crate::ModelError;

/// A product of quantities whose aggregate dimension is zero.
///
/// Each group is built around one non-scaling quantity, its subject, raised
/// to the first power and multiplied by powers of the scaling quantities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NondimensionalGroup {
    subject: Quantity,
    product: Product,
}

impl NondimensionalGroup {
    /// Creates a group, checking that it is dimensionless.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NonzeroGroupDimension`] if the product has a
    /// nonzero dimension.
    pub fn new(subject: Quantity, product: Product) -> Result<Self, ModelError> {
        let dimension = product.dimension();
        if !dimension.is_dimensionless() {
            return Err(ModelError::nonzero_group_dimension(
                product.to_string(),
                dimension.to_string(),
            ));
        }

        Ok(Self { subject, product })
    }

    /// Returns the quantity the group was built around
    #[must_use]
    pub const fn subject(&self) -> &Quantity {
        &self.subject
    }

    /// Returns the product forming the group
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    /// Returns whether this is the group of the dependent quantity
    #[must_use]
    pub fn is_dependent(&self) -> bool {
        self.subject.is_dependent()
    }
}

impl fmt::Display for NondimensionalGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.product)
    }
}

/// The scaling quantities chosen for a model.
///
/// Models that are part of a [`ModelSet`](crate::ModelSet) carry a 1-based
/// id in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalingGroup {
    id: Option<usize>,
    quantities: Vec<Quantity>,
}

impl ScalingGroup {
    /// Creates a scaling group
    #[must_use]
    pub const fn new(id: Option<usize>, quantities: Vec<Quantity>) -> Self {
        Self { id, quantities }
    }

    /// Returns the id of the group within its model set, if any
    #[must_use]
    pub const fn id(&self) -> Option<usize> {
        self.id
    }

    /// Returns the scaling quantities
    #[must_use]
    pub fn quantities(&self) -> &[Quantity] {
        &self.quantities
    }

    /// Returns the names of the scaling quantities
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.quantities.iter().map(Quantity::name)
    }
}

impl fmt::Display for ScalingGroup {
    /// Formats the group as `Scaling group 2: L, g`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "Scaling group {id}:")?,
            None => write!(f, "Scaling group:")?,
        }

        if self.quantities.is_empty() {
            return write!(f, " (none)");
        }

        let names: Vec<&str> = self.names().collect();
        write!(f, " {}", names.join(", "))
    }
}
