use std::fmt;

use dimless_quantity::Quantity;

use crate::NondimensionalGroup;

/// A relation `dependent-group = Phi(independent-groups...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NondimensionalRelation {
    name: String,
    dependent: NondimensionalGroup,
    independent: Vec<NondimensionalGroup>,
}

impl NondimensionalRelation {
    /// Creates a relation with the given function name
    #[must_use]
    pub const fn new(
        name: String,
        dependent: NondimensionalGroup,
        independent: Vec<NondimensionalGroup>,
    ) -> Self {
        Self {
            name,
            dependent,
            independent,
        }
    }

    /// Returns the function name, `Phi` or `Phi_k`
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the group containing the dependent quantity
    #[must_use]
    pub const fn dependent(&self) -> &NondimensionalGroup {
        &self.dependent
    }

    /// Returns the remaining groups, in declaration order of their subjects
    #[must_use]
    pub fn independent(&self) -> &[NondimensionalGroup] {
        &self.independent
    }
}

impl fmt::Display for NondimensionalRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}(", self.dependent, self.name)?;
        for (index, group) in self.independent.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{group}")?;
        }
        write!(f, ")")
    }
}

/// The dimensional relation `dependent = f(others...)` a model starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionalRelation {
    dependent: Quantity,
    independent: Vec<Quantity>,
}

impl DimensionalRelation {
    /// Creates a dimensional relation
    #[must_use]
    pub const fn new(dependent: Quantity, independent: Vec<Quantity>) -> Self {
        Self {
            dependent,
            independent,
        }
    }

    /// Returns the dependent quantity
    #[must_use]
    pub const fn dependent(&self) -> &Quantity {
        &self.dependent
    }

    /// Returns the independent quantities
    #[must_use]
    pub fn independent(&self) -> &[Quantity] {
        &self.independent
    }
}

impl fmt::Display for DimensionalRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.independent.iter().map(Quantity::name).collect();
        write!(f, "{} = f({})", self.dependent, names.join(", "))
    }
}
