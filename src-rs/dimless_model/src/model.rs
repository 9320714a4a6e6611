use dimless_matrix::DimensionalMatrix;
use dimless_quantity::{Quantity, Role};

use crate::{
    DimensionalRelation, ModelError, NondimensionalGroup, NondimensionalRelation, ScalingGroup,
    ScalingResolver, Warning, prepare::prepare,
};

/// A nondimensional model for one choice of scaling quantities.
///
/// Building a model removes quantities that cannot take part, checks that
/// the scaling quantities match the rank of the dimensional matrix, and
/// resolves one nondimensional group per non-scaling quantity.
#[derive(Debug, Clone)]
pub struct Model {
    quantities: Vec<Quantity>,
    matrix: DimensionalMatrix,
    rank: usize,
    scaling_group: ScalingGroup,
    groups: Vec<NondimensionalGroup>,
    relation: NondimensionalRelation,
    warnings: Vec<Warning>,
}

impl Model {
    /// Builds a model using the quantities marked as scaling.
    ///
    /// # Errors
    ///
    /// Returns an error if quantity names conflict, if there is not exactly
    /// one dependent quantity, if the dependent quantity cannot be balanced,
    /// if fewer than two relevant quantities remain, or if the scaling
    /// quantities do not form an independent set of size `rank`.
    pub fn new(quantities: &[Quantity]) -> Result<Self, ModelError> {
        let prepared = prepare(quantities)?;

        let scaling: Vec<usize> = prepared
            .resolver
            .quantities()
            .iter()
            .enumerate()
            .filter(|(_, quantity)| quantity.is_scaling())
            .map(|(index, _)| index)
            .collect();

        Self::resolve(
            &prepared.resolver,
            &scaling,
            None,
            "Phi".to_string(),
            prepared.warnings,
        )
    }

    /// Resolves a model from prepared quantities, using the quantities at
    /// the `scaling` indices as the scaling set.
    ///
    /// Roles are reassigned so that exactly the scaling set is marked as
    /// scaling.
    pub(crate) fn resolve(
        resolver: &ScalingResolver,
        scaling: &[usize],
        id: Option<usize>,
        name: String,
        warnings: Vec<Warning>,
    ) -> Result<Self, ModelError> {
        let quantities = resolver
            .quantities()
            .iter()
            .enumerate()
            .map(|(index, quantity)| {
                let role = if scaling.contains(&index) {
                    Role::Scaling
                } else if quantity.is_dependent() {
                    Role::Dependent
                } else {
                    Role::Plain
                };
                quantity.clone().into_role(role)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let scaling_quantities: Vec<Quantity> =
            scaling.iter().map(|&index| quantities[index].clone()).collect();
        let scaling_names: Vec<&str> = scaling_quantities.iter().map(Quantity::name).collect();

        let resolver = resolver.with_quantities(quantities.clone());
        let groups = resolver.resolve(&scaling_names)?;

        // the dependent quantity is never scaling, so it always has a group
        let (dependent, independent): (Vec<_>, Vec<_>) = groups
            .into_iter()
            .partition(NondimensionalGroup::is_dependent);
        let Some(dependent) = dependent.into_iter().next() else {
            return Err(ModelError::no_dependent_quantity());
        };

        let mut ordered = vec![dependent.clone()];
        ordered.extend(independent.iter().cloned());

        Ok(Self {
            matrix: resolver.matrix().clone(),
            rank: resolver.rank(),
            scaling_group: ScalingGroup::new(id, scaling_quantities),
            relation: NondimensionalRelation::new(name, dependent, independent),
            groups: ordered,
            quantities,
            warnings,
        })
    }

    /// Returns the rank of the dimensional matrix
    #[must_use]
    pub const fn rank(&self) -> usize {
        self.rank
    }

    /// Returns the quantities taking part in the model, with the roles they
    /// play in it
    #[must_use]
    pub fn quantities(&self) -> &[Quantity] {
        &self.quantities
    }

    /// Returns the dependent quantity
    #[must_use]
    pub const fn dependent(&self) -> &Quantity {
        self.relation.dependent().subject()
    }

    /// Returns the dimensional matrix of the quantities taking part
    #[must_use]
    pub const fn dimensional_matrix(&self) -> &DimensionalMatrix {
        &self.matrix
    }

    /// Returns the scaling quantities used by the model
    #[must_use]
    pub const fn scaling_group(&self) -> &ScalingGroup {
        &self.scaling_group
    }

    /// Returns the nondimensional groups, the dependent group first
    #[must_use]
    pub fn nondimensional_groups(&self) -> &[NondimensionalGroup] {
        &self.groups
    }

    /// Returns the nondimensional relation
    #[must_use]
    pub const fn relation(&self) -> &NondimensionalRelation {
        &self.relation
    }

    /// Returns the dimensional relation the model started from
    #[must_use]
    pub fn dimensional_relation(&self) -> DimensionalRelation {
        DimensionalRelation::new(
            self.dependent().clone(),
            self.quantities
                .iter()
                .filter(|quantity| !quantity.is_dependent())
                .cloned()
                .collect(),
        )
    }

    /// Returns the warnings found while building the model
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }
}

#[cfg(test)]
mod tests {
    use dimless_quantity::{Dimension, Exponent};

    use super::*;

    fn pendulum() -> Vec<Quantity> {
        vec![
            Quantity::dependent("T", Dimension::from_iter([("time", 1)])).expect("should be valid"),
            Quantity::scaling("L", Dimension::from_iter([("length", 1)])).expect("should be valid"),
            Quantity::new("m", Dimension::from_iter([("mass", 1)])).expect("should be valid"),
            Quantity::scaling("g", Dimension::from_iter([("length", 1), ("time", -2)]))
                .expect("should be valid"),
            Quantity::new("theta0", Dimension::dimensionless()).expect("should be valid"),
        ]
    }

    #[test]
    fn pendulum_model() {
        let model = Model::new(&pendulum()).expect("model should resolve");

        assert_eq!(model.rank(), 2);
        assert_eq!(model.dependent().name(), "T");
        assert_eq!(model.scaling_group().to_string(), "Scaling group: L, g");
        assert_eq!(model.dimensional_relation().to_string(), "T = f(L, g, theta0)");

        let groups = model.nondimensional_groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].product().exponent("T"), Exponent::one());
        assert_eq!(groups[0].product().exponent("L"), Exponent::new(-1, 2));
        assert_eq!(groups[0].product().exponent("g"), Exponent::new(1, 2));
        assert_eq!(groups[1].to_string(), "theta0");

        assert_eq!(
            model.relation().to_string(),
            "T*g**(1/2)/L**(1/2) = Phi(theta0)"
        );
        assert_eq!(
            model.warnings(),
            &[Warning::IrrelevantQuantities {
                quantities: vec!["m".to_string()],
                dimensions: vec!["mass".to_string()],
            }]
        );
    }

    #[test]
    fn group_count_is_quantities_minus_rank() {
        let model = Model::new(&pendulum()).expect("model should resolve");

        assert_eq!(
            model.nondimensional_groups().len(),
            model.quantities().len() - model.rank()
        );
    }

    #[test]
    fn missing_scaling_quantity() {
        let mut quantities = pendulum();
        quantities[3] = Quantity::new("g", Dimension::from_iter([("length", 1), ("time", -2)]))
            .expect("should be valid");

        let error = Model::new(&quantities).expect_err("model should fail");

        assert_eq!(error, ModelError::scaling_cardinality_mismatch(2, 1));
    }

    #[test]
    fn dimensionless_dependent_quantity_forms_trivial_group() {
        let quantities = vec![
            Quantity::dependent("Cd", Dimension::dimensionless()).expect("should be valid"),
            Quantity::scaling("x", Dimension::from_iter([("L", 1)])).expect("should be valid"),
            Quantity::new("y", Dimension::from_iter([("L", 1)])).expect("should be valid"),
        ];

        let model = Model::new(&quantities).expect("model should resolve");

        assert_eq!(model.relation().to_string(), "Cd = Phi(y/x)");
    }
}
