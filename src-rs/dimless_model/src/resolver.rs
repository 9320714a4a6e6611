use dimless_matrix::{DimensionalMatrix, RationalMatrix};
use dimless_quantity::{Exponent, Quantity};
use num_rational::BigRational;

use crate::{ModelError, NondimensionalGroup};

/// Solves for the nondimensional groups of one choice of scaling quantities.
///
/// For every quantity `Q` that is not scaling, the exponents `a_i` with
/// `dim(Q) = sum(a_i * dim(S_i))` are found exactly, and the group
/// `Q * S_1^(-a_1) * ... * S_r^(-a_r)` is formed.
#[derive(Debug, Clone)]
pub struct ScalingResolver {
    quantities: Vec<Quantity>,
    matrix: DimensionalMatrix,
    rank: usize,
}

impl ScalingResolver {
    /// Creates a resolver for the given quantities
    #[must_use]
    pub fn new(quantities: &[Quantity]) -> Self {
        let matrix = DimensionalMatrix::new(quantities);
        let rank = matrix.rank();

        Self {
            quantities: quantities.to_vec(),
            matrix,
            rank,
        }
    }

    /// Replaces the quantities with ones of identical dimensions, keeping
    /// the matrix and its rank
    pub(crate) fn with_quantities(&self, quantities: Vec<Quantity>) -> Self {
        debug_assert!(
            quantities
                .iter()
                .zip(&self.quantities)
                .all(|(new, old)| new.name() == old.name() && new.dimension() == old.dimension())
        );

        Self {
            quantities,
            matrix: self.matrix.clone(),
            rank: self.rank,
        }
    }

    /// Returns the quantities
    #[must_use]
    pub fn quantities(&self) -> &[Quantity] {
        &self.quantities
    }

    /// Returns the dimensional matrix of the quantities
    #[must_use]
    pub const fn matrix(&self) -> &DimensionalMatrix {
        &self.matrix
    }

    /// Returns the rank of the dimensional matrix
    #[must_use]
    pub const fn rank(&self) -> usize {
        self.rank
    }

    /// Returns whether the named quantities form a valid scaling set
    ///
    /// A valid set has exactly `rank` quantities with linearly independent
    /// dimensions.
    #[must_use]
    pub fn is_valid_scaling_set(&self, scaling: &[&str]) -> bool {
        scaling.len() == self.rank && self.matrix.rank_of(scaling.iter().copied()) == self.rank
    }

    /// Computes one group per non-scaling quantity, in declaration order
    ///
    /// # Errors
    ///
    /// Returns an error if a scaling quantity is unknown, if the number of
    /// scaling quantities differs from the rank, or if the scaling
    /// quantities are linearly dependent.
    pub fn resolve(&self, scaling: &[&str]) -> Result<Vec<NondimensionalGroup>, ModelError> {
        let columns = scaling
            .iter()
            .map(|name| {
                self.quantities
                    .iter()
                    .position(|quantity| quantity.name() == *name)
                    .ok_or_else(|| ModelError::unknown_scaling_quantity((*name).to_string()))
            })
            .collect::<Result<Vec<usize>, _>>()?;

        if columns.len() != self.rank {
            return Err(ModelError::scaling_cardinality_mismatch(
                self.rank,
                columns.len(),
            ));
        }

        let entries = self.matrix.matrix();
        let rows = entries.row_count();
        let basis = RationalMatrix::from_fn(rows, columns.len(), |row, col| {
            entries[(row, columns[col])].clone()
        });

        if basis.rank() < self.rank {
            return Err(ModelError::degenerate_scaling_set(
                scaling.iter().map(|name| (*name).to_string()).collect(),
            ));
        }

        log::debug!("resolving groups for scaling quantities ({})", scaling.join(", "));

        self.quantities
            .iter()
            .enumerate()
            .filter(|(index, _)| !columns.contains(index))
            .map(|(index, quantity)| {
                let target: Vec<BigRational> =
                    (0..rows).map(|row| entries[(row, index)].clone()).collect();

                let Some(coefficients) = basis.solve(&target) else {
                    return Err(ModelError::nonzero_group_dimension(
                        quantity.name().to_string(),
                        quantity.dimension().to_string(),
                    ));
                };

                let mut product = quantity.pow(1);
                for (&col, coefficient) in columns.iter().zip(coefficients) {
                    let exponent = -Exponent::from(coefficient);
                    product.mul_factor(self.quantities[col].clone(), &exponent);
                }

                NondimensionalGroup::new(quantity.clone(), product)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use dimless_quantity::Dimension;

    use super::*;

    fn quantity(name: &str, dimension: &[(&str, i32)]) -> Quantity {
        Quantity::new(name, dimension.iter().copied().collect()).expect("should be valid")
    }

    fn abcd() -> Vec<Quantity> {
        vec![
            Quantity::dependent("a", Dimension::from_iter([("A", 2), ("B", -1)]))
                .expect("should be valid"),
            quantity("b", &[("A", 1)]),
            quantity("c", &[("A", -2), ("B", 2)]),
            quantity("d", &[("B", 2)]),
        ]
    }

    fn display(groups: &[NondimensionalGroup]) -> Vec<String> {
        groups.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn resolve_with_b_and_c() {
        let resolver = ScalingResolver::new(&abcd());

        let groups = resolver.resolve(&["b", "c"]).expect("resolution should succeed");

        assert_eq!(display(&groups), vec!["a*c**(1/2)/b", "d/(b**2*c)"]);
        assert!(groups.iter().all(|group| group.product().is_dimensionless()));
    }

    #[test]
    fn resolve_with_other_scaling_sets() {
        let resolver = ScalingResolver::new(&abcd());

        let with_b_d = resolver.resolve(&["b", "d"]).expect("resolution should succeed");
        let with_c_d = resolver.resolve(&["c", "d"]).expect("resolution should succeed");

        assert_eq!(display(&with_b_d), vec!["a*d**(1/2)/b**2", "c*b**2/d"]);
        assert_eq!(display(&with_c_d), vec!["a*c/d**(1/2)", "b*c**(1/2)/d**(1/2)"]);
    }

    #[test]
    fn wrong_number_of_scaling_quantities() {
        let resolver = ScalingResolver::new(&abcd());

        let error = resolver.resolve(&["b"]).expect_err("resolution should fail");

        assert_eq!(error, ModelError::scaling_cardinality_mismatch(2, 1));
    }

    #[test]
    fn unknown_scaling_quantity() {
        let resolver = ScalingResolver::new(&abcd());

        let error = resolver.resolve(&["b", "z"]).expect_err("resolution should fail");

        assert_eq!(error, ModelError::unknown_scaling_quantity("z".to_string()));
    }

    #[test]
    fn dependent_scaling_set_is_rejected() {
        let quantities = vec![
            Quantity::dependent("z", Dimension::from_iter([("L", 1)])).expect("should be valid"),
            quantity("v", &[("L", 1), ("T", -1)]),
            quantity("v0", &[("L", 1), ("T", -1)]),
            quantity("t", &[("T", 1)]),
        ];
        let resolver = ScalingResolver::new(&quantities);

        assert!(!resolver.is_valid_scaling_set(&["v", "v0"]));
        assert_eq!(
            resolver.resolve(&["v", "v0"]),
            Err(ModelError::degenerate_scaling_set(vec![
                "v".to_string(),
                "v0".to_string()
            ]))
        );
        assert!(resolver.is_valid_scaling_set(&["v", "t"]));
    }

    #[test]
    fn repeated_scaling_quantity_is_degenerate() {
        let resolver = ScalingResolver::new(&abcd());

        let error = resolver.resolve(&["b", "b"]).expect_err("resolution should fail");

        assert!(matches!(error, ModelError::DegenerateScalingSet { .. }));
    }

    #[test]
    fn resolving_twice_is_deterministic() {
        let resolver = ScalingResolver::new(&abcd());

        let first = resolver.resolve(&["c", "b"]).expect("resolution should succeed");
        let second = resolver.resolve(&["c", "b"]).expect("resolution should succeed");

        assert_eq!(first, second);
    }

    #[test]
    fn all_dimensionless_quantities_have_rank_zero() {
        let quantities = vec![
            Quantity::dependent("Nu", Dimension::dimensionless()).expect("should be valid"),
            Quantity::new("Re", Dimension::dimensionless()).expect("should be valid"),
        ];
        let resolver = ScalingResolver::new(&quantities);

        let groups = resolver.resolve(&[]).expect("resolution should succeed");

        assert_eq!(resolver.rank(), 0);
        assert_eq!(display(&groups), vec!["Nu", "Re"]);
    }
}
