use dimless_quantity::Quantity;
use indexmap::IndexSet;

use crate::{ModelError, Warning};

/// The result of removing quantities and dimensions that cannot take part in
/// a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filtered {
    /// The remaining quantities, in declaration order
    pub quantities: Vec<Quantity>,
    /// The removed quantities, in the order they were removed
    pub dropped_quantities: Vec<Quantity>,
    /// The removed dimensions, in the order they were removed
    pub dropped_dimensions: Vec<String>,
}

impl Filtered {
    /// Returns the warning describing what was dropped, if anything was
    #[must_use]
    pub fn warning(&self) -> Option<Warning> {
        if self.dropped_quantities.is_empty() && self.dropped_dimensions.is_empty() {
            return None;
        }

        Some(Warning::IrrelevantQuantities {
            quantities: self
                .dropped_quantities
                .iter()
                .map(|quantity| quantity.name().to_string())
                .collect(),
            dimensions: self.dropped_dimensions.clone(),
        })
    }
}

/// Removes quantities that no other quantity can balance.
///
/// A dimension used by exactly one quantity can never cancel in a product, so
/// that quantity and the dimension are removed. A dimension used by no
/// remaining quantity is removed on its own. This repeats until nothing
/// changes. Dimensionless quantities are always kept.
///
/// # Errors
///
/// Returns [`ModelError::IsolatedDependentQuantity`] if the dependent
/// quantity would have to be removed.
pub fn filter_quantities(quantities: &[Quantity]) -> Result<Filtered, ModelError> {
    let mut active = vec![true; quantities.len()];
    let mut dimensions: IndexSet<&str> = quantities
        .iter()
        .flat_map(|quantity| quantity.dimension().names())
        .collect();
    let mut dropped_quantities = Vec::new();
    let mut dropped_dimensions = Vec::new();

    loop {
        let mut changed = false;

        for dimension in dimensions.clone() {
            let users: Vec<usize> = (0..quantities.len())
                .filter(|&index| active[index] && quantities[index].dimension().contains(dimension))
                .collect();

            match users.as_slice() {
                [] => {}
                [only] => {
                    let quantity = &quantities[*only];
                    if quantity.is_dependent() {
                        return Err(ModelError::isolated_dependent_quantity(
                            quantity.name().to_string(),
                            dimension.to_string(),
                        ));
                    }

                    log::debug!(
                        "dropping quantity `{}`, the only user of dimension `{dimension}`",
                        quantity.name()
                    );
                    active[*only] = false;
                    dropped_quantities.push(quantity.clone());
                }
                _ => continue,
            }

            dimensions.shift_remove(dimension);
            dropped_dimensions.push(dimension.to_string());
            changed = true;
        }

        if !changed {
            break;
        }
    }

    let quantities = quantities
        .iter()
        .zip(active)
        .filter_map(|(quantity, is_active)| is_active.then(|| quantity.clone()))
        .collect();

    Ok(Filtered {
        quantities,
        dropped_quantities,
        dropped_dimensions,
    })
}

#[cfg(test)]
mod tests {
    use dimless_quantity::Dimension;

    use super::*;

    fn quantity(name: &str, dimension: &[(&str, i32)]) -> Quantity {
        Quantity::new(name, dimension.iter().copied().collect()).expect("should be valid")
    }

    fn names(quantities: &[Quantity]) -> Vec<&str> {
        quantities.iter().map(Quantity::name).collect()
    }

    #[test]
    fn nothing_to_drop() {
        let quantities = vec![
            quantity("v", &[("L", 1), ("T", -1)]),
            quantity("x", &[("L", 1)]),
            quantity("t", &[("T", 1)]),
        ];

        let filtered = filter_quantities(&quantities).expect("filter should succeed");

        assert_eq!(filtered.quantities, quantities);
        assert!(filtered.warning().is_none());
    }

    #[test]
    fn sole_user_of_dimension_is_dropped() {
        let quantities = vec![
            Quantity::dependent("T", Dimension::from_iter([("time", 1)])).expect("should be valid"),
            quantity("L", &[("length", 1)]),
            quantity("m", &[("mass", 1)]),
            quantity("g", &[("length", 1), ("time", -2)]),
            Quantity::new("theta0", Dimension::dimensionless()).expect("should be valid"),
        ];

        let filtered = filter_quantities(&quantities).expect("filter should succeed");

        assert_eq!(names(&filtered.quantities), vec!["T", "L", "g", "theta0"]);
        assert_eq!(names(&filtered.dropped_quantities), vec!["m"]);
        assert_eq!(filtered.dropped_dimensions, vec!["mass"]);
        assert_eq!(
            filtered.warning(),
            Some(Warning::IrrelevantQuantities {
                quantities: vec!["m".to_string()],
                dimensions: vec!["mass".to_string()],
            })
        );
    }

    #[test]
    fn dropping_cascades() {
        // once `y` is dropped for being the only `K` user, `z` is the only
        // remaining `N` user
        let quantities = vec![
            quantity("x", &[("L", 1)]),
            quantity("w", &[("L", 2)]),
            quantity("y", &[("K", 1), ("N", 1)]),
            quantity("z", &[("N", 1)]),
        ];

        let filtered = filter_quantities(&quantities).expect("filter should succeed");

        assert_eq!(names(&filtered.quantities), vec!["x", "w"]);
        assert_eq!(names(&filtered.dropped_quantities), vec!["y", "z"]);
        assert_eq!(filtered.dropped_dimensions, vec!["K", "N"]);
    }

    #[test]
    fn isolated_dependent_quantity_is_an_error() {
        let quantities = vec![
            Quantity::dependent("F", Dimension::from_iter([("force", 1)])).expect("should be valid"),
            quantity("x", &[("L", 1)]),
            quantity("w", &[("L", 1)]),
        ];

        let error = filter_quantities(&quantities).expect_err("filter should fail");

        assert_eq!(
            error,
            ModelError::isolated_dependent_quantity("F".to_string(), "force".to_string())
        );
    }

    #[test]
    fn dimensionless_quantities_are_kept() {
        let quantities = vec![
            Quantity::new("Re", Dimension::dimensionless()).expect("should be valid"),
            Quantity::new("Ma", Dimension::dimensionless()).expect("should be valid"),
        ];

        let filtered = filter_quantities(&quantities).expect("filter should succeed");

        assert_eq!(filtered.quantities.len(), 2);
    }
}
