use dimless_quantity::Quantity;

use crate::{ModelError, ScalingResolver, Warning, filter_quantities};

/// Quantities that passed validation and filtering, ready for resolution.
#[derive(Debug, Clone)]
pub struct Prepared {
    pub resolver: ScalingResolver,
    pub warnings: Vec<Warning>,
}

/// Removes exact duplicates, checks for a single dependent quantity,
/// filters irrelevant quantities and builds the dimensional matrix.
pub fn prepare(quantities: &[Quantity]) -> Result<Prepared, ModelError> {
    let mut warnings = Vec::new();

    let quantities = deduplicate(quantities, &mut warnings)?;

    let dependent: Vec<&Quantity> = quantities.iter().filter(|q| q.is_dependent()).collect();
    match dependent.as_slice() {
        [] => return Err(ModelError::no_dependent_quantity()),
        [_] => {}
        [..] => {
            return Err(ModelError::multiple_dependent_quantities(
                dependent.iter().map(|q| q.name().to_string()).collect(),
            ));
        }
    }

    let filtered = filter_quantities(&quantities)?;
    warnings.extend(filtered.warning());

    if filtered.quantities.len() < 2 {
        return Err(ModelError::too_few_quantities(filtered.quantities.len()));
    }

    let resolver = ScalingResolver::new(&filtered.quantities);
    let matrix = resolver.matrix();
    log::debug!(
        "dimensional matrix of rank {} over {} dimensions",
        resolver.rank(),
        matrix.dimensions().len()
    );

    if matrix.dimensions().len() > resolver.rank() {
        warnings.push(Warning::DependentDimensions {
            dimensions: matrix.dimensions().to_vec(),
            independent: matrix
                .independent_dimensions()
                .into_iter()
                .map(str::to_string)
                .collect(),
        });
    }

    for warning in &warnings {
        warning.emit();
    }

    Ok(Prepared { resolver, warnings })
}

fn deduplicate(
    quantities: &[Quantity],
    warnings: &mut Vec<Warning>,
) -> Result<Vec<Quantity>, ModelError> {
    let mut unique: Vec<Quantity> = Vec::with_capacity(quantities.len());

    for quantity in quantities {
        match unique.iter().find(|existing| existing.name() == quantity.name()) {
            None => unique.push(quantity.clone()),
            Some(existing) if existing == quantity => {
                let name = quantity.name().to_string();
                let warning = Warning::DuplicateQuantity { name };
                if !warnings.contains(&warning) {
                    warnings.push(warning);
                }
            }
            Some(_) => {
                return Err(ModelError::duplicate_quantity_name(
                    quantity.name().to_string(),
                ));
            }
        }
    }

    Ok(unique)
}

#[cfg(test)]
mod tests {
    use dimless_quantity::Dimension;

    use super::*;

    fn length() -> Dimension {
        Dimension::from_iter([("L", 1)])
    }

    #[test]
    fn identical_duplicates_are_collapsed() {
        let x = Quantity::dependent("x", length()).expect("should be valid");
        let y = Quantity::new("y", length()).expect("should be valid");

        let prepared = prepare(&[x.clone(), y, x]).expect("prepare should succeed");

        assert_eq!(prepared.resolver.quantities().len(), 2);
        assert_eq!(
            prepared.warnings,
            vec![Warning::DuplicateQuantity {
                name: "x".to_string()
            }]
        );
    }

    #[test]
    fn conflicting_duplicates_are_an_error() {
        let x = Quantity::dependent("x", length()).expect("should be valid");
        let y = Quantity::new("y", length()).expect("should be valid");
        let other_x = Quantity::new("x", length()).expect("should be valid");

        let error = prepare(&[x, y, other_x]).expect_err("prepare should fail");

        assert_eq!(error, ModelError::duplicate_quantity_name("x".to_string()));
    }

    #[test]
    fn multiple_dependent_quantities() {
        let x = Quantity::dependent("x", length()).expect("should be valid");
        let y = Quantity::dependent("y", length()).expect("should be valid");

        let error = prepare(&[x, y]).expect_err("prepare should fail");

        assert_eq!(
            error,
            ModelError::multiple_dependent_quantities(vec!["x".to_string(), "y".to_string()])
        );
    }

    #[test]
    fn no_dependent_quantity() {
        let x = Quantity::new("x", length()).expect("should be valid");
        let y = Quantity::new("y", length()).expect("should be valid");

        assert_eq!(prepare(&[x, y]).expect_err("prepare should fail"), ModelError::NoDependentQuantity);
    }

    #[test]
    fn too_few_quantities_after_filtering() {
        let x = Quantity::dependent("x", Dimension::dimensionless()).expect("should be valid");
        let y = Quantity::new("y", length()).expect("should be valid");

        let error = prepare(&[x, y]).expect_err("prepare should fail");

        assert_eq!(error, ModelError::too_few_quantities(1));
    }

    #[test]
    fn extra_dimensions_produce_warning() {
        let quantities = [
            Quantity::dependent("F", Dimension::from_iter([("M", 1), ("L", 1), ("T", -2)]))
                .expect("should be valid"),
            Quantity::scaling("m", Dimension::from_iter([("M", 1)])).expect("should be valid"),
            Quantity::scaling("a", Dimension::from_iter([("L", 1), ("T", -2)]))
                .expect("should be valid"),
        ];

        let prepared = prepare(&quantities).expect("prepare should succeed");

        assert_eq!(prepared.resolver.rank(), 2);
        assert_eq!(
            prepared.warnings,
            vec![Warning::DependentDimensions {
                dimensions: vec!["M".to_string(), "L".to_string(), "T".to_string()],
                independent: vec!["M".to_string(), "L".to_string()],
            }]
        );
    }
}
