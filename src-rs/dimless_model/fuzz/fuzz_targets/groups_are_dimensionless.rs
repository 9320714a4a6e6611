#![no_main]

use dimless_model::ModelSet;
use dimless_quantity::{Dimension, Quantity, Role};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct FuzzQuantity {
    dimension: Dimension,
    scaling: bool,
}

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct FuzzData {
    dependent: Dimension,
    others: Vec<FuzzQuantity>,
}

fuzz_target!(|data: FuzzData| {
    if data.others.len() > 8 {
        return;
    }

    let mut quantities = vec![
        Quantity::dependent("y", data.dependent).expect("dependent quantity should be valid"),
    ];
    for (index, other) in data.others.into_iter().enumerate() {
        let role = if other.scaling && !other.dimension.is_dimensionless() {
            Role::Scaling
        } else {
            Role::Plain
        };
        quantities.push(
            Quantity::with_role(format!("x{index}"), other.dimension, role)
                .expect("quantity should be valid"),
        );
    }

    let Ok(set) = ModelSet::new(&quantities) else {
        return;
    };

    for model in set.models() {
        assert_eq!(
            model.nondimensional_groups().len(),
            model.quantities().len() - model.rank(),
            "wrong number of groups for {:?}",
            model.scaling_group(),
        );
        for group in model.nondimensional_groups() {
            assert!(
                group.product().is_dimensionless(),
                "group {group} has dimension {}",
                group.product().dimension(),
            );
        }
    }
});
