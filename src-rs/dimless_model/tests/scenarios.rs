use dimless_model::{Model, ModelError, ModelSet, Warning};
use dimless_quantity::{Dimension, Quantity, Role};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn quantity(name: &str, role: Role, dimension: &[(&str, i32)]) -> Quantity {
    Quantity::with_role(name, dimension.iter().copied().collect::<Dimension>(), role)
        .expect("quantity should be valid")
}

fn relations(set: &ModelSet) -> Vec<String> {
    set.models()
        .iter()
        .map(|model| model.relation().to_string())
        .collect()
}

fn scaling_names(set: &ModelSet) -> Vec<String> {
    set.models()
        .iter()
        .map(|model| model.scaling_group().names().collect::<Vec<_>>().join(", "))
        .collect()
}

/// Drag on a body, with a temperature that nothing else depends on
fn drag(scaling: &[&str]) -> Vec<Quantity> {
    let role = |name: &str| {
        if scaling.contains(&name) {
            Role::Scaling
        } else {
            Role::Plain
        }
    };

    vec![
        quantity("F", Role::Dependent, &[("M", 1), ("L", 1), ("T", -2)]),
        quantity("rho", role("rho"), &[("M", 1), ("L", -3)]),
        quantity("V", role("V"), &[("L", 1), ("T", -1)]),
        quantity("D", role("D"), &[("L", 1)]),
        quantity("mu", role("mu"), &[("M", 1), ("L", -1), ("T", -1)]),
        quantity("c", role("c"), &[("L", 1), ("T", -1)]),
        quantity("Q", role("Q"), &[("K", 1)]),
    ]
}

fn free_fall() -> Vec<Quantity> {
    vec![
        quantity("z", Role::Dependent, &[("L", 1)]),
        quantity("m", Role::Plain, &[("M", 1)]),
        quantity("v", Role::Plain, &[("L", 1), ("T", -1)]),
        quantity("g", Role::Plain, &[("L", 1), ("T", -2)]),
        quantity("t", Role::Plain, &[("T", 1)]),
        quantity("z0", Role::Plain, &[("L", 1)]),
        quantity("v0", Role::Plain, &[("L", 1), ("T", -1)]),
    ]
}

#[test]
fn pendulum() {
    init_logger();

    let quantities = vec![
        quantity("T", Role::Dependent, &[("time", 1)]),
        quantity("L", Role::Scaling, &[("length", 1)]),
        quantity("m", Role::Plain, &[("mass", 1)]),
        quantity("g", Role::Scaling, &[("length", 1), ("time", -2)]),
        quantity("theta0", Role::Plain, &[]),
    ];

    let model = Model::new(&quantities).expect("model should resolve");

    assert_eq!(model.dimensional_relation().to_string(), "T = f(L, g, theta0)");
    assert_eq!(
        model.relation().to_string(),
        "T*g**(1/2)/L**(1/2) = Phi(theta0)"
    );
}

#[test]
fn drag_drops_unused_dimension() {
    init_logger();

    let model = Model::new(&drag(&["rho", "V", "D"])).expect("model should resolve");

    assert_eq!(model.rank(), 3);
    assert_eq!(model.quantities().len(), 6);
    assert_eq!(
        model.warnings(),
        &[Warning::IrrelevantQuantities {
            quantities: vec!["Q".to_string()],
            dimensions: vec!["K".to_string()],
        }]
    );
    assert_eq!(
        model.relation().to_string(),
        "F/(rho*V**2*D**2) = Phi(mu/(rho*V*D), c/V)"
    );
}

#[test]
fn drag_with_four_candidates() {
    init_logger();

    let set = ModelSet::new(&drag(&["rho", "V", "D", "c"])).expect("model set should resolve");

    assert_eq!(set.rank(), 3);
    assert_eq!(set.candidates().len(), 4);
    assert_eq!(set.skipped().len(), 2);
    assert_eq!(scaling_names(&set), vec!["rho, V, D", "rho, D, c"]);
    assert_eq!(
        relations(&set),
        vec![
            "F/(rho*V**2*D**2) = Phi_1(mu/(rho*V*D), c/V)",
            "F/(rho*D**2*c**2) = Phi_2(V/c, mu/(rho*D*c))",
        ]
    );
}

#[test]
fn multiple_dependents_fail_before_filtering() {
    init_logger();

    let quantities = vec![
        quantity("x", Role::Dependent, &[("L", 1)]),
        quantity("y", Role::Dependent, &[("K", 1)]),
        quantity("z", Role::Scaling, &[("L", 1)]),
    ];

    let error = Model::new(&quantities).expect_err("model should fail");

    assert_eq!(
        error,
        ModelError::multiple_dependent_quantities(vec!["x".to_string(), "y".to_string()])
    );
}

#[test]
fn every_choice_of_two_scaling_quantities() {
    init_logger();

    let quantities = vec![
        quantity("a", Role::Dependent, &[("A", 2), ("B", -1)]),
        quantity("b", Role::Scaling, &[("A", 1)]),
        quantity("c", Role::Scaling, &[("A", -2), ("B", 2)]),
        quantity("d", Role::Scaling, &[("B", 2)]),
    ];

    let set = ModelSet::new(&quantities).expect("model set should resolve");

    assert_eq!(scaling_names(&set), vec!["b, c", "b, d", "c, d"]);
    assert_eq!(
        relations(&set),
        vec![
            "a*c**(1/2)/b = Phi_1(d/(b**2*c))",
            "a*d**(1/2)/b**2 = Phi_2(c*b**2/d)",
            "a*c/d**(1/2) = Phi_3(b*c**(1/2)/d**(1/2))",
        ]
    );
}

#[test]
fn free_fall_infers_candidates() {
    init_logger();

    let set = ModelSet::new(&free_fall()).expect("model set should resolve");

    assert_eq!(
        set.warnings(),
        &[
            Warning::IrrelevantQuantities {
                quantities: vec!["m".to_string()],
                dimensions: vec!["M".to_string()],
            },
            Warning::ScalingCandidatesInferred {
                candidates: ["v", "g", "t", "z0", "v0"]
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            },
        ]
    );
    assert_eq!(
        scaling_names(&set),
        vec![
            "v, g", "v, t", "v, z0", "g, t", "g, z0", "g, v0", "t, z0", "t, v0", "z0, v0",
        ]
    );

    let skipped: Vec<Vec<&str>> = set
        .skipped()
        .iter()
        .map(|subset| subset.iter().map(Quantity::name).collect())
        .collect();
    assert_eq!(skipped, vec![vec!["v", "v0"]]);

    assert_eq!(
        set.models()[0].relation().to_string(),
        "z*g/v**2 = Phi_1(t*g/v, z0*g/v**2, v0/v)"
    );
}

#[test]
fn group_count_is_quantities_minus_rank() {
    init_logger();

    let set = ModelSet::new(&free_fall()).expect("model set should resolve");

    for model in set.models() {
        assert_eq!(
            model.nondimensional_groups().len(),
            model.quantities().len() - model.rank()
        );
        assert!(
            model
                .nondimensional_groups()
                .iter()
                .all(|group| group.product().is_dimensionless())
        );
    }
}

#[test]
fn models_are_deterministic() {
    init_logger();

    let first = ModelSet::new(&free_fall()).expect("model set should resolve");
    let second = ModelSet::new(&free_fall()).expect("model set should resolve");

    assert_eq!(relations(&first), relations(&second));
}
