//! Printing of resolved models

use anstream::println;
use dimless_model::{Model, ModelSet, NondimensionalRelation};
use dimless_quantity::Quantity;

use crate::stylesheet;

/// Prints a single model
///
/// ```text
/// T = f(L, g, theta0)
///
/// Scaling group: L, g
///   T*g**(1/2)/L**(1/2) = Phi(theta0)
/// ```
#[expect(clippy::use_debug, reason = "debug output is requested with `--print-debug`")]
pub fn print_model(model: &Model, print_debug: bool) {
    if print_debug {
        println!("{model:?}");
        return;
    }

    print_dimensional_relation(model);
    println!();
    print_resolution(model);
}

/// Prints every model of a set, followed by the skipped choices
#[expect(clippy::use_debug, reason = "debug output is requested with `--print-debug`")]
pub fn print_model_set(model_set: &ModelSet, print_debug: bool) {
    if print_debug {
        println!("{model_set:?}");
        return;
    }

    if let Some(first) = model_set.models().first() {
        print_dimensional_relation(first);
        println!();
    }

    let summary = format!(
        "{} of the choices of {} scaling quantities from ({}) are independent",
        model_set.len(),
        model_set.rank(),
        join_names(model_set.candidates()),
    );
    println!("{}", stylesheet::DIMMED.style(summary));

    for model in model_set.models() {
        println!();
        print_resolution(model);
    }

    if !model_set.skipped().is_empty() {
        println!();
        for skipped in model_set.skipped() {
            let line = format!("skipped dependent choice: {}", join_names(skipped));
            println!("{}", stylesheet::DIMMED.style(line));
        }
    }
}

fn print_dimensional_relation(model: &Model) {
    let relation = model.dimensional_relation();
    let dependent = stylesheet::QUANTITY_NAME.style(relation.dependent().name());
    println!("{dependent} = f({})", join_names(relation.independent()));
}

fn print_resolution(model: &Model) {
    println!(
        "{}",
        stylesheet::SCALING_HEADER.style(model.scaling_group().to_string())
    );
    println!("  {}", styled_relation(model.relation()));
}

fn styled_relation(relation: &NondimensionalRelation) -> String {
    let independent: Vec<String> = relation
        .independent()
        .iter()
        .map(ToString::to_string)
        .collect();

    format!(
        "{} = {}({})",
        relation.dependent(),
        stylesheet::RELATION_NAME.style(relation.name()),
        independent.join(", ")
    )
}

fn join_names(quantities: &[Quantity]) -> String {
    let names: Vec<&str> = quantities.iter().map(Quantity::name).collect();
    names.join(", ")
}

#[cfg(test)]
mod tests {
    use dimless_quantity::Dimension;

    use super::*;

    #[test]
    fn styled_relation_matches_plain_display() {
        let quantities = vec![
            Quantity::dependent("v", Dimension::from_iter([("L", 1), ("T", -1)]))
                .expect("valid quantity"),
            Quantity::scaling("x", Dimension::from_iter([("L", 1)])).expect("valid quantity"),
            Quantity::scaling("t", Dimension::from_iter([("T", 1)])).expect("valid quantity"),
            Quantity::new("a", Dimension::from_iter([("L", 1), ("T", -2)]))
                .expect("valid quantity"),
        ];
        let model = Model::new(&quantities).expect("model should resolve");

        let styled = anstream::adapter::strip_str(&styled_relation(model.relation())).to_string();

        assert_eq!(styled, model.relation().to_string());
        assert_eq!(styled, "v*t/x = Phi(a*t**2/x)");
    }
}
