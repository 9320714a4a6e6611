use anstream::println;
use dimless_matrix::DimensionalMatrix;
use dimless_model::filter_quantities;
use dimless_quantity::Quantity;

use crate::stylesheet;

/// Prints the dimensional matrix of the declared quantities, its rank and
/// what filtering would drop.
pub fn print(quantities: &[Quantity]) {
    let matrix = DimensionalMatrix::new(quantities);

    println!("{matrix}");
    println!();
    println!("rank: {}", matrix.rank());
    println!(
        "independent dimensions: {}",
        matrix.independent_dimensions().join(", ")
    );

    let note = match filter_quantities(quantities) {
        Ok(filtered) => filtered.warning().map(|warning| warning.to_string()),
        Err(error) => Some(error.to_string()),
    };
    if let Some(note) = note {
        println!("{}", stylesheet::DIMMED.style(note));
    }
}
