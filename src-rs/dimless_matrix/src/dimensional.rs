use std::fmt;

use dimless_quantity::{Exponent, Quantity};
use indexmap::IndexSet;

use crate::RationalMatrix;

/// The matrix of dimension exponents of a list of quantities.
///
/// Rows are dimensions in order of first appearance, columns are quantities
/// in the order given. Dimensions that no quantity uses have no row.
///
/// # Examples
///
/// ```rust
/// use dimless_matrix::DimensionalMatrix;
/// use dimless_quantity::{Dimension, Quantity};
///
/// let quantities = [
///     Quantity::dependent("T", Dimension::from_iter([("time", 1)])),
///     Quantity::scaling("L", Dimension::from_iter([("length", 1)])),
///     Quantity::scaling("g", Dimension::from_iter([("length", 1), ("time", -2)])),
/// ]
/// .into_iter()
/// .collect::<Result<Vec<_>, _>>()
/// .expect("quantities should be valid");
///
/// let matrix = DimensionalMatrix::new(&quantities);
/// assert_eq!(matrix.dimensions(), ["time", "length"]);
/// assert_eq!(matrix.rank(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionalMatrix {
    dimensions: Vec<String>,
    quantities: Vec<String>,
    matrix: RationalMatrix,
}

impl DimensionalMatrix {
    /// Builds the dimensional matrix of the given quantities.
    ///
    /// This never fails. An empty list of quantities gives an empty matrix of
    /// rank zero.
    #[must_use]
    pub fn new(quantities: &[Quantity]) -> Self {
        let dimensions: IndexSet<&str> = quantities
            .iter()
            .flat_map(|quantity| quantity.dimension().names())
            .collect();

        let matrix = RationalMatrix::from_fn(dimensions.len(), quantities.len(), |row, col| {
            dimensions
                .get_index(row)
                .map(|dimension| quantities[col].exponent(dimension))
                .unwrap_or_default()
                .into()
        });

        Self {
            dimensions: dimensions.into_iter().map(str::to_string).collect(),
            quantities: quantities
                .iter()
                .map(|quantity| quantity.name().to_string())
                .collect(),
            matrix,
        }
    }

    /// Returns the dimension names labelling the rows
    #[must_use]
    pub fn dimensions(&self) -> &[String] {
        &self.dimensions
    }

    /// Returns the quantity names labelling the columns
    #[must_use]
    pub fn quantities(&self) -> &[String] {
        &self.quantities
    }

    /// Returns the underlying rational matrix
    #[must_use]
    pub const fn matrix(&self) -> &RationalMatrix {
        &self.matrix
    }

    /// Returns the exponent of a quantity in a dimension, zero if either is
    /// unknown
    #[must_use]
    pub fn entry(&self, dimension: &str, quantity: &str) -> Exponent {
        let row = self.dimensions.iter().position(|name| name == dimension);
        let col = self.quantities.iter().position(|name| name == quantity);

        match (row, col) {
            (Some(row), Some(col)) => self.matrix[(row, col)].clone().into(),
            _ => Exponent::zero(),
        }
    }

    /// Returns the rank of the matrix over the rationals
    #[must_use]
    pub fn rank(&self) -> usize {
        self.matrix.rank()
    }

    /// Returns a maximal set of linearly independent dimensions
    ///
    /// When there are more dimensions than the rank, only these dimensions
    /// constrain the nondimensional groups.
    #[must_use]
    pub fn independent_dimensions(&self) -> Vec<&str> {
        self.matrix
            .transpose()
            .rref()
            .pivots()
            .iter()
            .map(|&row| self.dimensions[row].as_str())
            .collect()
    }

    /// Returns the rank of the columns belonging to the given quantities
    ///
    /// Quantities are looked up by name; unknown names are ignored.
    #[must_use]
    pub fn rank_of<'a>(&self, quantities: impl IntoIterator<Item = &'a str>) -> usize {
        let columns: Vec<usize> = quantities
            .into_iter()
            .filter_map(|name| self.quantities.iter().position(|known| known == name))
            .collect();

        self.matrix
            .select_columns(&columns)
            .map_or(0, |matrix| matrix.rank())
    }
}

impl fmt::Display for DimensionalMatrix {
    /// Formats the matrix as a table with a header row of quantity names
    ///
    /// ```text
    ///         T  L   g
    /// time    1  0  -2
    /// length  0  1   1
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = (0..self.dimensions.len())
            .map(|row| {
                (0..self.quantities.len())
                    .map(|col| Exponent::from(self.matrix[(row, col)].clone()).to_string())
                    .collect()
            })
            .collect();

        let label_width = self.dimensions.iter().map(String::len).max().unwrap_or(0);
        let widths: Vec<usize> = self
            .quantities
            .iter()
            .enumerate()
            .map(|(col, name)| {
                cells
                    .iter()
                    .map(|row| row[col].len())
                    .chain(std::iter::once(name.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:label_width$}", "")?;
        for (name, width) in self.quantities.iter().zip(&widths) {
            write!(f, "  {name:>width$}")?;
        }

        for (dimension, row) in self.dimensions.iter().zip(&cells) {
            writeln!(f)?;
            write!(f, "{dimension:<label_width$}")?;
            for (cell, width) in row.iter().zip(&widths) {
                write!(f, "  {cell:>width$}")?;
            }
        }

        Ok(())
    }
}
