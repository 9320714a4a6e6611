use std::ops;

use num_rational::BigRational;
use num_traits::Zero;

/// A dense, row-major matrix of exact rationals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RationalMatrix {
    rows: usize,
    cols: usize,
    data: Vec<BigRational>,
}

impl RationalMatrix {
    /// Creates a matrix whose entry `(row, col)` is `f(row, col)`.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> BigRational) -> Self {
        let data = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .map(|(row, col)| f(row, col))
            .collect();
        Self { rows, cols, data }
    }

    /// Returns the number of rows
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns
    #[must_use]
    pub const fn col_count(&self) -> usize {
        self.cols
    }

    /// Returns the matrix made of the given columns, in the given order
    ///
    /// Returns `None` if any column is out of bounds.
    #[must_use]
    pub fn select_columns(&self, columns: &[usize]) -> Option<Self> {
        if columns.iter().any(|&col| col >= self.cols) {
            return None;
        }

        Some(Self::from_fn(self.rows, columns.len(), |row, col| {
            self[(row, columns[col])].clone()
        }))
    }

    /// Returns the transpose of the matrix
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |row, col| self[(col, row)].clone())
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for col in 0..self.cols {
            self.data.swap(a * self.cols + col, b * self.cols + col);
        }
    }

    /// Computes the reduced row echelon form by Gauss-Jordan elimination
    #[must_use]
    pub fn rref(&self) -> Echelon {
        let mut matrix = self.clone();
        let mut pivots = Vec::new();

        for col in 0..matrix.cols {
            let pivot_row = pivots.len();
            if pivot_row == matrix.rows {
                break;
            }

            let Some(found) = (pivot_row..matrix.rows).find(|&row| !matrix[(row, col)].is_zero())
            else {
                continue;
            };
            matrix.swap_rows(pivot_row, found);

            let pivot = matrix[(pivot_row, col)].clone();
            for c in col..matrix.cols {
                let normalized = &matrix[(pivot_row, c)] / &pivot;
                matrix[(pivot_row, c)] = normalized;
            }

            for row in (0..matrix.rows).filter(|&row| row != pivot_row) {
                let factor = matrix[(row, col)].clone();
                if factor.is_zero() {
                    continue;
                }
                for c in col..matrix.cols {
                    let delta = &factor * &matrix[(pivot_row, c)];
                    matrix[(row, c)] -= delta;
                }
            }

            pivots.push(col);
        }

        Echelon { matrix, pivots }
    }

    /// Returns the rank of the matrix over the rationals
    #[must_use]
    pub fn rank(&self) -> usize {
        let rank = self.rref().rank();
        log::trace!("rank of {}x{} matrix is {rank}", self.rows, self.cols);
        rank
    }

    /// Solves `self * x = rhs` exactly
    ///
    /// Returns `None` if `rhs` has the wrong length or the system is
    /// inconsistent. If the system has more than one solution, free
    /// variables are set to zero.
    #[must_use]
    pub fn solve(&self, rhs: &[BigRational]) -> Option<Vec<BigRational>> {
        if rhs.len() != self.rows {
            return None;
        }

        let augmented = Self::from_fn(self.rows, self.cols + 1, |row, col| {
            if col == self.cols {
                rhs[row].clone()
            } else {
                self[(row, col)].clone()
            }
        });
        let echelon = augmented.rref();

        // a pivot in the right hand side column means 0 = 1
        if echelon.pivots().contains(&self.cols) {
            return None;
        }

        let mut solution = vec![BigRational::zero(); self.cols];
        for (row, &col) in echelon.pivots().iter().enumerate() {
            solution[col] = echelon.matrix()[(row, self.cols)].clone();
        }
        Some(solution)
    }
}

impl ops::Index<(usize, usize)> for RationalMatrix {
    type Output = BigRational;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.cols + col]
    }
}

impl ops::IndexMut<(usize, usize)> for RationalMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.cols + col]
    }
}

/// The reduced row echelon form of a matrix and its pivot columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Echelon {
    matrix: RationalMatrix,
    pivots: Vec<usize>,
}

impl Echelon {
    /// Returns the reduced matrix
    #[must_use]
    pub const fn matrix(&self) -> &RationalMatrix {
        &self.matrix
    }

    /// Returns the pivot columns in increasing order
    #[must_use]
    pub fn pivots(&self) -> &[usize] {
        &self.pivots
    }

    /// Returns the rank, the number of pivots
    #[must_use]
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use super::*;

    fn r(numer: i64, denom: i64) -> BigRational {
        BigRational::new(BigInt::from(numer), BigInt::from(denom))
    }

    fn matrix(rows: &[&[i64]]) -> RationalMatrix {
        let cols = rows.first().map_or(0, |row| row.len());
        RationalMatrix::from_fn(rows.len(), cols, |row, col| r(rows[row][col], 1))
    }

    fn zeros(rows: usize, cols: usize) -> RationalMatrix {
        RationalMatrix::from_fn(rows, cols, |_, _| BigRational::zero())
    }

    #[test]
    fn empty_matrix_has_rank_zero() {
        assert_eq!(zeros(0, 0).rank(), 0);
        assert_eq!(zeros(3, 4).rank(), 0);
    }

    #[test]
    fn rank_of_dependent_rows() {
        let m = matrix(&[&[1, 2, 3], &[2, 4, 6], &[0, 1, 1]]);

        assert_eq!(m.rank(), 2);
    }

    #[test]
    fn rref_pivots_and_form() {
        let m = matrix(&[&[0, 2, 4], &[1, 1, 1]]);

        let echelon = m.rref();

        assert_eq!(echelon.pivots(), &[0, 1]);
        assert_eq!(echelon.matrix(), &matrix(&[&[1, 0, -1], &[0, 1, 2]]));
    }

    #[test]
    fn solve_unique_rational_solution() {
        // a = (A^2 B^-1), scaling b = (A^1), c = (A^-2 B^2)
        let scaling = matrix(&[&[1, -2], &[0, 2]]);
        let target = [r(2, 1), r(-1, 1)];

        let solution = scaling.solve(&target).expect("system should be consistent");

        assert_eq!(solution, vec![r(1, 1), r(-1, 2)]);
    }

    #[test]
    fn solve_inconsistent_system() {
        let m = matrix(&[&[1], &[1]]);

        assert_eq!(m.solve(&[r(1, 1), r(2, 1)]), None);
    }

    #[test]
    fn solve_wrong_length() {
        let m = matrix(&[&[1, 0], &[0, 1]]);

        assert_eq!(m.solve(&[r(1, 1)]), None);
    }

    #[test]
    fn transpose_and_select_columns() {
        let m = matrix(&[&[1, 2, 3], &[4, 5, 6]]);

        assert_eq!(m.transpose(), matrix(&[&[1, 4], &[2, 5], &[3, 6]]));
        assert_eq!(
            m.select_columns(&[2, 0]).expect("columns should exist"),
            matrix(&[&[3, 1], &[6, 4]])
        );
        assert!(m.select_columns(&[3]).is_none());
        assert_eq!(m.row_count(), 2);
        assert_eq!(m.col_count(), 3);
    }

    #[test]
    fn identity_has_full_rank() {
        let identity = RationalMatrix::from_fn(4, 4, |row, col| r(i64::from(row == col), 1));

        assert_eq!(identity.rank(), 4);
    }
}
