//! Exact rational matrices and dimensional matrices
//!
//! Rank and linear solves are computed with Gauss-Jordan elimination over
//! [`num_rational::BigRational`], so results are exact.

mod dimensional;
mod rational;

pub use dimensional::DimensionalMatrix;
pub use rational::{Echelon, RationalMatrix};
