//! Quantities, dimensions and products for dimensional analysis
//!
//! All exponents are exact rationals, so dimensional bookkeeping never
//! suffers from floating point error.

mod dimension;
mod error;
mod exponent;
mod product;
mod quantity;

pub use dimension::Dimension;
pub use error::QuantityError;
pub use exponent::{Exponent, ParseExponentError};
pub use product::Product;
pub use quantity::{Quantity, Role};
