//! Buckingham Pi nondimensionalization
//!
//! A [`Model`] takes quantities with one dependent quantity and a set of
//! scaling quantities, and produces the nondimensional groups relating them:
//!
//! ```rust
//! use dimless_model::Model;
//! use dimless_quantity::{Dimension, Quantity};
//!
//! let quantities = vec![
//!     Quantity::dependent("T", Dimension::from_iter([("time", 1)])).expect("valid"),
//!     Quantity::scaling("L", Dimension::from_iter([("length", 1)])).expect("valid"),
//!     Quantity::new("m", Dimension::from_iter([("mass", 1)])).expect("valid"),
//!     Quantity::scaling("g", Dimension::from_iter([("length", 1), ("time", -2)])).expect("valid"),
//!     Quantity::new("theta0", Dimension::dimensionless()).expect("valid"),
//! ];
//!
//! let model = Model::new(&quantities).expect("model should resolve");
//!
//! assert_eq!(model.rank(), 2);
//! assert_eq!(model.relation().to_string(), "T*g**(1/2)/L**(1/2) = Phi(theta0)");
//! ```
//!
//! When the choice of scaling quantities is open, a [`ModelSet`] builds one
//! model per valid choice.

mod combinations;
mod error;
mod filter;
mod group;
mod model;
mod model_set;
mod prepare;
mod relation;
mod resolver;
mod warning;

pub use combinations::Combinations;
pub use error::ModelError;
pub use filter::{Filtered, filter_quantities};
pub use group::{NondimensionalGroup, ScalingGroup};
pub use model::Model;
pub use model_set::ModelSet;
pub use relation::{DimensionalRelation, NondimensionalRelation};
pub use resolver::ScalingResolver;
pub use warning::Warning;
