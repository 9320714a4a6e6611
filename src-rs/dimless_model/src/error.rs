use std::fmt;

use dimless_quantity::QuantityError;
use dimless_shared::error::{AsDimlessError, Context};

/// Errors that prevent a model from being built.
///
/// No partial model is returned when any of these occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Two different quantities share a name
    DuplicateQuantityName {
        /// The shared name
        name: String,
    },
    /// More than one quantity is marked as dependent
    MultipleDependentQuantities {
        /// The names of the dependent quantities
        names: Vec<String>,
    },
    /// No quantity is marked as dependent
    NoDependentQuantity,
    /// The dependent quantity is the only quantity using a dimension, so it
    /// can never be made dimensionless
    IsolatedDependentQuantity {
        /// The name of the dependent quantity
        name: String,
        /// The dimension only it uses
        dimension: String,
    },
    /// Fewer than two quantities remain after filtering
    TooFewQuantities {
        /// The number of remaining quantities
        count: usize,
    },
    /// The number of scaling quantities differs from the rank of the
    /// dimensional matrix
    ScalingCardinalityMismatch {
        /// The rank of the dimensional matrix
        expected: usize,
        /// The number of scaling quantities
        found: usize,
    },
    /// The scaling quantities are not linearly independent
    DegenerateScalingSet {
        /// The names of the scaling quantities
        names: Vec<String>,
    },
    /// A scaling quantity is not one of the quantities of the model
    UnknownScalingQuantity {
        /// The name of the scaling quantity
        name: String,
    },
    /// There are fewer scaling candidates than the rank of the dimensional
    /// matrix
    InsufficientScalingCandidates {
        /// The rank of the dimensional matrix
        required: usize,
        /// The number of candidates
        found: usize,
    },
    /// No subset of the scaling candidates is linearly independent
    NoValidScalingCombination {
        /// The rank of the dimensional matrix
        rank: usize,
        /// The names of the candidates
        candidates: Vec<String>,
    },
    /// A constructed group is not dimensionless
    NonzeroGroupDimension {
        /// The group, as displayed
        group: String,
        /// The leftover dimension, as displayed
        dimension: String,
    },
    /// A quantity could not be given the role required by the model
    InvalidQuantity(QuantityError),
}

impl ModelError {
    /// Creates a new error indicating that two quantities share a name.
    #[must_use]
    pub const fn duplicate_quantity_name(name: String) -> Self {
        Self::DuplicateQuantityName { name }
    }

    /// Creates a new error indicating that several quantities are dependent.
    #[must_use]
    pub const fn multiple_dependent_quantities(names: Vec<String>) -> Self {
        Self::MultipleDependentQuantities { names }
    }

    /// Creates a new error indicating that no quantity is dependent.
    #[must_use]
    pub const fn no_dependent_quantity() -> Self {
        Self::NoDependentQuantity
    }

    /// Creates a new error indicating that the dependent quantity is the
    /// only user of a dimension.
    #[must_use]
    pub const fn isolated_dependent_quantity(name: String, dimension: String) -> Self {
        Self::IsolatedDependentQuantity { name, dimension }
    }

    /// Creates a new error indicating that too few quantities remain.
    #[must_use]
    pub const fn too_few_quantities(count: usize) -> Self {
        Self::TooFewQuantities { count }
    }

    /// Creates a new error indicating that the number of scaling quantities
    /// does not match the rank.
    #[must_use]
    pub const fn scaling_cardinality_mismatch(expected: usize, found: usize) -> Self {
        Self::ScalingCardinalityMismatch { expected, found }
    }

    /// Creates a new error indicating that the scaling quantities are
    /// linearly dependent.
    #[must_use]
    pub const fn degenerate_scaling_set(names: Vec<String>) -> Self {
        Self::DegenerateScalingSet { names }
    }

    /// Creates a new error indicating that a scaling quantity is unknown.
    #[must_use]
    pub const fn unknown_scaling_quantity(name: String) -> Self {
        Self::UnknownScalingQuantity { name }
    }

    /// Creates a new error indicating that there are too few scaling
    /// candidates.
    #[must_use]
    pub const fn insufficient_scaling_candidates(required: usize, found: usize) -> Self {
        Self::InsufficientScalingCandidates { required, found }
    }

    /// Creates a new error indicating that no combination of candidates is
    /// a valid scaling set.
    #[must_use]
    pub const fn no_valid_scaling_combination(rank: usize, candidates: Vec<String>) -> Self {
        Self::NoValidScalingCombination { rank, candidates }
    }

    /// Creates a new error indicating that a group is not dimensionless.
    #[must_use]
    pub const fn nonzero_group_dimension(group: String, dimension: String) -> Self {
        Self::NonzeroGroupDimension { group, dimension }
    }
}

impl From<QuantityError> for ModelError {
    fn from(error: QuantityError) -> Self {
        Self::InvalidQuantity(error)
    }
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateQuantityName { name } => {
                write!(f, "quantity `{name}` is declared more than once with different definitions")
            }
            Self::MultipleDependentQuantities { names } => {
                let names = names.join(", ");
                write!(f, "only one quantity may be dependent, found {names}")
            }
            Self::NoDependentQuantity => write!(f, "no quantity is marked as dependent"),
            Self::IsolatedDependentQuantity { name, dimension } => write!(
                f,
                "dependent quantity `{name}` is the only quantity with dimension `{dimension}`"
            ),
            Self::TooFewQuantities { count } => write!(
                f,
                "a model needs at least 2 relevant quantities, found {count}"
            ),
            Self::ScalingCardinalityMismatch { expected, found } => write!(
                f,
                "expected {expected} scaling quantities to match the rank of the dimensional matrix, found {found}"
            ),
            Self::DegenerateScalingSet { names } => {
                let names = names.join(", ");
                write!(f, "scaling quantities ({names}) are not dimensionally independent")
            }
            Self::UnknownScalingQuantity { name } => {
                write!(f, "scaling quantity `{name}` is not part of the model")
            }
            Self::InsufficientScalingCandidates { required, found } => write!(
                f,
                "at least {required} scaling candidates are required, found {found}"
            ),
            Self::NoValidScalingCombination { rank, candidates } => {
                let candidates = candidates.join(", ");
                write!(
                    f,
                    "no {rank} of the scaling candidates ({candidates}) are dimensionally independent"
                )
            }
            Self::NonzeroGroupDimension { group, dimension } => {
                write!(f, "group `{group}` has dimension `{dimension}` instead of 1")
            }
            Self::InvalidQuantity(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for ModelError {}

impl AsDimlessError for ModelError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::DuplicateQuantityName { .. } => vec![Context::Help(
                "rename one of the quantities or make the declarations identical".to_string(),
            )],
            Self::MultipleDependentQuantities { .. } => vec![Context::Help(
                "keep `@dependent` on exactly one quantity".to_string(),
            )],
            Self::NoDependentQuantity => vec![Context::Help(
                "mark the quantity the model predicts with `@dependent`".to_string(),
            )],
            Self::IsolatedDependentQuantity { .. } => vec![Context::Note(
                "no other quantity can cancel this dimension".to_string(),
            )],
            Self::ScalingCardinalityMismatch { expected, .. } => vec![Context::Help(format!(
                "mark exactly {expected} quantities with `@scaling`, or enumerate all choices with `--all`"
            ))],
            Self::DegenerateScalingSet { .. } => vec![Context::Note(
                "the dimension of one scaling quantity can be built from the others".to_string(),
            )],
            Self::NonzeroGroupDimension { .. } => vec![Context::Note(
                "this is a bug in dimless, please report it".to_string(),
            )],
            Self::InvalidQuantity(error) => error.context(),
            Self::TooFewQuantities { .. }
            | Self::UnknownScalingQuantity { .. }
            | Self::InsufficientScalingCandidates { .. }
            | Self::NoValidScalingCombination { .. } => vec![],
        }
    }
}
