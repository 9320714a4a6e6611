use std::fmt;

/// Non-fatal findings made while building a model.
///
/// Warnings are returned on models and also logged through the `log` facade
/// when they are found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Quantities and dimensions that cannot take part in the model
    IrrelevantQuantities {
        /// Names of the dropped quantities
        quantities: Vec<String>,
        /// Names of the dropped dimensions
        dimensions: Vec<String>,
    },
    /// A quantity was declared more than once with the same definition
    DuplicateQuantity {
        /// The name of the quantity
        name: String,
    },
    /// There are more dimensions than the rank of the dimensional matrix
    DependentDimensions {
        /// All dimensions of the model
        dimensions: Vec<String>,
        /// The dimensions treated as independent
        independent: Vec<String>,
    },
    /// No scaling quantities were marked, so every dimensional non-dependent
    /// quantity is a candidate
    ScalingCandidatesInferred {
        /// Names of the candidates
        candidates: Vec<String>,
    },
}

impl Warning {
    /// Logs the warning through the `log` facade
    pub(crate) fn emit(&self) {
        match self {
            Self::ScalingCandidatesInferred { .. } => log::info!("{self}"),
            Self::IrrelevantQuantities { .. }
            | Self::DuplicateQuantity { .. }
            | Self::DependentDimensions { .. } => log::warn!("{self}"),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IrrelevantQuantities {
                quantities,
                dimensions,
            } => {
                write!(f, "dropped irrelevant")?;
                if !quantities.is_empty() {
                    write!(f, " quantities ({})", quantities.join(", "))?;
                }
                if !quantities.is_empty() && !dimensions.is_empty() {
                    write!(f, " and")?;
                }
                if !dimensions.is_empty() {
                    write!(f, " dimensions ({})", dimensions.join(", "))?;
                }
                Ok(())
            }
            Self::DuplicateQuantity { name } => {
                write!(f, "quantity `{name}` is declared more than once")
            }
            Self::DependentDimensions {
                dimensions,
                independent,
            } => write!(
                f,
                "of the dimensions ({}), only ({}) are treated as independent",
                dimensions.join(", "),
                independent.join(", ")
            ),
            Self::ScalingCandidatesInferred { candidates } => write!(
                f,
                "no scaling quantities marked, trying all choices from ({})",
                candidates.join(", ")
            ),
        }
    }
}
