use dimless_quantity::Quantity;

use crate::{Combinations, Model, ModelError, Warning, prepare::prepare};

/// Every model obtainable from a set of scaling candidates.
///
/// Subsets of size `rank` are enumerated in lexicographic order over the
/// candidates. Subsets whose dimensions are linearly dependent are skipped;
/// every other subset yields one [`Model`] with a 1-based id.
#[derive(Debug, Clone)]
pub struct ModelSet {
    rank: usize,
    candidates: Vec<Quantity>,
    models: Vec<Model>,
    skipped: Vec<Vec<Quantity>>,
    warnings: Vec<Warning>,
}

impl ModelSet {
    /// Builds every model for the given quantities.
    ///
    /// The candidates are the quantities marked as scaling. If none are
    /// marked, every dimensional quantity other than the dependent one is a
    /// candidate.
    ///
    /// # Errors
    ///
    /// Returns the same validation errors as [`Model::new`], an error if
    /// there are fewer candidates than the rank, and an error if no subset
    /// of the candidates is linearly independent.
    pub fn new(quantities: &[Quantity]) -> Result<Self, ModelError> {
        let prepared = prepare(quantities)?;
        let resolver = prepared.resolver;
        let mut warnings = prepared.warnings;
        let rank = resolver.rank();

        let marked: Vec<usize> = indices_where(resolver.quantities(), Quantity::is_scaling);
        let candidates = if marked.is_empty() {
            let inferred = indices_where(resolver.quantities(), |quantity| {
                !quantity.is_dependent() && !quantity.is_dimensionless()
            });

            if !inferred.is_empty() {
                let warning = Warning::ScalingCandidatesInferred {
                    candidates: inferred
                        .iter()
                        .map(|&index| resolver.quantities()[index].name().to_string())
                        .collect(),
                };
                warning.emit();
                warnings.push(warning);
            }

            inferred
        } else {
            marked
        };

        if candidates.len() < rank {
            return Err(ModelError::insufficient_scaling_candidates(
                rank,
                candidates.len(),
            ));
        }

        let mut valid = Vec::new();
        let mut skipped = Vec::new();
        for subset in Combinations::new(candidates.len(), rank) {
            let indices: Vec<usize> = subset.iter().map(|&i| candidates[i]).collect();
            let names: Vec<&str> = indices
                .iter()
                .map(|&index| resolver.quantities()[index].name())
                .collect();

            if resolver.is_valid_scaling_set(&names) {
                valid.push(indices);
            } else {
                log::debug!("skipping dependent scaling set ({})", names.join(", "));
                skipped.push(
                    indices
                        .iter()
                        .map(|&index| resolver.quantities()[index].clone())
                        .collect(),
                );
            }
        }

        let candidate_quantities: Vec<Quantity> = candidates
            .iter()
            .map(|&index| resolver.quantities()[index].clone())
            .collect();

        if valid.is_empty() {
            return Err(ModelError::no_valid_scaling_combination(
                rank,
                candidate_quantities
                    .iter()
                    .map(|quantity| quantity.name().to_string())
                    .collect(),
            ));
        }

        let several = valid.len() > 1;
        let models = valid
            .iter()
            .enumerate()
            .map(|(offset, indices)| {
                let id = offset + 1;
                let name = if several {
                    format!("Phi_{id}")
                } else {
                    "Phi".to_string()
                };
                Model::resolve(&resolver, indices, Some(id), name, warnings.clone())
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "built {} models, skipped {} scaling sets",
            models.len(),
            skipped.len()
        );

        Ok(Self {
            rank,
            candidates: candidate_quantities,
            models,
            skipped,
            warnings,
        })
    }

    /// Returns the models, in enumeration order
    #[must_use]
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Returns the number of models
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Returns whether the set has no models
    ///
    /// A successfully built set always has at least one model.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Returns the rank of the dimensional matrix
    #[must_use]
    pub const fn rank(&self) -> usize {
        self.rank
    }

    /// Returns the scaling candidates
    #[must_use]
    pub fn candidates(&self) -> &[Quantity] {
        &self.candidates
    }

    /// Returns the candidate subsets that were skipped as linearly dependent
    #[must_use]
    pub fn skipped(&self) -> &[Vec<Quantity>] {
        &self.skipped
    }

    /// Returns the warnings found while preparing the quantities
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }
}

fn indices_where(quantities: &[Quantity], predicate: impl Fn(&Quantity) -> bool) -> Vec<usize> {
    quantities
        .iter()
        .enumerate()
        .filter(|(_, quantity)| predicate(quantity))
        .map(|(index, _)| index)
        .collect()
}
