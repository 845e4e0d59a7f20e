//! Guess selection
//!
//! Picks the heaviest open prediction, climbs to its foundational ancestors
//! and guesses the heaviest open one of those.

use super::SolverError;
use crate::prediction::{PredictionId, Registry};
use std::cmp::Ordering;

/// Rank two predictions: higher weight wins, exact ties go to the
/// alphabetically first description
fn rank(registry: &Registry, a: PredictionId, b: PredictionId) -> Ordering {
    let (pa, pb) = (registry.get(a), registry.get(b));
    pa.weight()
        .total_cmp(&pb.weight())
        .then_with(|| pb.kind().to_string().cmp(&pa.kind().to_string()))
}

fn heaviest(registry: &Registry, ids: &[PredictionId]) -> Option<usize> {
    (0..ids.len()).max_by(|&i, &j| rank(registry, ids[i], ids[j]))
}

/// Choose the next foundational prediction to guess
///
/// # Errors
/// Returns `SolverError::NoPredictionsRemain` when no open prediction has an
/// open foundational ancestor.
pub fn best_guess(registry: &Registry) -> Result<PredictionId, SolverError> {
    let mut pool: Vec<PredictionId> = registry
        .active()
        .iter()
        .copied()
        .filter(|&id| registry.get(id).is_open())
        .collect();

    while let Some(best) = heaviest(registry, &pool) {
        let roots: Vec<PredictionId> = registry
            .topmost(pool[best])
            .into_iter()
            .filter(|&id| registry.get(id).is_open())
            .collect();

        match heaviest(registry, &roots) {
            Some(pick) => return Ok(roots[pick]),
            None => {
                pool.remove(best);
            }
        }
    }

    Err(SolverError::NoPredictionsRemain)
}
