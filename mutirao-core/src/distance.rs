//! Pairwise Euclidean distances between candidate vectors and a target.

use crate::FeatureVector;

/// Distance from every candidate to `target`, in candidate order.
///
/// The scan is exhaustive; at the expected scale (tens to low thousands
/// of users) no index is warranted.
///
/// # Panics
///
/// Panics when any candidate's length differs from the target's, since
/// that means the vectors were not produced from one shared vocabulary.
pub fn distances(candidates: &[FeatureVector], target: &FeatureVector) -> Vec<f64> {
    candidates
        .iter()
        .map(|candidate| candidate.distance(target))
        .collect()
}
