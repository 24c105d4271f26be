//! Select the indices of the K smallest distances.

/// Indices of the `k` smallest distances, ascending by distance.
///
/// Equal distances preserve the original candidate order: the sort is
/// stable, reproducing the behaviour of a stable ascending argsort so
/// results are deterministic run to run. `k` larger than the input
/// returns every index; an empty input returns an empty vector. Neither
/// case is an error.
///
/// # Examples
///
/// ```
/// use mutirao_core::top_k;
///
/// assert_eq!(top_k(&[1.0, 0.0, 1.0, 0.0], 2), vec![1, 3]);
/// ```
pub fn top_k(distances: &[f64], k: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..distances.len()).collect();
    indices.sort_by(|&a, &b| distances[a].total_cmp(&distances[b]));
    indices.truncate(k);
    indices
}
