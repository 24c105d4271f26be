//! Fixed-length binary feature vectors.

/// Positional binary encoding of a record's category memberships.
///
/// Components are `0.0` or `1.0`, aligned to the canonical dimension
/// order of the [`Vocabulary`](crate::Vocabulary) that produced the
/// vector. Vectors are created by a
/// [`FeatureEncoder`](crate::FeatureEncoder) and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    components: Vec<f64>,
}

impl FeatureVector {
    pub(crate) fn new(components: Vec<f64>) -> Self {
        Self { components }
    }

    /// Number of dimensions.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the vector has no dimensions.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The raw components in canonical dimension order.
    pub fn as_slice(&self) -> &[f64] {
        &self.components
    }

    /// Euclidean distance to `other`.
    ///
    /// With binary components this equals the square root of the number
    /// of mismatched dimensions.
    ///
    /// # Panics
    ///
    /// Panics when the vectors have different lengths. A length mismatch
    /// means they were produced from different vocabulary snapshots,
    /// which is a programming error rather than a recoverable condition.
    pub fn distance(&self, other: &Self) -> f64 {
        assert_eq!(
            self.len(),
            other.len(),
            "feature vectors must share one dimension order"
        );
        self.components
            .iter()
            .zip(&other.components)
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn distance_to_self_is_zero() {
        let vector = FeatureVector::new(vec![1.0, 0.0, 1.0, 0.0]);
        assert_eq!(vector.distance(&vector), 0.0);
    }

    #[rstest]
    #[case(vec![1.0, 0.0], vec![0.0, 0.0], 1.0)]
    #[case(vec![1.0, 1.0], vec![0.0, 0.0], std::f64::consts::SQRT_2)]
    #[case(vec![1.0, 0.0, 1.0], vec![0.0, 1.0, 0.0], 3.0_f64.sqrt())]
    fn distance_is_sqrt_of_mismatch_count(
        #[case] a: Vec<f64>,
        #[case] b: Vec<f64>,
        #[case] expected: f64,
    ) {
        let a = FeatureVector::new(a);
        let b = FeatureVector::new(b);
        assert_eq!(a.distance(&b), expected);
        assert_eq!(b.distance(&a), expected);
    }

    #[rstest]
    #[should_panic(expected = "feature vectors must share one dimension order")]
    fn mismatched_lengths_panic() {
        let a = FeatureVector::new(vec![1.0, 0.0]);
        let b = FeatureVector::new(vec![1.0, 0.0, 0.0]);
        let _ = a.distance(&b);
    }
}
