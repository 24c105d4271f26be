//! Encode category memberships into fixed-length binary vectors.

use std::collections::HashSet;
use std::sync::Arc;

use crate::{FeatureVector, Vocabulary};

/// Produces [`FeatureVector`]s aligned to one [`Vocabulary`] snapshot.
///
/// Every vector compared within a matching run must come from encoders
/// sharing the same vocabulary, otherwise dimensions are incomparable.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use mutirao_core::{FeatureEncoder, Vocabulary};
///
/// # fn main() -> Result<(), mutirao_core::VocabularyError> {
/// let vocabulary = Vocabulary::new(
///     vec!["A".into(), "B".into()],
///     vec!["X".into(), "Y".into()],
/// )?;
/// let encoder = FeatureEncoder::new(Arc::new(vocabulary));
/// let vector = encoder.encode(&["A".into()], &["X".into()]);
/// assert_eq!(vector.as_slice(), &[1.0, 0.0, 1.0, 0.0]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FeatureEncoder {
    vocabulary: Arc<Vocabulary>,
}

impl FeatureEncoder {
    /// Build an encoder over a shared vocabulary snapshot.
    pub fn new(vocabulary: Arc<Vocabulary>) -> Self {
        Self { vocabulary }
    }

    /// The vocabulary this encoder is aligned to.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Encode two membership lists into a binary vector.
    ///
    /// Position `i` is `1.0` iff the vocabulary label at `i` appears in
    /// the matching membership list. Labels absent from the vocabulary
    /// are silently ignored, duplicates have no extra effect, and input
    /// ordering is irrelevant: only set membership matters.
    pub fn encode(&self, biomes: &[String], communities: &[String]) -> FeatureVector {
        let biome_set: HashSet<&str> = biomes.iter().map(String::as_str).collect();
        let community_set: HashSet<&str> = communities.iter().map(String::as_str).collect();

        let mut components = Vec::with_capacity(self.vocabulary.dimension());
        components.extend(
            self.vocabulary
                .biomes()
                .iter()
                .map(|label| presence(&biome_set, label)),
        );
        components.extend(
            self.vocabulary
                .peoples()
                .iter()
                .map(|label| presence(&community_set, label)),
        );
        FeatureVector::new(components)
    }
}

fn presence(members: &HashSet<&str>, label: &str) -> f64 {
    if members.contains(label) { 1.0 } else { 0.0 }
}
