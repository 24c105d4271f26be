//! Controlled vocabularies defining feature-vector dimensions.
//!
//! A [`Vocabulary`] holds two ordered label lists: ecological biomes and
//! community types. Their concatenation, biomes first, fixes the position
//! of every vector dimension, so vectors are only comparable when they
//! were produced from the same vocabulary snapshot.

use std::collections::HashSet;

use thiserror::Error;

/// Errors returned by [`Vocabulary::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VocabularyError {
    /// A label appeared more than once within the same list.
    #[error("duplicate label '{0}' in vocabulary")]
    DuplicateLabel(String),
}

/// The two ordered category lists that define vector dimensions.
///
/// Immutable after construction: the fields are private and no mutating
/// operation exists, so a shared `Arc<Vocabulary>` is safe to read from
/// concurrent matching runs without synchronisation.
///
/// # Examples
///
/// ```
/// use mutirao_core::Vocabulary;
///
/// # fn main() -> Result<(), mutirao_core::VocabularyError> {
/// let vocabulary = Vocabulary::new(
///     vec!["A".into(), "B".into()],
///     vec!["X".into(), "Y".into()],
/// )?;
/// assert_eq!(vocabulary.dimension(), 4);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    biomes: Vec<String>,
    peoples: Vec<String>,
}

impl Vocabulary {
    /// Validates and constructs a [`Vocabulary`].
    ///
    /// Labels must be unique within each list; the lists themselves may
    /// share labels since they occupy disjoint dimension ranges.
    pub fn new(biomes: Vec<String>, peoples: Vec<String>) -> Result<Self, VocabularyError> {
        check_unique(&biomes)?;
        check_unique(&peoples)?;
        Ok(Self { biomes, peoples })
    }

    /// The production registry: the seven Brazilian biomes and thirteen
    /// community types recognised by the upstream feeds.
    pub fn brazilian_default() -> Self {
        Self {
            biomes: [
                "Mata Atlântica",
                "Caatinga",
                "Amazônia",
                "Pampas",
                "Pantanal",
                "Cerrado",
                "Zonas Urbanas",
            ]
            .map(String::from)
            .to_vec(),
            peoples: [
                "Agricultor Familiar",
                "Indígenas",
                "Quilombolas",
                "Fundo de Pasto",
                "Gerais",
                "Pescadores Ribeirinhos",
                "Pescadores/Marisqueiras",
                "Cidades",
                "Geraizeiros",
                "Religiosos",
                "Ciganos",
                "Nômades",
                "Outros",
            ]
            .map(String::from)
            .to_vec(),
        }
    }

    /// Ordered biome labels, occupying the leading dimensions.
    pub fn biomes(&self) -> &[String] {
        &self.biomes
    }

    /// Ordered people labels, occupying the trailing dimensions.
    pub fn peoples(&self) -> &[String] {
        &self.peoples
    }

    /// Total vector dimension: `biomes.len() + peoples.len()`.
    pub fn dimension(&self) -> usize {
        self.biomes.len() + self.peoples.len()
    }
}

fn check_unique(labels: &[String]) -> Result<(), VocabularyError> {
    let mut seen = HashSet::with_capacity(labels.len());
    for label in labels {
        if !seen.insert(label.as_str()) {
            return Err(VocabularyError::DuplicateLabel(label.clone()));
        }
    }
    Ok(())
}
