//! Core domain types for the Mutirão matching engine.
//!
//! The engine answers one question: which registered users best match a
//! given socio-environmental impact record? Users and the impact are
//! encoded into fixed-length binary feature vectors over two controlled
//! vocabularies (ecological biomes and community types), ranked by
//! Euclidean distance to the impact vector, and the closest K are
//! returned.
//!
//! Retrieval of the raw records is abstracted behind the [`UserSource`]
//! and [`ImpactSource`] traits so the engine stays free of I/O; see the
//! `mutirao-data` crate for HTTP implementations.

#![forbid(unsafe_code)]

pub mod distance;
pub mod encoder;
pub mod matcher;
pub mod ranking;
pub mod records;
pub mod source;
pub mod vector;
pub mod vocabulary;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use distance::distances;
pub use encoder::FeatureEncoder;
pub use matcher::{DEFAULT_NEIGHBOURS, MatchError, Matcher};
pub use ranking::top_k;
pub use records::{ImpactRecord, MatchReport, RankedUser, UserRecord};
pub use source::{ImpactSource, SourceError, UserSource};
pub use vector::FeatureVector;
pub use vocabulary::{Vocabulary, VocabularyError};
