//! Facade crate for the Mutirão matching engine.
//!
//! This crate re-exports the core domain types and exposes the optional
//! HTTP feed sources behind a feature flag.

#![forbid(unsafe_code)]

pub use mutirao_core::{
    DEFAULT_NEIGHBOURS, FeatureEncoder, FeatureVector, ImpactRecord, ImpactSource, MatchError,
    MatchReport, Matcher, RankedUser, SourceError, UserRecord, UserSource, Vocabulary,
    VocabularyError,
};

#[cfg(feature = "http-source")]
pub use mutirao_data::sources::{HttpFeedConfig, HttpFeedSource, SourceBuildError};
