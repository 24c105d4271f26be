//! Input records and ranked match results.
//!
//! These are read-only snapshots: the user list and impact record are
//! fetched once per matching run, and the [`MatchReport`] is recomputed
//! on every run rather than persisted.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A registered user as fetched from the profile feed.
///
/// Identity fields are passed through untouched; the upstream feed may
/// omit either one.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UserRecord {
    /// Opaque upstream identifier, if present.
    pub id: Option<String>,
    /// Contact address, if present.
    pub email: Option<String>,
    /// Biome labels the user follows.
    pub biome_themes: Vec<String>,
    /// Community labels the user follows.
    pub community_themes: Vec<String>,
}

/// The impact event being matched against the user base.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImpactRecord {
    /// Opaque upstream identifier, if present.
    pub id: Option<String>,
    /// Biomes touched by the impact.
    pub biomes: Vec<String>,
    /// Community types affected by the impact.
    pub affected_communities: Vec<String>,
}

/// One matched user with its distance to the impact vector.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RankedUser {
    /// Identifier of the matched user, passed through from the feed.
    pub id: Option<String>,
    /// Contact address of the matched user, passed through from the feed.
    pub email: Option<String>,
    /// Euclidean distance to the impact vector, rounded to four decimal
    /// places (half away from zero).
    pub distance: f64,
}

/// Ranked result set for one matching run.
///
/// Serialises with the wire field names `impact_id` and
/// `nearest_neighbors` expected by downstream consumers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchReport {
    /// Identifier of the impact the users were ranked against.
    pub impact_id: Option<String>,
    /// Up to K users, nearest first.
    pub nearest_neighbors: Vec<RankedUser>,
}
