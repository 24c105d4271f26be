//! Match registered users against the latest impact record.
//!
//! [`Matcher`] composes the vocabulary, encoder, distance engine and
//! top-K selection against the two upstream sources, producing a ranked
//! [`MatchReport`]. Each run fetches fresh data; nothing is cached or
//! shared between invocations beyond the immutable vocabulary.

use std::sync::Arc;

use thiserror::Error;

use crate::{
    FeatureEncoder, ImpactSource, MatchReport, RankedUser, SourceError, UserSource, Vocabulary,
    distances, top_k,
};

/// Number of neighbours returned by a matching run.
pub const DEFAULT_NEIGHBOURS: usize = 3;

/// Reported distances are rounded to four decimal places.
const ROUND_FACTOR: f64 = 10_000.0;

/// Errors returned by [`Matcher::match_latest_impact`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The impacts feed could not be fetched or held no usable record.
    #[error("failed to obtain the latest impact: {0}")]
    Impact(#[source] SourceError),
    /// The user feed could not be fetched.
    #[error("failed to obtain the user list: {0}")]
    Users(#[source] SourceError),
    /// The user feed was reachable but empty, so there is nothing to
    /// rank.
    #[error("no users are available for matching")]
    NoUsers,
}

/// Nearest-neighbour matcher over a fixed vocabulary snapshot.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use mutirao_core::{
///     ImpactRecord, ImpactSource, Matcher, SourceError, UserRecord, UserSource, Vocabulary,
/// };
///
/// struct OneUser;
///
/// impl UserSource for OneUser {
///     fn fetch_users(&self) -> Result<Vec<UserRecord>, SourceError> {
///         Ok(vec![UserRecord {
///             id: Some("u1".into()),
///             email: None,
///             biome_themes: vec!["Cerrado".into()],
///             community_themes: vec![],
///         }])
///     }
/// }
///
/// struct LatestImpact;
///
/// impl ImpactSource for LatestImpact {
///     fn fetch_latest_impact(&self) -> Result<ImpactRecord, SourceError> {
///         Ok(ImpactRecord {
///             id: Some("imp-1".into()),
///             biomes: vec!["Cerrado".into()],
///             affected_communities: vec![],
///         })
///     }
/// }
///
/// # fn main() -> Result<(), mutirao_core::MatchError> {
/// let matcher = Matcher::new(
///     Arc::new(Vocabulary::brazilian_default()),
///     OneUser,
///     LatestImpact,
/// );
/// let report = matcher.match_latest_impact()?;
/// assert_eq!(report.nearest_neighbors[0].distance, 0.0);
/// # Ok(())
/// # }
/// ```
pub struct Matcher<U, I> {
    encoder: FeatureEncoder,
    users: U,
    impacts: I,
    k: usize,
}

impl<U: UserSource, I: ImpactSource> Matcher<U, I> {
    /// Build a matcher over `vocabulary` returning
    /// [`DEFAULT_NEIGHBOURS`] matches per run.
    pub fn new(vocabulary: Arc<Vocabulary>, users: U, impacts: I) -> Self {
        Self {
            encoder: FeatureEncoder::new(vocabulary),
            users,
            impacts,
            k: DEFAULT_NEIGHBOURS,
        }
    }

    /// Override the number of neighbours returned.
    #[must_use]
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Fetch both feeds, rank every user by Euclidean distance to the
    /// impact vector, and return the closest K.
    ///
    /// The run stops at the first upstream failure and produces no
    /// partial result. An empty user list is an error rather than an
    /// empty report.
    pub fn match_latest_impact(&self) -> Result<MatchReport, MatchError> {
        let impact = self
            .impacts
            .fetch_latest_impact()
            .map_err(MatchError::Impact)?;
        let users = self.users.fetch_users().map_err(MatchError::Users)?;
        if users.is_empty() {
            return Err(MatchError::NoUsers);
        }

        let candidates: Vec<_> = users
            .iter()
            .map(|user| {
                self.encoder
                    .encode(&user.biome_themes, &user.community_themes)
            })
            .collect();
        let target = self
            .encoder
            .encode(&impact.biomes, &impact.affected_communities);

        let scores = distances(&candidates, &target);
        let nearest_neighbors = top_k(&scores, self.k)
            .into_iter()
            .map(|index| RankedUser {
                id: users[index].id.clone(),
                email: users[index].email.clone(),
                distance: round_distance(scores[index]),
            })
            .collect();

        Ok(MatchReport {
            impact_id: impact.id,
            nearest_neighbors,
        })
    }
}

/// Round to four decimal places, half away from zero.
///
/// `f64::round` rounds halves away from zero; this is the documented
/// rounding mode for reported distances.
fn round_distance(value: f64) -> f64 {
    (value * ROUND_FACTOR).round() / ROUND_FACTOR
}
