//! Test utilities for feed sources.
//!
//! This module provides deterministic test doubles for the core source
//! traits that return pre-configured responses without making HTTP
//! requests.

use mutirao_core::{ImpactRecord, ImpactSource, SourceError, UserRecord, UserSource};

/// Stub `UserSource` for testing.
///
/// # Example
///
/// ```
/// use mutirao_data::sources::test_support::StubUserSource;
/// use mutirao_core::{UserRecord, UserSource};
///
/// let source = StubUserSource::with_users([UserRecord::default()]);
/// assert_eq!(source.fetch_users().map(|u| u.len()), Ok(1));
/// ```
#[derive(Debug, Clone)]
pub struct StubUserSource {
    response: Result<Vec<UserRecord>, SourceError>,
}

impl StubUserSource {
    /// Create a source returning the given users, in order.
    #[must_use]
    pub fn with_users<I>(users: I) -> Self
    where
        I: IntoIterator<Item = UserRecord>,
    {
        Self {
            response: Ok(users.into_iter().collect()),
        }
    }

    /// Create a source that fails with the given error.
    #[must_use]
    pub fn with_error(error: SourceError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl UserSource for StubUserSource {
    fn fetch_users(&self) -> Result<Vec<UserRecord>, SourceError> {
        self.response.clone()
    }
}

/// Stub `ImpactSource` for testing.
#[derive(Debug, Clone)]
pub struct StubImpactSource {
    response: Result<ImpactRecord, SourceError>,
}

impl StubImpactSource {
    /// Create a source returning the given impact as the latest one.
    #[must_use]
    pub fn with_impact(impact: ImpactRecord) -> Self {
        Self {
            response: Ok(impact),
        }
    }

    /// Create a source that fails with the given error.
    #[must_use]
    pub fn with_error(error: SourceError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl ImpactSource for StubImpactSource {
    fn fetch_latest_impact(&self) -> Result<ImpactRecord, SourceError> {
        self.response.clone()
    }
}
