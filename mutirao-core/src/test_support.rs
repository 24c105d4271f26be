//! Test-only, in-memory source implementations used by unit and
//! behaviour tests.

use crate::{ImpactRecord, ImpactSource, SourceError, UserRecord, UserSource};

/// In-memory `UserSource` returning a canned response.
#[derive(Debug, Clone)]
pub struct MemoryUserSource {
    response: Result<Vec<UserRecord>, SourceError>,
}

impl MemoryUserSource {
    /// Create a source returning the given users, in order.
    pub fn with_users<I>(users: I) -> Self
    where
        I: IntoIterator<Item = UserRecord>,
    {
        Self {
            response: Ok(users.into_iter().collect()),
        }
    }

    /// Create a source that fails with the given error.
    pub fn with_error(error: SourceError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl UserSource for MemoryUserSource {
    fn fetch_users(&self) -> Result<Vec<UserRecord>, SourceError> {
        self.response.clone()
    }
}

/// In-memory `ImpactSource` returning a canned response.
#[derive(Debug, Clone)]
pub struct MemoryImpactSource {
    response: Result<ImpactRecord, SourceError>,
}

impl MemoryImpactSource {
    /// Create a source returning the given impact as the latest one.
    pub fn with_impact(impact: ImpactRecord) -> Self {
        Self {
            response: Ok(impact),
        }
    }

    /// Create a source that fails with the given error.
    pub fn with_error(error: SourceError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl ImpactSource for MemoryImpactSource {
    fn fetch_latest_impact(&self) -> Result<ImpactRecord, SourceError> {
        self.response.clone()
    }
}
