//! Upstream data sources feeding the matcher.
//!
//! The traits abstract the two remote feeds consumed by a matching run:
//! the registered user list and the impacts feed. Implementations live
//! outside the core (`mutirao-data` provides HTTP ones); the core only
//! sees `Result`s, so transport concerns such as retries and timeouts
//! stay with the implementations.

use thiserror::Error;

use crate::{ImpactRecord, UserRecord};

/// Errors from fetching upstream records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The endpoint answered with a non-success HTTP status.
    #[error("upstream {url} answered with status {status}: {message}")]
    Http {
        /// Requested endpoint.
        url: String,
        /// HTTP status code received.
        status: u16,
        /// Transport-level detail.
        message: String,
    },
    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested endpoint.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The endpoint could not be reached at all.
    #[error("failed to reach {url}: {message}")]
    Network {
        /// Requested endpoint.
        url: String,
        /// Transport-level detail.
        message: String,
    },
    /// The payload was not valid JSON of the expected type.
    #[error("failed to decode upstream payload: {message}")]
    Decode {
        /// Decoder detail.
        message: String,
    },
    /// The payload decoded but did not have the expected shape, e.g. an
    /// empty impacts feed.
    #[error("unexpected upstream payload shape: {message}")]
    Shape {
        /// What was wrong with the payload.
        message: String,
    },
}

/// Fetch the registered users eligible for matching.
///
/// Implementations must be `Send + Sync` so a matcher can be shared
/// across threads. Records are returned in feed order, which the matcher
/// preserves for deterministic tie-breaking. An empty feed is not an
/// error at this level; the matcher decides how to treat it.
pub trait UserSource: Send + Sync {
    /// Return every registered user.
    fn fetch_users(&self) -> Result<Vec<UserRecord>, SourceError>;
}

/// Fetch the most recent impact record.
///
/// What "latest" means is the implementation's responsibility; the HTTP
/// feed takes the first element of the impacts array.
pub trait ImpactSource: Send + Sync {
    /// Return the latest impact.
    fn fetch_latest_impact(&self) -> Result<ImpactRecord, SourceError>;
}

impl<T: UserSource + ?Sized> UserSource for std::sync::Arc<T> {
    fn fetch_users(&self) -> Result<Vec<UserRecord>, SourceError> {
        (**self).fetch_users()
    }
}

impl<T: ImpactSource + ?Sized> ImpactSource for std::sync::Arc<T> {
    fn fetch_latest_impact(&self) -> Result<ImpactRecord, SourceError> {
        (**self).fetch_latest_impact()
    }
}
