//! HTTP-backed implementations of the core source traits.
//!
//! This module provides [`HttpFeedSource`], one client serving both the
//! [`UserSource`](mutirao_core::UserSource) and
//! [`ImpactSource`](mutirao_core::ImpactSource) traits against the two
//! configured feed endpoints.
//!
//! # Architecture
//!
//! The source traits are synchronous to keep the core library embeddable
//! in synchronous contexts. This implementation bridges the async HTTP
//! calls to the sync interface by blocking on a Tokio runtime internally.
//!
//! # Example
//!
//! ```no_run
//! use mutirao_data::sources::{HttpFeedConfig, HttpFeedSource};
//! use mutirao_core::{ImpactSource, UserSource};
//! use std::time::Duration;
//!
//! // Create a source with custom configuration
//! let config = HttpFeedConfig::new(
//!     "http://localhost:3333/profile",
//!     "http://localhost:3333/impacts",
//! )
//! .with_timeout(Duration::from_secs(60))
//! .with_user_agent("my-app/1.0");
//! let source = HttpFeedSource::with_config(config)?;
//!
//! let users = source.fetch_users()?;
//! let impact = source.fetch_latest_impact()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod http;
mod wire;

#[doc(hidden)]
pub mod test_support;

pub use http::{DEFAULT_USER_AGENT, HttpFeedConfig, HttpFeedSource, SourceBuildError};
