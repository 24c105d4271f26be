//! HTTP feed client implementing the core source traits.
//!
//! [`HttpFeedSource`] fetches the registered user list and the impacts
//! feed from two configured endpoints. The synchronous trait calls are
//! bridged onto async `reqwest` by blocking on a Tokio runtime
//! internally.

use std::future::Future;
use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use mutirao_core::{ImpactRecord, ImpactSource, SourceError, UserRecord, UserSource};

use super::wire::{ImpactPayload, UserPayload};

/// Error type for [`HttpFeedSource`] construction failures.
#[derive(Debug)]
pub enum SourceBuildError {
    /// Failed to build the HTTP client.
    HttpClient(reqwest::Error),
    /// Failed to build the Tokio runtime.
    Runtime(std::io::Error),
}

impl std::fmt::Display for SourceBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HttpClient(err) => write!(f, "failed to build HTTP client: {err}"),
            Self::Runtime(err) => write!(f, "failed to build Tokio runtime: {err}"),
        }
    }
}

impl std::error::Error for SourceBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::HttpClient(err) => Some(err),
            Self::Runtime(err) => Some(err),
        }
    }
}

/// Default user agent for feed requests.
pub const DEFAULT_USER_AGENT: &str = "mutirao-data/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`HttpFeedSource`].
#[derive(Debug, Clone)]
pub struct HttpFeedConfig {
    /// Endpoint returning the registered user profiles as a JSON array.
    pub users_url: String,
    /// Endpoint returning the impacts feed as a JSON array, newest
    /// first.
    pub impacts_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl HttpFeedConfig {
    /// Create a new configuration for the two feed endpoints.
    #[must_use]
    pub fn new(users_url: impl Into<String>, impacts_url: impl Into<String>) -> Self {
        Self {
            users_url: users_url.into(),
            impacts_url: impacts_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// HTTP client serving both source traits.
///
/// The client owns a Tokio runtime that is reused across calls,
/// avoiding the overhead of creating a new runtime per request.
///
/// # Runtime behaviour
///
/// When called from outside any Tokio runtime, the source uses its own
/// stored runtime. When called from within an existing multi-threaded
/// Tokio runtime (detected via [`Handle::try_current()`] and
/// [`RuntimeFlavor::MultiThread`]), it uses that runtime's handle with
/// [`tokio::task::block_in_place`] to avoid nested runtime panics.
///
/// When called from within a `current_thread` Tokio runtime, the source
/// falls back to its own internal runtime. This avoids the panic that
/// `block_in_place` would cause, but may deadlock if the caller's
/// runtime is driving IO this request depends on.
pub struct HttpFeedSource {
    client: Client,
    config: HttpFeedConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpFeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpFeedSource")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpFeedSource {
    /// Create a new source with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to
    /// build.
    pub fn new(
        users_url: impl Into<String>,
        impacts_url: impl Into<String>,
    ) -> Result<Self, SourceBuildError> {
        Self::with_config(HttpFeedConfig::new(users_url, impacts_url))
    }

    /// Create a new source with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to
    /// build.
    pub fn with_config(config: HttpFeedConfig) -> Result<Self, SourceBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(SourceBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(SourceBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// Fetch a JSON array from `url` and deserialise its elements.
    async fn fetch_array<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, SourceError> {
        debug!("fetching feed from {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, url))?;

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|err| SourceError::Decode {
                message: err.to_string(),
            })?;
        decode_array(body, url)
    }

    /// Convert a reqwest error to a `SourceError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> SourceError {
        if error.is_timeout() {
            return SourceError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return SourceError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        SourceError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }

    /// Block on `future`, picking a runtime per the rules above.
    fn block_on<F: Future>(&self, future: F) -> F::Output {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            // No runtime detected, or current_thread runtime: use our own.
            _ => self.runtime.block_on(future),
        }
    }
}

/// Deserialise the elements of a feed body that is already valid JSON.
///
/// A well-formed document that is not an array is a shape error, not a
/// decode error; `Decode` is reserved for malformed JSON and for array
/// elements that do not match the wire type.
fn decode_array<T: DeserializeOwned>(
    body: serde_json::Value,
    url: &str,
) -> Result<Vec<T>, SourceError> {
    if !body.is_array() {
        return Err(SourceError::Shape {
            message: format!("expected a JSON array from {url}"),
        });
    }
    serde_json::from_value(body).map_err(|err| SourceError::Decode {
        message: err.to_string(),
    })
}

impl UserSource for HttpFeedSource {
    fn fetch_users(&self) -> Result<Vec<UserRecord>, SourceError> {
        let payloads =
            self.block_on(self.fetch_array::<UserPayload>(&self.config.users_url))?;
        Ok(payloads.into_iter().map(UserRecord::from).collect())
    }
}

impl ImpactSource for HttpFeedSource {
    /// The impacts feed is ordered newest first; its head element is the
    /// latest impact. An empty feed has no latest impact and is a shape
    /// error.
    fn fetch_latest_impact(&self) -> Result<ImpactRecord, SourceError> {
        let mut payloads =
            self.block_on(self.fetch_array::<ImpactPayload>(&self.config.impacts_url))?;
        if payloads.is_empty() {
            return Err(SourceError::Shape {
                message: "impacts feed is empty".to_string(),
            });
        }
        Ok(ImpactRecord::from(payloads.remove(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn config_builder_pattern() {
        let config = HttpFeedConfig::new(
            "http://feeds.example/profile",
            "http://feeds.example/impacts",
        )
        .with_timeout(Duration::from_secs(60))
        .with_user_agent("test-agent/1.0");

        assert_eq!(config.users_url, "http://feeds.example/profile");
        assert_eq!(config.impacts_url, "http://feeds.example/impacts");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, "test-agent/1.0");
    }

    #[rstest]
    fn config_defaults() {
        let config = HttpFeedConfig::new("http://a", "http://b");

        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[rstest]
    fn source_builds_from_config() {
        let source = HttpFeedSource::new("http://a/profile", "http://b/impacts");

        assert!(source.is_ok());
    }

    #[rstest]
    #[case(serde_json::json!({}))]
    #[case(serde_json::json!({ "users": [] }))]
    #[case(serde_json::json!("nope"))]
    #[case(serde_json::json!(7))]
    fn non_array_body_is_a_shape_error(#[case] body: serde_json::Value) {
        let result = decode_array::<UserPayload>(body, "http://a/profile");

        assert!(matches!(result, Err(SourceError::Shape { .. })));
    }

    #[rstest]
    fn array_body_decodes_its_elements() {
        let body = serde_json::json!([{ "id": "u1", "themesBiomes": ["Cerrado"] }]);

        let users = decode_array::<UserPayload>(body, "http://a/profile")
            .expect("array body should decode");

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id.as_deref(), Some("u1"));
    }

    #[rstest]
    fn mistyped_elements_are_a_decode_error() {
        let body = serde_json::json!([{ "themesBiomes": 7 }]);

        let result = decode_array::<UserPayload>(body, "http://a/profile");

        assert!(matches!(result, Err(SourceError::Decode { .. })));
    }
}
