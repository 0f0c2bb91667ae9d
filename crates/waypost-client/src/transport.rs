//! The single network operation the client depends on.
//!
//! [`Transport::get`] takes an endpoint path and a flat query map and returns
//! the raw body. [`HttpTransport`] is the production implementation; tests
//! substitute their own.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};
use waypost_core::{AppConfig, DEFAULT_BASE_URL};

use crate::error::MapsError;

/// Longest body excerpt kept in [`MapsError::Transport`].
const BODY_SNIPPET_CHARS: usize = 200;

/// One GET round-trip to the provider.
///
/// Implementations return the body for informational, success and redirect
/// statuses, and [`MapsError::Transport`] for anything else.
pub trait Transport {
    fn get(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> impl Future<Output = Result<String, MapsError>> + Send;
}

/// `reqwest`-backed [`Transport`] that appends the API key to every request.
pub struct HttpTransport {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl HttpTransport {
    /// Creates a transport pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`MapsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, MapsError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL, "waypost/0.1")
    }

    /// Creates a transport from loaded application configuration.
    ///
    /// # Errors
    ///
    /// Same as [`HttpTransport::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, MapsError> {
        Self::with_base_url(
            &config.api_key,
            config.request_timeout_secs,
            &config.base_url,
            &config.user_agent,
        )
    }

    /// Creates a transport with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`MapsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`MapsError::InvalidInput`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
        user_agent: &str,
    ) -> Result<Self, MapsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // A trailing slash makes `Url::join` append endpoint paths instead of
        // replacing the last base segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| MapsError::invalid(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Builds the request URL: base + `path`, the caller's parameters in
    /// order, then `key`.
    fn build_url(&self, path: &str, query: &[(String, String)]) -> Result<Url, MapsError> {
        let mut url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| MapsError::invalid(format!("invalid endpoint path '{path}': {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }
}

impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<String, MapsError> {
        let url = self.build_url(path, query)?;
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_informational() || status.is_success() || status.is_redirection() {
            return Ok(body);
        }

        tracing::debug!(status = status.as_u16(), path, "provider returned error status");
        Err(MapsError::Transport {
            status: status.as_u16(),
            body: body.chars().take(BODY_SNIPPET_CHARS).collect(),
        })
    }
}
