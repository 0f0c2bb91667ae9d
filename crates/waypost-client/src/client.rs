//! Client for the maps web API.
//!
//! Wraps a [`Transport`] with envelope classification and typed response
//! decoding. Each endpoint lives in its own module as an `impl` block on
//! [`MapsClient`]; all of them go through [`MapsClient::fetch`], so status
//! interpretation happens in exactly one place.

use serde::de::DeserializeOwned;
use waypost_core::AppConfig;

use crate::envelope::{classify, StatusEnvelope};
use crate::error::MapsError;
use crate::params::QueryParams;
use crate::transport::{HttpTransport, Transport};

/// Client for the maps web API.
///
/// Use [`MapsClient::new`] or [`MapsClient::from_config`] for production, or
/// [`MapsClient::with_transport`] to supply a different [`Transport`].
pub struct MapsClient<T = HttpTransport> {
    transport: T,
}

impl MapsClient<HttpTransport> {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`MapsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, MapsError> {
        Ok(Self::with_transport(HttpTransport::new(api_key, timeout_secs)?))
    }

    /// Creates a client from loaded application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MapsError::Http`] if the HTTP client cannot be constructed,
    /// or [`MapsError::InvalidInput`] if the configured base URL is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, MapsError> {
        Ok(Self::with_transport(HttpTransport::from_config(config)?))
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Same as [`HttpTransport::with_base_url`].
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, MapsError> {
        Ok(Self::with_transport(HttpTransport::with_base_url(
            api_key,
            timeout_secs,
            base_url,
            "waypost/0.1",
        )?))
    }
}

impl<T: Transport> MapsClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Requests `{endpoint}/json`, classifies the envelope, and decodes the
    /// body into `D` on success.
    ///
    /// # Errors
    ///
    /// - [`MapsError::Transport`] / [`MapsError::Http`] from the transport.
    /// - [`MapsError::Deserialize`] if the body is not JSON or not shaped
    ///   like `D`.
    /// - [`MapsError::ZeroResults`], [`MapsError::RateLimited`] or
    ///   [`MapsError::Provider`] from the envelope status.
    pub(crate) async fn fetch<D: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &QueryParams,
    ) -> Result<D, MapsError> {
        let path = format!("{endpoint}/json");
        tracing::debug!(endpoint, params = params.len(), "maps API request");

        let raw = self.transport.get(&path, &params.to_query_pairs()).await?;
        let body: serde_json::Value =
            serde_json::from_str(&raw).map_err(|e| MapsError::Deserialize {
                context: path.clone(),
                source: e,
            })?;

        classify(&StatusEnvelope::from_body(&body)).into_result()?;

        serde_json::from_value(body).map_err(|e| MapsError::Deserialize {
            context: path,
            source: e,
        })
    }
}
