//! Plain geocoding: one request, no fallback.

use crate::client::MapsClient;
use crate::error::MapsError;
use crate::params::QueryParams;
use crate::transport::Transport;
use crate::types::{GeocodePayload, GeocodeResponse};
use crate::validate::{validate, ParamSchema, RequiredPolicy};

pub(crate) const GEOCODE_ENDPOINT: &str = "geocode";

pub const GEOCODE_SCHEMA: ParamSchema = ParamSchema {
    supported: &["address", "components", "bounds", "language", "region"],
    required: &["address", "components"],
    policy: RequiredPolicy::Any,
};

impl<T: Transport> MapsClient<T> {
    /// Geocodes an address and/or component filter.
    ///
    /// # Errors
    ///
    /// - [`MapsError::InvalidInput`] if `params` do not match [`GEOCODE_SCHEMA`].
    /// - [`MapsError::ZeroResults`] if nothing matched.
    /// - [`MapsError::RateLimited`] / [`MapsError::Provider`] on other statuses.
    /// - [`MapsError::Transport`], [`MapsError::Http`], [`MapsError::Deserialize`]
    ///   on transport or decoding failures.
    pub async fn geocode(&self, params: &QueryParams) -> Result<GeocodeResponse, MapsError> {
        validate(params, &GEOCODE_SCHEMA)?;
        let payload: GeocodePayload = self.fetch(GEOCODE_ENDPOINT, params).await?;
        // An `OK` status with an empty list carries nothing usable.
        GeocodeResponse::from_results(payload.results).ok_or(MapsError::ZeroResults)
    }
}
