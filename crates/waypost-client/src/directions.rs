//! Directions between two coordinates.

use crate::client::MapsClient;
use crate::error::MapsError;
use crate::params::QueryParams;
use crate::transport::Transport;
use crate::types::DirectionsResponse;
use crate::validate::{
    check_coordinate_range, parse_coordinate_pair, validate, ParamSchema, RequiredPolicy,
};

const DIRECTIONS_ENDPOINT: &str = "directions";

pub const DIRECTIONS_SCHEMA: ParamSchema = ParamSchema {
    supported: &["origin", "destination"],
    required: &["origin", "destination"],
    policy: RequiredPolicy::Any,
};

/// Validates directions parameters: the schema, then both endpoints as
/// `"lat,lng"` strings, then coordinate ranges once everything has parsed.
fn validate_route_params(params: &QueryParams) -> Result<(), MapsError> {
    validate(params, &DIRECTIONS_SCHEMA)?;

    let mut pairs = Vec::with_capacity(2);
    for (key, value) in params.iter() {
        let raw = value
            .as_text()
            .ok_or_else(|| MapsError::invalid(format!("Param {key} must be a \"lat,lng\" string")))?;
        pairs.push(parse_coordinate_pair(raw)?);
    }
    if pairs.len() != 2 {
        return Err(MapsError::invalid("Wrong geo-coordinates"));
    }

    for (lat, lng) in pairs {
        check_coordinate_range(lat, lng)?;
    }
    Ok(())
}

impl<T: Transport> MapsClient<T> {
    /// Finds routes between `origin` and `destination`, both given as
    /// `"lat,lng"` strings.
    ///
    /// # Errors
    ///
    /// - [`MapsError::InvalidInput`] on unsupported keys, missing endpoints,
    ///   unparsable coordinates, or out-of-range latitude/longitude.
    /// - [`MapsError::ZeroResults`] when no route exists.
    /// - [`MapsError::RateLimited`] / [`MapsError::Provider`] on other statuses.
    /// - [`MapsError::Transport`], [`MapsError::Http`], [`MapsError::Deserialize`]
    ///   on transport or decoding failures.
    pub async fn find_route(&self, params: &QueryParams) -> Result<DirectionsResponse, MapsError> {
        validate_route_params(params)?;
        self.fetch(DIRECTIONS_ENDPOINT, params).await
    }
}
