//! Timezone lookup by coordinates.

use chrono::{DateTime, Utc};

use crate::client::MapsClient;
use crate::error::MapsError;
use crate::params::{ParamValue, QueryParams};
use crate::transport::Transport;
use crate::types::TimezoneResponse;
use crate::validate::{check_coordinate_range, validate, ParamSchema, RequiredPolicy};

const TIMEZONE_ENDPOINT: &str = "timezone";

pub const TIMEZONE_SCHEMA: ParamSchema = ParamSchema {
    supported: &["latitude", "longitude", "timestamp", "language"],
    required: &["latitude", "longitude"],
    policy: RequiredPolicy::All,
};

fn number(params: &QueryParams, key: &str) -> Result<f64, MapsError> {
    params
        .get(key)
        .and_then(ParamValue::as_number)
        .ok_or_else(|| MapsError::invalid(format!("Param {key} must be a number")))
}

/// Validates timezone parameters and returns the coordinates and the
/// optional timestamp.
fn validate_timezone_params(
    params: &QueryParams,
) -> Result<(f64, f64, Option<DateTime<Utc>>), MapsError> {
    validate(params, &TIMEZONE_SCHEMA)?;

    let timestamp = match params.get("timestamp") {
        None => None,
        Some(value) => Some(
            value
                .as_timestamp()
                .ok_or_else(|| MapsError::invalid("Timestamp must be a timestamp value"))?,
        ),
    };

    let latitude = number(params, "latitude")?;
    let longitude = number(params, "longitude")?;
    check_coordinate_range(latitude, longitude)?;

    Ok((latitude, longitude, timestamp))
}

/// Builds the wire request: `location`, `timestamp` (seconds since epoch,
/// `now` when absent), and `language` when given.
fn build_timezone_request(
    params: &QueryParams,
    latitude: f64,
    longitude: f64,
    timestamp: DateTime<Utc>,
) -> QueryParams {
    let mut request = QueryParams::new()
        .with("location", format!("{latitude},{longitude}"))
        .with("timestamp", timestamp);
    if let Some(language) = params.text("language") {
        request.insert("language", language);
    }
    request
}

impl<T: Transport> MapsClient<T> {
    /// Looks up the timezone at `latitude`/`longitude` for `timestamp`
    /// (defaults to the current time).
    ///
    /// # Errors
    ///
    /// - [`MapsError::InvalidInput`] on unsupported or missing keys,
    ///   non-numeric coordinates, a non-timestamp `timestamp`, or
    ///   out-of-range coordinates.
    /// - [`MapsError::ZeroResults`] for locations without a timezone
    ///   (open ocean).
    /// - [`MapsError::RateLimited`] / [`MapsError::Provider`] on other statuses.
    /// - [`MapsError::Transport`], [`MapsError::Http`], [`MapsError::Deserialize`]
    ///   on transport or decoding failures.
    pub async fn timezone_at(&self, params: &QueryParams) -> Result<TimezoneResponse, MapsError> {
        let (latitude, longitude, timestamp) = validate_timezone_params(params)?;
        let request =
            build_timezone_request(params, latitude, longitude, timestamp.unwrap_or_else(Utc::now));
        self.fetch(TIMEZONE_ENDPOINT, &request).await
    }
}
