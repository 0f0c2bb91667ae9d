//! Adaptive geocoding.
//!
//! Starts from the caller's full address description and, each time the
//! provider answers `ZERO_RESULTS`, drops the next constraint in a fixed
//! priority order and asks again:
//!
//! | Attempt | Request                                   |
//! |---------|-------------------------------------------|
//! | 1       | everything the caller supplied            |
//! | 2       | without `postal_code`                     |
//! | 3       | ... and without `address`                 |
//! | 4       | ... and without `locality`                |
//! | 5       | ... and without `administrative_area`     |
//!
//! Constraints the caller never supplied are skipped without spending an
//! attempt. `country` is never dropped. Rate-limit, provider and transport
//! errors end the call immediately.

use std::collections::VecDeque;
use std::time::Duration;

use crate::client::MapsClient;
use crate::error::MapsError;
use crate::params::QueryParams;
use crate::transport::Transport;
use crate::types::GeocodeResponse;
use crate::validate::{validate, ParamSchema, RequiredPolicy};

pub const ADAPTIVE_GEOCODE_SCHEMA: ParamSchema = ParamSchema {
    supported: &[
        "address",
        "locality",
        "postal_code",
        "administrative_area",
        "country",
        "language",
    ],
    required: &["address", "country"],
    policy: RequiredPolicy::Any,
};

/// Keys folded into the `components` filter, in serialization order.
const COMPONENT_KEYS: [&str; 4] = ["locality", "postal_code", "administrative_area", "country"];

/// An input key the fallback loop may drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovableConstraint {
    PostalCode,
    Address,
    Locality,
    AdministrativeArea,
}

impl RemovableConstraint {
    /// Removal order: the first entry is dropped first.
    pub const PRIORITY: [Self; 4] = [
        Self::PostalCode,
        Self::Address,
        Self::Locality,
        Self::AdministrativeArea,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::PostalCode => "postal_code",
            Self::Address => "address",
            Self::Locality => "locality",
            Self::AdministrativeArea => "administrative_area",
        }
    }
}

/// Builds the `type:value|type:value` filter from the component keys of
/// `params`, skipping absent or blank values. Numeric values are rendered as
/// they would be on the wire. Returns `None` when nothing remains.
#[must_use]
pub fn component_filter(params: &QueryParams) -> Option<String> {
    let parts: Vec<String> = COMPONENT_KEYS
        .iter()
        .filter_map(|key| params.rendered(key).map(|value| format!("{key}:{value}")))
        .collect();
    (!parts.is_empty()).then(|| parts.join("|"))
}

/// Translates adaptive input into a plain geocode request: `address` and
/// `language` are copied verbatim, the rest becomes `components`.
#[must_use]
pub fn build_geocode_request(params: &QueryParams) -> QueryParams {
    let mut request = QueryParams::new();
    if let Some(address) = params.rendered("address") {
        request.insert("address", address);
    }
    if let Some(components) = component_filter(params) {
        request.insert("components", components);
    }
    if let Some(language) = params.rendered("language") {
        request.insert("language", language);
    }
    request
}

/// A request with neither `address` nor `components` would match anything.
fn is_empty_request(request: &QueryParams) -> bool {
    !request.has_value("address") && !request.has_value("components")
}

/// Result of one geocode attempt inside the fallback loop.
enum Attempt {
    Resolved(GeocodeResponse),
    ZeroResultsContinue,
    Terminal(MapsError),
}

impl From<Result<GeocodeResponse, MapsError>> for Attempt {
    fn from(result: Result<GeocodeResponse, MapsError>) -> Self {
        match result {
            Ok(response) => Self::Resolved(response),
            Err(MapsError::ZeroResults) => Self::ZeroResultsContinue,
            Err(err) => Self::Terminal(err),
        }
    }
}

impl<T: Transport> MapsClient<T> {
    /// Geocodes an address description, relaxing constraints on
    /// `ZERO_RESULTS` until something matches or nothing is left to drop.
    ///
    /// `retry_delay` is awaited between attempts when non-zero. It paces the
    /// follow-up requests only; it has no effect on which requests are made.
    ///
    /// # Errors
    ///
    /// - [`MapsError::InvalidInput`] if `params` do not match
    ///   [`ADAPTIVE_GEOCODE_SCHEMA`]. No request is made.
    /// - [`MapsError::ZeroResults`] once every present removable constraint
    ///   has been dropped and the last request still matched nothing.
    /// - [`MapsError::RateLimited`], [`MapsError::Provider`],
    ///   [`MapsError::Transport`], [`MapsError::Http`] or
    ///   [`MapsError::Deserialize`] from the first attempt that hits them.
    pub async fn adaptive_geocode(
        &self,
        params: &QueryParams,
        retry_delay: Duration,
    ) -> Result<GeocodeResponse, MapsError> {
        validate(params, &ADAPTIVE_GEOCODE_SCHEMA)?;

        let mut working = params.clone();
        let mut remaining: VecDeque<RemovableConstraint> = RemovableConstraint::PRIORITY
            .into_iter()
            .filter(|c| params.has_value(c.key()))
            .collect();
        let mut attempt = 1u32;
        let mut request = build_geocode_request(&working);
        if is_empty_request(&request) {
            return Err(MapsError::ZeroResults);
        }

        loop {
            match Attempt::from(self.geocode(&request).await) {
                Attempt::Resolved(response) => {
                    if attempt > 1 {
                        tracing::info!(attempt, "adaptive geocode resolved after fallback");
                    }
                    return Ok(response);
                }
                Attempt::Terminal(err) => return Err(err),
                Attempt::ZeroResultsContinue => {
                    let Some(dropped) = remaining.pop_front() else {
                        tracing::debug!(attempt, "adaptive geocode exhausted constraints");
                        return Err(MapsError::ZeroResults);
                    };
                    working.remove(dropped.key());
                    request = build_geocode_request(&working);
                    if is_empty_request(&request) {
                        // Only removable keys were given and all are gone.
                        tracing::debug!(attempt, "adaptive geocode has nothing left to send");
                        return Err(MapsError::ZeroResults);
                    }

                    attempt += 1;
                    tracing::debug!(
                        attempt,
                        dropped = dropped.key(),
                        remaining = remaining.len(),
                        "zero results; retrying without constraint"
                    );
                    if !retry_delay.is_zero() {
                        tokio::time::sleep(retry_delay).await;
                    }
                }
            }
        }
    }
}
