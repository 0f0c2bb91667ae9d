//! Allow-list, required-key, and coordinate checks run before any request
//! leaves the client.

use crate::error::MapsError;
use crate::params::QueryParams;

/// How the required keys of a [`ParamSchema`] must be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredPolicy {
    /// At least one required key is present.
    Any,
    /// Every required key is present.
    All,
    /// Exactly one required key is present.
    One,
}

impl RequiredPolicy {
    fn is_satisfied(self, present: usize, required: usize) -> bool {
        match self {
            Self::Any => present > 0,
            Self::All => present == required,
            Self::One => present == 1,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::Any => "Any of the following params are required",
            Self::All => "All of the following params are required",
            Self::One => "Exactly one of the following params is required",
        }
    }
}

/// Declared parameter shape of one endpoint.
#[derive(Debug, Clone, Copy)]
pub struct ParamSchema {
    pub supported: &'static [&'static str],
    pub required: &'static [&'static str],
    pub policy: RequiredPolicy,
}

/// Checks `params` against `schema`: unsupported keys first, then the
/// required-key policy.
///
/// # Errors
///
/// Returns [`MapsError::InvalidInput`] naming every unsupported key (in input
/// order), or naming the required keys and the policy when it is violated.
pub fn validate(params: &QueryParams, schema: &ParamSchema) -> Result<(), MapsError> {
    validate_supported(params, schema.supported)?;
    validate_required(params, schema.required, schema.policy)
}

/// # Errors
///
/// Returns [`MapsError::InvalidInput`] listing every key of `params` that is
/// not in `supported`, in input order.
pub fn validate_supported(params: &QueryParams, supported: &[&str]) -> Result<(), MapsError> {
    let unsupported: Vec<&str> = params.keys().filter(|k| !supported.contains(k)).collect();
    if unsupported.is_empty() {
        return Ok(());
    }
    Err(MapsError::invalid(format!(
        "The following params are not supported: {}",
        unsupported.join(", ")
    )))
}

/// # Errors
///
/// Returns [`MapsError::InvalidInput`] when the number of `required` keys
/// present in `params` does not satisfy `policy`.
pub fn validate_required(
    params: &QueryParams,
    required: &[&str],
    policy: RequiredPolicy,
) -> Result<(), MapsError> {
    let present = required.iter().filter(|k| params.contains(k)).count();
    if policy.is_satisfied(present, required.len()) {
        return Ok(());
    }
    Err(MapsError::invalid(format!(
        "{}: {}",
        policy.describe(),
        required.join(", ")
    )))
}

/// Parses a `"lat,lng"` string into its two numbers without range checks.
///
/// # Errors
///
/// Returns [`MapsError::InvalidInput`] when the string does not hold exactly
/// two comma-separated finite numbers.
pub fn parse_coordinate_pair(raw: &str) -> Result<(f64, f64), MapsError> {
    let mut parts = raw.split(',');
    let (Some(lat), Some(lng), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(MapsError::invalid("Wrong geo-coordinates"));
    };
    Ok((parse_degrees(lat)?, parse_degrees(lng)?))
}

fn parse_degrees(raw: &str) -> Result<f64, MapsError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| MapsError::invalid(format!("Invalid geo-coordinate value: {raw}")))
}

/// # Errors
///
/// Returns [`MapsError::InvalidInput`] when `|lat| > 90` or `|lng| > 180`.
pub fn check_coordinate_range(lat: f64, lng: f64) -> Result<(), MapsError> {
    if lat.abs() > 90.0 {
        return Err(MapsError::invalid("Wrong latitude value"));
    }
    if lng.abs() > 180.0 {
        return Err(MapsError::invalid("Wrong longitude value"));
    }
    Ok(())
}
