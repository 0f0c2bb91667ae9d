//! Lookup command handlers for the CLI.
//!
//! Each handler builds request parameters, calls the client, and prints the
//! typed response as pretty JSON on stdout.

use std::time::Duration;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use waypost_client::{MapsClient, QueryParams};

/// Collects the flags that were given into request parameters.
pub(crate) fn params_from<const N: usize>(flags: [(&str, Option<String>); N]) -> QueryParams {
    flags
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render response")?;
    println!("{rendered}");
    Ok(())
}

/// Run a single geocode request.
///
/// # Errors
///
/// Returns an error if validation fails, nothing matches, or the request fails.
pub(crate) async fn run_geocode(client: &MapsClient, params: &QueryParams) -> anyhow::Result<()> {
    let response = client.geocode(params).await.context("geocode failed")?;
    print_json(&response)
}

/// Run an adaptive geocode, pausing `retry_delay` between fallback attempts.
///
/// # Errors
///
/// Returns an error if validation fails, every fallback comes back empty, or
/// a request fails.
pub(crate) async fn run_locate(
    client: &MapsClient,
    params: &QueryParams,
    retry_delay: Duration,
) -> anyhow::Result<()> {
    let response = client
        .adaptive_geocode(params, retry_delay)
        .await
        .context("adaptive geocode failed")?;
    tracing::debug!(precision = ?response.precision(), "located");
    print_json(&response)
}

/// Find routes between two `"lat,lng"` coordinates.
///
/// # Errors
///
/// Returns an error if the coordinates are invalid, no route exists, or the
/// request fails.
pub(crate) async fn run_route(
    client: &MapsClient,
    origin: &str,
    destination: &str,
) -> anyhow::Result<()> {
    let params = QueryParams::new()
        .with("origin", origin)
        .with("destination", destination);
    let response = client
        .find_route(&params)
        .await
        .context("directions lookup failed")?;
    print_json(&response)
}

/// Look up the timezone at a coordinate.
///
/// # Errors
///
/// Returns an error if the coordinates are out of range or the request fails.
pub(crate) async fn run_timezone(
    client: &MapsClient,
    latitude: f64,
    longitude: f64,
    timestamp: Option<DateTime<Utc>>,
    language: Option<String>,
) -> anyhow::Result<()> {
    let mut params = QueryParams::new()
        .with("latitude", latitude)
        .with("longitude", longitude);
    if let Some(ts) = timestamp {
        params.insert("timestamp", ts);
    }
    if let Some(language) = language {
        params.insert("language", language);
    }
    let response = client
        .timezone_at(&params)
        .await
        .context("timezone lookup failed")?;
    print_json(&response)
}
