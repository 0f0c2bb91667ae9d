//! Typed client for the Google Maps web services: geocoding (plain and
//! adaptive fallback), directions, and timezone lookup.

pub mod adaptive;
pub mod client;
pub mod components;
pub mod directions;
pub mod envelope;
pub mod error;
pub mod geocoding;
pub mod params;
pub mod timezone;
pub mod transport;
pub mod types;
pub mod validate;

#[cfg(test)]
mod testing;

pub use adaptive::{
    build_geocode_request, component_filter, RemovableConstraint, ADAPTIVE_GEOCODE_SCHEMA,
};
pub use client::MapsClient;
pub use components::{
    component_of_type, precision, AddressComponent, AddressComponentType, ComponentName,
    UnknownComponentType,
};
pub use directions::DIRECTIONS_SCHEMA;
pub use envelope::{classify, Classification, StatusEnvelope};
pub use error::MapsError;
pub use geocoding::GEOCODE_SCHEMA;
pub use params::{ParamValue, QueryParams};
pub use timezone::TIMEZONE_SCHEMA;
pub use transport::{HttpTransport, Transport};
pub use types::{
    DirectionsResponse, GeocodeResponse, GeocodeResult, Geometry, LatLng, Leg, Route, Step,
    TextValue, TimezoneResponse,
};
pub use validate::{
    check_coordinate_range, parse_coordinate_pair, validate, validate_required,
    validate_supported, ParamSchema, RequiredPolicy,
};
