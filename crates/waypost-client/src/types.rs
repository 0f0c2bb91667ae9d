//! Typed views over provider responses.
//!
//! Every response shares the `{"status": ...}` envelope handled by
//! [`crate::envelope`]. The types here model only what follows a successful
//! classification: they are decoded once from the body and expose the
//! endpoint-specific accessors.

use serde::{Deserialize, Serialize};

use crate::components::{
    component_of_type, precision, AddressComponent, AddressComponentType, ComponentName,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

// ---------------------------------------------------------------------------
// geocode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
    #[serde(default)]
    pub location_type: Option<String>,
}

/// One entry of the geocoding `results` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    pub geometry: Geometry,
    /// Absent in the payload means an exact match.
    #[serde(default)]
    pub partial_match: bool,
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
}

/// Raw `results` wrapper as sent by the provider.
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodePayload {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

/// A successful geocoding response.
///
/// Always holds at least one result; the accessors read the first one, which
/// is the provider's best match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeocodeResponse {
    result: GeocodeResult,
    others: Vec<GeocodeResult>,
}

impl GeocodeResponse {
    /// Returns `None` for an empty result list.
    pub(crate) fn from_results(results: Vec<GeocodeResult>) -> Option<Self> {
        let mut iter = results.into_iter();
        let result = iter.next()?;
        Some(Self {
            result,
            others: iter.collect(),
        })
    }

    /// The best (first) match.
    #[must_use]
    pub fn result(&self) -> &GeocodeResult {
        &self.result
    }

    /// All matches in provider order, best first.
    pub fn results(&self) -> impl Iterator<Item = &GeocodeResult> {
        std::iter::once(&self.result).chain(self.others.iter())
    }

    #[must_use]
    pub fn location(&self) -> LatLng {
        self.result.geometry.location
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.result.geometry.location.lat
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.result.geometry.location.lng
    }

    #[must_use]
    pub fn is_partial_match(&self) -> bool {
        self.result.partial_match
    }

    #[must_use]
    pub fn address_components(&self) -> &[AddressComponent] {
        &self.result.address_components
    }

    /// Finest component type present in the best match.
    #[must_use]
    pub fn precision(&self) -> Option<AddressComponentType> {
        precision(&self.result.address_components)
    }

    #[must_use]
    pub fn component(&self, kind: AddressComponentType) -> Option<ComponentName<'_>> {
        component_of_type(&self.result.address_components, kind)
    }

    #[must_use]
    pub fn street_number(&self) -> Option<ComponentName<'_>> {
        self.component(AddressComponentType::StreetNumber)
    }

    #[must_use]
    pub fn route(&self) -> Option<ComponentName<'_>> {
        self.component(AddressComponentType::Route)
    }

    #[must_use]
    pub fn postal_code(&self) -> Option<ComponentName<'_>> {
        self.component(AddressComponentType::PostalCode)
    }

    #[must_use]
    pub fn locality(&self) -> Option<ComponentName<'_>> {
        self.component(AddressComponentType::Locality)
    }

    #[must_use]
    pub fn sublocality(&self) -> Option<ComponentName<'_>> {
        self.component(AddressComponentType::Sublocality)
    }

    #[must_use]
    pub fn administrative_area_level_1(&self) -> Option<ComponentName<'_>> {
        self.component(AddressComponentType::AdministrativeAreaLevel1)
    }

    #[must_use]
    pub fn administrative_area_level_2(&self) -> Option<ComponentName<'_>> {
        self.component(AddressComponentType::AdministrativeAreaLevel2)
    }

    #[must_use]
    pub fn administrative_area_level_3(&self) -> Option<ComponentName<'_>> {
        self.component(AddressComponentType::AdministrativeAreaLevel3)
    }

    #[must_use]
    pub fn country(&self) -> Option<ComponentName<'_>> {
        self.component(AddressComponentType::Country)
    }
}

// ---------------------------------------------------------------------------
// directions
// ---------------------------------------------------------------------------

/// A `{ "text": "4.5 km", "value": 4512 }` measure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextValue {
    pub text: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub distance: TextValue,
    pub duration: TextValue,
    pub start_location: LatLng,
    pub end_location: LatLng,
    #[serde(default)]
    pub html_instructions: Option<String>,
    #[serde(default)]
    pub travel_mode: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub distance: TextValue,
    pub duration: TextValue,
    pub start_location: LatLng,
    pub end_location: LatLng,
    #[serde(default)]
    pub start_address: Option<String>,
    #[serde(default)]
    pub end_address: Option<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One route of a directions response. Leg-level accessors read the first leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub legs: Vec<Leg>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub copyrights: Option<String>,
}

impl Route {
    #[must_use]
    pub fn first_leg(&self) -> Option<&Leg> {
        self.legs.first()
    }

    /// Steps of the first leg; empty when the route has no legs.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        self.first_leg()
            .map(|leg| leg.steps.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn duration(&self) -> Option<&TextValue> {
        self.first_leg().map(|leg| &leg.duration)
    }

    #[must_use]
    pub fn distance(&self) -> Option<&TextValue> {
        self.first_leg().map(|leg| &leg.distance)
    }

    #[must_use]
    pub fn start_location(&self) -> Option<LatLng> {
        self.first_leg().map(|leg| leg.start_location)
    }

    #[must_use]
    pub fn end_location(&self) -> Option<LatLng> {
        self.first_leg().map(|leg| leg.end_location)
    }

    #[must_use]
    pub fn start_address(&self) -> Option<&str> {
        self.first_leg().and_then(|leg| leg.start_address.as_deref())
    }

    #[must_use]
    pub fn end_address(&self) -> Option<&str> {
        self.first_leg().and_then(|leg| leg.end_address.as_deref())
    }
}

/// A successful directions response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl DirectionsResponse {
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    #[must_use]
    pub fn first(&self) -> Option<&Route> {
        self.routes.first()
    }
}

// ---------------------------------------------------------------------------
// timezone
// ---------------------------------------------------------------------------

/// A successful timezone response. Offsets are in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimezoneResponse {
    pub time_zone_id: String,
    pub time_zone_name: String,
    pub raw_offset: i64,
    pub dst_offset: i64,
}

impl TimezoneResponse {
    /// Offset from UTC in effect at the requested timestamp.
    #[must_use]
    pub fn total_offset(&self) -> i64 {
        self.raw_offset + self.dst_offset
    }
}
