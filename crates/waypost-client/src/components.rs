//! Typed lookup over a geocoding result's `address_components`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One typed fragment of a formatted address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl AddressComponent {
    #[must_use]
    pub fn has_type(&self, kind: AddressComponentType) -> bool {
        self.types.iter().any(|t| t == kind.as_str())
    }
}

/// Long and short names of the component matched by [`component_of_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentName<'a> {
    pub long_name: &'a str,
    pub short_name: &'a str,
}

/// Address component types the client knows how to look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressComponentType {
    StreetNumber,
    Route,
    PostalCode,
    Locality,
    Sublocality,
    #[serde(rename = "administrative_area_level_1")]
    AdministrativeAreaLevel1,
    #[serde(rename = "administrative_area_level_2")]
    AdministrativeAreaLevel2,
    #[serde(rename = "administrative_area_level_3")]
    AdministrativeAreaLevel3,
    Country,
}

impl AddressComponentType {
    /// Finest to coarsest. [`precision`] returns the first entry present.
    /// `Sublocality` is looked up by name only and is not ranked.
    pub const PRECISION_LADDER: [Self; 8] = [
        Self::StreetNumber,
        Self::Route,
        Self::PostalCode,
        Self::Locality,
        Self::AdministrativeAreaLevel1,
        Self::AdministrativeAreaLevel2,
        Self::AdministrativeAreaLevel3,
        Self::Country,
    ];

    /// The provider's wire name for this type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StreetNumber => "street_number",
            Self::Route => "route",
            Self::PostalCode => "postal_code",
            Self::Locality => "locality",
            Self::Sublocality => "sublocality",
            Self::AdministrativeAreaLevel1 => "administrative_area_level_1",
            Self::AdministrativeAreaLevel2 => "administrative_area_level_2",
            Self::AdministrativeAreaLevel3 => "administrative_area_level_3",
            Self::Country => "country",
        }
    }
}

impl fmt::Display for AddressComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown component type name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown address component type: {0}")]
pub struct UnknownComponentType(pub String);

impl FromStr for AddressComponentType {
    type Err = UnknownComponentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::PRECISION_LADDER
            .into_iter()
            .chain(std::iter::once(Self::Sublocality))
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownComponentType(s.to_owned()))
    }
}

/// First component whose type list contains `kind`.
#[must_use]
pub fn component_of_type(
    components: &[AddressComponent],
    kind: AddressComponentType,
) -> Option<ComponentName<'_>> {
    components
        .iter()
        .find(|c| c.has_type(kind))
        .map(|c| ComponentName {
            long_name: &c.long_name,
            short_name: &c.short_name,
        })
}

/// Finest [`AddressComponentType::PRECISION_LADDER`] entry present among
/// `components`, or `None` when nothing on the ladder matches.
#[must_use]
pub fn precision(components: &[AddressComponent]) -> Option<AddressComponentType> {
    AddressComponentType::PRECISION_LADDER
        .into_iter()
        .find(|kind| components.iter().any(|c| c.has_type(*kind)))
}
