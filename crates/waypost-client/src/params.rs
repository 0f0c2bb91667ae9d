//! Caller-supplied request parameters.
//!
//! [`QueryParams`] is an insertion-ordered map of unique keys to scalar
//! values. Order never matters on the wire, but it keeps validation messages
//! and derived strings (such as the geocoding component filter) deterministic.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::MapsError;

/// A single scalar parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Number(f64),
    Timestamp(DateTime<Utc>),
}

impl ParamValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    /// `true` for text values that are empty or whitespace-only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }

    /// Renders the value the way it is sent in a query string. Timestamps
    /// become seconds since the Unix epoch.
    #[must_use]
    pub fn to_query_value(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
            Self::Timestamp(t) => t.timestamp().to_string(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<DateTime<Utc>> for ParamValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

/// Ordered mapping from parameter name to [`ParamValue`] with unique keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    entries: Vec<(String, ParamValue)>,
}

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts `value` under `key`. An existing key keeps its position and
    /// has its value replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns the text value for `key`, skipping blank strings.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key)
            .filter(|v| !v.is_blank())
            .and_then(ParamValue::as_text)
    }

    /// Returns the value for `key` as it would be sent on the wire, skipping
    /// blank strings. Numbers and timestamps are rendered, not dropped.
    #[must_use]
    pub fn rendered(&self, key: &str) -> Option<String> {
        self.get(key)
            .filter(|v| !v.is_blank())
            .map(ParamValue::to_query_value)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// `true` when `key` is present with a non-blank value.
    #[must_use]
    pub fn has_value(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_blank())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flattens the parameters into string pairs ready for a query string.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.to_query_value()))
            .collect()
    }

    /// Converts a JSON object of scalar values into parameters.
    ///
    /// Strings become [`ParamValue::Text`] and numbers become
    /// [`ParamValue::Number`].
    ///
    /// # Errors
    ///
    /// Returns [`MapsError::InvalidInput`] if `value` is not a JSON object or
    /// if any member is not a string or a number.
    pub fn from_json(value: &Value) -> Result<Self, MapsError> {
        let Value::Object(map) = value else {
            return Err(MapsError::invalid("Key/value mapping expected"));
        };

        let mut params = Self::new();
        for (key, member) in map {
            let converted = match member {
                Value::String(s) => ParamValue::Text(s.clone()),
                Value::Number(n) => n.as_f64().map(ParamValue::Number).ok_or_else(|| {
                    MapsError::invalid(format!("Param {key} is not a representable number"))
                })?,
                _ => {
                    return Err(MapsError::invalid(format!(
                        "Param {key} must be a string or a number"
                    )))
                }
            };
            params.insert(key.clone(), converted);
        }
        Ok(params)
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}
