//! Status classification shared by every endpoint.
//!
//! The provider wraps each response in `{"status": "...", "error_message": "..."}`.
//! [`classify`] turns that pair into a [`Classification`]; endpoint types add
//! their own fields on top but never reinterpret the status.

use serde_json::Value;

use crate::error::MapsError;

/// The status portion of a provider response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusEnvelope {
    pub status: Option<String>,
    pub error_message: Option<String>,
}

impl StatusEnvelope {
    /// Reads `status` and `error_message` from a decoded body. Non-string
    /// values count as absent.
    #[must_use]
    pub fn from_body(body: &Value) -> Self {
        let field = |name: &str| body.get(name).and_then(Value::as_str).map(str::to_owned);
        Self {
            status: field("status"),
            error_message: field("error_message"),
        }
    }

    /// `"{status} - {error_message}"`, or just the status when there is no
    /// message.
    fn message(&self, status: &str) -> String {
        match self.error_message.as_deref().map(str::trim) {
            Some(msg) if !msg.is_empty() => format!("{status} - {msg}"),
            _ => status.to_owned(),
        }
    }
}

/// Outcome class of a provider response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Ok,
    ZeroResults,
    RateLimited(String),
    ProviderError(String),
}

impl Classification {
    /// Maps every non-`Ok` class to its [`MapsError`].
    ///
    /// # Errors
    ///
    /// Returns [`MapsError::ZeroResults`], [`MapsError::RateLimited`] or
    /// [`MapsError::Provider`] for the corresponding class.
    pub fn into_result(self) -> Result<(), MapsError> {
        match self {
            Self::Ok => Ok(()),
            Self::ZeroResults => Err(MapsError::ZeroResults),
            Self::RateLimited(msg) => Err(MapsError::RateLimited(msg)),
            Self::ProviderError(msg) => Err(MapsError::Provider(msg)),
        }
    }
}

/// Classifies a response envelope by its `status`, case-insensitively.
///
/// A missing `status` is a protocol violation and classifies as
/// [`Classification::ProviderError`].
#[must_use]
pub fn classify(envelope: &StatusEnvelope) -> Classification {
    let Some(status) = envelope.status.as_deref() else {
        return Classification::ProviderError("missing status field".to_owned());
    };

    match status.to_ascii_uppercase().as_str() {
        "OK" => Classification::Ok,
        "ZERO_RESULTS" => Classification::ZeroResults,
        "OVER_DAILY_LIMIT" | "OVER_QUERY_LIMIT" => {
            Classification::RateLimited(envelope.message(status))
        }
        _ => Classification::ProviderError(envelope.message(status)),
    }
}
