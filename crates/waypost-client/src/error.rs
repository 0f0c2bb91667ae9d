use thiserror::Error;

/// Errors returned by the maps API client.
///
/// The variants form a closed set so callers can decide whether to alter
/// their input, retry later, or give up.
#[derive(Debug, Error)]
pub enum MapsError {
    /// Caller-supplied parameters failed shape, required-key, or range
    /// validation. Raised before any network call.
    #[error("{0}")]
    InvalidInput(String),

    /// The provider understood the query but found nothing.
    #[error("ZERO_RESULTS")]
    ZeroResults,

    /// The provider reported `OVER_QUERY_LIMIT` or `OVER_DAILY_LIMIT`.
    #[error("{0}")]
    RateLimited(String),

    /// Any other non-`OK` provider status.
    #[error("API {0}")]
    Provider(String),

    /// The HTTP exchange completed with a client or server error status.
    #[error("HTTP {status} - {body}")]
    Transport { status: u16, body: String },

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl MapsError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
