use std::time::Duration;

/// Production endpoint prefix; endpoint paths such as `geocode/json` are
/// joined onto it.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub base_url: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub retry_delay_ms: u64,
}

impl AppConfig {
    /// Pause inserted between adaptive geocoding attempts when the caller
    /// does not pass one explicitly.
    #[must_use]
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"[redacted]")
            .field("base_url", &self.base_url)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("retry_delay_ms", &self.retry_delay_ms)
            .finish()
    }
}
