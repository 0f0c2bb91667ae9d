use crate::app_config::{AppConfig, DEFAULT_BASE_URL};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Parsing is decoupled from the real environment so tests can drive it with
/// a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_key = require("WAYPOST_API_KEY")?;

    let base_url = or_default("WAYPOST_BASE_URL", DEFAULT_BASE_URL);
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "WAYPOST_BASE_URL".to_string(),
            reason: format!("expected an http(s) URL, got '{base_url}'"),
        });
    }

    let log_level = or_default("WAYPOST_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("WAYPOST_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("WAYPOST_USER_AGENT", "waypost/0.1");
    let retry_delay_ms = parse_u64("WAYPOST_RETRY_DELAY_MS", "0")?;

    Ok(AppConfig {
        api_key,
        base_url,
        log_level,
        request_timeout_secs,
        user_agent,
        retry_delay_ms,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
