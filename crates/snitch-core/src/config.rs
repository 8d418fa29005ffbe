use crate::app_config::{AppConfig, DEFAULT_BASE_URL, DEFAULT_REFERER, DEFAULT_USER_AGENT};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable fails to parse. Unset variables
/// fall back to defaults — no variable is required.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// The parsing logic is decoupled from the real environment so tests can
/// drive it with a plain `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let base_url = or_default("SNITCH_BASE_URL", DEFAULT_BASE_URL);
    let user_agent = or_default("SNITCH_USER_AGENT", DEFAULT_USER_AGENT);
    let referer = or_default("SNITCH_REFERER", DEFAULT_REFERER);
    let log_level = or_default("SNITCH_LOG_LEVEL", "info");

    let request_timeout_secs = parse_u64("SNITCH_REQUEST_TIMEOUT_SECS", "30")?;
    let page_limit = parse_u32("SNITCH_PAGE_LIMIT", "100")?;
    let max_pages = parse_u32("SNITCH_MAX_PAGES", "10")?;
    let inter_request_delay_ms = parse_u64("SNITCH_INTER_REQUEST_DELAY_MS", "0")?;

    Ok(AppConfig {
        base_url,
        user_agent,
        referer,
        request_timeout_secs,
        page_limit,
        max_pages,
        inter_request_delay_ms,
        log_level,
    })
}
